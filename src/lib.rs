//! Interactive behavior of a product landing page, written as host-independent
//! state machines: carousels, navigation bar, lazy images, FAQ accordion,
//! parallax and count-up statistics.
//!
//! Nothing here touches a real document or clock. A host (a browser binding,
//! a native window, a test) feeds events and elapsed time in and applies the
//! resulting scroll commands and effects.

pub mod accordion;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod fit;
pub mod frame;
pub mod lazy_load;
pub mod navbar;
pub mod page;
pub mod parallax;
pub mod scroll_spy;
pub mod slider;
pub mod state;
pub mod stats;
pub mod testsupport;

pub use config::{SiteConfig, SliderConfig};
pub use engine::{Animated, SlideSurface};
pub use page::{Effect, Page, PageEvent, PageLayout, SliderKind};
pub use slider::SliderController;
pub use state::{Control, SliderPhase};
