//! Carousel controller for the screenshot and testimonial strips.
//!
//! The controller never talks to a real DOM or clock. The host implements
//! [`SlideSurface`](crate::engine::SlideSurface) for the strip, forwards input
//! through the `on_*` handlers and steps time with
//! [`Animated::update`](crate::engine::Animated::update).

pub mod autoplay;
pub mod controller;
pub mod gesture;
pub mod indicators;

pub use controller::SliderController;
pub use gesture::Swipe;
