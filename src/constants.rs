pub const SCREENSHOT_INTERVAL_MS: u64 = 4000;  // Autoplay period of the screenshot slider
pub const TESTIMONIAL_INTERVAL_MS: u64 = 5000; // Autoplay period of the testimonial slider
pub const SCREENSHOT_GAP: f32 = 24.0;          // Spacing between screenshots (px)
pub const TESTIMONIAL_GAP: f32 = 30.0;         // Spacing between testimonial cards (px)
pub const SWIPE_THRESHOLD: f32 = 50.0;         // Minimum horizontal travel for a swipe (px)
pub const SCROLL_SETTLE_TOLERANCE: f32 = 1.0;  // Distance at which a programmatic scroll counts as arrived (px)
pub const SCROLL_SETTLE_TIMEOUT_MS: u64 = 1000; // Longest a programmatic scroll may take before reports count again

pub const NAVBAR_COMPACT_AFTER: f32 = 100.0;   // Scroll depth that switches the navbar to compact style (px)
pub const MOBILE_BREAKPOINT: f32 = 768.0;      // Viewports narrower than this use the mobile menu (px)
pub const ANCHOR_MARGIN: f32 = 20.0;           // Extra space kept above an anchor target (px)
pub const HASH_UPDATE_DELAY_MS: u64 = 1000;    // Delay before the history hash follows an anchor jump
pub const SCROLL_SPY_MARGIN: f32 = 100.0;      // Lead distance before a section counts as active (px)

pub const LAZY_LOAD_DEBOUNCE_MS: u64 = 200;    // Polling fallback debounce

pub const STAT_VISIBILITY_THRESHOLD: f32 = 0.5; // Fraction visible before a counter starts
pub const STAT_ANIMATION_MS: u64 = 2000;        // Counter animation length

pub const PARALLAX_DEFAULT_SPEED: f32 = 0.2;
pub const PARALLAX_HERO_SPEED: f32 = -0.1;

pub const FIT_HEIGHT_MARGIN: f32 = 60.0;       // Vertical room reserved around a slide image (px)
pub const FIT_DEFAULT_PARENT_HEIGHT: f32 = 520.0;
pub const FIT_DEFAULT_PARENT_WIDTH: f32 = 280.0;
pub const FIT_WIDTH_TOLERANCE: f32 = 1.2;      // Images wider than parent * this get scaled to full width
