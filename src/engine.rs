use std::time::Duration;

/// Host side of one slider: the scrollable strip, its slides and the
/// indicator dots.
pub trait SlideSurface {
    fn slide_count(&self) -> usize;
    /// Width of a single slide, re-read on every navigation so resizes are
    /// picked up.
    fn slide_extent(&self) -> f32;
    fn scroll_left(&self) -> f32;
    /// Smooth-scroll the strip so that its left edge lands on `left`.
    fn scroll_to(&mut self, left: f32);
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// A widget stepped by the host's frame scheduler.
pub trait Animated {
    /// Advances by `dt`. Returns `false` once the widget needs no further
    /// frames.
    fn update(&mut self, dt: Duration) -> bool;
}
