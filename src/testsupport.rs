//! In-memory host for driving sliders without a display.
//!
//! Used by the unit and integration tests; also handy for headless hosts
//! that only need the navigation logic.

use crate::engine::SlideSurface;

/// A strip of equally wide slides that jumps straight to every commanded
/// scroll position and records what it was told to do. Like a browser it
/// can cap the scroll position at the end of the strip.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub slides: usize,
    pub extent: f32,
    pub scroll_left: f32,
    pub indicators: Vec<bool>,
    pub scroll_commands: Vec<f32>,
    pub max_scroll_left: Option<f32>,
}

impl RecordingSurface {
    pub fn new(slides: usize, extent: f32) -> Self {
        Self {
            slides,
            extent,
            scroll_left: 0.0,
            indicators: vec![false; slides],
            scroll_commands: Vec::new(),
            max_scroll_left: None,
        }
    }

    pub fn with_max_scroll_left(mut self, max: f32) -> Self {
        self.max_scroll_left = Some(max);
        self
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }

    pub fn last_scroll(&self) -> Option<f32> {
        self.scroll_commands.last().copied()
    }
}

impl SlideSurface for RecordingSurface {
    fn slide_count(&self) -> usize {
        self.slides
    }

    fn slide_extent(&self) -> f32 {
        self.extent
    }

    fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    fn scroll_to(&mut self, left: f32) {
        self.scroll_commands.push(left);
        self.scroll_left = self.max_scroll_left.map_or(left, |max| left.min(max));
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.indicators.get_mut(index) {
            *slot = active;
        }
    }
}
