use std::time::Duration;

use tracing::{debug, trace};

use crate::config::SliderConfig;
use crate::constants::{SCROLL_SETTLE_TIMEOUT_MS, SCROLL_SETTLE_TOLERANCE};
use crate::engine::{Animated, SlideSurface};
use crate::slider::autoplay::Autoplay;
use crate::slider::gesture::{Gesture, Swipe};
use crate::slider::indicators::Indicators;
use crate::state::{Control, SliderPhase};

/// A programmatic scroll still on its way to `target`.
#[derive(Debug, Clone, Copy)]
struct Settling {
    target: f32,
    // Distance of the closest report so far.
    distance: f32,
    remaining: Duration,
}

/// One carousel: a fixed sequence of slides on a scrollable strip, an
/// autoplay timer and a swipe tracker.
#[derive(Debug)]
pub struct SliderController<S: SlideSurface> {
    surface: S,
    config: SliderConfig,
    len: usize,
    current_index: usize,
    autoplay: Autoplay,
    gesture: Gesture,
    indicators: Indicators,
    hovered: bool,
    hidden: bool,
    // Scroll reports are not treated as user scrolling while this is set.
    settling: Option<Settling>,
}

impl<S: SlideSurface> SliderController<S> {
    /// Attaches to `surface`. When there is nothing to slide the surface
    /// is handed back untouched.
    pub fn new(mut surface: S, config: SliderConfig) -> Result<Self, S> {
        let len = surface.slide_count();
        if len == 0 {
            debug!("no slides found, slider not initialized");
            return Err(surface);
        }

        let indicators = Indicators::create(len, &mut surface);
        let mut slider = Self {
            autoplay: Autoplay::new(config.autoplay_interval()),
            surface,
            config,
            len,
            current_index: 0,
            gesture: Gesture::new(),
            indicators,
            hovered: false,
            hidden: false,
            settling: None,
        };
        slider.go_to(0);
        slider.start_autoplay();
        debug!(slides = len, "slider initialized");
        Ok(slider)
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a slider without slides is never constructed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn phase(&self) -> SliderPhase {
        if self.gesture.is_dragging() {
            SliderPhase::Dragging
        } else if self.autoplay.is_armed() {
            SliderPhase::Autoplaying
        } else {
            SliderPhase::Paused
        }
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_armed()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn drag_translation(&self) -> f32 {
        self.gesture.translation()
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.active()
    }

    pub fn active_indicator_count(&self) -> usize {
        self.indicators.active_count()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn stride(&self) -> f32 {
        self.surface.slide_extent() + self.config.gap
    }

    /// Makes slide `index` (wrapped into range) current and scrolls to it.
    pub fn go_to(&mut self, index: isize) {
        let index = index.rem_euclid(self.len as isize) as usize;
        self.current_index = index;

        let target = index as f32 * self.stride();
        let distance = (self.surface.scroll_left() - target).abs();
        self.settling = (self.config.scroll_sync && distance > SCROLL_SETTLE_TOLERANCE).then(|| {
            Settling {
                target,
                distance,
                remaining: Duration::from_millis(SCROLL_SETTLE_TIMEOUT_MS),
            }
        });
        self.surface.scroll_to(target);
        self.indicators.activate(index, &mut self.surface);
        debug!(index, scroll = target, "slider navigated");

        self.reset_autoplay();
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index as isize + 1);
    }

    pub fn prev(&mut self) {
        self.go_to(self.current_index as isize - 1);
    }

    pub fn start_autoplay(&mut self) {
        self.autoplay.start();
        trace!("autoplay armed");
    }

    pub fn stop_autoplay(&mut self) {
        if self.autoplay.is_armed() {
            self.autoplay.stop();
            trace!("autoplay disarmed");
        }
    }

    fn reset_autoplay(&mut self) {
        self.stop_autoplay();
        self.start_autoplay();
    }

    pub fn on_control(&mut self, control: Control) {
        match control {
            Control::Prev => self.prev(),
            Control::Next => self.next(),
        }
    }

    pub fn on_indicator_click(&mut self, index: usize) {
        self.go_to(index as isize);
    }

    pub fn on_gesture_start(&mut self, x: f32) {
        self.gesture.begin(x);
        self.settling = None;
        self.stop_autoplay();
    }

    pub fn on_gesture_move(&mut self, x: f32) {
        self.gesture.track(x);
    }

    pub fn on_gesture_end(&mut self, x: f32) {
        match self.gesture.finish(x, self.config.swipe_threshold) {
            Some(Swipe::Next) => self.next(),
            Some(Swipe::Prev) => self.prev(),
            None => {
                if !self.hovered && !self.hidden {
                    self.start_autoplay();
                }
            }
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.hovered = true;
        self.settling = None;
        self.stop_autoplay();
    }

    /// Resumes autoplay, unless a drag is still in progress; the drag's end
    /// decides then.
    pub fn on_pointer_leave(&mut self) {
        self.hovered = false;
        if !self.gesture.is_dragging() {
            self.start_autoplay();
        }
    }

    pub fn on_resize(&mut self) {
        self.go_to(self.current_index as isize);
    }

    /// Follows free scrolling of the strip. Only state and indicators change;
    /// no scroll command is issued.
    ///
    /// Reports of a programmatic scroll are skipped while they keep closing
    /// in on its target. Arrival, a report moving away from the target or
    /// the settle timeout ends that.
    pub fn on_scroll(&mut self, scroll_left: f32) {
        if !self.config.scroll_sync || !scroll_left.is_finite() {
            return;
        }
        if let Some(settling) = self.settling {
            let distance = (scroll_left - settling.target).abs();
            if distance <= SCROLL_SETTLE_TOLERANCE {
                self.settling = None;
                return;
            }
            if distance <= settling.distance {
                self.settling = Some(Settling {
                    distance,
                    ..settling
                });
                return;
            }
            trace!(scroll = scroll_left, "programmatic scroll interrupted");
            self.settling = None;
        }

        let stride = self.stride();
        if stride <= 0.0 {
            return;
        }
        let nearest = (scroll_left / stride).round();
        if nearest < 0.0 || nearest >= self.len as f32 {
            return;
        }
        let nearest = nearest as usize;
        if nearest != self.current_index {
            self.current_index = nearest;
            self.indicators.activate(nearest, &mut self.surface);
            trace!(index = nearest, "slider index synced from scroll");
        }
    }

    pub fn on_visibility_change(&mut self, hidden: bool) {
        self.hidden = hidden;
        if hidden {
            self.stop_autoplay();
        } else if !self.hovered {
            self.start_autoplay();
        }
    }

    /// Detaches from the host: the timer is disarmed and the surface handed
    /// back.
    pub fn teardown(mut self) -> S {
        self.autoplay.stop();
        debug!("slider torn down");
        self.surface
    }
}

impl<S: SlideSurface> Animated for SliderController<S> {
    fn update(&mut self, dt: Duration) -> bool {
        if let Some(settling) = &mut self.settling {
            settling.remaining = settling.remaining.saturating_sub(dt);
        }
        if self.settling.is_some_and(|settling| settling.remaining.is_zero()) {
            trace!("programmatic scroll settle timed out");
            self.settling = None;
        }
        if self.autoplay.tick(dt) {
            trace!("autoplay tick");
            self.next();
        }
        true
    }
}
