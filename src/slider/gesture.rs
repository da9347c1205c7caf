#[derive(Debug, Clone, Copy, PartialEq)]
enum DragState {
    Idle,
    Dragging { start_x: f32, translation: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Next, // finger travelled left
    Prev, // finger travelled right
}

/// Horizontal touch/drag tracking for one slider.
#[derive(Debug, Clone)]
pub struct Gesture {
    state: DragState,
}

impl Gesture {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Offset of the pointer from where the drag began, zero when idle.
    pub fn translation(&self) -> f32 {
        match self.state {
            DragState::Dragging { translation, .. } => translation,
            DragState::Idle => 0.0,
        }
    }

    pub fn begin(&mut self, x: f32) {
        self.state = DragState::Dragging {
            start_x: x,
            translation: 0.0,
        };
    }

    pub fn track(&mut self, x: f32) {
        if let DragState::Dragging { start_x, .. } = self.state {
            self.state = DragState::Dragging {
                start_x,
                translation: x - start_x,
            };
        }
    }

    /// Ends the gesture at `x`. Travel strictly beyond `threshold` is a
    /// swipe; anything shorter resolves to nothing. An end without a
    /// matching begin is ignored.
    pub fn finish(&mut self, x: f32, threshold: f32) -> Option<Swipe> {
        let DragState::Dragging { start_x, .. } = self.state else {
            return None;
        };
        self.state = DragState::Idle;

        let diff = start_x - x;
        if diff.abs() <= threshold {
            None
        } else if diff > 0.0 {
            Some(Swipe::Next)
        } else {
            Some(Swipe::Prev)
        }
    }
}

impl Default for Gesture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leftward_swipe_is_next() {
        let mut gesture = Gesture::new();
        gesture.begin(300.0);
        assert_eq!(gesture.finish(200.0, 50.0), Some(Swipe::Next));
        assert!(!gesture.is_dragging());
    }

    #[test]
    fn rightward_swipe_is_prev() {
        let mut gesture = Gesture::new();
        gesture.begin(100.0);
        assert_eq!(gesture.finish(151.0, 50.0), Some(Swipe::Prev));
    }

    #[test]
    fn travel_at_threshold_is_not_a_swipe() {
        let mut gesture = Gesture::new();
        gesture.begin(100.0);
        assert_eq!(gesture.finish(50.0, 50.0), None);
        gesture.begin(100.0);
        assert_eq!(gesture.finish(150.0, 50.0), None);
    }

    #[test]
    fn track_accumulates_translation() {
        let mut gesture = Gesture::new();
        gesture.track(10.0);
        assert_eq!(gesture.translation(), 0.0);
        gesture.begin(100.0);
        gesture.track(80.0);
        gesture.track(70.0);
        assert_eq!(gesture.translation(), -30.0);
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut gesture = Gesture::new();
        assert_eq!(gesture.finish(500.0, 50.0), None);
    }
}
