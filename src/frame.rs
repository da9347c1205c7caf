/// Collapses bursts of scroll or resize notifications into one update per
/// animation frame.
#[derive(Debug, Default, Clone)]
pub struct FrameCoalescer {
    ticking: bool,
}

impl FrameCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes a notification. Returns `true` when the caller has to schedule
    /// a frame; `false` when one is already pending.
    pub fn request(&mut self) -> bool {
        if self.ticking {
            false
        } else {
            self.ticking = true;
            true
        }
    }

    /// Consumes the pending request at frame time.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.ticking)
    }
}
