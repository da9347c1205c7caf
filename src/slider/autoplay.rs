use std::time::Duration;

/// Repeating countdown. There is only ever one per slider: arming an armed
/// timer restarts its countdown instead of adding a second one.
#[derive(Debug, Clone)]
pub struct Autoplay {
    interval: Duration,
    elapsed: Duration,
    armed: bool,
}

impl Autoplay {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            elapsed: Duration::ZERO,
            armed: false,
        }
    }

    pub fn start(&mut self) {
        self.armed = true;
        self.elapsed = Duration::ZERO;
    }

    pub fn stop(&mut self) {
        self.armed = false;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Advances the countdown. Returns `true` when the interval elapsed; the
    /// timer stays armed and starts counting the next period.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if !self.armed {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}
