//! Count-up animation for the headline numbers ("10,000+", "99%", "4.9").

use std::time::Duration;

use tracing::trace;

use crate::config::StatsConfig;
use crate::engine::Animated;

/// Decorations of the original text that survive the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterFormat {
    pub plus: bool,
    pub percent: bool,
    pub decimal: bool,
}

impl CounterFormat {
    pub fn of(text: &str) -> Self {
        Self {
            plus: text.contains('+'),
            percent: text.contains('%'),
            decimal: text.contains('.'),
        }
    }

    pub fn render(&self, value: f64) -> String {
        let mut out = if self.decimal {
            format!("{value:.1}")
        } else {
            format!("{:.0}", value.floor())
        };
        if self.plus {
            out.push('+');
        }
        if self.percent {
            out.push('%');
        }
        out
    }
}

/// Extracts the number a counter animates towards.
///
/// Texts with `+` or `%` (and plain texts) keep only their digits; other
/// texts with a `.` keep digits and dots and read the leading decimal.
pub fn parse_target_value(text: &str) -> Option<f64> {
    let integer_only = text.contains('+') || text.contains('%') || !text.contains('.');
    if integer_only {
        let digits = text
            .chars()
            .filter(char::is_ascii_digit)
            .collect::<String>();
        return digits.parse::<u64>().ok().map(|value| value as f64);
    }

    let kept = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect::<String>();
    // Only the part up to a second dot forms a number.
    let number = match kept.match_indices('.').nth(1) {
        Some((second_dot, _)) => &kept[..second_dot],
        None => kept.as_str(),
    };
    number.parse::<f64>().ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    Waiting,
    Running,
    Done,
}

#[derive(Debug, Clone)]
pub struct StatCounter {
    format: CounterFormat,
    target: f64,
    threshold: f32,
    duration: Duration,
    elapsed: Duration,
    state: CounterState,
}

impl StatCounter {
    /// `None` when `text` holds no number to count to.
    pub fn new(text: &str, config: &StatsConfig) -> Option<Self> {
        let target = parse_target_value(text)?;
        Some(Self {
            format: CounterFormat::of(text),
            target,
            threshold: config.visibility_threshold,
            duration: Duration::from_millis(config.animation_ms),
            elapsed: Duration::ZERO,
            state: CounterState::Waiting,
        })
    }

    pub fn state(&self) -> CounterState {
        self.state
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Visible fraction report. The animation starts the first time the
    /// counter is at least `threshold` visible and never restarts.
    pub fn on_visibility(&mut self, ratio: f32) -> bool {
        if self.state == CounterState::Waiting && ratio >= self.threshold {
            self.state = CounterState::Running;
            trace!(value = self.target, "stat counter started");
            true
        } else {
            false
        }
    }

    fn progress(&self) -> f64 {
        match self.state {
            CounterState::Waiting => 0.0,
            CounterState::Done => 1.0,
            CounterState::Running if self.duration.is_zero() => 1.0,
            CounterState::Running => {
                (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
            }
        }
    }

    pub fn text(&self) -> String {
        self.format.render(self.progress() * self.target)
    }
}

impl Animated for StatCounter {
    fn update(&mut self, dt: Duration) -> bool {
        if self.state != CounterState::Running {
            return false;
        }
        self.elapsed += dt;
        if self.progress() >= 1.0 {
            self.state = CounterState::Done;
        }
        true
    }
}
