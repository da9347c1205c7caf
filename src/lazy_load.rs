//! Deferred image loading.
//!
//! Two strategies share one pending set. With intersection notifications
//! the host reports visibility per image. Without them, viewport changes arm
//! a short debounce after which the host is asked where every pending image
//! sits.

use std::time::Duration;

use tracing::debug;

use crate::config::LazyLoadConfig;
use crate::engine::Animated;

#[derive(Debug, Clone, PartialEq)]
pub struct LazyImage {
    pub id: usize,
    /// Deferred source; images without one are never swapped.
    pub data_src: Option<String>,
}

/// Swap `src` to the deferred source and drop the `lazy` marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadImage {
    pub id: usize,
    pub src: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f32,
    pub bottom: f32,
    pub displayed: bool,
}

impl Placement {
    fn in_viewport(&self, viewport_height: f32) -> bool {
        self.top <= viewport_height && self.bottom >= 0.0 && self.displayed
    }
}

#[derive(Debug, Clone)]
enum Mode {
    Observer,
    Polling {
        debounce: Duration,
        // Remaining debounce while a check is scheduled.
        armed: Option<Duration>,
        due: bool,
    },
}

#[derive(Debug, Clone)]
pub struct LazyLoader {
    pending: Vec<LazyImage>,
    mode: Mode,
}

impl LazyLoader {
    pub fn new(images: Vec<LazyImage>, config: &LazyLoadConfig) -> Self {
        let mode = if config.observer {
            Mode::Observer
        } else {
            Mode::Polling {
                debounce: Duration::from_millis(config.debounce_ms),
                armed: None,
                due: false,
            }
        };
        debug!(images = images.len(), observer = config.observer, "lazy loader attached");
        Self {
            pending: images,
            mode,
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Once nothing is pending the host may detach its viewport listeners.
    pub fn is_finished(&self) -> bool {
        self.pending.is_empty()
    }

    /// Intersection report for one image.
    pub fn on_intersection(&mut self, id: usize, intersecting: bool) -> Option<LoadImage> {
        if !intersecting || !matches!(self.mode, Mode::Observer) {
            return None;
        }
        let position = self
            .pending
            .iter()
            .position(|image| image.id == id && image.data_src.is_some())?;
        let image = self.pending.remove(position);
        image.data_src.map(|src| LoadImage { id, src })
    }

    /// Scroll, resize or orientation change. Arms the polling debounce
    /// unless a check is already scheduled.
    pub fn on_viewport_change(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        if let Mode::Polling { debounce, armed, .. } = &mut self.mode {
            if armed.is_none() {
                *armed = Some(*debounce);
            }
        }
    }

    /// Runs a scheduled check once its debounce has expired. `probe` gives
    /// the current placement of an image by id.
    pub fn poll(
        &mut self,
        viewport_height: f32,
        probe: impl Fn(usize) -> Placement,
    ) -> Vec<LoadImage> {
        let Mode::Polling { due, .. } = &mut self.mode else {
            return Vec::new();
        };
        if !std::mem::take(due) {
            return Vec::new();
        }

        let mut loads = Vec::new();
        self.pending.retain(|image| {
            if !probe(image.id).in_viewport(viewport_height) {
                return true;
            }
            if let Some(src) = &image.data_src {
                loads.push(LoadImage {
                    id: image.id,
                    src: src.clone(),
                });
            }
            false
        });
        if self.pending.is_empty() {
            debug!("all lazy images loaded");
        }
        loads
    }
}

impl Animated for LazyLoader {
    fn update(&mut self, dt: Duration) -> bool {
        if let Mode::Polling { armed, due, .. } = &mut self.mode {
            if let Some(remaining) = armed.as_mut() {
                *remaining = remaining.saturating_sub(dt);
            }
            if matches!(armed, Some(remaining) if remaining.is_zero()) {
                *armed = None;
                *due = true;
            }
        }
        !self.pending.is_empty()
    }
}
