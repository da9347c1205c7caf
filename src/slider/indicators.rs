use crate::engine::SlideSurface;

/// Mirror of the indicator dots, one per slide.
#[derive(Debug, Clone)]
pub struct Indicators {
    states: Vec<bool>,
}

impl Indicators {
    /// Creates `count` indicators with the first one active and pushes that
    /// state to the surface.
    pub fn create<S: SlideSurface>(count: usize, surface: &mut S) -> Self {
        let states = (0..count).map(|i| i == 0).collect::<Vec<_>>();
        for (i, active) in states.iter().enumerate() {
            surface.set_indicator_active(i, *active);
        }
        Self { states }
    }

    pub fn activate<S: SlideSurface>(&mut self, index: usize, surface: &mut S) {
        for (i, state) in self.states.iter_mut().enumerate() {
            let active = i == index;
            if *state != active {
                *state = active;
                surface.set_indicator_active(i, active);
            }
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.states.iter().position(|active| *active)
    }

    pub fn active_count(&self) -> usize {
        self.states.iter().filter(|active| **active).count()
    }
}
