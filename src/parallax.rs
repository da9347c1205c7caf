//! Scroll-linked vertical offsets.

use crate::constants::{PARALLAX_DEFAULT_SPEED, PARALLAX_HERO_SPEED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParallaxRole {
    Hero,
    FeatureCard(usize), // position among the feature cards
    /// Element marked up as parallax; `data-speed` when present.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxElement {
    pub id: usize,
    pub speed: f32,
}

impl ParallaxElement {
    pub fn new(id: usize, role: ParallaxRole, data_speed: Option<f32>) -> Self {
        let speed = match role {
            ParallaxRole::Hero => PARALLAX_HERO_SPEED,
            ParallaxRole::FeatureCard(index) => 0.05 + (index % 3) as f32 * 0.02,
            ParallaxRole::Custom => data_speed.unwrap_or(PARALLAX_DEFAULT_SPEED),
        };
        Self { id, speed }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Translate {
    pub id: usize,
    pub y: f32,
}

#[derive(Debug, Clone, Default)]
pub struct Parallax {
    elements: Vec<ParallaxElement>,
}

impl Parallax {
    pub fn new(elements: Vec<ParallaxElement>) -> Self {
        Self { elements }
    }

    pub fn offsets(&self, scroll_y: f32) -> Vec<Translate> {
        self.elements
            .iter()
            .map(|element| Translate {
                id: element.id,
                y: scroll_y * element.speed,
            })
            .collect()
    }
}
