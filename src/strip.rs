use raylib::prelude::*;

use showcase::SlideSurface;

use crate::slide::Slide;

const SLIDE_WIDTH_RATIO: f32 = 0.6;  // Slide width relative to the window
const SLIDE_HEIGHT_RATIO: f32 = 0.7; // Slide height relative to the window
const STRIP_MARGIN: f32 = 40.0;      // Left inset of the current slide (px)
const SCROLL_DURATION: f32 = 0.4;    // Smooth scroll length (seconds)
const DOT_RADIUS: f32 = 6.0;
const DOT_SPACING: f32 = 22.0;
const BUTTON_SIZE: f32 = 44.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Prev,
    Next,
    Dot(usize),
    Strip,
}

struct SmoothScroll {
    tween: ease::Tween,
    timer: f32,
    target: f32,
}

/// Horizontal strip of slides in the raylib window.
pub struct Strip {
    slides: Vec<Slide>,
    gap: f32,
    screen: (f32, f32),
    scroll_left: f32,
    scroll: Option<SmoothScroll>,
    indicators: Vec<bool>,
}

impl Strip {
    pub fn new(slides: Vec<Slide>, gap: f32, screen_width: i32, screen_height: i32) -> Self {
        let count = slides.len();
        Self {
            slides,
            gap,
            screen: (screen_width as f32, screen_height as f32),
            scroll_left: 0.0,
            scroll: None,
            indicators: vec![false; count],
        }
    }

    pub fn layout(&mut self, screen_width: i32, screen_height: i32) {
        self.screen = (screen_width as f32, screen_height as f32);
    }

    fn slide_height(&self) -> f32 {
        self.screen.1 * SLIDE_HEIGHT_RATIO
    }

    fn strip_top(&self) -> f32 {
        (self.screen.1 - self.slide_height()) * 0.35
    }

    /// Window area the strip occupies; hovering it pauses autoplay.
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(0.0, self.strip_top(), self.screen.0, self.slide_height())
    }

    fn button(&self, hit: Hit) -> Rectangle {
        let y = self.strip_top() + self.slide_height() + 24.0;
        let x = match hit {
            Hit::Prev => STRIP_MARGIN,
            _ => self.screen.0 - STRIP_MARGIN - BUTTON_SIZE,
        };
        Rectangle::new(x, y, BUTTON_SIZE, BUTTON_SIZE)
    }

    fn dot_center(&self, index: usize) -> Vector2 {
        let total = self.indicators.len() as f32 * DOT_SPACING;
        let x = (self.screen.0 - total) * 0.5 + (index as f32 + 0.5) * DOT_SPACING;
        let y = self.strip_top() + self.slide_height() + 24.0 + BUTTON_SIZE * 0.5;
        Vector2::new(x, y)
    }

    pub fn hit_test(&self, point: Vector2) -> Option<Hit> {
        if self.button(Hit::Prev).check_collision_point_rec(point) {
            return Some(Hit::Prev);
        }
        if self.button(Hit::Next).check_collision_point_rec(point) {
            return Some(Hit::Next);
        }
        let dot = (0..self.indicators.len()).find(|i| {
            let center = self.dot_center(*i);
            (center.x - point.x).abs() <= DOT_SPACING * 0.5
                && (center.y - point.y).abs() <= DOT_SPACING * 0.5
        });
        if let Some(index) = dot {
            return Some(Hit::Dot(index));
        }
        self.bounds()
            .check_collision_point_rec(point)
            .then_some(Hit::Strip)
    }

    /// Advances the smooth scroll. Returns the new scroll position when the
    /// strip moved this frame.
    pub fn update(&mut self, dt: f32) -> Option<f32> {
        let scroll = self.scroll.as_mut()?;
        scroll.timer += dt;
        if scroll.timer >= SCROLL_DURATION {
            self.scroll_left = scroll.target;
            self.scroll = None;
        } else {
            self.scroll_left = scroll.tween.apply(dt);
        }
        Some(self.scroll_left)
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, drag_offset: f32) {
        let extent = self.slide_extent();
        let top = self.strip_top();
        let current = self.indicators.iter().position(|active| *active);

        for (i, slide) in self.slides.iter().enumerate() {
            let x = STRIP_MARGIN + i as f32 * (extent + self.gap) - self.scroll_left + drag_offset;
            if x + extent < 0.0 || x > self.screen.0 {
                continue;
            }
            let frame = Rectangle::new(x, top, extent, self.slide_height());
            slide.draw(d, frame, current == Some(i));
        }

        let accent = Color::new(37, 99, 235, 255);
        for hit in [Hit::Prev, Hit::Next] {
            let rect = self.button(hit);
            d.draw_rectangle_rec(rect, accent);
            let label = if hit == Hit::Prev { "<" } else { ">" };
            d.draw_text(label, rect.x as i32 + 16, rect.y as i32 + 10, 24, Color::WHITE);
        }
        for (i, active) in self.indicators.iter().enumerate() {
            let center = self.dot_center(i);
            let color = if *active { accent } else { Color::LIGHTGRAY };
            d.draw_circle(center.x as i32, center.y as i32, DOT_RADIUS, color);
        }
    }
}

impl SlideSurface for Strip {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn slide_extent(&self) -> f32 {
        self.screen.0 * SLIDE_WIDTH_RATIO
    }

    fn scroll_left(&self) -> f32 {
        self.scroll_left
    }

    fn scroll_to(&mut self, left: f32) {
        self.scroll = Some(SmoothScroll {
            tween: ease::Tween::new(ease::cubic_out, self.scroll_left, left, SCROLL_DURATION),
            timer: 0.0,
            target: left,
        });
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(slot) = self.indicators.get_mut(index) {
            *slot = active;
        }
    }
}
