//! Wiring of every widget on the landing page.
//!
//! [`Page::mount`] registers all widgets in one pass from a [`PageLayout`];
//! widgets whose markup is missing are skipped. The host forwards events to
//! [`Page::handle`], calls [`Page::frame`] once per animation frame and
//! applies the returned [`Effect`]s to its document.

use std::time::Duration;

use tracing::debug;

use crate::accordion::{Accordion, AnswerChange};
use crate::config::{SiteConfig, SliderConfig};
use crate::engine::{Animated, SlideSurface};
use crate::frame::FrameCoalescer;
use crate::lazy_load::{LazyImage, LazyLoader, LoadImage, Placement};
use crate::navbar::{MenuChange, Navbar, NavbarStyle};
use crate::parallax::{Parallax, ParallaxElement, Translate};
use crate::scroll_spy::{ScrollSpy, Section};
use crate::slider::SliderController;
use crate::state::Control;
use crate::stats::StatCounter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderKind {
    Screenshots,
    Testimonials,
}

/// What the host found in the document at load time.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub has_menu_toggle: bool,
    pub initial_scroll_y: f32,
    pub viewport: (f32, f32),
    pub navbar_height: f32,
    pub sections: Vec<Section>,
    pub nav_links: Vec<String>,
    pub lazy_images: Vec<LazyImage>,
    pub faq_answer_heights: Vec<f32>,
    pub parallax: Vec<ParallaxElement>,
    pub stat_texts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderInput {
    Control(Control),
    Indicator(usize),
    GestureStart(f32),
    GestureMove(f32),
    GestureEnd(f32),
    PointerEnter,
    PointerLeave,
    Scroll(f32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Scroll { y: f32 },
    Resize { width: f32, height: f32 },
    MenuToggle,
    AnchorClick { href: String, target_top: Option<f32> },
    FaqClick(usize),
    ImageIntersection { id: usize, intersecting: bool },
    StatVisibility { index: usize, ratio: f32 },
    VisibilityChange { hidden: bool },
    Slider { kind: SliderKind, input: SliderInput },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Add the `loaded` class to the body.
    PageLoaded,
    RequestFrame,
    Menu(MenuChange),
    NavbarStyle(NavbarStyle),
    ScrollWindowTo(f32),
    PushHash(String),
    NavLinks(Vec<bool>),
    Answer(AnswerChange),
    Translate(Translate),
    LoadImage(LoadImage),
    StatText { index: usize, text: String },
}

#[derive(Debug)]
enum Carousel<S: SlideSurface> {
    Running(SliderController<S>),
    // No slides; the surface is only kept to be handed back.
    Empty(S),
}

impl<S: SlideSurface> Carousel<S> {
    fn mount(surface: S, config: SliderConfig) -> Self {
        SliderController::new(surface, config).map_or_else(Self::Empty, Self::Running)
    }

    fn controller(&self) -> Option<&SliderController<S>> {
        match self {
            Self::Running(slider) => Some(slider),
            Self::Empty(_) => None,
        }
    }

    fn controller_mut(&mut self) -> Option<&mut SliderController<S>> {
        match self {
            Self::Running(slider) => Some(slider),
            Self::Empty(_) => None,
        }
    }

    fn teardown(self) -> S {
        match self {
            Self::Running(slider) => slider.teardown(),
            Self::Empty(surface) => surface,
        }
    }
}

#[derive(Debug)]
pub struct Page<S: SlideSurface> {
    navbar: Navbar,
    has_menu_toggle: bool,
    scroll_spy: ScrollSpy,
    nav_links: Vec<String>,
    lazy: LazyLoader,
    accordion: Option<Accordion>,
    parallax: Parallax,
    stats: Vec<Option<StatCounter>>,
    screenshots: Option<Carousel<S>>,
    testimonials: Option<Carousel<S>>,
    scroll_frame: FrameCoalescer,
    resize_frame: FrameCoalescer,
    scroll_y: f32,
    viewport: (f32, f32),
    navbar_height: f32,
}

impl<S: SlideSurface> Page<S> {
    /// Registers every widget. Returns the page and the effects of the
    /// initial state (first FAQ answer expanded, `loaded` marker).
    pub fn mount(
        layout: PageLayout,
        screenshots: Option<S>,
        testimonials: Option<S>,
        config: &SiteConfig,
    ) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();

        let accordion = match Accordion::new(layout.faq_answer_heights) {
            Some((accordion, first)) => {
                effects.push(Effect::Answer(first));
                Some(accordion)
            }
            None => None,
        };

        let stats = layout
            .stat_texts
            .iter()
            .map(|text| StatCounter::new(text, &config.stats))
            .collect();

        let screenshots =
            screenshots.map(|surface| Carousel::mount(surface, config.screenshots.clone()));
        let testimonials =
            testimonials.map(|surface| Carousel::mount(surface, config.testimonials.clone()));

        let page = Self {
            navbar: Navbar::new(config.navbar.clone(), layout.initial_scroll_y),
            has_menu_toggle: layout.has_menu_toggle,
            scroll_spy: ScrollSpy::new(layout.sections, config.navbar.scroll_spy_margin),
            nav_links: layout.nav_links,
            lazy: LazyLoader::new(layout.lazy_images, &config.lazy_load),
            accordion,
            parallax: Parallax::new(layout.parallax),
            stats,
            screenshots,
            testimonials,
            scroll_frame: FrameCoalescer::new(),
            resize_frame: FrameCoalescer::new(),
            scroll_y: layout.initial_scroll_y,
            viewport: layout.viewport,
            navbar_height: layout.navbar_height,
        };
        debug!(
            screenshots = page.slider(SliderKind::Screenshots).is_some(),
            testimonials = page.slider(SliderKind::Testimonials).is_some(),
            faq = page.accordion.is_some(),
            "page mounted"
        );

        effects.push(Effect::PageLoaded);
        (page, effects)
    }

    pub fn slider(&self, kind: SliderKind) -> Option<&SliderController<S>> {
        let carousel = match kind {
            SliderKind::Screenshots => self.screenshots.as_ref(),
            SliderKind::Testimonials => self.testimonials.as_ref(),
        };
        carousel.and_then(Carousel::controller)
    }

    pub fn slider_mut(&mut self, kind: SliderKind) -> Option<&mut SliderController<S>> {
        let carousel = match kind {
            SliderKind::Screenshots => self.screenshots.as_mut(),
            SliderKind::Testimonials => self.testimonials.as_mut(),
        };
        carousel.and_then(Carousel::controller_mut)
    }

    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    pub fn accordion(&self) -> Option<&Accordion> {
        self.accordion.as_ref()
    }

    pub fn lazy_loader(&self) -> &LazyLoader {
        &self.lazy
    }

    fn sliders_mut(&mut self) -> impl Iterator<Item = &mut SliderController<S>> {
        self.screenshots
            .iter_mut()
            .chain(self.testimonials.iter_mut())
            .filter_map(Carousel::controller_mut)
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            PageEvent::Scroll { y } => {
                self.scroll_y = y;
                self.lazy.on_viewport_change();
                effects.push(Effect::NavLinks(self.scroll_spy.nav_link_states(
                    self.nav_links.iter().map(String::as_str),
                    y,
                    self.navbar_height,
                )));
                if self.scroll_frame.request() {
                    effects.push(Effect::RequestFrame);
                }
            }
            PageEvent::Resize { width, height } => {
                self.viewport = (width, height);
                self.lazy.on_viewport_change();
                if self.resize_frame.request() {
                    effects.push(Effect::RequestFrame);
                }
            }
            PageEvent::MenuToggle => {
                if self.has_menu_toggle {
                    effects.push(Effect::Menu(self.navbar.toggle_menu()));
                }
            }
            PageEvent::AnchorClick { href, target_top } => {
                let jump = self
                    .navbar
                    .on_anchor_click(&href, target_top, self.navbar_height);
                effects.extend(jump.menu.map(Effect::Menu));
                effects.extend(jump.scroll_to.map(Effect::ScrollWindowTo));
            }
            PageEvent::FaqClick(item) => {
                if let Some(accordion) = &mut self.accordion {
                    effects.extend(accordion.toggle(item).into_iter().map(Effect::Answer));
                }
            }
            PageEvent::ImageIntersection { id, intersecting } => {
                effects.extend(
                    self.lazy
                        .on_intersection(id, intersecting)
                        .map(Effect::LoadImage),
                );
            }
            PageEvent::StatVisibility { index, ratio } => {
                if let Some(Some(counter)) = self.stats.get_mut(index) {
                    counter.on_visibility(ratio);
                }
            }
            PageEvent::VisibilityChange { hidden } => {
                for slider in self.sliders_mut() {
                    slider.on_visibility_change(hidden);
                }
            }
            PageEvent::Slider { kind, input } => {
                if let Some(slider) = self.slider_mut(kind) {
                    apply_slider_input(slider, input);
                }
            }
        }
        effects
    }

    /// One animation frame. Runs the coalesced scroll/resize work, then
    /// steps every timer and animation by `dt`. `probe` locates images for
    /// the polling lazy loader.
    pub fn frame(&mut self, dt: Duration, probe: impl Fn(usize) -> Placement) -> Vec<Effect> {
        let mut effects = Vec::new();

        if self.scroll_frame.take() {
            let update = self.navbar.on_scroll(self.scroll_y, self.viewport.0);
            effects.push(Effect::NavbarStyle(update.style));
            effects.extend(update.menu.map(Effect::Menu));
            effects.extend(
                self.parallax
                    .offsets(self.scroll_y)
                    .into_iter()
                    .map(Effect::Translate),
            );
        }

        if self.resize_frame.take() {
            for slider in self.sliders_mut() {
                slider.on_resize();
            }
        }

        self.navbar.update(dt);
        effects.extend(self.navbar.take_due_hash().map(Effect::PushHash));

        for slider in self.sliders_mut() {
            slider.update(dt);
        }

        self.lazy.update(dt);
        effects.extend(
            self.lazy
                .poll(self.viewport.1, probe)
                .into_iter()
                .map(Effect::LoadImage),
        );

        for (index, counter) in self.stats.iter_mut().enumerate() {
            if let Some(counter) = counter {
                if counter.update(dt) {
                    effects.push(Effect::StatText {
                        index,
                        text: counter.text(),
                    });
                }
            }
        }

        effects
    }

    /// Stops every timer and hands the slider surfaces back to the host,
    /// including those that had no slides.
    pub fn teardown(self) -> (Option<S>, Option<S>) {
        debug!("page torn down");
        (
            self.screenshots.map(Carousel::teardown),
            self.testimonials.map(Carousel::teardown),
        )
    }
}

fn apply_slider_input<S: SlideSurface>(slider: &mut SliderController<S>, input: SliderInput) {
    match input {
        SliderInput::Control(control) => slider.on_control(control),
        SliderInput::Indicator(index) => slider.on_indicator_click(index),
        SliderInput::GestureStart(x) => slider.on_gesture_start(x),
        SliderInput::GestureMove(x) => slider.on_gesture_move(x),
        SliderInput::GestureEnd(x) => slider.on_gesture_end(x),
        SliderInput::PointerEnter => slider.on_pointer_enter(),
        SliderInput::PointerLeave => slider.on_pointer_leave(),
        SliderInput::Scroll(left) => slider.on_scroll(left),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parallax::ParallaxRole;
    use crate::testsupport::RecordingSurface;

    fn layout() -> PageLayout {
        PageLayout {
            has_menu_toggle: true,
            initial_scroll_y: 0.0,
            viewport: (1280.0, 800.0),
            navbar_height: 80.0,
            sections: vec![Section {
                id: "faq".into(),
                top: 1000.0,
                height: 500.0,
            }],
            nav_links: vec!["#faq".into()],
            lazy_images: Vec::new(),
            faq_answer_heights: vec![100.0, 60.0],
            parallax: vec![ParallaxElement::new(0, ParallaxRole::Hero, None)],
            stat_texts: vec!["100+".into(), "n/a".into()],
        }
    }

    fn offscreen(_: usize) -> Placement {
        Placement {
            top: 5000.0,
            bottom: 5100.0,
            displayed: true,
        }
    }

    fn mount() -> (Page<RecordingSurface>, Vec<Effect>) {
        Page::mount(
            layout(),
            Some(RecordingSurface::new(4, 300.0)),
            Some(RecordingSurface::new(0, 300.0)),
            &SiteConfig::default(),
        )
    }

    #[test]
    fn mount_skips_missing_widgets() {
        let (page, effects) = mount();
        assert!(page.slider(SliderKind::Screenshots).is_some());
        assert!(page.slider(SliderKind::Testimonials).is_none());
        assert_eq!(effects.last(), Some(&Effect::PageLoaded));
        assert!(matches!(effects[0], Effect::Answer(AnswerChange { item: 0, active: true, .. })));
    }

    #[test]
    fn scroll_burst_runs_once_per_frame() {
        let (mut page, _) = mount();
        let first = page.handle(PageEvent::Scroll { y: 150.0 });
        let second = page.handle(PageEvent::Scroll { y: 900.0 });
        assert!(first.contains(&Effect::RequestFrame));
        assert!(!second.contains(&Effect::RequestFrame));
        assert!(second.contains(&Effect::NavLinks(vec![true])));

        let effects = page.frame(Duration::from_millis(16), offscreen);
        let styles = effects
            .iter()
            .filter(|e| matches!(e, Effect::NavbarStyle(_)))
            .count();
        assert_eq!(styles, 1);
        assert!(effects.contains(&Effect::NavbarStyle(NavbarStyle::COMPACT)));
        assert!(effects.iter().any(|e| matches!(e, Effect::Translate(t) if (t.y + 90.0).abs() < 1e-3)));

        let idle = page.frame(Duration::from_millis(16), offscreen);
        assert!(!idle.iter().any(|e| matches!(e, Effect::NavbarStyle(_))));
    }

    #[test]
    fn resize_recenters_sliders_on_next_frame() {
        let (mut page, _) = mount();
        page.handle(PageEvent::Slider {
            kind: SliderKind::Screenshots,
            input: SliderInput::Indicator(2),
        });
        let surface = page.slider_mut(SliderKind::Screenshots).expect("slider").surface_mut();
        surface.extent = 100.0;
        page.handle(PageEvent::Resize {
            width: 600.0,
            height: 800.0,
        });
        page.frame(Duration::ZERO, offscreen);
        let slider = page.slider(SliderKind::Screenshots).expect("slider");
        assert_eq!(slider.current_index(), 2);
        assert_eq!(slider.surface().last_scroll(), Some(2.0 * 124.0));
    }

    #[test]
    fn stat_counter_reports_text_while_running() {
        let (mut page, _) = mount();
        page.handle(PageEvent::StatVisibility {
            index: 0,
            ratio: 0.9,
        });
        page.handle(PageEvent::StatVisibility {
            index: 1,
            ratio: 0.9,
        });
        let effects = page.frame(Duration::from_millis(1000), offscreen);
        assert!(effects.contains(&Effect::StatText {
            index: 0,
            text: "50+".into()
        }));
        assert!(!effects.iter().any(|e| matches!(e, Effect::StatText { index: 1, .. })));
    }

    #[test]
    fn anchor_click_scrolls_and_pushes_hash_later() {
        let (mut page, _) = mount();
        page.handle(PageEvent::MenuToggle);
        let effects = page.handle(PageEvent::AnchorClick {
            href: "#faq".into(),
            target_top: Some(1000.0),
        });
        assert!(effects.contains(&Effect::ScrollWindowTo(900.0)));
        assert!(effects.iter().any(|e| matches!(e, Effect::Menu(m) if !m.open)));
        let later = page.frame(Duration::from_millis(1000), offscreen);
        assert!(later.contains(&Effect::PushHash("#faq".into())));
    }

    #[test]
    fn hidden_page_pauses_sliders() {
        let (mut page, _) = mount();
        page.handle(PageEvent::VisibilityChange { hidden: true });
        page.frame(Duration::from_secs(30), offscreen);
        let slider = page.slider(SliderKind::Screenshots).expect("slider");
        assert_eq!(slider.current_index(), 0);
        assert!(!slider.is_autoplaying());
    }

    #[test]
    fn teardown_returns_every_surface() {
        let (page, _) = mount();
        let (screenshots, testimonials) = page.teardown();
        assert_eq!(screenshots.map(|s| s.slides), Some(4));
        // The empty testimonial strip was never driven but still comes back.
        let testimonials = testimonials.expect("empty surface handed back");
        assert_eq!(testimonials.slides, 0);
        assert!(testimonials.scroll_commands.is_empty());

        let (page, _) = Page::<RecordingSurface>::mount(layout(), None, None, &SiteConfig::default());
        assert_eq!(page.teardown().0.map(|s| s.slides), None);
    }
}
