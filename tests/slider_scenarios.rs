use std::time::Duration;

use proptest::prelude::*;
use showcase::testsupport::RecordingSurface;
use showcase::{Animated, SliderConfig, SliderController, SliderPhase};

const EXTENT: f32 = 300.0;

fn screenshots(slides: usize) -> SliderController<RecordingSurface> {
    SliderController::new(RecordingSurface::new(slides, EXTENT), SliderConfig::screenshots())
        .expect("slider with slides")
}

fn testimonials(slides: usize) -> SliderController<RecordingSurface> {
    SliderController::new(RecordingSurface::new(slides, EXTENT), SliderConfig::testimonials())
        .expect("slider with slides")
}

#[test]
fn five_slides_wrap_after_the_last() {
    let mut slider = screenshots(5);
    for _ in 0..4 {
        slider.next();
    }
    assert_eq!(slider.current_index(), 4);
    slider.next();
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn prev_from_first_goes_to_last() {
    let mut slider = testimonials(3);
    slider.prev();
    assert_eq!(slider.current_index(), 2);
    assert_eq!(slider.surface().active_indicators(), vec![2]);
    assert_eq!(slider.surface().last_scroll(), Some(2.0 * (EXTENT + 30.0)));
}

#[test]
fn hover_suspends_and_leave_resumes_autoplay() {
    let mut slider = screenshots(5);
    slider.on_pointer_enter();
    assert_eq!(slider.phase(), SliderPhase::Paused);
    slider.update(Duration::from_millis(4500));
    assert_eq!(slider.current_index(), 0);

    slider.on_pointer_leave();
    assert_eq!(slider.phase(), SliderPhase::Autoplaying);
    slider.update(Duration::from_millis(3999));
    assert_eq!(slider.current_index(), 0);
    slider.update(Duration::from_millis(1));
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn stopped_autoplay_never_advances() {
    let mut slider = testimonials(4);
    slider.stop_autoplay();
    for _ in 0..100 {
        slider.update(Duration::from_millis(500));
    }
    assert_eq!(slider.current_index(), 0);
    slider.start_autoplay();
    slider.update(Duration::from_millis(5000));
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn autoplay_advances_once_per_period() {
    let mut slider = testimonials(4);
    let frame = Duration::from_millis(16);
    let mut elapsed = Duration::ZERO;
    while elapsed < Duration::from_millis(10_100) {
        slider.update(frame);
        elapsed += frame;
    }
    assert_eq!(slider.current_index(), 2);
}

#[test]
fn repeated_start_does_not_double_the_rate() {
    let mut slider = screenshots(6);
    slider.start_autoplay();
    slider.start_autoplay();
    slider.update(Duration::from_millis(4000));
    assert_eq!(slider.current_index(), 1);
}

#[test]
fn swipe_navigates_and_rearms_autoplay() {
    let mut slider = screenshots(3);
    slider.on_gesture_start(400.0);
    slider.on_gesture_move(330.0);
    slider.on_gesture_end(320.0);
    assert_eq!(slider.current_index(), 1);
    assert_eq!(slider.phase(), SliderPhase::Autoplaying);

    slider.on_gesture_start(100.0);
    slider.on_gesture_end(180.0);
    assert_eq!(slider.current_index(), 0);
}

#[test]
fn teardown_stops_driving_the_surface() {
    let mut slider = screenshots(3);
    slider.next();
    let surface = slider.teardown();
    assert_eq!(surface.active_indicators(), vec![1]);
    assert_eq!(surface.scroll_left, EXTENT + 24.0);
}

#[test]
fn free_scroll_syncs_after_jump_to_clamped_last_slide() {
    let surface = RecordingSurface::new(5, EXTENT).with_max_scroll_left(660.0);
    let mut slider = SliderController::new(surface, SliderConfig::screenshots()).expect("slider");
    slider.go_to(4);
    slider.on_scroll(600.0);
    slider.on_scroll(660.0);
    assert_eq!(slider.current_index(), 4);

    // User scrolls back through the strip by hand.
    slider.on_scroll(500.0);
    assert_eq!(slider.current_index(), 2);
    slider.on_scroll(0.0);
    assert_eq!(slider.current_index(), 0);
    assert_eq!(slider.surface().active_indicators(), vec![0]);
}

proptest! {
    #[test]
    fn go_to_wraps_any_index(slides in 1usize..12, index in -1000isize..1000) {
        let mut slider = screenshots(slides);
        slider.go_to(index);
        let n = slides as isize;
        prop_assert_eq!(slider.current_index() as isize, ((index % n) + n) % n);
        prop_assert_eq!(slider.surface().active_indicators(), vec![slider.current_index()]);
        prop_assert_eq!(slider.active_indicator_count(), 1);
    }

    #[test]
    fn next_then_prev_is_identity(slides in 1usize..12, start in 0isize..12) {
        let mut slider = testimonials(slides);
        slider.go_to(start);
        let before = slider.current_index();
        slider.next();
        slider.prev();
        prop_assert_eq!(slider.current_index(), before);
    }

    #[test]
    fn short_drags_never_navigate(start in 0.0f32..1000.0, travel in -49.9f32..=49.9) {
        let mut slider = screenshots(5);
        slider.go_to(2);
        slider.on_gesture_start(start);
        slider.on_gesture_end(start + travel);
        prop_assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn long_drags_move_exactly_one(slides in 2usize..10, start in 200.0f32..800.0, travel in 50.5f32..180.0, leftward in any::<bool>()) {
        let mut slider = screenshots(slides);
        let before = slider.current_index();
        let end = if leftward { start - travel } else { start + travel };
        slider.on_gesture_start(start);
        slider.on_gesture_end(end);
        let expected = if leftward { (before + 1) % slides } else { (before + slides - 1) % slides };
        prop_assert_eq!(slider.current_index(), expected);
    }
}
