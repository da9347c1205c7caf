use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use showcase::{Animated, Control, SiteConfig, SliderController};

mod slide;
mod strip;
mod texture_loader;

use crate::slide::Slide;
use crate::strip::{Hit, Strip};
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

const WINDOW_WIDTH: i32 = 1280;
const WINDOW_HEIGHT: i32 = 720;
const FPS: u32 = 60;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    Screenshots,
    Testimonials,
}

/// Runs the landing page carousel over a directory of images.
#[derive(Debug, Parser)]
#[command(name = "viewer", version)]
struct Args {
    /// Directory holding the slide images.
    directory: PathBuf,
    /// Site configuration (TOML).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Which carousel preset to use.
    #[arg(long, value_enum, default_value_t = Kind::Screenshots)]
    kind: Kind,
    /// Shuffle the slide order instead of sorting by file name.
    #[arg(long)]
    shuffle: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)?,
        None => SiteConfig::default(),
    };
    let slider_config = match args.kind {
        Kind::Screenshots => config.screenshots,
        Kind::Testimonials => config.testimonials,
    };

    let mut paths = load_sorted_image_paths(&args.directory)
        .with_context(|| format!("loading images from {}", args.directory.display()))?;
    if args.shuffle {
        paths.shuffle(&mut rand::rng());
    }
    info!(images = paths.len(), directory = %args.directory.display(), "found slides");

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Showcase carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut slides = Vec::new();
    for path in &paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => slides.push(Slide::new(texture)),
            Err(e) => warn!(error = %e, "skipping slide"),
        }
    }

    let strip = Strip::new(
        slides,
        slider_config.gap,
        rl.get_screen_width(),
        rl.get_screen_height(),
    );
    let Ok(mut slider) = SliderController::new(strip, slider_config) else {
        warn!("no slide could be loaded, nothing to show");
        return Ok(());
    };

    let mut hovering = false;
    let mut dragging = false;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_window_resized() {
            let (width, height) = (rl.get_screen_width(), rl.get_screen_height());
            slider.surface_mut().layout(width, height);
            slider.on_resize();
        }

        let mouse = rl.get_mouse_position();
        let over_strip = slider.surface().bounds().check_collision_point_rec(mouse);
        if over_strip != hovering {
            hovering = over_strip;
            if hovering {
                slider.on_pointer_enter();
            } else {
                slider.on_pointer_leave();
            }
        }

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            match slider.surface().hit_test(mouse) {
                Some(Hit::Prev) => slider.on_control(Control::Prev),
                Some(Hit::Next) => slider.on_control(Control::Next),
                Some(Hit::Dot(index)) => slider.on_indicator_click(index),
                Some(Hit::Strip) => {
                    dragging = true;
                    slider.on_gesture_start(mouse.x);
                }
                None => {}
            }
        }
        if dragging {
            if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
                dragging = false;
                slider.on_gesture_end(mouse.x);
            } else {
                slider.on_gesture_move(mouse.x);
            }
        }

        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            slider.prev();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            slider.next();
        }

        slider.update(Duration::from_secs_f32(dt));
        if let Some(left) = slider.surface_mut().update(dt) {
            slider.on_scroll(left);
        }

        let drag_offset = slider.drag_translation();
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::new(248, 250, 252, 255));
        slider.surface().draw(&mut d, drag_offset);
        d.draw_text(
            &format!("{} / {}", slider.current_index() + 1, slider.len()),
            20,
            20,
            20,
            Color::DARKGRAY,
        );
    }

    slider.teardown();
    Ok(())
}
