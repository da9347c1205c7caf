use raylib::prelude::*;

use showcase::fit::fit_image;

/// One screenshot or card shown in the strip.
pub struct Slide {
    image: Texture2D,
}

impl Slide {
    pub fn new(image: Texture2D) -> Self {
        Self { image }
    }

    /// Draws the slide inside `frame`, scaled by the page's image fitting
    /// rule and centered.
    pub fn draw(&self, d: &mut RaylibDrawHandle, frame: Rectangle, highlighted: bool) {
        let background = if highlighted {
            Color::new(241, 245, 249, 255)
        } else {
            Color::new(226, 232, 240, 255)
        };
        d.draw_rectangle_rec(frame, background);

        let natural = (self.image.width() as f32, self.image.height() as f32);
        let scale = fit_image(natural, Some((frame.width, frame.height)))
            .scale(natural, (frame.width, frame.height));

        let scaled_width = natural.0 * scale;
        let scaled_height = natural.1 * scale;
        let dest = Rectangle::new(
            frame.x + (frame.width - scaled_width) * 0.5,
            frame.y + (frame.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, natural.0, natural.1),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
