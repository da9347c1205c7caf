//! Sizing rule for images placed inside slide frames.

use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Auto,
    Px(f32),
    Percent(f32),
}

/// Inline size overrides for an image; `None` leaves the stylesheet alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImageFit {
    pub width: Option<Length>,
    pub height: Option<Length>,
    pub contain: bool,
}

impl ImageFit {
    /// Uniform scale the overrides amount to for an image of `natural` size
    /// in a frame of `parent` size.
    pub fn scale(&self, natural: (f32, f32), parent: (f32, f32)) -> f32 {
        match (self.width, self.height) {
            (Some(Length::Percent(pct)), Some(Length::Auto)) if natural.0 > 0.0 => {
                parent.0 * pct / 100.0 / natural.0
            }
            (Some(Length::Auto), Some(Length::Px(h))) if natural.1 > 0.0 => h / natural.1,
            _ => 1.0,
        }
    }
}

/// Computes overrides for an image of `natural` (width, height) inside a
/// frame of `parent` size. Too tall images are pinned to the frame height
/// minus a margin; too wide images then take the full frame width.
/// Unloaded images (zero size) get no overrides.
pub fn fit_image(natural: (f32, f32), parent: Option<(f32, f32)>) -> ImageFit {
    let (natural_width, natural_height) = natural;
    let mut fit = ImageFit::default();

    if natural_height > 0.0 {
        let max_height = parent
            .map(|(_, h)| h - FIT_HEIGHT_MARGIN)
            .unwrap_or(FIT_DEFAULT_PARENT_HEIGHT);
        if natural_height > max_height {
            fit = ImageFit {
                width: Some(Length::Auto),
                height: Some(Length::Px(max_height)),
                contain: true,
            };
        }
    }

    if natural_width > 0.0 {
        let parent_width = parent.map(|(w, _)| w).unwrap_or(FIT_DEFAULT_PARENT_WIDTH);
        if natural_width > parent_width * FIT_WIDTH_TOLERANCE {
            fit = ImageFit {
                width: Some(Length::Percent(100.0)),
                height: Some(Length::Auto),
                contain: true,
            };
        }
    }

    fit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_image_is_left_alone() {
        assert_eq!(fit_image((200.0, 300.0), Some((280.0, 580.0))), ImageFit::default());
        assert_eq!(fit_image((0.0, 0.0), None), ImageFit::default());
    }

    #[test]
    fn tall_image_is_pinned_to_frame_height() {
        let fit = fit_image((250.0, 1000.0), Some((280.0, 580.0)));
        assert_eq!(fit.height, Some(Length::Px(520.0)));
        assert_eq!(fit.width, Some(Length::Auto));
        assert!((fit.scale((250.0, 1000.0), (280.0, 580.0)) - 0.52).abs() < 1e-6);
    }

    #[test]
    fn wide_image_takes_full_width() {
        let fit = fit_image((1200.0, 1000.0), Some((280.0, 580.0)));
        assert_eq!(fit.width, Some(Length::Percent(100.0)));
        assert_eq!(fit.height, Some(Length::Auto));
        assert!((fit.scale((1200.0, 1000.0), (280.0, 580.0)) - 280.0 / 1200.0).abs() < 1e-6);
    }

    #[test]
    fn defaults_apply_without_parent() {
        let fit = fit_image((100.0, 600.0), None);
        assert_eq!(fit.height, Some(Length::Px(520.0)));
    }
}
