//! Proportional image scaling for inline attachments.

use glam::{vec2, Vec2};
use image::{
    imageops::{self, FilterType},
    RgbaImage,
};

/// Largest pixel dimension the scaler will produce.
const MAX_DIMENSION: f32 = 65_536.;

/// An image resized for embedding, along with its exact logical size.
///
/// The pixel buffer dimensions are `size` rounded to whole pixels;
/// bounding boxes should be computed from `size` so that the attachment
/// width matches the requested target exactly.
#[derive(Clone)]
pub struct ScaledImage {
    pub image: RgbaImage,
    pub size: Vec2,
}

/// Scales `image` so that its width becomes `target_width`.
///
/// With no target the image is returned unchanged. Otherwise the width
/// is forced to exactly `target_width` and only the height is scaled by
/// the aspect ratio. For an image narrower than the target, the
/// reciprocal ratio is used: the width still becomes `target_width`,
/// but the height shrinks instead of growing.
///
/// Returns `None` if the computed size cannot be rendered (non-finite,
/// or rounding to zero pixels).
pub fn scaled(image: &RgbaImage, target_width: Option<f32>) -> Option<ScaledImage> {
    let native = vec2(image.width() as f32, image.height() as f32);

    let target_width = match target_width {
        Some(width) => width,
        None => {
            return Some(ScaledImage {
                image: image.clone(),
                size: native,
            })
        }
    };

    let ratio = if native.x > target_width {
        target_width / native.x
    } else {
        native.x / target_width
    };
    let size = vec2(target_width, native.y * ratio);

    let width = size.x.round();
    let height = size.y.round();
    if !(width >= 1. && height >= 1. && width <= MAX_DIMENSION && height <= MAX_DIMENSION) {
        return None;
    }

    Some(ScaledImage {
        image: imageops::resize(image, width as u32, height as u32, FilterType::Lanczos3),
        size,
    })
}
