//! Preview thumbnails.

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Longest side of a preview unless configured otherwise.
pub const DEFAULT_PREVIEW_SIZE: u32 = 400;

/// Size of a thumbnail that fits in a `max_size` square.
///
/// Aspect ratio is kept and images are never enlarged. Each side is at
/// least one pixel.
pub fn preview_dimensions(width: u32, height: u32, max_size: u32) -> (u32, u32) {
    let max_size = max_size.max(1);
    if width <= max_size && height <= max_size {
        return (width, height);
    }

    let scale = f64::from(max_size) / f64::from(width.max(height));
    let fit = |side: u32| ((f64::from(side) * scale).round() as u32).clamp(1, max_size);
    (fit(width), fit(height))
}

/// Shrink `image` to fit in a `max_size` square.
pub fn preview(image: &RgbaImage, max_size: u32) -> RgbaImage {
    let (width, height) = preview_dimensions(image.width(), image.height(), max_size);
    if (width, height) == image.dimensions() {
        return image.clone();
    }
    imageops::resize(image, width, height, FilterType::CatmullRom)
}
