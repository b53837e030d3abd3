//! Band recolouring.
//!
//! Every pixel is classified by hard thresholds on its original RGB channels
//! into one of four bands, and each band is painted a single colour:
//!
//! | band   | predicate                                  | becomes            |
//! |--------|--------------------------------------------|--------------------|
//! | white  | r > 250, g > 250, b > 250                  | user white colour  |
//! | black  | r < 10, g < 10, b < 10                     | user black colour  |
//! | yellow | r > 230, g > 230, b < 180, and not white   | `#99995B`          |
//! | red    | r > 230, g < 180, b < 180                  | `#993D3D`          |
//!
//! Pixels outside every band keep their original RGBA value.

mod band;
mod report;

pub use band::{Band, BandRule, BandRules, DARKEN_FACTOR, RED_BASE, YELLOW_BASE};
pub use report::BandCounts;

use image::{DynamicImage, RgbaImage};

use crate::error::Result;
use crate::parser::parse_color;
use crate::types::Colour;

/// Recolour `image`, returning a new image of the same size.
pub fn recolor(image: &RgbaImage, white: Colour, black: Colour) -> RgbaImage {
    let rules = BandRules::new(white, black);
    let mut out = image.clone();
    for px in out.pixels_mut() {
        *px = rules.apply(*px);
    }
    out
}

/// Recolour any decoded image, converting it to RGBA first.
pub fn recolor_dynamic(image: &DynamicImage, white: Colour, black: Colour) -> RgbaImage {
    recolor(&image.to_rgba8(), white, black)
}

/// Parse both colour tokens, then recolour.
///
/// The white token is parsed first; an invalid token fails before any pixel
/// is touched.
pub fn process_image(image: &DynamicImage, white_text: &str, black_text: &str) -> Result<RgbaImage> {
    let white = parse_color(white_text)?;
    let black = parse_color(black_text)?;
    Ok(recolor_dynamic(image, white, black))
}
