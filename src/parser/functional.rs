//! CSS-style functional notation: `rgb()`, `rgba()`, `hsl()`, `hsv()`/`hsb()`.
//!
//! Input is already lowercased and trimmed by the caller.

use palette::{Hsl, Hsv, IntoColor, Srgb};

use crate::types::Colour;

/// Parse a functional colour, e.g. `rgb(26, 26, 26)` or `hsl(0, 100%, 50%)`.
pub(super) fn parse(text: &str) -> Option<Colour> {
    let (name, rest) = text.split_once('(')?;
    let body = rest.strip_suffix(')')?;
    let args: Vec<&str> = body.split(',').map(str::trim).collect();

    match (name.trim(), args.as_slice()) {
        ("rgb", [r, g, b]) => rgb(r, g, b),
        // Alpha is validated but dropped; resolved colours are opaque.
        ("rgba", [r, g, b, a]) => {
            channel(a)?;
            Some(Colour::rgb(channel(r)?, channel(g)?, channel(b)?))
        }
        ("hsl", [h, s, l]) => {
            let hsl: Hsl = Hsl::new(number(h)?, percent(s)?, percent(l)?);
            Some(from_srgb(hsl.into_color()))
        }
        ("hsv" | "hsb", [h, s, v]) => {
            let hsv: Hsv = Hsv::new(number(h)?, percent(s)?, percent(v)?);
            Some(from_srgb(hsv.into_color()))
        }
        _ => None,
    }
}

/// `rgb(r, g, b)` with either all integer channels or all percentages.
fn rgb(r: &str, g: &str, b: &str) -> Option<Colour> {
    if r.ends_with('%') {
        let scale = |p: f32| (f64::from(p) * 255.0 / 100.0 + 0.5).floor() as u8;
        return Some(Colour::rgb(
            scale(percent_value(r)?),
            scale(percent_value(g)?),
            scale(percent_value(b)?),
        ));
    }
    Some(Colour::rgb(channel(r)?, channel(g)?, channel(b)?))
}

/// Unsigned integer channel in `0..=255`.
fn channel(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().and_then(|v| u8::try_from(v).ok())
}

/// Unsigned decimal number such as `120` or `33.5`.
fn number(s: &str) -> Option<f32> {
    let starts_with_digit = s.bytes().next().is_some_and(|b| b.is_ascii_digit());
    let dots = s.bytes().filter(|&b| b == b'.').count();
    if !starts_with_digit || dots > 1 || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    s.parse().ok()
}

/// Percentage in `0%..=100%`.
fn percent_value(s: &str) -> Option<f32> {
    let value = number(s.strip_suffix('%')?)?;
    (value <= 100.0).then_some(value)
}

/// Percentage as a fraction in `0.0..=1.0`.
fn percent(s: &str) -> Option<f32> {
    percent_value(s).map(|v| v / 100.0)
}

fn from_srgb(rgb: Srgb) -> Colour {
    let scale = |x: f32| (f64::from(x) * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8;
    Colour::rgb(scale(rgb.red), scale(rgb.green), scale(rgb.blue))
}
