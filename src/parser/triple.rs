//! Bare `R,G,B` triples.

use crate::types::Colour;

use super::ColourResolver;

/// Resolves exactly three comma-separated integers, each in `0..=255`.
///
/// Whitespace around each component is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct Triple;

impl ColourResolver for Triple {
    fn name(&self) -> &'static str {
        "triple"
    }

    fn resolve(&self, text: &str) -> Option<Colour> {
        let parts: Vec<&str> = text.split(',').collect();
        let [r, g, b] = parts.as_slice() else {
            return None;
        };

        Some(Colour::rgb(component(r)?, component(g)?, component(b)?))
    }
}

/// A signed integer that must land in `0..=255`.
fn component(token: &str) -> Option<u8> {
    let value: i64 = token.trim().parse().ok()?;
    u8::try_from(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_triples() {
        assert_eq!(Triple.resolve("0,0,0"), Some(Colour::BLACK));
        assert_eq!(Triple.resolve("255, 255, 255"), Some(Colour::WHITE));
        assert_eq!(Triple.resolve("+1,02, 3 "), Some(Colour::rgb(1, 2, 3)));
    }

    #[test]
    fn test_bounds() {
        assert_eq!(Triple.resolve("-0,0,0"), Some(Colour::BLACK));
        assert_eq!(Triple.resolve("256,0,0"), None);
        assert_eq!(Triple.resolve("0,0,-1"), None);
        assert_eq!(Triple.resolve("99999999999999999999,0,0"), None);
    }

    #[test]
    fn test_shape() {
        assert_eq!(Triple.resolve("1,2"), None);
        assert_eq!(Triple.resolve("1,2,3,"), None);
        assert_eq!(Triple.resolve("1,,3"), None);
        assert_eq!(Triple.resolve(""), None);
    }
}
