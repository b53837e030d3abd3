//! Colour text parsing.
//!
//! Free-form colour tokens arrive from flags and settings files. Each token is
//! offered to a fixed list of [`ColourResolver`]s in order; the first one that
//! recognises it wins:
//!
//! 1. [`NamedOrHex`] - colour names, `#hex` literals and functional notation
//!    such as `rgb(26, 26, 26)` or `hsl(0, 100%, 50%)`
//! 2. [`Triple`] - a bare `R,G,B` triple of integers in `0..=255`
//!
//! Every resolved colour is fully opaque.

mod functional;
mod named;
mod triple;

pub use named::NamedOrHex;
pub use triple::Triple;

use crate::error::{DarkError, Result};
use crate::types::Colour;

/// One strategy for turning trimmed text into a colour.
pub trait ColourResolver {
    /// Short label used in diagnostics.
    fn name(&self) -> &'static str;

    /// Resolve `text`, or `None` if this strategy does not recognise it.
    fn resolve(&self, text: &str) -> Option<Colour>;
}

/// Resolvers in the order they are tried.
pub const RESOLVERS: [&dyn ColourResolver; 2] = [&NamedOrHex, &Triple];

/// Parse a colour token into an opaque [`Colour`].
///
/// Surrounding whitespace is ignored. Fails with [`DarkError::ColourParse`]
/// carrying the trimmed text when no resolver accepts it.
pub fn parse_color(text: &str) -> Result<Colour> {
    let text = text.trim();

    RESOLVERS
        .iter()
        .find_map(|resolver| resolver.resolve(text))
        .map(Colour::opaque)
        .ok_or_else(|| DarkError::ColourParse {
            text: text.to_string(),
        })
}

/// Name of the first resolver that accepts `text`, if any.
pub fn resolved_by(text: &str) -> Option<&'static str> {
    let text = text.trim();
    RESOLVERS
        .iter()
        .find(|resolver| resolver.resolve(text).is_some())
        .map(|resolver| resolver.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_literal() {
        assert_eq!(parse_color("#1a1a1a").unwrap(), Colour::rgb(26, 26, 26));
        assert_eq!(parse_color("#fff").unwrap(), Colour::WHITE);
    }

    #[test]
    fn test_hex_alpha_is_forced_opaque() {
        assert_eq!(parse_color("#FF000080").unwrap(), Colour::rgb(255, 0, 0));
        assert_eq!(parse_color("#f008").unwrap(), Colour::rgb(255, 0, 0));
    }

    #[test]
    fn test_every_byte_round_trips_through_hex() {
        for v in 0..=255u8 {
            let text = format!("#{:02x}{:02x}{:02x}", v, 255 - v, v / 2);
            assert_eq!(parse_color(&text).unwrap(), Colour::rgb(v, 255 - v, v / 2));
        }
    }

    #[test]
    fn test_named_colour() {
        assert_eq!(parse_color("red").unwrap(), Colour::rgb(255, 0, 0));
        assert_eq!(parse_color("White").unwrap(), Colour::WHITE);
        assert_eq!(parse_color("  navy ").unwrap(), Colour::rgb(0, 0, 128));
    }

    #[test]
    fn test_triple() {
        assert_eq!(parse_color("26,26,26").unwrap(), Colour::rgb(26, 26, 26));
        assert_eq!(parse_color(" 0 , 128 ,255 ").unwrap(), Colour::rgb(0, 128, 255));
    }

    #[test]
    fn test_triple_out_of_range() {
        assert!(parse_color("256,0,0").is_err());
        assert!(parse_color("0,-1,0").is_err());
    }

    #[test]
    fn test_triple_not_integer() {
        assert!(parse_color("1.5,2,3").is_err());
        assert!(parse_color("a,b,c").is_err());
    }

    #[test]
    fn test_triple_wrong_arity() {
        assert!(parse_color("1,2").is_err());
        assert!(parse_color("1,2,3,4").is_err());
    }

    #[test]
    fn test_error_message_contains_text() {
        let err = parse_color("not_a_color").unwrap_err();
        assert!(matches!(err, DarkError::ColourParse { .. }));
        assert_eq!(err.to_string(), "invalid color format: 'not_a_color'");
    }

    #[test]
    fn test_error_message_uses_trimmed_text() {
        let err = parse_color("  bogus  ").unwrap_err();
        assert_eq!(err.to_string(), "invalid color format: 'bogus'");
    }

    #[test]
    fn test_empty_is_error() {
        assert!(parse_color("").is_err());
        assert!(parse_color("   ").is_err());
    }

    #[test]
    fn test_hex_without_hash_is_error() {
        assert!(parse_color("ff0000").is_err());
    }

    #[test]
    fn test_resolved_by() {
        assert_eq!(resolved_by("red"), Some("named"));
        assert_eq!(resolved_by("#000"), Some("named"));
        assert_eq!(resolved_by("1,2,3"), Some("triple"));
        assert_eq!(resolved_by("nope"), None);
    }
}
