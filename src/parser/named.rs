//! Colour names, hex literals and functional notation.

use crate::types::Colour;

use super::functional;
use super::ColourResolver;

/// Resolves the vocabulary of a CSS colour value: `#hex`, `rgb(...)`,
/// `hsl(...)` and friends, and the named colour table.
///
/// Matching is case-insensitive.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamedOrHex;

impl ColourResolver for NamedOrHex {
    fn name(&self) -> &'static str {
        "named"
    }

    fn resolve(&self, text: &str) -> Option<Colour> {
        if text.starts_with('#') {
            return Colour::from_hex(text).ok();
        }

        let lower = text.to_ascii_lowercase();
        if lower.ends_with(')') {
            return functional::parse(&lower);
        }

        lookup_name(&lower)
    }
}

/// Look up a colour by its CSS/X11 name.
fn lookup_name(name: &str) -> Option<Colour> {
    palette::named::from_str(name).map(|c| Colour::rgb(c.red, c.green, c.blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_are_case_insensitive() {
        let r = NamedOrHex;
        assert_eq!(r.resolve("CornflowerBlue"), Some(Colour::rgb(100, 149, 237)));
        assert_eq!(r.resolve("GRAY"), Some(Colour::rgb(128, 128, 128)));
    }

    #[test]
    fn test_hex_routed_first() {
        assert_eq!(NamedOrHex.resolve("#0f0"), Some(Colour::rgb(0, 255, 0)));
        assert_eq!(NamedOrHex.resolve("#0f"), None);
    }

    #[test]
    fn test_functional_routed() {
        assert_eq!(NamedOrHex.resolve("RGB(1, 2, 3)"), Some(Colour::rgb(1, 2, 3)));
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(NamedOrHex.resolve("not_a_color"), None);
        assert_eq!(NamedOrHex.resolve("1,2,3"), None);
    }
}
