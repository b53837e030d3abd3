//! Tonal bands and their replacement rules.

use image::Rgba;
use serde::Serialize;

use crate::types::Colour;

/// Factor applied to the built-in yellow and red targets.
pub const DARKEN_FACTOR: f64 = 0.6;

/// Light yellow, darkened to produce the yellow band target.
pub const YELLOW_BASE: Colour = Colour::rgb(255, 255, 153);

/// Light red, darkened to produce the red band target.
pub const RED_BASE: Colour = Colour::rgb(255, 102, 102);

/// A region of RGB space that gets a single replacement colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Band {
    White,
    Black,
    Yellow,
    Red,
}

impl Band {
    /// All bands in evaluation order.
    pub const ALL: [Band; 4] = [Band::White, Band::Black, Band::Yellow, Band::Red];

    /// Whether the original `r`, `g`, `b` channels fall in this band.
    pub fn matches(self, r: u8, g: u8, b: u8) -> bool {
        let white = r > 250 && g > 250 && b > 250;
        match self {
            Band::White => white,
            Band::Black => r < 10 && g < 10 && b < 10,
            Band::Yellow => r > 230 && g > 230 && b < 180 && !white,
            Band::Red => r > 230 && g < 180 && b < 180,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Band::White => "white",
            Band::Black => "black",
            Band::Yellow => "yellow",
            Band::Red => "red",
        }
    }
}

/// A band paired with the colour its pixels become.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandRule {
    pub band: Band,
    pub target: Colour,
}

/// The ordered rule list: white, black, yellow, red.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandRules {
    rules: [BandRule; 4],
}

impl BandRules {
    /// Rules replacing the white band with `white` and the black band with
    /// `black`. Yellow and red use the built-in darkened targets.
    pub fn new(white: Colour, black: Colour) -> Self {
        Self {
            rules: [
                BandRule { band: Band::White, target: white },
                BandRule { band: Band::Black, target: black },
                BandRule {
                    band: Band::Yellow,
                    target: YELLOW_BASE.darken(DARKEN_FACTOR),
                },
                BandRule {
                    band: Band::Red,
                    target: RED_BASE.darken(DARKEN_FACTOR),
                },
            ],
        }
    }

    pub fn rules(&self) -> &[BandRule] {
        &self.rules
    }

    /// Target colour for `band`.
    pub fn target(&self, band: Band) -> Colour {
        self.rules
            .iter()
            .find(|rule| rule.band == band)
            .map_or(Colour::BLACK, |rule| rule.target)
    }

    /// The rule that decides a pixel's output.
    ///
    /// Every predicate reads the original channels and the last matching rule
    /// in list order wins.
    pub fn classify(&self, px: Rgba<u8>) -> Option<&BandRule> {
        let [r, g, b, _] = px.0;
        self.rules.iter().fold(None, |hit, rule| {
            if rule.band.matches(r, g, b) {
                Some(rule)
            } else {
                hit
            }
        })
    }

    /// Output pixel for `px`. Unmatched pixels are returned unchanged.
    pub fn apply(&self, px: Rgba<u8>) -> Rgba<u8> {
        self.classify(px).map_or(px, |rule| rule.target.into())
    }
}
