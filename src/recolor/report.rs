//! Per-band pixel counts.

use std::fmt;

use image::RgbaImage;
use serde::Serialize;

use super::band::{Band, BandRules};
use crate::types::Colour;

/// How many pixels of an image fall in each band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BandCounts {
    pub white: u64,
    pub black: u64,
    pub yellow: u64,
    pub red: u64,
    pub unchanged: u64,
}

impl BandCounts {
    /// Classify every pixel of `image`.
    pub fn of(image: &RgbaImage) -> Self {
        // Targets do not affect classification.
        let rules = BandRules::new(Colour::WHITE, Colour::BLACK);
        let mut counts = Self::default();
        for px in image.pixels() {
            match rules.classify(*px) {
                Some(rule) => *counts.get_mut(rule.band) += 1,
                None => counts.unchanged += 1,
            }
        }
        counts
    }

    pub fn get(&self, band: Band) -> u64 {
        match band {
            Band::White => self.white,
            Band::Black => self.black,
            Band::Yellow => self.yellow,
            Band::Red => self.red,
        }
    }

    fn get_mut(&mut self, band: Band) -> &mut u64 {
        match band {
            Band::White => &mut self.white,
            Band::Black => &mut self.black,
            Band::Yellow => &mut self.yellow,
            Band::Red => &mut self.red,
        }
    }

    /// Number of pixels that will be replaced.
    pub fn recoloured(&self) -> u64 {
        Band::ALL.iter().map(|&band| self.get(band)).sum()
    }

    pub fn total(&self) -> u64 {
        self.recoloured() + self.unchanged
    }
}

impl fmt::Display for BandCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Band::ALL
            .iter()
            .map(|&band| format!("{} {}", self.get(band), band.name()))
            .collect();
        write!(f, "{}, {} unchanged", parts.join(", "), self.unchanged)
    }
}
