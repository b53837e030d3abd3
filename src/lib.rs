//! darkicon - Dark mode recolouring for icons
//!
//! A library for producing dark mode variants of icon-like images by
//! replacing near-white, near-black, yellow-ish and red-ish pixels with
//! fixed colours.

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod recolor;
pub mod render;
pub mod types;

pub use config::Settings;
pub use error::{DarkError, Result};
pub use parser::{parse_color, ColourResolver};
pub use recolor::{process_image, recolor, recolor_dynamic, Band, BandCounts, BandRule, BandRules};
pub use render::{load_image, preview, save_image, OutputFormat};
pub use types::Colour;
