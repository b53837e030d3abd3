pub mod bands;
pub mod colour;
pub mod completions;
pub mod convert;
pub mod init;
pub mod preview;
pub mod watch;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::config::Settings;
use crate::error::Result;
use crate::render::OutputFormat;

/// darkicon - Recolour icons into dark mode variants
#[derive(Parser, Debug)]
#[command(name = "darkicon")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (default: ./darkicon.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Suppress status output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recolour an image and write the result
    Convert(convert::ConvertArgs),

    /// Write a recoloured thumbnail
    Preview(preview::PreviewArgs),

    /// Re-convert an image every time it changes
    Watch(watch::WatchArgs),

    /// Resolve colour tokens and print them
    #[command(alias = "color")]
    Colour(colour::ColourArgs),

    /// Count the pixels in each tonal band
    Bands(bands::BandsArgs),

    /// Write a darkicon.yaml with the default settings
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Replacement colours shared by the image commands.
#[derive(Args, Debug, Clone, Default)]
pub struct ReplacementArgs {
    /// Colour for near-white pixels (name, hex, or R,G,B)
    #[arg(long, short = 'W')]
    pub white: Option<String>,

    /// Colour for near-black pixels (name, hex, or R,G,B)
    #[arg(long, short = 'B')]
    pub black: Option<String>,
}

impl ReplacementArgs {
    /// Colour tokens to use: flags first, then settings.
    pub fn tokens(&self, settings: &Settings) -> (String, String) {
        (
            self.white.clone().unwrap_or_else(|| settings.white.clone()),
            self.black.clone().unwrap_or_else(|| settings.black.clone()),
        )
    }
}

/// Load the settings named by `--config`, or discover them in the working
/// directory.
pub fn load_settings(config: Option<&Path>) -> Result<Settings> {
    match config {
        Some(path) => Settings::load(path),
        None => Settings::discover(Path::new(".")),
    }
}

/// An explicit `--format` always applies; the settings format only fills in
/// for an output path without an extension.
pub fn effective_format(
    explicit: Option<OutputFormat>,
    settings: &Settings,
    output: &Path,
) -> Option<OutputFormat> {
    explicit.or_else(|| {
        if output.extension().is_none() {
            settings.format
        } else {
            None
        }
    })
}
