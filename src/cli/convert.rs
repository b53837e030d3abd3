//! Convert command implementation.
//!
//! Decodes an image, recolours its tonal bands and writes the result.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_color;
use crate::recolor::{recolor, BandCounts};
use crate::render::{default_output_path, load_image, save_image, OutputFormat};

use super::{effective_format, ReplacementArgs};

/// Recolour an image and write the result
#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Image to convert
    pub input: PathBuf,

    /// Output file (default: <input>-dark.png next to the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub colours: ReplacementArgs,

    /// Output format (default: from the output file extension)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

pub fn run(args: ConvertArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    convert(&args, settings, printer)?;
    Ok(())
}

impl ConvertArgs {
    /// Output path before extension handling, and the format to write.
    pub fn target(&self, settings: &Settings) -> (PathBuf, Option<OutputFormat>) {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input));
        let format = effective_format(self.format, settings, &output);
        (output, format)
    }
}

/// Run one conversion, returning the path written.
pub fn convert(args: &ConvertArgs, settings: &Settings, printer: &Printer) -> Result<PathBuf> {
    let (white, black) = args.colours.tokens(settings);
    let (output, format) = args.target(settings);

    convert_file(&args.input, &output, &white, &black, format, printer)
}

/// Recolour `input` into `output`.
///
/// Both colour tokens are validated before the input is opened.
pub fn convert_file(
    input: &Path,
    output: &Path,
    white: &str,
    black: &str,
    format: Option<OutputFormat>,
    printer: &Printer,
) -> Result<PathBuf> {
    let white = parse_color(white)?;
    let black = parse_color(black)?;

    let image = load_image(input)?.to_rgba8();
    let counts = BandCounts::of(&image);
    let recoloured = recolor(&image, white, black);
    let written = save_image(&recoloured, output, format)?;

    printer.status(
        "Converted",
        &format!("{} -> {}", display_path(input), display_path(&written)),
    );
    printer.info(
        "Recoloured",
        &format!(
            "{} of {} ({})",
            plural(counts.recoloured(), "pixel", "pixels"),
            counts.total(),
            counts
        ),
    );

    Ok(written)
}
