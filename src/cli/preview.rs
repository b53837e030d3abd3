//! Preview command implementation.
//!
//! Writes a small recoloured thumbnail for a quick look at the result.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Settings;
use crate::error::Result;
use crate::output::{display_path, Printer};
use crate::parser::parse_color;
use crate::recolor::recolor_dynamic;
use crate::render::{load_image, preview, save_image};

use super::ReplacementArgs;

/// Write a recoloured thumbnail
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Image to preview
    pub input: PathBuf,

    /// Output file (default: <input>-preview.png next to the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub colours: ReplacementArgs,

    /// Longest side of the thumbnail in pixels
    #[arg(long)]
    pub size: Option<u32>,
}

pub fn run(args: PreviewArgs, settings: &Settings, printer: &Printer) -> Result<()> {
    let (white, black) = args.colours.tokens(settings);
    let size = args.size.unwrap_or(settings.preview_size);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| preview_output_path(&args.input));

    let white = parse_color(&white)?;
    let black = parse_color(&black)?;

    let image = load_image(&args.input)?;
    let recoloured = recolor_dynamic(&image, white, black);
    let thumb = preview(&recoloured, size);
    let written = save_image(&thumb, &output, None)?;

    printer.status(
        "Previewed",
        &format!(
            "{} -> {} ({}x{})",
            display_path(&args.input),
            display_path(&written),
            thumb.width(),
            thumb.height()
        ),
    );

    Ok(())
}

/// `icon.png` -> `icon-preview.png`, next to the input.
fn preview_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}-preview.png", stem))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DarkError;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn test_preview_output_path() {
        assert_eq!(
            preview_output_path(Path::new("a/b.gif")),
            PathBuf::from("a/b-preview.png")
        );
    }

    #[test]
    fn test_preview_writes_thumbnail() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("big.png");
        RgbaImage::from_pixel(64, 32, Rgba([255, 255, 255, 255]))
            .save(&input)
            .unwrap();

        let args = PreviewArgs {
            input,
            output: None,
            colours: ReplacementArgs::default(),
            size: Some(16),
        };
        run(args, &Settings::default(), &Printer::quiet()).unwrap();

        let thumb = image::open(dir.path().join("big-preview.png"))
            .unwrap()
            .to_rgba8();
        assert_eq!(thumb.dimensions(), (16, 8));
    }

    #[test]
    fn test_preview_bad_colour_fails_before_decode() {
        let dir = tempdir().unwrap();
        let args = PreviewArgs {
            input: dir.path().join("missing.png"),
            output: None,
            colours: ReplacementArgs {
                white: Some("not_a_color".to_string()),
                black: None,
            },
            size: None,
        };

        let err = run(args, &Settings::default(), &Printer::quiet()).unwrap_err();
        assert!(matches!(err, DarkError::ColourParse { .. }));
    }
}
