//! Bands command implementation.
//!
//! Reports how many pixels of an image each band rule would replace.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{DarkError, Result};
use crate::output::{display_path, Printer};
use crate::recolor::{Band, BandCounts};
use crate::render::load_image;

/// Count the pixels in each tonal band
#[derive(Args, Debug)]
pub struct BandsArgs {
    /// Image to inspect
    #[arg(required = true)]
    pub input: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Band counts for one image.
#[derive(Debug, Clone, Serialize)]
pub struct BandReport {
    pub path: String,
    pub width: u32,
    pub height: u32,
    pub bands: BandCounts,
}

impl BandReport {
    /// Plain-text table, one band per line.
    pub fn table(&self) -> String {
        let mut lines: Vec<String> = Band::ALL
            .iter()
            .map(|&band| format!("{:<10}{:>10}", band.name(), self.bands.get(band)))
            .collect();
        lines.push(format!("{:<10}{:>10}", "unchanged", self.bands.unchanged));
        lines.join("\n")
    }
}

pub fn run(args: BandsArgs, printer: &Printer) -> Result<()> {
    let report = inspect(&args.input)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| DarkError::Parse {
            message: format!("Failed to serialise report: {}", e),
            help: None,
        })?;
        println!("{}", json);
    } else {
        printer.status(
            "Inspected",
            &format!("{} ({}x{})", report.path, report.width, report.height),
        );
        println!("{}", report.table());
    }

    Ok(())
}

/// Decode `input` and count its bands.
pub fn inspect(input: &std::path::Path) -> Result<BandReport> {
    let image = load_image(input)?.to_rgba8();
    Ok(BandReport {
        path: display_path(input),
        width: image.width(),
        height: image.height(),
        bands: BandCounts::of(&image),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_inspect() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("two.png");
        RgbaImage::from_fn(2, 1, |x, _| {
            if x == 0 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([128, 128, 128, 255])
            }
        })
        .save(&path)
        .unwrap();

        let report = inspect(&path).unwrap();
        assert_eq!((report.width, report.height), (2, 1));
        assert_eq!(report.bands.black, 1);
        assert_eq!(report.bands.unchanged, 1);
    }

    #[test]
    fn test_json_report() {
        let report = BandReport {
            path: "icon.png".to_string(),
            width: 2,
            height: 1,
            bands: BandCounts {
                white: 1,
                black: 0,
                yellow: 0,
                red: 1,
                unchanged: 0,
            },
        };

        insta::assert_json_snapshot!(report, @r#"
        {
          "path": "icon.png",
          "width": 2,
          "height": 1,
          "bands": {
            "white": 1,
            "black": 0,
            "yellow": 0,
            "red": 1,
            "unchanged": 0
          }
        }
        "#);
    }

    #[test]
    fn test_table() {
        let report = BandReport {
            path: "icon.png".to_string(),
            width: 4,
            height: 1,
            bands: BandCounts {
                white: 1,
                black: 1,
                yellow: 1,
                red: 0,
                unchanged: 1,
            },
        };

        insta::assert_snapshot!(report.table(), @r"
        white              1
        black              1
        yellow             1
        red                0
        unchanged          1
        ");
    }
}
