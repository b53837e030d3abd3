//! Decoding source images and encoding recoloured output.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::{DynamicImage, ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{DarkError, Result};

/// Formats darkicon can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    #[value(alias = "jpg")]
    #[serde(alias = "jpg")]
    Jpeg,
    Bmp,
    #[value(alias = "tif")]
    #[serde(alias = "tif")]
    Tiff,
    Gif,
}

impl OutputFormat {
    /// Match a file extension, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "bmp" => Some(Self::Bmp),
            "tif" | "tiff" => Some(Self::Tiff),
            "gif" => Some(Self::Gif),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Bmp => "bmp",
            Self::Tiff => "tiff",
            Self::Gif => "gif",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Bmp => ImageFormat::Bmp,
            Self::Tiff => ImageFormat::Tiff,
            Self::Gif => ImageFormat::Gif,
        }
    }

    /// JPEG has no alpha channel.
    pub fn supports_alpha(self) -> bool {
        !matches!(self, Self::Jpeg)
    }
}

/// Decode an image file.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| DarkError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Work out the final output path and format.
///
/// An explicit `format` wins over the extension. A path without an extension
/// gets one appended, `.png` unless a format was given.
pub fn resolve_output(path: &Path, format: Option<OutputFormat>) -> Result<(PathBuf, OutputFormat)> {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        let format = format.unwrap_or(OutputFormat::Png);
        return Ok((path.with_extension(format.extension()), format));
    };

    if let Some(format) = format {
        return Ok((path.to_path_buf(), format));
    }

    OutputFormat::from_extension(ext)
        .map(|format| (path.to_path_buf(), format))
        .ok_or_else(|| DarkError::Encode {
            path: path.to_path_buf(),
            message: format!("unsupported output format '.{}'", ext),
            help: Some("Use .png, .jpg, .bmp, .tiff or .gif, or pass --format".to_string()),
        })
}

/// Encode `image` to `path`, returning the path actually written.
pub fn save_image(image: &RgbaImage, path: &Path, format: Option<OutputFormat>) -> Result<PathBuf> {
    let (path, format) = resolve_output(path, format)?;

    let written = if format.supports_alpha() {
        image.save_with_format(&path, format.image_format())
    } else {
        DynamicImage::ImageRgba8(image.clone())
            .into_rgb8()
            .save_with_format(&path, format.image_format())
    };

    written.map_err(|e| DarkError::Encode {
        path: path.clone(),
        message: e.to_string(),
        help: None,
    })?;

    Ok(path)
}

/// `icon.png` -> `icon-dark.png`, next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{}-dark.png", stem))
}
