use std::path::Path;

use image::{DynamicImage, ImageError, ImageFormat};

use crate::error::CoverError;
use crate::extract::PixelBuffer;
use crate::naming;

/// Encoders that accept an 8-bit RGBA page of any size.
const WRITABLE: &[ImageFormat] = &[
    ImageFormat::Png,
    ImageFormat::Jpeg,
    ImageFormat::Bmp,
    ImageFormat::Gif,
    ImageFormat::Tiff,
    ImageFormat::Tga,
    ImageFormat::Pnm,
    ImageFormat::Qoi,
];

/// The `--ext` value together with the encoder it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFormat {
    extension: String,
    format: ImageFormat,
}

impl OutputFormat {
    pub fn from_extension(raw: &str) -> Result<Self, CoverError> {
        let unsupported = || CoverError::UnsupportedFormat(raw.to_string());
        let extension = naming::normalize_extension(raw).ok_or_else(unsupported)?;
        let format = ImageFormat::from_extension(&extension)
            .filter(|f| WRITABLE.contains(f))
            .ok_or_else(unsupported)?;
        Ok(Self { extension, format })
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn image_format(&self) -> ImageFormat {
        self.format
    }

    pub fn write(&self, buffer: &PixelBuffer, path: &Path) -> Result<(), CoverError> {
        let image = DynamicImage::ImageRgba8(buffer.clone());
        let image = match self.format {
            // no alpha channel in these
            ImageFormat::Jpeg | ImageFormat::Pnm => DynamicImage::ImageRgb8(image.to_rgb8()),
            _ => image,
        };

        image
            .save_with_format(path, self.format)
            .map_err(|e| match e {
                ImageError::IoError(source) => CoverError::filesystem("write", path, source),
                other => CoverError::Encode {
                    path: path.to_path_buf(),
                    source: other,
                },
            })
    }
}
