use std::path::Path;

use image::{DynamicImage, ImageFormat};

/// Container formats the normalizer reads and writes, keyed by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Jpeg,
    Png,
    Bmp,
    Tiff,
}

pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif"];

impl OutputFormat {
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "bmp" => Some(Self::Bmp),
            "tiff" | "tif" => Some(Self::Tiff),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|extension| extension.to_str())
            .and_then(Self::from_extension)
    }

    pub fn image_format(&self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Bmp => ImageFormat::Bmp,
            Self::Tiff => ImageFormat::Tiff,
        }
    }

    /// Narrows the sample type to the widest one the container can store.
    /// The channel count is left untouched.
    pub fn fit(&self, image: DynamicImage) -> DynamicImage {
        match (*self, image) {
            (Self::Jpeg | Self::Bmp, image @ DynamicImage::ImageRgb8(_)) => image,
            (Self::Jpeg | Self::Bmp, image) => DynamicImage::ImageRgb8(image.to_rgb8()),
            (Self::Png, image @ DynamicImage::ImageRgb32F(_)) => {
                DynamicImage::ImageRgb16(image.to_rgb16())
            }
            (_, image) => image,
        }
    }
}
