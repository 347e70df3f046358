use ::image::DynamicImage;

use crate::Arguments;

pub mod channels;
pub mod format;
pub mod reader;
pub mod writer;

pub trait ImageReader {
    fn read_image(&mut self) -> crate::Result<DynamicImage>;
}

pub trait ImageWriter {
    fn write_image(&mut self, image: &DynamicImage) -> crate::Result<()>;
}

/// Encoder settings shared by every image written in one batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EncodingOptions {
    pub jpeg_quality: u8,
}

pub const DEFAULT_JPEG_QUALITY: u8 = 95;

impl Default for EncodingOptions {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl From<&Arguments> for EncodingOptions {
    fn from(value: &Arguments) -> Self {
        Self {
            jpeg_quality: value.jpeg_quality,
        }
    }
}
