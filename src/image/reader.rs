use std::{
    fs::File,
    io::{BufRead, BufReader, Seek},
    path::Path,
};

use image::{DynamicImage, ImageError};

use super::ImageReader;
use crate::Error;

/// Decodes any raster the `image` crate understands. The container is sniffed from the
/// leading bytes, so a PNG named `.jpg` still decodes.
pub struct DecodingImageReader<R: BufRead + Seek> {
    reader: R,
    source: String,
}

impl<R: BufRead + Seek> DecodingImageReader<R> {
    pub fn new(reader: R, source: String) -> Self {
        Self { reader, source }
    }
}

impl DecodingImageReader<BufReader<File>> {
    pub fn open(file_path: &Path) -> crate::Result<Self> {
        let source = file_path.display().to_string();
        let file = File::open(file_path)
            .map_err(|e| Error::UnableToOpenInputFileForReading(source.clone(), e))?;
        Ok(Self::new(BufReader::new(file), source))
    }
}

impl<R: BufRead + Seek> ImageReader for DecodingImageReader<R> {
    fn read_image(&mut self) -> crate::Result<DynamicImage> {
        image::ImageReader::new(&mut self.reader)
            .with_guessed_format()
            .map_err(ImageError::IoError)
            .and_then(|reader| reader.decode())
            .map_err(|e| Error::UnableToDecodeImage(self.source.clone(), e))
    }
}
