use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Seek, Write},
    path::Path,
};

use image::{codecs::jpeg::JpegEncoder, DynamicImage, ImageError};

use super::{format::OutputFormat, EncodingOptions, ImageWriter};
use crate::Error;

pub struct EncodingImageWriter<W: Write + Seek> {
    writer: W,
    format: OutputFormat,
    options: EncodingOptions,
    destination: String,
}

impl<W: Write + Seek> EncodingImageWriter<W> {
    pub fn new(
        writer: W,
        format: OutputFormat,
        options: EncodingOptions,
        destination: String,
    ) -> Self {
        Self {
            writer,
            format,
            options,
            destination,
        }
    }

    fn encode(&mut self, image: &DynamicImage) -> image::ImageResult<()> {
        match self.format {
            OutputFormat::Jpeg => image.write_with_encoder(JpegEncoder::new_with_quality(
                &mut self.writer,
                self.options.jpeg_quality,
            )),
            format => image.write_to(&mut self.writer, format.image_format()),
        }
    }
}

impl EncodingImageWriter<BufWriter<File>> {
    pub fn create(
        file_path: &Path,
        format: OutputFormat,
        options: EncodingOptions,
    ) -> crate::Result<Self> {
        let destination = file_path.display().to_string();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(file_path)
            .map_err(|e| Error::UnableToOpenOutputFileForWriting(destination.clone(), e))?;
        Ok(Self::new(BufWriter::new(file), format, options, destination))
    }
}

impl<W: Write + Seek> ImageWriter for EncodingImageWriter<W> {
    fn write_image(&mut self, image: &DynamicImage) -> crate::Result<()> {
        self.encode(image)
            .and_then(|_| self.writer.flush().map_err(ImageError::IoError))
            .map_err(|e| Error::UnableToEncodeImage(self.destination.clone(), e))
    }
}
