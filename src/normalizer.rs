use std::{
    ffi::OsString,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use ::image::DynamicImage;

use crate::{
    error::Error,
    image::{
        channels::{to_three_channels, Conversion},
        format::OutputFormat,
        reader::DecodingImageReader,
        writer::EncodingImageWriter,
        EncodingOptions, ImageReader, ImageWriter,
    },
    Arguments, Result,
};

/// What happened to a single input file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Converted(Conversion),
    Unreadable,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub expanded: usize,
    pub already_conformant: usize,
    pub truncated: usize,
    pub unreadable: usize,
    pub ignored: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Converted(Conversion::Expanded) => self.expanded += 1,
            Outcome::Converted(Conversion::AlreadyConformant) => self.already_conformant += 1,
            Outcome::Converted(Conversion::Truncated) => self.truncated += 1,
            Outcome::Unreadable => self.unreadable += 1,
        }
    }

    /// Number of files written to the output directory.
    pub fn written(&self) -> usize {
        self.expanded + self.already_conformant + self.truncated
    }
}

impl Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} images written ({} expanded, {} already three channel, {} truncated), {} unreadable, {} ignored",
            self.written(),
            self.expanded,
            self.already_conformant,
            self.truncated,
            self.unreadable,
            self.ignored
        )
    }
}

pub struct Normalizer<'a> {
    input_directory: &'a Path,
    output_directory: &'a Path,
    options: EncodingOptions,
}

impl<'a> Normalizer<'a> {
    pub fn new(arguments: &'a Arguments) -> Self {
        Self {
            input_directory: &arguments.input_directory,
            output_directory: &arguments.output_directory,
            options: EncodingOptions::from(arguments),
        }
    }

    pub fn run(&self) -> Result<Summary> {
        create_output_directory(self.output_directory)?;
        let mut summary = Summary::default();
        for (file_name, input_path) in list_input_directory(self.input_directory)? {
            let Some(format) = select(&input_path) else {
                log::debug!("Ignoring {}", input_path.display());
                summary.ignored += 1;
                continue;
            };
            let output_path = self.output_directory.join(&file_name);
            let outcome = self.process_file(&input_path, &output_path, format)?;
            if let Outcome::Converted(conversion) = outcome {
                log::info!("{}: {}", file_name.to_string_lossy(), conversion);
            }
            summary.record(outcome);
        }
        Ok(summary)
    }

    fn process_file(
        &self,
        input_path: &Path,
        output_path: &Path,
        format: OutputFormat,
    ) -> Result<Outcome> {
        let image = match read_image(input_path) {
            Ok(image) => image,
            Err(e) if e.is_unreadable_input() => {
                log::warn!("Skipping unreadable image: {}", e);
                return Ok(Outcome::Unreadable);
            }
            Err(e) => return Err(e),
        };
        let (image, conversion) = to_three_channels(image);
        match conversion {
            Conversion::AlreadyConformant => copy_verbatim(input_path, output_path)?,
            Conversion::Expanded | Conversion::Truncated => {
                write_image(output_path, format, self.options, format.fit(image))?
            }
        }
        Ok(Outcome::Converted(conversion))
    }
}

/// Regular files with an allow-listed extension. Directories never qualify, even
/// when their name ends in `.png`.
fn select(path: &Path) -> Option<OutputFormat> {
    if !path.is_file() {
        return None;
    }
    OutputFormat::from_path(path)
}

/// Directory entries sorted by file name, so runs are reproducible.
fn list_input_directory(directory: &Path) -> Result<Vec<(OsString, PathBuf)>> {
    let to_error = |e| Error::UnableToReadInputDirectory(directory.display().to_string(), e);
    let mut entries = fs::read_dir(directory)
        .map_err(to_error)?
        .map(|entry| entry.map(|entry| (entry.file_name(), entry.path())))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(to_error)?;
    entries.sort();
    Ok(entries)
}

fn create_output_directory(directory: &Path) -> Result<()> {
    fs::create_dir_all(directory)
        .map_err(|e| Error::UnableToCreateOutputDirectory(directory.display().to_string(), e))
}

fn read_image(file_path: &Path) -> Result<DynamicImage> {
    DecodingImageReader::open(file_path)?.read_image()
}

fn write_image(
    file_path: &Path,
    format: OutputFormat,
    options: EncodingOptions,
    image: DynamicImage,
) -> Result<()> {
    EncodingImageWriter::create(file_path, format, options)?.write_image(&image)
}

/// Three channel inputs keep their exact bytes instead of being re-encoded.
fn copy_verbatim(input_path: &Path, output_path: &Path) -> Result<()> {
    if is_same_file(input_path, output_path) {
        return Ok(());
    }
    fs::copy(input_path, output_path)
        .map(|_| ())
        .map_err(|e| Error::UnableToCopyImage(output_path.display().to_string(), e))
}

fn is_same_file(first: &Path, second: &Path) -> bool {
    match (fs::canonicalize(first), fs::canonicalize(second)) {
        (Ok(first), Ok(second)) => first == second,
        _ => false,
    }
}
