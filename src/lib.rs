use std::path::PathBuf;

pub use cli::CLIParser;
pub use error::Error;
pub use normalizer::{Normalizer, Outcome, Summary};

mod cli;
mod error;
pub mod image;
mod logger;
pub mod normalizer;

pub type Result<T> = std::result::Result<T, error::Error>;

pub struct Arguments {
    input_directory: PathBuf,
    output_directory: PathBuf,
    jpeg_quality: u8,
}

/// Writes a three channel copy of every allow-listed image in the input directory
/// to the output directory. Unreadable images are skipped.
pub fn normalize_directory(arguments: &Arguments) -> Result<Summary> {
    log::info!(
        "Normalizing images from '{}' into '{}'",
        arguments.input_directory.display(),
        arguments.output_directory.display()
    );
    Normalizer::new(arguments).run()
}
