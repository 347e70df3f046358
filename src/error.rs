use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    UnableToReadInputDirectory(String, std::io::Error),
    UnableToCreateOutputDirectory(String, std::io::Error),
    UnableToOpenInputFileForReading(String, std::io::Error),
    UnableToOpenOutputFileForWriting(String, std::io::Error),
    UnableToDecodeImage(String, image::ImageError),
    UnableToEncodeImage(String, image::ImageError),
    UnableToCopyImage(String, std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnableToReadInputDirectory(path, error) => {
                write!(f, "Unable to read input directory '{}': {}", path, error)
            }
            Self::UnableToCreateOutputDirectory(path, error) => {
                write!(
                    f,
                    "Unable to create output directory '{}': {}",
                    path, error
                )
            }
            Self::UnableToOpenInputFileForReading(path, error) => {
                write!(
                    f,
                    "Unable to open input file '{}' for reading: {}",
                    path, error
                )
            }
            Self::UnableToOpenOutputFileForWriting(path, error) => {
                write!(
                    f,
                    "Unable to open output file '{}' for writing: {}",
                    path, error
                )
            }
            Self::UnableToDecodeImage(path, error) => {
                write!(f, "Unable to decode image '{}': {}", path, error)
            }
            Self::UnableToEncodeImage(path, error) => {
                write!(f, "Unable to encode image '{}': {}", path, error)
            }
            Self::UnableToCopyImage(path, error) => {
                write!(f, "Unable to copy image to '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::UnableToReadInputDirectory(_, error)
            | Self::UnableToCreateOutputDirectory(_, error)
            | Self::UnableToOpenInputFileForReading(_, error)
            | Self::UnableToOpenOutputFileForWriting(_, error)
            | Self::UnableToCopyImage(_, error) => Some(error),
            Self::UnableToDecodeImage(_, error) | Self::UnableToEncodeImage(_, error) => {
                Some(error)
            }
        }
    }
}

impl Error {
    /// Errors the batch recovers from by skipping the file.
    pub fn is_unreadable_input(&self) -> bool {
        matches!(
            self,
            Self::UnableToDecodeImage(..) | Self::UnableToOpenInputFileForReading(..)
        )
    }
}
