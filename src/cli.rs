use crate::image::DEFAULT_JPEG_QUALITY;
use crate::Arguments;
use clap::{
    arg, crate_authors, crate_description, crate_name, crate_version, value_parser, Arg,
    ArgMatches, Command,
};
use std::ffi::OsString;
use std::path::PathBuf;

pub struct CLIParser {
    command: Command,
}

impl CLIParser {
    pub fn new() -> Self {
        let command = Self::create_base_command();
        let command = Self::register_arguments(command);
        CLIParser { command }
    }

    pub fn parse<I, T>(&mut self, itr: I) -> Arguments
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self
            .command
            .try_get_matches_from_mut(itr)
            .unwrap_or_else(|e| e.exit());
        Self::extract_arguments(&matches)
    }

    fn register_arguments(command: Command) -> Command {
        let command = Self::register_input_directory_argument(command);
        let command = Self::register_output_directory_argument(command);
        Self::register_quality_argument(command)
    }

    fn register_input_directory_argument(command: Command) -> Command {
        command.arg(Self::create_input_directory_argument())
    }

    fn register_output_directory_argument(command: Command) -> Command {
        command.arg(Self::create_output_directory_argument())
    }

    fn register_quality_argument(command: Command) -> Command {
        command.arg(Self::create_quality_argument())
    }

    fn create_base_command() -> Command {
        Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
    }

    fn create_input_directory_argument() -> Arg {
        Arg::new("input_directory")
            .help("Directory containing the images to normalize")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_output_directory_argument() -> Arg {
        Arg::new("output_directory")
            .help("Directory receiving the three channel images, created if absent")
            .value_parser(value_parser!(PathBuf))
            .required(true)
    }

    fn create_quality_argument() -> Arg {
        arg!(quality: -q --quality <QUALITY> "JPEG encoding quality")
            .default_value(DEFAULT_JPEG_QUALITY.to_string())
            .value_parser(value_parser!(u8).range(1..=100))
    }

    fn extract_arguments(matches: &ArgMatches) -> Arguments {
        Arguments {
            input_directory: Self::extract_input_directory_argument(matches),
            output_directory: Self::extract_output_directory_argument(matches),
            jpeg_quality: Self::extract_quality_argument(matches),
        }
    }

    fn extract_input_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("input_directory")
            .expect("Required argument input_directory not provided")
            .clone()
    }

    fn extract_output_directory_argument(matches: &ArgMatches) -> PathBuf {
        matches
            .get_one::<PathBuf>("output_directory")
            .expect("Required argument output_directory not provided")
            .clone()
    }

    fn extract_quality_argument(matches: &ArgMatches) -> u8 {
        matches
            .get_one::<u8>("quality")
            .expect("Quality must be provided, but was unset.")
            .to_owned()
    }
}

impl Default for CLIParser {
    fn default() -> Self {
        Self::new()
    }
}
