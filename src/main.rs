use std::env::args_os;
use std::process::ExitCode;

use channel_normalizer::{normalize_directory, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match normalize_directory(&arguments) {
        Ok(summary) => {
            println!("Normalization finished: {}", summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Normalization failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
