//! ezff
//!
//! A small command-line front end that builds and runs ffmpeg commands for
//! common trims.
//!
//! # Usage
//!
//! ```bash
//! ezff trim-start clip.mp4 5
//! ezff trim-end clip.mp4 10 --output short.mp4
//! ezff trim-mid clip.mp4 30 40
//! ezff trim clip.mp4 5 10
//! ```

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use ezff::cli::{commands, Cli};
use ezff::EzffError;

/// Main entry point for the ezff CLI application
fn main() -> ExitCode {
    // clap exits with 2 on bad input; every failure here exits with 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            let code = err
                .downcast_ref::<EzffError>()
                .map(EzffError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
