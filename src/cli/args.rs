//! Command-line argument definitions

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Args;
use std::path::PathBuf;

use crate::utils::time::parse_time;

/// `--output` parser. Unlike clap's default path parser it lets an empty
/// value through; [`explicit_output`] then treats it as not given.
fn output_path() -> impl TypedValueParser<Value = PathBuf> + Send + Sync + 'static {
    OsStringValueParser::new().map(PathBuf::from)
}

/// The explicit output, ignoring an empty `--output ""`
pub fn explicit_output(output: &Option<PathBuf>) -> Option<PathBuf> {
    output
        .as_ref()
        .filter(|path| !path.as_os_str().is_empty())
        .cloned()
}

/// Arguments for the trim-start command
#[derive(Args, Debug)]
pub struct TrimStartArgs {
    /// Input media file
    pub input: PathBuf,

    /// Seconds to remove from the start (seconds, MM:SS.ms or HH:MM:SS.ms)
    #[arg(value_parser = parse_time, allow_negative_numbers = true)]
    pub seconds: f64,

    /// Output file path (default: <input>_trim.<ext>, numbered if taken)
    #[arg(short, long, value_parser = output_path())]
    pub output: Option<PathBuf>,
}

/// Arguments for the trim-end command
#[derive(Args, Debug)]
pub struct TrimEndArgs {
    /// Input media file
    pub input: PathBuf,

    /// Seconds to remove from the end
    #[arg(value_parser = parse_time, allow_negative_numbers = true)]
    pub seconds: f64,

    /// Output file path (default: <input>_trim.<ext>, numbered if taken)
    #[arg(short, long, value_parser = output_path())]
    pub output: Option<PathBuf>,
}

/// Arguments for the trim-mid command
#[derive(Args, Debug)]
pub struct TrimMidArgs {
    /// Input media file
    pub input: PathBuf,

    /// Start of the segment to remove
    #[arg(value_parser = parse_time, allow_negative_numbers = true)]
    pub start_cut: f64,

    /// End of the segment to remove
    #[arg(value_parser = parse_time, allow_negative_numbers = true)]
    pub end_cut: f64,

    /// Output file path (default: <input>_trim.<ext>, numbered if taken)
    #[arg(short, long, value_parser = output_path())]
    pub output: Option<PathBuf>,
}

/// Arguments for the trim command
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Input media file
    pub input: PathBuf,

    /// Seconds to remove from the start
    #[arg(value_parser = parse_time, allow_negative_numbers = true)]
    pub trim_start: f64,

    /// Seconds to remove from the end
    #[arg(value_parser = parse_time, allow_negative_numbers = true)]
    pub trim_end: f64,

    /// Output file path (default: <input>_trim.<ext>, numbered if taken)
    #[arg(short, long, value_parser = output_path())]
    pub output: Option<PathBuf>,
}
