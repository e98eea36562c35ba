//! CLI module for ezff
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapters::ConfigOverrides;
use crate::domain::model::{TrimMode, TrimRequest};
use crate::utils::logging::{LogFormat, LogLevel};

pub mod args;
pub mod commands;

/// ezff - trim media files with ffmpeg
///
/// Builds the ffmpeg command for a handful of common cuts and runs it.
#[derive(Parser, Debug)]
#[command(name = "ezff")]
#[command(about = "ezff - cut the start, end or middle out of a media file with ffmpeg")]
#[command(version)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Configuration file (default: ./ezff.toml if present)
    #[arg(long, global = true, env = "EZFF_CONFIG")]
    pub config: Option<PathBuf>,

    /// ffmpeg program to run
    #[arg(long, global = true, env = "EZFF_FFMPEG")]
    pub ffmpeg: Option<String>,

    /// ffprobe program used for duration lookups
    #[arg(long, global = true, env = "EZFF_FFPROBE")]
    pub ffprobe: Option<String>,

    /// Suffix for generated output names
    #[arg(long, global = true, env = "EZFF_SUFFIX")]
    pub suffix: Option<String>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "EZFF_LOG_LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Logging format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Print the ffmpeg command instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// With --dry-run, print the plan as JSON
    #[arg(long, global = true, requires = "dry_run")]
    pub json: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove the first <SECONDS> of the input (stream copy)
    TrimStart(args::TrimStartArgs),
    /// Remove the last <SECONDS> of the input (stream copy)
    TrimEnd(args::TrimEndArgs),
    /// Remove the segment between <START_CUT> and <END_CUT> (re-encodes)
    TrimMid(args::TrimMidArgs),
    /// Remove <TRIM_START> from the start and <TRIM_END> from the end (stream copy)
    Trim(args::TrimArgs),
}

impl Cli {
    /// Settings given on the command line or through the environment
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            ffmpeg: self.ffmpeg.clone(),
            ffprobe: self.ffprobe.clone(),
            suffix: self.suffix.clone(),
            log_level: self.log_level,
            log_format: self.log_format,
        }
    }
}

impl Commands {
    /// Build the trim request this command describes
    pub fn to_request(&self) -> TrimRequest {
        match self {
            Commands::TrimStart(args) => TrimRequest::new(
                TrimMode::Start {
                    seconds: args.seconds,
                },
                args.input.clone(),
                args::explicit_output(&args.output),
            ),
            Commands::TrimEnd(args) => TrimRequest::new(
                TrimMode::End {
                    seconds: args.seconds,
                },
                args.input.clone(),
                args::explicit_output(&args.output),
            ),
            Commands::TrimMid(args) => TrimRequest::new(
                TrimMode::Mid {
                    start_cut: args.start_cut,
                    end_cut: args.end_cut,
                },
                args.input.clone(),
                args::explicit_output(&args.output),
            ),
            Commands::Trim(args) => TrimRequest::new(
                TrimMode::BothEnds {
                    trim_start: args.trim_start,
                    trim_end: args.trim_end,
                },
                args.input.clone(),
                args::explicit_output(&args.output),
            ),
        }
    }
}
