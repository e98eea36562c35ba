// Domain models - Core types and data structures

use serde::Serialize;
use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;

#[cfg(test)]
mod tests;

/// A trim operation together with its numeric parameters, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrimMode {
    /// Drop the first `seconds` of the file
    Start { seconds: f64 },
    /// Drop the last `seconds` of the file
    End { seconds: f64 },
    /// Drop the window `[start_cut, end_cut]` and join what is left
    Mid { start_cut: f64, end_cut: f64 },
    /// Drop `trim_start` from the head and `trim_end` from the tail
    BothEnds { trim_start: f64, trim_end: f64 },
}

impl TrimMode {
    /// Command-line verb selecting this mode
    pub fn verb(&self) -> &'static str {
        match self {
            TrimMode::Start { .. } => "trim-start",
            TrimMode::End { .. } => "trim-end",
            TrimMode::Mid { .. } => "trim-mid",
            TrimMode::BothEnds { .. } => "trim",
        }
    }

    /// Whether planning needs the probed duration of the input
    pub fn requires_duration(&self) -> bool {
        matches!(self, TrimMode::End { .. } | TrimMode::BothEnds { .. })
    }

    /// Parameters in command-line order
    pub fn parameters(&self) -> Vec<f64> {
        match *self {
            TrimMode::Start { seconds } | TrimMode::End { seconds } => vec![seconds],
            TrimMode::Mid { start_cut, end_cut } => vec![start_cut, end_cut],
            TrimMode::BothEnds {
                trim_start,
                trim_end,
            } => vec![trim_start, trim_end],
        }
    }
}

impl fmt::Display for TrimMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.verb())?;
        for value in self.parameters() {
            write!(f, " {}", value)?;
        }
        Ok(())
    }
}

/// One invocation's worth of trimming work
#[derive(Debug, Clone, PartialEq)]
pub struct TrimRequest {
    pub mode: TrimMode,
    pub input: PathBuf,
    /// Caller-chosen output; trusted verbatim when present
    pub output: Option<PathBuf>,
}

impl TrimRequest {
    /// Create a new trim request
    pub fn new(mode: TrimMode, input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        Self {
            mode,
            input: input.into(),
            output,
        }
    }
}

/// A validated trim with every time value resolved against the duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Cut {
    /// Seek past the head, copy the rest
    Start { seek: f64 },
    /// Copy the first `length` seconds
    End { length: f64 },
    /// Filter out `[start, end]` and re-time the remainder
    Mid { start: f64, end: f64 },
    /// Seek past the head, then copy `length` seconds
    BothEnds { seek: f64, length: f64 },
}

/// A single run of an external program
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalCommand {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// File the command writes
    pub output: PathBuf,
    pub cut: Cut,
}

/// Serializable view of an [`ExternalCommand`], used for `--dry-run --json`
#[derive(Debug, Clone, Serialize)]
pub struct CommandReport {
    pub program: String,
    pub args: Vec<String>,
    pub output: String,
    pub cut: Cut,
}

impl ExternalCommand {
    /// Lossy UTF-8 view of the command for reporting
    pub fn report(&self) -> CommandReport {
        CommandReport {
            program: self.program.to_string_lossy().into_owned(),
            args: self
                .args
                .iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect(),
            output: self.output.to_string_lossy().into_owned(),
            cut: self.cut,
        }
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program.to_string_lossy()))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(&arg.to_string_lossy()))?;
        }
        Ok(())
    }
}

/// Quote an argument for copy-pasting into a POSIX shell
pub fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}
