//! FFprobe adapter for media duration lookup
//!
//! Runs `ffprobe` asking only for the container duration, printed as a bare
//! number, and parses what comes back.

use std::ffi::{OsStr, OsString};
use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::{EzffError, EzffResult};
use crate::ports::ProbePort;

const DURATION_FLAGS: [&str; 6] = [
    "-v",
    "quiet",
    "-show_entries",
    "format=duration",
    "-of",
    "csv=p=0",
];

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: OsString,
}

impl FFprobeAdapter {
    /// Create a new adapter running `program`
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments requesting the container duration with no header or key
    pub fn duration_args(input: &Path) -> Vec<&OsStr> {
        let mut args: Vec<&OsStr> = DURATION_FLAGS.iter().map(|flag| OsStr::new(*flag)).collect();
        args.push(input.as_os_str());
        args
    }
}

impl ProbePort for FFprobeAdapter {
    fn probe_duration(&self, input: &Path) -> EzffResult<f64> {
        let program = self.program.to_string_lossy();
        debug!("Probing duration of {} with {}", input.display(), program);

        let output = Command::new(&self.program)
            .args(Self::duration_args(input))
            .output()
            .map_err(|e| EzffError::probe(format!("failed to run {}: {}", program, e)))?;

        if !output.status.success() {
            return Err(EzffError::probe(format!("{} exited with {}", program, output.status)));
        }

        let duration = parse_duration(&String::from_utf8_lossy(&output.stdout))?;
        debug!("Probed duration: {:.6}s", duration);
        Ok(duration)
    }
}

/// Parse ffprobe's textual duration
pub fn parse_duration(stdout: &str) -> EzffResult<f64> {
    let text = stdout.trim();
    let duration: f64 = text
        .parse()
        .map_err(|_| EzffError::probe(format!("unexpected ffprobe output '{}'", text)))?;
    if !duration.is_finite() || duration < 0.0 {
        return Err(EzffError::probe(format!("invalid duration '{}'", text)));
    }
    Ok(duration)
}
