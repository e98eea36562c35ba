//! FFmpeg execution adapter
//!
//! Spawns the processing binary with inherited stdin/stdout/stderr and waits
//! for it to finish.

use std::ffi::{OsStr, OsString};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::model::ExternalCommand;
use crate::error::{EzffError, EzffResult};
use crate::ports::ExecutePort;

/// FFmpeg-based execution adapter
pub struct FFmpegAdapter {
    program: OsString,
}

impl FFmpegAdapter {
    /// Create a new adapter for `program`
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl ExecutePort for FFmpegAdapter {
    fn program(&self) -> &OsStr {
        &self.program
    }

    fn check_available(&self) -> EzffResult<String> {
        let program = self.program.to_string_lossy().into_owned();
        let output = Command::new(&self.program)
            .arg("-version")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| EzffError::Execution {
                program: program.clone(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(EzffError::Execution {
                program,
                message: output.status.to_string(),
            });
        }

        let banner = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .to_string();
        debug!("Found {}", banner);
        Ok(banner)
    }

    fn execute(&self, command: &ExternalCommand) -> EzffResult<()> {
        let program = self.program.to_string_lossy().into_owned();
        info!("Running: {}", command);

        let status = Command::new(&self.program)
            .args(&command.args)
            .status()
            .map_err(|e| EzffError::Execution {
                program: program.clone(),
                message: e.to_string(),
            })?;

        if !status.success() {
            return Err(EzffError::Execution {
                program,
                message: status.to_string(),
            });
        }

        info!("Wrote {}", command.output.display());
        Ok(())
    }
}
