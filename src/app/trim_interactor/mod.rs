// Trim interactor - Orchestrates the trim use case

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::model::{ExternalCommand, TrimRequest};
use crate::error::EzffResult;
use crate::planner::CommandPlanner;
use crate::ports::{ExecutePort, FsPort, ProbePort};

/// Interactor for the trim use case
pub struct TrimInteractor {
    probe_port: Arc<dyn ProbePort>,
    execute_port: Arc<dyn ExecutePort>,
    fs_port: Arc<dyn FsPort>,
    suffix: String,
}

impl TrimInteractor {
    /// Create new trim interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        execute_port: Arc<dyn ExecutePort>,
        fs_port: Arc<dyn FsPort>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            probe_port,
            execute_port,
            fs_port,
            suffix: suffix.into(),
        }
    }

    /// One-time availability check of the processing binary.
    ///
    /// The result is returned to the caller; whether a failure aborts is
    /// their decision.
    pub fn startup_check(&self) -> EzffResult<String> {
        self.execute_port.check_available()
    }

    /// Like [`TrimInteractor::startup_check`], but only logs the failure.
    ///
    /// Returns whether the binary could be started.
    pub fn warn_if_unavailable(&self) -> bool {
        match self.startup_check() {
            Ok(_) => true,
            Err(e) => {
                warn!("ffmpeg availability check failed: {}", e);
                false
            }
        }
    }

    /// Plan without running anything
    pub fn plan(&self, request: &TrimRequest) -> EzffResult<ExternalCommand> {
        CommandPlanner::new(
            self.probe_port.as_ref(),
            self.fs_port.as_ref(),
            self.execute_port.program(),
            self.suffix.clone(),
        )
        .plan(request)
    }

    /// Plan and run the trim. The processing binary is only started once
    /// planning has fully succeeded.
    pub fn execute(&self, request: &TrimRequest) -> EzffResult<ExternalCommand> {
        let command = self.plan(request)?;
        self.execute_port.execute(&command)?;
        info!("{} finished: {}", request.mode.verb(), command.output.display());
        Ok(command)
    }
}
