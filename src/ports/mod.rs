// Ports - Interface definitions (contracts)

use std::ffi::OsStr;
use std::path::Path;

use crate::domain::model::ExternalCommand;
use crate::error::EzffResult;

/// Port for media duration lookup
pub trait ProbePort: Send + Sync {
    /// Total playback length of the container, in seconds
    fn probe_duration(&self, input: &Path) -> EzffResult<f64>;
}

/// Port for running the media-processing binary
pub trait ExecutePort: Send + Sync {
    /// The binary this port runs
    fn program(&self) -> &OsStr;

    /// Check that the processing binary can be started at all.
    ///
    /// Returns the first line of its version banner.
    fn check_available(&self) -> EzffResult<String>;

    /// Run [`ExecutePort::program`] with the command's arguments to
    /// completion, with inherited standard streams
    fn execute(&self, command: &ExternalCommand) -> EzffResult<()>;
}

/// Port for the filesystem existence checks used by output naming
pub trait FsPort: Send + Sync {
    /// Whether anything occupies `path`. Entries that cannot be inspected
    /// count as occupied.
    fn exists(&self, path: &Path) -> bool;
}
