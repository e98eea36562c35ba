//! ezff library
//!
//! Plans ffmpeg invocations for simple trims (cut the start, the end, a middle
//! segment, or both ends) and runs them.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod error;
pub mod output;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use domain::model::{Cut, ExternalCommand, TrimMode, TrimRequest};
pub use error::{EzffError, EzffResult};
pub use output::OutputPathResolver;
pub use planner::CommandPlanner;
