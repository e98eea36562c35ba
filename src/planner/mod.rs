//! Command planning
//!
//! Turns a [`TrimRequest`] into the exact ffmpeg invocation: probe the
//! duration if the mode needs it, validate, pick the output path, build the
//! argument list.

use std::ffi::OsString;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::model::{ExternalCommand, TrimRequest};
use crate::error::EzffResult;
use crate::output::OutputPathResolver;
use crate::ports::{FsPort, ProbePort};

/// Planner for ffmpeg trim commands
pub struct CommandPlanner<'a> {
    probe: &'a dyn ProbePort,
    fs: &'a dyn FsPort,
    program: OsString,
    suffix: String,
}

impl<'a> CommandPlanner<'a> {
    /// Create a new planner emitting commands for `program`
    pub fn new(
        probe: &'a dyn ProbePort,
        fs: &'a dyn FsPort,
        program: impl Into<OsString>,
        suffix: impl Into<String>,
    ) -> Self {
        Self {
            probe,
            fs,
            program: program.into(),
            suffix: suffix.into(),
        }
    }

    /// Plan the command for `request`
    pub fn plan(&self, request: &TrimRequest) -> EzffResult<ExternalCommand> {
        info!("Planning {} on {}", request.mode, request.input.display());

        let duration = if request.mode.requires_duration() {
            let duration = self.probe.probe_duration(&request.input)?;
            info!("Input duration: {:.6}s", duration);
            Some(duration)
        } else {
            None
        };

        let cut = request.mode.resolve(duration)?;
        debug!("Resolved cut: {:?}", cut);

        let output = self.output_path(request)?;
        info!("Output: {}", output.display());

        Ok(ExternalCommand {
            program: self.program.clone(),
            args: cut.ffmpeg_args(&request.input, &output),
            output,
            cut,
        })
    }

    fn output_path(&self, request: &TrimRequest) -> EzffResult<PathBuf> {
        match &request.output {
            Some(explicit) => Ok(explicit.clone()),
            None => OutputPathResolver::new(self.fs).resolve(&request.input, &self.suffix),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Cut, TrimMode};
    use crate::error::EzffError;
    use std::collections::HashSet;
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedProbe {
        duration: Option<f64>,
        calls: AtomicUsize,
    }

    impl FixedProbe {
        fn new(duration: Option<f64>) -> Self {
            Self {
                duration,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl ProbePort for FixedProbe {
        fn probe_duration(&self, _input: &Path) -> EzffResult<f64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.duration
                .ok_or_else(|| EzffError::probe("ffprobe exited with exit status: 1"))
        }
    }

    struct MemoryFs(HashSet<PathBuf>);

    impl FsPort for MemoryFs {
        fn exists(&self, path: &Path) -> bool {
            self.0.contains(path)
        }
    }

    fn empty_fs() -> MemoryFs {
        MemoryFs(HashSet::new())
    }

    fn args(command: &ExternalCommand) -> Vec<String> {
        command
            .args
            .iter()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_trim_end_scenario() {
        let probe = FixedProbe::new(Some(100.0));
        let fs = empty_fs();
        let planner = CommandPlanner::new(&probe, &fs, "ffmpeg", "_trim");

        let request = TrimRequest::new(TrimMode::End { seconds: 10.0 }, "clip.mp4", None);
        let command = planner.plan(&request).unwrap();

        assert_eq!(command.program, OsString::from("ffmpeg"));
        assert_eq!(command.output, PathBuf::from("clip_trim.mp4"));
        assert_eq!(
            args(&command),
            vec!["-i", "clip.mp4", "-c", "copy", "-t", "90.000000", "clip_trim.mp4"]
        );
        assert_eq!(probe.calls(), 1);
    }

    #[test]
    fn test_trim_both_ends_scenario() {
        let probe = FixedProbe::new(Some(100.0));
        let fs = empty_fs();
        let planner = CommandPlanner::new(&probe, &fs, "ffmpeg", "_trim");

        let request = TrimRequest::new(
            TrimMode::BothEnds {
                trim_start: 5.0,
                trim_end: 10.0,
            },
            "clip.mp4",
            None,
        );
        let command = planner.plan(&request).unwrap();
        assert_eq!(
            command.cut,
            Cut::BothEnds {
                seek: 5.0,
                length: 85.0
            }
        );
        let args = args(&command);
        assert_eq!(&args[..2], ["-ss", "5.000000"]);
        assert!(args.windows(2).any(|w| w == ["-t", "85.000000"]));
    }

    #[test]
    fn test_trim_mid_skips_probe() {
        let probe = FixedProbe::new(None);
        let fs = empty_fs();
        let planner = CommandPlanner::new(&probe, &fs, "ffmpeg", "_trim");

        let request = TrimRequest::new(
            TrimMode::Mid {
                start_cut: 30.0,
                end_cut: 40.0,
            },
            "clip.mp4",
            None,
        );
        let command = planner.plan(&request).unwrap();
        assert_eq!(probe.calls(), 0);
        assert_eq!(command.output, PathBuf::from("clip_trim.mp4"));
        let args = args(&command);
        assert!(args[3].contains("30.000000") && args[3].contains("40.000000"));
        assert!(args[5].contains("30.000000") && args[5].contains("40.000000"));
    }

    #[test]
    fn test_trim_start_skips_probe() {
        let probe = FixedProbe::new(None);
        let fs = empty_fs();
        let planner = CommandPlanner::new(&probe, &fs, "ffmpeg", "_trim");

        let request = TrimRequest::new(TrimMode::Start { seconds: 3.0 }, "clip.mp4", None);
        assert!(planner.plan(&request).is_ok());
        assert_eq!(probe.calls(), 0);
    }

    #[test]
    fn test_overlapping_trim_fails_validation() {
        let probe = FixedProbe::new(Some(100.0));
        let fs = empty_fs();
        let planner = CommandPlanner::new(&probe, &fs, "ffmpeg", "_trim");

        let request = TrimRequest::new(
            TrimMode::BothEnds {
                trim_start: 50.0,
                trim_end: 60.0,
            },
            "clip.mp4",
            None,
        );
        let err = planner.plan(&request).unwrap_err();
        assert!(matches!(err, EzffError::Validation { .. }));
        assert_eq!(err.to_string(), "Duration too short for trimming");
    }

    #[test]
    fn test_probe_failure_propagates() {
        let probe = FixedProbe::new(None);
        let fs = empty_fs();
        let planner = CommandPlanner::new(&probe, &fs, "ffmpeg", "_trim");

        let request = TrimRequest::new(TrimMode::End { seconds: 1.0 }, "missing.mp4", None);
        let err = planner.plan(&request).unwrap_err();
        assert!(matches!(err, EzffError::Probe { .. }));
    }

    #[test]
    fn test_explicit_output_is_trusted() {
        let probe = FixedProbe::new(None);
        let fs = MemoryFs(HashSet::from([PathBuf::from("keep.mp4")]));
        let planner = CommandPlanner::new(&probe, &fs, "/usr/bin/ffmpeg", "_trim");

        let request = TrimRequest::new(
            TrimMode::Start { seconds: 1.0 },
            "clip.mp4",
            Some(PathBuf::from("keep.mp4")),
        );
        let command = planner.plan(&request).unwrap();
        assert_eq!(command.output, PathBuf::from("keep.mp4"));
        assert_eq!(args(&command).last().unwrap(), "keep.mp4");
        assert_eq!(command.program, OsString::from("/usr/bin/ffmpeg"));
    }

    #[test]
    fn test_configured_suffix_and_collisions() {
        let probe = FixedProbe::new(None);
        let fs = MemoryFs(HashSet::from([PathBuf::from("clip_cut.mp4")]));
        let planner = CommandPlanner::new(&probe, &fs, "ffmpeg", "_cut");

        let request = TrimRequest::new(TrimMode::Start { seconds: 1.0 }, "clip.mp4", None);
        let command = planner.plan(&request).unwrap();
        assert_eq!(command.output, PathBuf::from("clip_cut1.mp4"));
    }
}
