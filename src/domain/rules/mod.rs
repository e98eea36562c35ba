// Domain rules - Per-mode validation and ffmpeg argument construction

use std::ffi::OsString;
use std::path::Path;

use crate::domain::model::*;
use crate::error::{EzffError, EzffResult};
use crate::utils::time::format_seconds;


impl TrimMode {
    /// Validate the parameters and resolve them against the media duration.
    ///
    /// `duration` must be `Some` for modes where [`TrimMode::requires_duration`]
    /// is true; it is ignored otherwise.
    pub fn resolve(&self, duration: Option<f64>) -> EzffResult<Cut> {
        match *self {
            TrimMode::Start { seconds } => {
                check_offset("seconds", seconds)?;
                Ok(Cut::Start { seek: seconds })
            }
            TrimMode::End { seconds } => {
                check_offset("seconds", seconds)?;
                let duration = self.known_duration(duration)?;
                if duration <= seconds {
                    return Err(EzffError::validation("Duration too short"));
                }
                Ok(Cut::End {
                    length: duration - seconds,
                })
            }
            TrimMode::Mid { start_cut, end_cut } => {
                check_offset("start_cut", start_cut)?;
                check_offset("end_cut", end_cut)?;
                if start_cut >= end_cut {
                    return Err(EzffError::validation(
                        "start_cut must be less than end_cut",
                    ));
                }
                Ok(Cut::Mid {
                    start: start_cut,
                    end: end_cut,
                })
            }
            TrimMode::BothEnds {
                trim_start,
                trim_end,
            } => {
                check_offset("trim_start", trim_start)?;
                check_offset("trim_end", trim_end)?;
                let duration = self.known_duration(duration)?;
                let total_trim = trim_start + trim_end;
                if duration <= total_trim {
                    return Err(EzffError::validation("Duration too short for trimming"));
                }
                Ok(Cut::BothEnds {
                    seek: trim_start,
                    length: duration - total_trim,
                })
            }
        }
    }

    fn known_duration(&self, duration: Option<f64>) -> EzffResult<f64> {
        duration.ok_or_else(|| {
            EzffError::probe(format!("{} needs the input duration", self.verb()))
        })
    }
}

impl Cut {
    /// Build the ffmpeg argument list. The order is fixed per mode and the
    /// output path is always the last positional argument.
    pub fn ffmpeg_args(&self, input: &Path, output: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        match *self {
            Cut::Start { seek } => {
                push_all(&mut args, ["-ss".to_string(), format_seconds(seek)]);
                args.push("-i".into());
                args.push(input.into());
                push_all(&mut args, ["-c", "copy"]);
            }
            Cut::End { length } => {
                args.push("-i".into());
                args.push(input.into());
                push_all(&mut args, ["-c", "copy"]);
                push_all(&mut args, ["-t".to_string(), format_seconds(length)]);
            }
            Cut::Mid { start, end } => {
                args.push("-i".into());
                args.push(input.into());
                push_all(
                    &mut args,
                    [
                        "-vf".to_string(),
                        video_filter(start, end),
                        "-af".to_string(),
                        audio_filter(start, end),
                    ],
                );
            }
            Cut::BothEnds { seek, length } => {
                push_all(&mut args, ["-ss".to_string(), format_seconds(seek)]);
                args.push("-i".into());
                args.push(input.into());
                push_all(&mut args, ["-t".to_string(), format_seconds(length)]);
                push_all(&mut args, ["-c", "copy"]);
            }
        }
        args.push(output.into());
        args
    }
}

/// Drops video frames inside the window and renumbers the rest.
pub fn video_filter(start: f64, end: f64) -> String {
    format!(
        "select='not(between(t,{},{}))',setpts=N/FRAME_RATE/TB",
        format_seconds(start),
        format_seconds(end)
    )
}

/// Drops audio samples inside the window and renumbers the rest.
pub fn audio_filter(start: f64, end: f64) -> String {
    format!(
        "aselect='not(between(t,{},{}))',asetpts=N/SR/TB",
        format_seconds(start),
        format_seconds(end)
    )
}

fn check_offset(name: &str, value: f64) -> EzffResult<()> {
    if !value.is_finite() {
        return Err(EzffError::validation(format!("Invalid {}", name)));
    }
    if value < 0.0 {
        return Err(EzffError::validation(format!(
            "{} must not be negative",
            name
        )));
    }
    Ok(())
}

fn push_all<I, S>(args: &mut Vec<OsString>, items: I)
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    args.extend(items.into_iter().map(Into::into));
}
