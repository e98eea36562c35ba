//! Time parsing and formatting utilities

use crate::error::{EzffError, EzffResult};

/// Parse a time argument to seconds.
///
/// Accepts plain seconds (`12.5`), `MM:SS(.ms)` and `HH:MM:SS(.ms)`. Sign
/// and range checks are left to the trim rules so that they surface as
/// validation errors rather than usage errors.
pub fn parse_time(time_str: &str) -> EzffResult<f64> {
    let trimmed = time_str.trim();

    if let Ok(seconds) = trimmed.parse::<f64>() {
        if !seconds.is_finite() {
            return Err(invalid(time_str));
        }
        return Ok(seconds);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    match parts.as_slice() {
        [minutes, seconds] => {
            let minutes = parse_component(minutes, time_str)?;
            let seconds = parse_seconds_component(seconds, time_str)?;
            Ok(minutes * 60.0 + seconds)
        }
        [hours, minutes, seconds] => {
            let hours = parse_component(hours, time_str)?;
            let minutes = parse_component(minutes, time_str)?;
            if minutes >= 60.0 {
                return Err(invalid(time_str));
            }
            let seconds = parse_seconds_component(seconds, time_str)?;
            Ok(hours * 3600.0 + minutes * 60.0 + seconds)
        }
        _ => Err(invalid(time_str)),
    }
}

/// Render seconds the way they are handed to ffmpeg: fixed-point, six
/// fractional digits, no locale.
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.6}", seconds)
}

fn parse_component(part: &str, time_str: &str) -> EzffResult<f64> {
    part.parse::<u32>()
        .map(f64::from)
        .map_err(|_| invalid(time_str))
}

fn parse_seconds_component(part: &str, time_str: &str) -> EzffResult<f64> {
    let seconds = part.parse::<f64>().map_err(|_| invalid(time_str))?;
    if !seconds.is_finite() || !(0.0..60.0).contains(&seconds) {
        return Err(invalid(time_str));
    }
    Ok(seconds)
}

fn invalid(time_str: &str) -> EzffError {
    EzffError::Usage {
        message: format!(
            "Invalid time '{}'. Expected seconds (e.g. 12.5), MM:SS.ms or HH:MM:SS.ms",
            time_str
        ),
    }
}
