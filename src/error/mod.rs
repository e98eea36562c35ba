//! Error handling module for ezff

use thiserror::Error;

/// Main error type for ezff operations
#[derive(Error, Debug)]
pub enum EzffError {
    /// Malformed or missing command-line arguments
    #[error("{message}")]
    Usage { message: String },

    /// Numeric parameters inconsistent with each other or with the media duration
    #[error("{message}")]
    Validation { message: String },

    /// Duration lookup failed to run or produced unparseable output
    #[error("Error getting duration: {message}")]
    Probe { message: String },

    /// The processing binary could not start or exited non-zero
    #[error("Error running {program}: {message}")]
    Execution { program: String, message: String },

    /// Configuration file unreadable or invalid
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// No usable output path could be derived
    #[error("Failed to choose output file: {message}")]
    Output { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EzffError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a probe failure
    pub fn probe(message: impl Into<String>) -> Self {
        Self::Probe {
            message: message.into(),
        }
    }

    /// Process exit status reported for this error.
    ///
    /// Every failure kind terminates the invocation with status 1.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Result type alias for ezff operations
pub type EzffResult<T> = std::result::Result<T, EzffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_short_and_readable() {
        let err = EzffError::validation("Duration too short");
        assert_eq!(err.to_string(), "Duration too short");

        let err = EzffError::probe("ffprobe exited with status 1");
        assert_eq!(
            err.to_string(),
            "Error getting duration: ffprobe exited with status 1"
        );

        let err = EzffError::Execution {
            program: "ffmpeg".to_string(),
            message: "exit status: 2".to_string(),
        };
        assert_eq!(err.to_string(), "Error running ffmpeg: exit status: 2");
    }

    #[test]
    fn test_every_kind_exits_with_one() {
        let errors = [
            EzffError::Usage {
                message: "missing input".to_string(),
            },
            EzffError::validation("bad"),
            EzffError::probe("bad"),
            EzffError::Config {
                message: "bad".to_string(),
            },
            EzffError::Output {
                message: "bad".to_string(),
            },
            EzffError::Io(std::io::Error::new(std::io::ErrorKind::Other, "bad")),
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1);
        }
    }
}
