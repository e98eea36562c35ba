//! Output file naming
//!
//! Derives `<stem><suffix><ext>` next to the input, adding `1`, `2`, ... before
//! the extension until a free name turns up. Nothing is created on disk, so a
//! name that was free at resolution time can still be taken by another
//! process before ffmpeg writes it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{EzffError, EzffResult};
use crate::ports::FsPort;

/// Highest disambiguating index tried before giving up
pub const MAX_COLLISION_INDEX: u32 = 100_000;

/// Resolves default output paths against a filesystem
pub struct OutputPathResolver<'a> {
    fs: &'a dyn FsPort,
}

impl<'a> OutputPathResolver<'a> {
    /// Create a resolver checking existence through `fs`
    pub fn new(fs: &'a dyn FsPort) -> Self {
        Self { fs }
    }

    /// First free path among `stem+suffix+ext`, `stem+suffix+1+ext`, ...
    pub fn resolve(&self, input: &Path, suffix: &str) -> EzffResult<PathBuf> {
        let candidate = candidate_path(input, suffix, None);
        if !self.fs.exists(&candidate) {
            return Ok(candidate);
        }

        for index in 1..=MAX_COLLISION_INDEX {
            let candidate = candidate_path(input, suffix, Some(index));
            if !self.fs.exists(&candidate) {
                debug!("Output name taken, using {}", candidate.display());
                return Ok(candidate);
            }
        }

        Err(EzffError::Output {
            message: format!(
                "no free name for {} after {} attempts",
                candidate.display(),
                MAX_COLLISION_INDEX
            ),
        })
    }
}

/// Build one candidate name in the input's directory.
///
/// A leading dot belongs to the name, not the extension: `.clip` becomes
/// `.clip_trim`, `.clip.mp4` becomes `.clip_trim.mp4`.
pub fn candidate_path(input: &Path, suffix: &str, index: Option<u32>) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(suffix);
    if let Some(index) = index {
        name.push(index.to_string());
    }
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }

    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
