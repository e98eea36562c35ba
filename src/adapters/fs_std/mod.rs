// Standard filesystem adapter

use std::path::Path;

use crate::ports::FsPort;

/// Filesystem adapter backed by `std::fs`
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    /// Create new filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

impl FsPort for StdFsAdapter {
    fn exists(&self, path: &Path) -> bool {
        // Errors other than "not found" leave the name taken.
        !matches!(path.try_exists(), Ok(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_exists_tracks_real_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("clip.mp4");
        let fs = StdFsAdapter::new();

        assert!(!fs.exists(&path));
        std::fs::write(&path, b"data").unwrap();
        assert!(fs.exists(&path));
        assert!(fs.exists(dir.path()));
    }
}
