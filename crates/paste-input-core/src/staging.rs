//! Temp-file staging for clipboard images.
//!
//! The legacy event transport delivers images as file paths rather than
//! inline bytes, so classified images are written to the OS temp directory
//! under a fixed, prefix-tagged name and the path is handed across the
//! boundary instead.

use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::content::StagedFile;
use crate::error::PasteResult;
use crate::formats::MIME_IMAGE_PNG;

/// File-name prefix shared by every staged file; [`TempStage::sweep`]
/// deletes everything carrying it.
pub const STAGE_PREFIX: &str = "paste_";

/// Writes classified images into a staging directory and sweeps them out
/// again.
///
/// Defaults to the OS temp directory; tests and configuration can point it
/// elsewhere with [`TempStage::with_dir`].
#[derive(Debug, Clone)]
pub struct TempStage {
    dir: PathBuf,
}

impl Default for TempStage {
    fn default() -> Self {
        Self::new()
    }
}

impl TempStage {
    /// Stage into the OS temp directory
    pub fn new() -> Self {
        Self {
            dir: std::env::temp_dir(),
        }
    }

    /// Stage into a specific directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The staging directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write PNG bytes under `paste_<millis-since-epoch>_<5-digit-random>.png`.
    ///
    /// Collisions are mitigated only by the millisecond + random suffix,
    /// which is acceptable for a single-process, low-frequency write pattern
    /// but not designed for concurrent writers.
    pub fn stage_png(&self, png: &[u8]) -> PasteResult<StagedFile> {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix: u32 = rand::rng().random_range(0..100_000);
        let path = self.dir.join(format!("{}{}_{:05}.png", STAGE_PREFIX, millis, suffix));

        fs::write(&path, png)?;
        debug!("staged {} byte image at {}", png.len(), path.display());

        Ok(StagedFile {
            path,
            mime_type: MIME_IMAGE_PNG.to_string(),
        })
    }

    /// Delete every entry in the staging directory whose name starts with
    /// [`STAGE_PREFIX`], non-recursively.
    ///
    /// Best-effort coarse cleanup: it does not track which files belong to
    /// the current process, so a second instance's staged-but-unread files
    /// are deleted too. Failures are logged and ignored.
    pub fn sweep(&self) {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("staging sweep skipped, cannot read {}: {}", self.dir.display(), e);
                return;
            }
        };

        let mut removed = 0usize;
        for entry in entries.flatten() {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !name.starts_with(STAGE_PREFIX) {
                continue;
            }
            match fs::remove_file(entry.path()) {
                Ok(()) => removed += 1,
                Err(e) => debug!("failed to remove staged file {}: {}", name, e),
            }
        }
        debug!("staging sweep removed {} file(s)", removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefixed_entries(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .flatten()
            .filter_map(|e| e.file_name().to_str().map(String::from))
            .filter(|n| n.starts_with(STAGE_PREFIX))
            .collect()
    }

    #[test]
    fn test_stage_writes_prefixed_png() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());

        let staged = stage.stage_png(b"png bytes").unwrap();
        assert_eq!(staged.mime_type, "image/png");
        assert!(staged.path.file_name().unwrap().to_str().unwrap().starts_with(STAGE_PREFIX));
        assert_eq!(staged.path.extension().unwrap(), "png");
        assert_eq!(fs::read(&staged.path).unwrap(), b"png bytes");
    }

    #[test]
    fn test_stage_twice_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());

        // Both writes land within the same millisecond often enough that
        // only the random suffix separates them.
        let a = stage.stage_png(b"a").unwrap();
        let b = stage.stage_png(b"b").unwrap();
        assert_ne!(a.path, b.path);
    }

    #[test]
    fn test_sweep_removes_only_prefixed() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path());

        stage.stage_png(b"one").unwrap();
        stage.stage_png(b"two").unwrap();
        fs::write(dir.path().join("unrelated.png"), b"keep").unwrap();

        stage.sweep();

        assert!(prefixed_entries(dir.path()).is_empty());
        assert!(dir.path().join("unrelated.png").exists());
    }

    #[test]
    fn test_stage_into_unwritable_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let stage = TempStage::with_dir(dir.path().join("missing"));
        assert!(stage.stage_png(b"x").is_err());
    }

    #[test]
    fn test_sweep_on_missing_dir_is_noop() {
        let stage = TempStage::with_dir("/nonexistent/staging/dir");
        stage.sweep();
    }
}
