//! Temporary directory holding the clone.

use std::io;
use std::path::Path;

use tempfile::TempDir;
use tracing::debug;

use crate::Diagnostics;

/// A uniquely named temporary directory owned by one export run.
///
/// The directory is removed by [`WorkArea::release`], or on drop if the run
/// leaves early.
#[derive(Debug)]
pub struct WorkArea {
    dir: TempDir,
}

impl WorkArea {
    /// Prefix of every working area directory name.
    pub const PREFIX: &'static str = "gitfacts-";

    /// Creates a working area in the system temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn acquire() -> io::Result<Self> {
        Self::acquire_in(std::env::temp_dir())
    }

    /// Creates a working area inside `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn acquire_in(parent: impl AsRef<Path>) -> io::Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix(Self::PREFIX)
            .tempdir_in(parent)?;
        debug!(path = ?dir.path(), "created working area");
        Ok(Self { dir })
    }

    /// Returns the directory path.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Removes the directory and everything in it.
    ///
    /// A failure is reported to `diagnostics` and otherwise ignored.
    pub fn release(self, diagnostics: &dyn Diagnostics) {
        let path = self.dir.path().to_path_buf();
        match self.dir.close() {
            Ok(()) => debug!(?path, "removed working area"),
            Err(err) => diagnostics.cleanup_failed(&path, &err),
        }
    }
}
