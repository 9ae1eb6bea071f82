//! Advisory read locks on data files (fs2).
//!
//! A shared lock is taken on each data file while it is in use, so a tool that
//! rewrites actordata/moviedata under an exclusive lock cannot swap the bytes
//! out from under a mapped reader. Lock is released on Drop.

use anyhow::{Context, Result};
use fs2::FileExt;
use log::debug;
use std::fs::File;
use std::path::{Path, PathBuf};

pub struct SharedLock {
    file: File,
    path: PathBuf,
}

impl SharedLock {
    /// Try to take a shared lock on `file`. Fails instead of blocking if a writer holds it.
    pub fn try_acquire(file: File, path: &Path) -> Result<Self> {
        file.try_lock_shared()
            .with_context(|| format!("try_lock_shared {}", path.display()))?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }
}

impl Drop for SharedLock {
    fn drop(&mut self) {
        if let Err(e) = self.file.unlock() {
            debug!("unlock {}: {}", self.path.display(), e);
        }
    }
}
