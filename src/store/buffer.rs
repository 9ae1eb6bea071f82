//! store/buffer — read-only bytes of one data file (MMAP или RAM).
//!
//! Mapped buffers keep their shared lock for as long as they live; both the
//! mapping and the lock are released on Drop, including on error paths.

use anyhow::{anyhow, Context, Result};
use log::debug;
use memmap2::{Mmap, MmapOptions};
use std::fs::OpenOptions;
use std::io::Read;
use std::ops::Deref;
use std::path::Path;

use crate::lock::SharedLock;

pub enum Buffer {
    Mapped {
        mmap: Mmap,
        _lock: Option<SharedLock>,
    },
    Owned(Box<[u8]>),
}

impl Buffer {
    pub fn from_vec(bytes: Vec<u8>) -> Self {
        Buffer::Owned(bytes.into_boxed_slice())
    }

    /// Open `path` read-only; map it if `mmap`, otherwise read it into RAM.
    pub fn open(path: &Path, mmap: bool, lock: bool) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("open {}", path.display()))?;
        let guard = if lock {
            Some(SharedLock::try_acquire(file.try_clone()?, path)?)
        } else {
            None
        };
        let len = file
            .metadata()
            .with_context(|| format!("stat {}", path.display()))?
            .len();

        // zero-length files cannot be mapped on every platform
        if mmap && len > 0 {
            let map = unsafe {
                MmapOptions::new()
                    .len(len as usize)
                    .map(&file)
                    .map_err(|e| anyhow!("mmap {}: {}", path.display(), e))?
            };
            debug!("mapped {} ({} B)", path.display(), len);
            return Ok(Buffer::Mapped {
                mmap: map,
                _lock: guard,
            });
        }

        let mut bytes = Vec::with_capacity(len as usize);
        file.read_to_end(&mut bytes)
            .with_context(|| format!("read {}", path.display()))?;
        debug!("read {} into RAM ({} B)", path.display(), bytes.len());
        drop(guard);
        Ok(Buffer::from_vec(bytes))
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, Buffer::Mapped { .. })
    }
}

impl Deref for Buffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            Buffer::Mapped { mmap, .. } => &mmap[..],
            Buffer::Owned(b) => &b[..],
        }
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("mapped", &self.is_mapped())
            .field("len", &self.len())
            .finish()
    }
}
