//! Centralized configuration and builder for costar.
//!
//! Goals:
//! - Single place to collect tunables instead of scattering env lookups.
//! - CostarConfig::from_env() reads COSTAR_* env vars; `with_*` setters override.
//!
//! Defaults:
//! - data_dir = ./data
//! - mmap = true (map actordata/moviedata; false reads them into RAM)
//! - lock_shared = true (advisory shared lock on each data file while open)
//! - max_hops = None (unbounded search)

use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CostarConfig {
    /// Directory holding `actordata` and `moviedata`.
    /// Env: COSTAR_DATA_DIR (default "./data")
    pub data_dir: PathBuf,

    /// Memory-map the data files instead of reading them fully.
    /// Env: COSTAR_MMAP (default true; anything but "1|true|yes|on" => false)
    pub mmap: bool,

    /// Hold an fs2 shared lock on each data file for the lifetime of the store.
    /// Env: COSTAR_LOCK (default true)
    pub lock_shared: bool,

    /// Upper bound on path length (film hops). None = unbounded.
    /// Env: COSTAR_MAX_HOPS
    pub max_hops: Option<usize>,
}

impl Default for CostarConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            mmap: true,
            lock_shared: true,
            max_hops: None,
        }
    }
}

fn env_bool(name: &str) -> Option<bool> {
    let v = std::env::var(name).ok()?;
    let s = v.trim().to_ascii_lowercase();
    Some(s == "1" || s == "true" || s == "yes" || s == "on")
}

impl CostarConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("COSTAR_DATA_DIR") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.data_dir = PathBuf::from(s);
            }
        }
        if let Some(on) = env_bool("COSTAR_MMAP") {
            cfg.mmap = on;
        }
        if let Some(on) = env_bool("COSTAR_LOCK") {
            cfg.lock_shared = on;
        }
        if let Ok(v) = std::env::var("COSTAR_MAX_HOPS") {
            if let Ok(n) = v.trim().parse::<usize>() {
                cfg.max_hops = Some(n);
            }
        }

        cfg
    }

    pub fn with_data_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_mmap(mut self, on: bool) -> Self {
        self.mmap = on;
        self
    }

    pub fn with_lock_shared(mut self, on: bool) -> Self {
        self.lock_shared = on;
        self
    }

    pub fn with_max_hops(mut self, max: Option<usize>) -> Self {
        self.max_hops = max;
        self
    }
}
