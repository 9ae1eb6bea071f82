use anyhow::{Context, Result};
use std::path::PathBuf;

use costar::{CostarConfig, Imdb};

pub fn config_for(data: Option<PathBuf>) -> CostarConfig {
    let cfg = CostarConfig::from_env();
    match data {
        Some(dir) => cfg.with_data_dir(dir),
        None => cfg,
    }
}

pub fn open_store(cfg: CostarConfig) -> Result<Imdb> {
    let dir = cfg.data_dir.clone();
    Imdb::open_with_config(cfg).with_context(|| format!("open data dir {}", dir.display()))
}
