//! store — owner of the actor and film buffers, and the entry point for queries.
//!
//! Подмодули:
//! - buffer.rs — Buffer (mmap/RAM, shared lock)
//!
//! `Imdb::open*` fails only when a data file cannot be acquired. Malformed
//! contents surface later, as decode faults on the queries that touch them.

pub mod buffer;

use anyhow::Result;
use log::info;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::CostarConfig;
use crate::consts::{ACTOR_FILE, FILM_FILE};
use crate::doctor::{self, DoctorReport};
use crate::error::DecodeResult;
use crate::graph::Graph;
use crate::index::OffsetTable;
use crate::path::Path as CostarPath;
use crate::record::Film;
use crate::search::{self, SearchOptions, SearchOutcome, SearchStats};

pub use buffer::Buffer;

#[derive(Debug)]
pub struct Imdb {
    root: Option<PathBuf>,
    actors: Buffer,
    films: Buffer,
    cfg: CostarConfig,
}

/// Sizes and counts for `status`.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub root: Option<String>,
    pub mapped: bool,
    pub actor_bytes: usize,
    pub film_bytes: usize,
    pub actors: Option<usize>,
    pub films: Option<usize>,
}

impl Imdb {
    /// Open `<dir>/actordata` and `<dir>/moviedata` with env-derived settings.
    pub fn open(dir: &Path) -> Result<Self> {
        Self::open_with_config(CostarConfig::from_env().with_data_dir(dir))
    }

    pub fn open_with_config(cfg: CostarConfig) -> Result<Self> {
        let root = cfg.data_dir.clone();
        let actors = Buffer::open(&root.join(ACTOR_FILE), cfg.mmap, cfg.lock_shared)?;
        let films = Buffer::open(&root.join(FILM_FILE), cfg.mmap, cfg.lock_shared)?;
        info!(
            "opened {} (actors {} B, films {} B, mmap={})",
            root.display(),
            actors.len(),
            films.len(),
            actors.is_mapped()
        );
        Ok(Self {
            root: Some(root),
            actors,
            films,
            cfg,
        })
    }

    /// Store over bytes already in memory.
    pub fn from_buffers(actors: Vec<u8>, films: Vec<u8>) -> Self {
        Self {
            root: None,
            actors: Buffer::from_vec(actors),
            films: Buffer::from_vec(films),
            cfg: CostarConfig::default(),
        }
    }

    pub fn with_config(mut self, cfg: CostarConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// True when both buffers start with a readable offset table.
    pub fn good(&self) -> bool {
        OffsetTable::parse(&self.actors).is_ok() && OffsetTable::parse(&self.films).is_ok()
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn config(&self) -> &CostarConfig {
        &self.cfg
    }

    pub fn graph(&self) -> Graph<'_> {
        Graph::new(&self.actors, &self.films)
    }

    pub fn credits(&self, actor: &str) -> DecodeResult<Option<Vec<Film>>> {
        self.graph().films_of(actor)
    }

    pub fn cast(&self, film: &Film) -> DecodeResult<Option<Vec<String>>> {
        self.graph().cast_of(film)
    }

    /// Shortest path honouring the configured `max_hops`.
    pub fn shortest_path(&self, start: &str, end: &str) -> Option<CostarPath> {
        let opts = SearchOptions::default().with_max_hops(self.cfg.max_hops);
        self.shortest_path_with(start, end, &opts).0.into_path()
    }

    pub fn shortest_path_with(
        &self,
        start: &str,
        end: &str,
        opts: &SearchOptions,
    ) -> (SearchOutcome, SearchStats) {
        search::shortest_path_with(&self.graph(), start, end, opts)
    }

    pub fn doctor(&self) -> DoctorReport {
        doctor::scan(&self.actors, &self.films)
    }

    pub fn status(&self) -> StoreStatus {
        let g = self.graph();
        StoreStatus {
            root: self.root().map(|p| p.display().to_string()),
            mapped: self.actors.is_mapped() && self.films.is_mapped(),
            actor_bytes: self.actors.len(),
            film_bytes: self.films.len(),
            actors: g.actor_count().ok(),
            films: g.film_count().ok(),
        }
    }
}
