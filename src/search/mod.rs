//! search — breadth-first shortest co-star path.
//!
//! Подмодули:
//! - options.rs — SearchOptions, CancelToken, SearchOutcome, SearchStats
//! - bfs.rs     — the search loop itself
//!
//! All search state (queue, visited sets) lives inside one call, so any number
//! of searches may run against the same shared buffers.

pub mod bfs;
pub mod options;

pub use bfs::{shortest_path, shortest_path_with};
pub use options::{CancelToken, SearchOptions, SearchOutcome, SearchStats};
