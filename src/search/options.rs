use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::path::Path;

/// Cooperative cancellation flag, checked once per dequeued path.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Debug, Default)]
pub struct SearchOptions {
    pub cancel: Option<CancelToken>,
    /// A path with this many hops is still checked against `end`, but its
    /// last actor is not expanded.
    pub max_hops: Option<usize>,
}

impl SearchOptions {
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn with_max_hops(mut self, max: Option<usize>) -> Self {
        self.max_hops = max;
        self
    }

    pub(crate) fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    NoPath,
    Cancelled,
}

impl SearchOutcome {
    pub fn into_path(self) -> Option<Path> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            SearchOutcome::NoPath | SearchOutcome::Cancelled => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }
}

/// Per-search counters (returned to the caller, not global).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    pub paths_dequeued: u64,
    pub films_expanded: u64,
    pub actors_seen: u64,
    pub faults_skipped: u64,
}
