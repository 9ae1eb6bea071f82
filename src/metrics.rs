//! Lightweight global metrics for costar.
//!
//! Потокобезопасные атомарные счётчики для подсистем:
//! - decoder / lookups
//! - shortest-path search

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// ----- Decoder / lookups -----
static RECORDS_DECODED: AtomicU64 = AtomicU64::new(0);
static DECODE_FAULTS: AtomicU64 = AtomicU64::new(0);
static ACTOR_LOOKUP_HITS: AtomicU64 = AtomicU64::new(0);
static ACTOR_LOOKUP_MISSES: AtomicU64 = AtomicU64::new(0);
static FILM_LOOKUP_HITS: AtomicU64 = AtomicU64::new(0);
static FILM_LOOKUP_MISSES: AtomicU64 = AtomicU64::new(0);

// ----- Search -----
static SEARCHES_TOTAL: AtomicU64 = AtomicU64::new(0);
static SEARCHES_FOUND: AtomicU64 = AtomicU64::new(0);
static SEARCHES_EXHAUSTED: AtomicU64 = AtomicU64::new(0);
static SEARCHES_CANCELLED: AtomicU64 = AtomicU64::new(0);
static FILMS_EXPANDED: AtomicU64 = AtomicU64::new(0);
static PATHS_ENQUEUED: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone, Default, Serialize)]
pub struct MetricsSnapshot {
    // Decoder / lookups
    pub records_decoded: u64,
    pub decode_faults: u64,
    pub actor_lookup_hits: u64,
    pub actor_lookup_misses: u64,
    pub film_lookup_hits: u64,
    pub film_lookup_misses: u64,

    // Search
    pub searches_total: u64,
    pub searches_found: u64,
    pub searches_exhausted: u64,
    pub searches_cancelled: u64,
    pub films_expanded: u64,
    pub paths_enqueued: u64,
}

impl MetricsSnapshot {
    pub fn actor_hit_ratio(&self) -> f64 {
        let total = self.actor_lookup_hits + self.actor_lookup_misses;
        if total == 0 {
            0.0
        } else {
            self.actor_lookup_hits as f64 / total as f64
        }
    }

    pub fn avg_films_per_search(&self) -> f64 {
        if self.searches_total == 0 {
            0.0
        } else {
            self.films_expanded as f64 / self.searches_total as f64
        }
    }
}

// ----- Recorders (decoder / lookups) -----
pub fn record_decoded(n: usize) {
    RECORDS_DECODED.fetch_add(n as u64, Ordering::Relaxed);
}

pub fn record_decode_fault() {
    DECODE_FAULTS.fetch_add(1, Ordering::Relaxed);
}

pub fn record_actor_lookup(hit: bool) {
    if hit {
        ACTOR_LOOKUP_HITS.fetch_add(1, Ordering::Relaxed);
    } else {
        ACTOR_LOOKUP_MISSES.fetch_add(1, Ordering::Relaxed);
    }
}

pub fn record_film_lookup(hit: bool) {
    if hit {
        FILM_LOOKUP_HITS.fetch_add(1, Ordering::Relaxed);
    } else {
        FILM_LOOKUP_MISSES.fetch_add(1, Ordering::Relaxed);
    }
}

// ----- Recorders (search) -----
pub fn record_search_started() {
    SEARCHES_TOTAL.fetch_add(1, Ordering::Relaxed);
}
pub fn record_search_found() {
    SEARCHES_FOUND.fetch_add(1, Ordering::Relaxed);
}
pub fn record_search_exhausted() {
    SEARCHES_EXHAUSTED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_search_cancelled() {
    SEARCHES_CANCELLED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_film_expanded() {
    FILMS_EXPANDED.fetch_add(1, Ordering::Relaxed);
}
pub fn record_path_enqueued() {
    PATHS_ENQUEUED.fetch_add(1, Ordering::Relaxed);
}

pub fn snapshot() -> MetricsSnapshot {
    MetricsSnapshot {
        records_decoded: RECORDS_DECODED.load(Ordering::Relaxed),
        decode_faults: DECODE_FAULTS.load(Ordering::Relaxed),
        actor_lookup_hits: ACTOR_LOOKUP_HITS.load(Ordering::Relaxed),
        actor_lookup_misses: ACTOR_LOOKUP_MISSES.load(Ordering::Relaxed),
        film_lookup_hits: FILM_LOOKUP_HITS.load(Ordering::Relaxed),
        film_lookup_misses: FILM_LOOKUP_MISSES.load(Ordering::Relaxed),

        searches_total: SEARCHES_TOTAL.load(Ordering::Relaxed),
        searches_found: SEARCHES_FOUND.load(Ordering::Relaxed),
        searches_exhausted: SEARCHES_EXHAUSTED.load(Ordering::Relaxed),
        searches_cancelled: SEARCHES_CANCELLED.load(Ordering::Relaxed),
        films_expanded: FILMS_EXPANDED.load(Ordering::Relaxed),
        paths_enqueued: PATHS_ENQUEUED.load(Ordering::Relaxed),
    }
}

pub fn reset() {
    RECORDS_DECODED.store(0, Ordering::Relaxed);
    DECODE_FAULTS.store(0, Ordering::Relaxed);
    ACTOR_LOOKUP_HITS.store(0, Ordering::Relaxed);
    ACTOR_LOOKUP_MISSES.store(0, Ordering::Relaxed);
    FILM_LOOKUP_HITS.store(0, Ordering::Relaxed);
    FILM_LOOKUP_MISSES.store(0, Ordering::Relaxed);

    SEARCHES_TOTAL.store(0, Ordering::Relaxed);
    SEARCHES_FOUND.store(0, Ordering::Relaxed);
    SEARCHES_EXHAUSTED.store(0, Ordering::Relaxed);
    SEARCHES_CANCELLED.store(0, Ordering::Relaxed);
    FILMS_EXPANDED.store(0, Ordering::Relaxed);
    PATHS_ENQUEUED.store(0, Ordering::Relaxed);
}
