//! Breadth-first search over actor -> film -> actor edges.
//!
//! Frontier holds whole paths. An actor is marked seen when first enqueued, a
//! film when first expanded; neither set is ever cleared, so the loop always
//! terminates. The first time `end` is dequeued its path is a shortest one.
//!
//! A reference that does not decode drops only that edge; a record that does
//! not decode has no edges. Both are counted in `faults_skipped`.

use std::collections::{HashSet, VecDeque};

use log::{debug, trace, warn};

use crate::graph::Graph;
use crate::metrics::{
    record_film_expanded, record_path_enqueued, record_search_cancelled, record_search_exhausted,
    record_search_found, record_search_started,
};
use crate::path::Path;
use crate::record::Film;

use super::options::{SearchOptions, SearchOutcome, SearchStats};

/// Shortest path from `start` to `end`, or None if they are not connected.
pub fn shortest_path(graph: &Graph<'_>, start: &str, end: &str) -> Option<Path> {
    shortest_path_with(graph, start, end, &SearchOptions::default())
        .0
        .into_path()
}

pub fn shortest_path_with(
    graph: &Graph<'_>,
    start: &str,
    end: &str,
    opts: &SearchOptions,
) -> (SearchOutcome, SearchStats) {
    record_search_started();
    let mut stats = SearchStats::default();

    if start == end {
        record_search_found();
        return (SearchOutcome::Found(Path::new(start)), stats);
    }

    debug!("search: '{}' -> '{}'", start, end);

    let mut queue: VecDeque<Path> = VecDeque::new();
    let mut seen_actors: HashSet<String> = HashSet::new();
    let mut seen_films: HashSet<Film> = HashSet::new();

    queue.push_back(Path::new(start));
    seen_actors.insert(start.to_string());
    stats.actors_seen = 1;

    while let Some(path) = queue.pop_front() {
        if opts.cancelled() {
            debug!("search: cancelled after {} dequeues", stats.paths_dequeued);
            record_search_cancelled();
            return (SearchOutcome::Cancelled, stats);
        }
        stats.paths_dequeued += 1;

        let tail = path.last_actor();
        if tail == end {
            debug!(
                "search: found {} hop(s), {} film(s) expanded",
                path.hop_count(),
                stats.films_expanded
            );
            record_search_found();
            return (SearchOutcome::Found(path), stats);
        }
        if opts.max_hops.is_some_and(|max| path.hop_count() >= max) {
            continue;
        }

        trace!("search: expand '{}' at depth {}", tail, path.hop_count());
        let films = match graph.films_of_lossy(tail) {
            Ok(Some(e)) => {
                stats.faults_skipped += e.faults as u64;
                e.items
            }
            Ok(None) => {
                trace!("search: '{}' not in actor index", tail);
                continue;
            }
            Err(e) => {
                warn!("search: skip actor '{}': {}", tail, e);
                stats.faults_skipped += 1;
                continue;
            }
        };

        for film in films {
            if !seen_films.insert(film.clone()) {
                continue;
            }
            stats.films_expanded += 1;
            record_film_expanded();

            let cast = match graph.cast_of_lossy(&film) {
                Ok(Some(e)) => {
                    stats.faults_skipped += e.faults as u64;
                    e.items
                }
                Ok(None) => {
                    warn!("search: {} referenced by '{}' but not indexed", film, tail);
                    continue;
                }
                Err(e) => {
                    warn!("search: skip film {}: {}", film, e);
                    stats.faults_skipped += 1;
                    continue;
                }
            };

            for costar in cast {
                if seen_actors.contains(&costar) {
                    continue;
                }
                seen_actors.insert(costar.clone());
                stats.actors_seen += 1;
                queue.push_back(path.extended(film.clone(), costar));
                record_path_enqueued();
            }
        }
    }

    debug!(
        "search: no path, {} actor(s) reached, {} film(s) expanded",
        stats.actors_seen, stats.films_expanded
    );
    record_search_exhausted();
    (SearchOutcome::NoPath, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::CancelToken;
    use crate::testing::DatasetBuilder;

    #[test]
    fn single_shared_film() {
        let (a, f) = DatasetBuilder::new()
            .film("Apollo 13", 1995, &["Kevin Bacon", "Tom Hanks"])
            .build();
        let g = Graph::new(&a, &f);
        let p = shortest_path(&g, "Kevin Bacon", "Tom Hanks").unwrap();
        assert_eq!(p.start(), "Kevin Bacon");
        assert_eq!(p.hop_count(), 1);
        assert_eq!(p.hops()[0].film, Film::new("Apollo 13", 1995));
        assert_eq!(p.hops()[0].actor, "Tom Hanks");
    }

    #[test]
    fn same_actor_is_trivial_even_if_unknown() {
        let (a, f) = DatasetBuilder::new().build();
        let g = Graph::new(&a, &f);
        let (out, stats) = shortest_path_with(&g, "X", "X", &SearchOptions::default());
        assert_eq!(out, SearchOutcome::Found(Path::new("X")));
        assert_eq!(stats.paths_dequeued, 0);
    }

    #[test]
    fn unknown_start_has_no_path() {
        let (a, f) = DatasetBuilder::new()
            .film("F", 2000, &["A", "B"])
            .build();
        let g = Graph::new(&a, &f);
        assert_eq!(shortest_path(&g, "Nobody", "A"), None);
    }

    #[test]
    fn each_film_expanded_once() {
        // A and B both reach F2; F2 must be expanded a single time.
        let (a, f) = DatasetBuilder::new()
            .film("F1", 2000, &["S", "A", "B"])
            .film("F2", 2001, &["A", "B", "C"])
            .build();
        let g = Graph::new(&a, &f);
        let (out, stats) = shortest_path_with(&g, "S", "Z", &SearchOptions::default());
        assert_eq!(out, SearchOutcome::NoPath);
        assert_eq!(stats.films_expanded, 2);
        assert_eq!(stats.actors_seen, 4);
    }

    #[test]
    fn tie_break_is_first_discovered() {
        // two 2-hop routes S->A->T and S->B->T; A is listed first in F1
        let (a, f) = DatasetBuilder::new()
            .film("F1", 2000, &["S", "A", "B"])
            .film("FA", 2001, &["A", "T"])
            .film("FB", 2002, &["B", "T"])
            .build();
        let g = Graph::new(&a, &f);
        let p = shortest_path(&g, "S", "T").unwrap();
        assert_eq!(p.actors().collect::<Vec<_>>(), vec!["S", "A", "T"]);
    }

    #[test]
    fn max_hops_cuts_search() {
        let (a, f) = DatasetBuilder::new()
            .film("F1", 2000, &["A", "B"])
            .film("F2", 2000, &["B", "C"])
            .film("F3", 2000, &["C", "D"])
            .build();
        let g = Graph::new(&a, &f);
        let opts = SearchOptions::default().with_max_hops(Some(2));
        assert_eq!(shortest_path_with(&g, "A", "D", &opts).0, SearchOutcome::NoPath);
        let opts = SearchOptions::default().with_max_hops(Some(3));
        assert!(shortest_path_with(&g, "A", "D", &opts).0.is_found());
    }

    #[test]
    fn cancelled_token_stops_search() {
        let (a, f) = DatasetBuilder::new()
            .film("F1", 2000, &["A", "B"])
            .build();
        let g = Graph::new(&a, &f);
        let token = CancelToken::new();
        token.cancel();
        let opts = SearchOptions::default().with_cancel(token);
        let (out, stats) = shortest_path_with(&g, "A", "B", &opts);
        assert_eq!(out, SearchOutcome::Cancelled);
        assert_eq!(stats.paths_dequeued, 0);
    }
}
