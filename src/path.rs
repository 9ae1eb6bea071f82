//! Path — a start actor followed by (film, co-star) hops.

use std::fmt;

use serde::Serialize;

use crate::record::Film;

/// One film-mediated edge: the previous actor was in `film` with `actor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub film: Film,
    pub actor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    start: String,
    hops: Vec<Hop>,
}

impl Path {
    /// Zero-hop path consisting of `start` alone.
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            hops: Vec::new(),
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }

    pub fn last_actor(&self) -> &str {
        self.hops.last().map_or(self.start.as_str(), |h| h.actor.as_str())
    }

    pub fn add_connection(&mut self, film: Film, actor: impl Into<String>) {
        self.hops.push(Hop {
            film,
            actor: actor.into(),
        });
    }

    /// Copy of this path with one more hop.
    pub fn extended(&self, film: Film, actor: impl Into<String>) -> Self {
        let mut next = Self {
            start: self.start.clone(),
            hops: Vec::with_capacity(self.hops.len() + 1),
        };
        next.hops.extend_from_slice(&self.hops);
        next.add_connection(film, actor);
        next
    }

    /// Every actor on the path, start first.
    pub fn actors(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.start.as_str()).chain(self.hops.iter().map(|h| h.actor.as_str()))
    }

    pub fn films(&self) -> impl Iterator<Item = &Film> + '_ {
        self.hops.iter().map(|h| &h.film)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.hops.is_empty() {
            return write!(f, "\t{}", self.start);
        }
        let mut prev = self.start.as_str();
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "\t{} was in {} with {}.", prev, hop.film, hop.actor)?;
            prev = hop.actor.as_str();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_path() {
        let p = Path::new("Kevin Bacon");
        assert_eq!(p.hop_count(), 0);
        assert_eq!(p.last_actor(), "Kevin Bacon");
        assert_eq!(p.to_string(), "\tKevin Bacon");
    }

    #[test]
    fn extended_leaves_original_untouched() {
        let p = Path::new("A");
        let q = p.extended(Film::new("F", 2000), "B");
        assert_eq!(p.hop_count(), 0);
        assert_eq!(q.hop_count(), 1);
        assert_eq!(q.last_actor(), "B");
        assert_eq!(q.actors().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn renders_one_line_per_hop() {
        let mut p = Path::new("Kevin Bacon");
        p.add_connection(Film::new("Apollo 13", 1995), "Tom Hanks");
        p.add_connection(Film::new("Big", 1988), "Elizabeth Perkins");
        assert_eq!(
            p.to_string(),
            "\tKevin Bacon was in \"Apollo 13\" (1995) with Tom Hanks.\n\
             \tTom Hanks was in \"Big\" (1988) with Elizabeth Perkins."
        );
    }

    #[test]
    fn serializes_start_and_hops() {
        let mut p = Path::new("A");
        p.add_connection(Film::new("F", 1999), "B");
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["start"], "A");
        assert_eq!(v["hops"][0]["film"]["title"], "F");
        assert_eq!(v["hops"][0]["film"]["year"], 1999);
        assert_eq!(v["hops"][0]["actor"], "B");
    }
}
