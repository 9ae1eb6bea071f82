//! doctor — full integrity scan of actordata/moviedata.
//!
//! Lookups trust the format (sorted tables, symmetric cross-references); this is
//! where that trust gets checked. Every table entry and every child reference is
//! decoded, faults are counted by category and never abort the scan.
//!
//! Категории:
//! - *_faults        — record itself does not decode (bad offset, no NUL, bad count, bad UTF-8)
//! - dangling_refs   — child offset that does not decode in the other buffer
//! - asymmetric_refs — actor lists film but film does not list actor (or vice versa)
//! - unsorted_*      — adjacent table entries not strictly increasing by key

use serde::Serialize;

use crate::error::DecodeError;
use crate::index::OffsetTable;
use crate::record::{
    actor_name_bytes, decode_actor, decode_actor_child_offsets, decode_film,
    decode_film_child_offsets, film_key, Offset,
};

const MAX_SAMPLES: usize = 16;

#[derive(Debug, Clone, Default, Serialize)]
pub struct DoctorReport {
    pub actors_total: u64,
    pub films_total: u64,
    pub actor_table_error: Option<String>,
    pub film_table_error: Option<String>,
    pub actor_faults: u64,
    pub film_faults: u64,
    pub dangling_refs: u64,
    pub asymmetric_refs: u64,
    pub unsorted_actors: u64,
    pub unsorted_films: u64,
    /// First few fault descriptions, for humans.
    pub samples: Vec<String>,
}

impl DoctorReport {
    pub fn is_clean(&self) -> bool {
        self.actor_table_error.is_none()
            && self.film_table_error.is_none()
            && self.actor_faults == 0
            && self.film_faults == 0
            && self.dangling_refs == 0
            && self.asymmetric_refs == 0
            && self.unsorted_actors == 0
            && self.unsorted_films == 0
    }

    fn note(&mut self, msg: String) {
        if self.samples.len() < MAX_SAMPLES {
            self.samples.push(msg);
        }
    }
}

pub fn scan(actors: &[u8], films: &[u8]) -> DoctorReport {
    let mut r = DoctorReport::default();

    match OffsetTable::parse(actors) {
        Ok(t) => scan_actors(&t, films, &mut r),
        Err(e) => r.actor_table_error = Some(e.to_string()),
    }
    match OffsetTable::parse(films) {
        Ok(t) => scan_films(&t, actors, &mut r),
        Err(e) => r.film_table_error = Some(e.to_string()),
    }

    r
}

fn scan_actors(table: &OffsetTable<'_>, films: &[u8], r: &mut DoctorReport) {
    let buf = table.buf();
    let mut prev: Option<&[u8]> = None;

    for (i, entry) in table.iter().enumerate() {
        r.actors_total += 1;
        let rec = entry.and_then(|off| {
            let name = actor_name_bytes(buf, off)?;
            decode_actor(buf, off)?;
            Ok((off, name))
        });
        let (off, name) = match rec {
            Ok(v) => v,
            Err(e) => {
                r.actor_faults += 1;
                r.note(format!("actor #{}: {}", i, e));
                prev = None;
                continue;
            }
        };
        if prev.is_some_and(|p| p >= name) {
            r.unsorted_actors += 1;
            r.note(format!("actor #{}: out of order", i));
        }
        prev = Some(name);

        for film in decode_actor_child_offsets(buf, off).unwrap_or_default() {
            check_back_ref(decode_film_child_offsets(films, film), off, film, "film", r);
        }
    }
}

fn scan_films(table: &OffsetTable<'_>, actors: &[u8], r: &mut DoctorReport) {
    let buf = table.buf();
    let mut prev: Option<(&[u8], u16)> = None;

    for (i, entry) in table.iter().enumerate() {
        r.films_total += 1;
        let rec = entry.and_then(|off| {
            let key = film_key(buf, off)?;
            decode_film(buf, off)?;
            decode_film_child_offsets(buf, off)?;
            Ok((off, key))
        });
        let (off, key) = match rec {
            Ok(v) => v,
            Err(e) => {
                r.film_faults += 1;
                r.note(format!("film #{}: {}", i, e));
                prev = None;
                continue;
            }
        };
        if prev.is_some_and(|p| p >= key) {
            r.unsorted_films += 1;
            r.note(format!("film #{}: out of order", i));
        }
        prev = Some(key);

        for actor in decode_film_child_offsets(buf, off).unwrap_or_default() {
            check_back_ref(decode_actor_child_offsets(actors, actor), off, actor, "actor", r);
        }
    }
}

/// `child` (a `kind` record) should decode and list `owner` among its own children.
fn check_back_ref(
    children: Result<Vec<Offset>, DecodeError>,
    owner: Offset,
    child: Offset,
    kind: &str,
    r: &mut DoctorReport,
) {
    match children {
        Ok(list) if list.contains(&owner) => {}
        Ok(_) => {
            r.asymmetric_refs += 1;
            r.note(format!("{} @{} does not list back @{}", kind, child, owner));
        }
        Err(e) => {
            r.dangling_refs += 1;
            r.note(format!("{} @{} referenced from @{}: {}", kind, child, owner, e));
        }
    }
}
