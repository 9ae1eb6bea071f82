//! Dataset fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It writes
//! cast lists in the actordata/moviedata layout so tests never need real data.

#![doc(hidden)]

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use byteorder::{ByteOrder, LittleEndian};

use crate::consts::{ACTOR_FILE, COUNT_SIZE, FILM_FILE, OFFSET_SIZE, YEAR_BASE};
use crate::record::common::{actor_layout, film_layout, RecordLayout};
use crate::record::Film;

/// Collects credits and serialises them into (actor buffer, film buffer).
///
/// Child lists keep insertion order, so BFS tie-breaks in tests are predictable.
#[derive(Debug, Default, Clone)]
pub struct DatasetBuilder {
    actors: BTreeMap<String, Vec<Film>>,
    films: BTreeMap<Film, Vec<String>>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `actor` appeared in (`title`, `year`).
    pub fn credit(mut self, actor: &str, title: &str, year: u16) -> Self {
        let film = Film::new(title, year);
        let films = self.actors.entry(actor.to_string()).or_default();
        if !films.contains(&film) {
            films.push(film.clone());
        }
        let cast = self.films.entry(film).or_default();
        if !cast.iter().any(|a| a == actor) {
            cast.push(actor.to_string());
        }
        self
    }

    /// Every actor in `cast` appears in the film.
    pub fn film(mut self, title: &str, year: u16, cast: &[&str]) -> Self {
        self.films.entry(Film::new(title, year)).or_default();
        for actor in cast {
            self = self.credit(actor, title, year);
        }
        self
    }

    /// An actor with no credits (present in the index, zero films).
    pub fn actor(mut self, name: &str) -> Self {
        self.actors.entry(name.to_string()).or_default();
        self
    }

    pub fn build(&self) -> (Vec<u8>, Vec<u8>) {
        let actor_offsets = place(
            self.actors
                .iter()
                .map(|(name, films)| record_size(actor_layout(name.len()), films.len())),
        );
        let film_offsets = place(
            self.films
                .iter()
                .map(|(film, cast)| record_size(film_layout(film.title.len()), cast.len())),
        );
        let actor_at: BTreeMap<&str, u32> = self
            .actors
            .keys()
            .map(String::as_str)
            .zip(actor_offsets.iter().copied())
            .collect();
        let film_at: BTreeMap<&Film, u32> =
            self.films.keys().zip(film_offsets.iter().copied()).collect();

        let actor_records = self
            .actors
            .iter()
            .map(|(name, films)| {
                let mut rec = name.as_bytes().to_vec();
                rec.push(0);
                let children = films.iter().map(|f| film_at[f]).collect::<Vec<_>>();
                finish_record(rec, actor_layout(name.len()), &children)
            })
            .collect::<Vec<_>>();
        let film_records = self
            .films
            .iter()
            .map(|(film, cast)| {
                let mut rec = film.title.as_bytes().to_vec();
                rec.push(0);
                rec.push(year_byte(film.year));
                let children = cast.iter().map(|a| actor_at[a.as_str()]).collect::<Vec<_>>();
                finish_record(rec, film_layout(film.title.len()), &children)
            })
            .collect::<Vec<_>>();

        (
            table_with_records(&actor_records),
            table_with_records(&film_records),
        )
    }

    /// Write `actordata` and `moviedata` into `dir`.
    pub fn write_to(&self, dir: &Path) -> Result<()> {
        let (actors, films) = self.build();
        std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
        let ap = dir.join(ACTOR_FILE);
        std::fs::write(&ap, actors).with_context(|| format!("write {}", ap.display()))?;
        let fp = dir.join(FILM_FILE);
        std::fs::write(&fp, films).with_context(|| format!("write {}", fp.display()))?;
        Ok(())
    }
}

/// Lay raw records out behind an offset table, in the given order.
pub fn table_with_records(records: &[Vec<u8>]) -> Vec<u8> {
    let mut at = (COUNT_SIZE + records.len() * OFFSET_SIZE) as u32;
    let mut out = Vec::new();
    out.extend_from_slice(&(records.len() as i32).to_le_bytes());
    for rec in records {
        out.extend_from_slice(&(at as i32).to_le_bytes());
        at += rec.len() as u32;
    }
    for rec in records {
        out.extend_from_slice(rec);
    }
    out
}

fn year_byte(year: u16) -> u8 {
    assert!(
        (YEAR_BASE..=YEAR_BASE + 255).contains(&year),
        "year {year} not representable"
    );
    (year - YEAR_BASE) as u8
}

fn record_size(layout: RecordLayout, children: usize) -> u32 {
    (layout.children_at + children * OFFSET_SIZE) as u32
}

fn place(sizes: impl ExactSizeIterator<Item = u32>) -> Vec<u32> {
    let mut at = (COUNT_SIZE + sizes.len() * OFFSET_SIZE) as u32;
    sizes
        .map(|s| {
            let here = at;
            at += s;
            here
        })
        .collect()
}

fn finish_record(mut rec: Vec<u8>, layout: RecordLayout, children: &[u32]) -> Vec<u8> {
    rec.resize(layout.count_at, 0);
    let mut count = [0u8; 2];
    LittleEndian::write_i16(&mut count, children.len() as i16);
    rec.extend_from_slice(&count);
    rec.resize(layout.children_at, 0);
    for &c in children {
        rec.extend_from_slice(&(c as i32).to_le_bytes());
    }
    rec
}
