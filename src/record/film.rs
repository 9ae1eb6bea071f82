use std::fmt;

use serde::Serialize;

use crate::consts::YEAR_BASE;
use crate::error::DecodeResult;

use super::common::{film_layout, read_children, read_cstr_at, read_u8_at, utf8_at, Offset};

/// A film as identified in the index: equality and ordering by (title, year).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Film {
    pub title: String,
    pub year: u16,
}

impl Film {
    pub fn new(title: impl Into<String>, year: u16) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" ({})", self.title, self.year)
    }
}

/// Borrowed (title bytes, year) of the film at `off`, for comparisons in lookups.
pub fn film_key(buf: &[u8], off: Offset) -> DecodeResult<(&[u8], u16)> {
    let title = read_cstr_at(buf, off.get())?;
    let raw = read_u8_at(buf, off.get() + title.len() + 1, "film year")?;
    Ok((title, YEAR_BASE + raw as u16))
}

pub fn decode_film(buf: &[u8], off: Offset) -> DecodeResult<Film> {
    let (title, year) = film_key(buf, off)?;
    Ok(Film {
        title: utf8_at(title, off.get())?,
        year,
    })
}

/// Actor offsets (into the actor buffer) listed by the film record at `off`.
pub fn decode_film_child_offsets(buf: &[u8], off: Offset) -> DecodeResult<Vec<Offset>> {
    let (title, _) = film_key(buf, off)?;
    read_children(buf, off, film_layout(title.len()))
}
