//! graph — the two index buffers seen as a bipartite actor/film graph.
//!
//! `Ok(None)`  — the actor/film is not in the index.
//! `Ok(Some(v))` — present; `v` may be empty.
//! `Err(_)`    — the record (or one of its children) could not be decoded.
//!
//! `films_of_lossy`/`cast_of_lossy` are for traversal: a child that does not
//! decode is dropped with a `warn!` and the readable ones are kept. Only a
//! fault in the record itself fails the call.
//!
//! No caching: every call re-reads the buffers, so results depend only on the
//! bytes and the argument.

use log::warn;

use crate::error::{DecodeError, DecodeResult};
use crate::index::{find_actor, find_film, OffsetTable};
use crate::metrics::{record_actor_lookup, record_decode_fault, record_decoded, record_film_lookup};
use crate::record::{
    decode_actor_child_offsets, decode_actor_name, decode_film, decode_film_child_offsets, Film,
    Offset,
};

/// Children of one record that decoded, plus how many did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expansion<T> {
    pub items: Vec<T>,
    pub faults: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct Graph<'a> {
    actors: &'a [u8],
    films: &'a [u8],
}

impl<'a> Graph<'a> {
    pub fn new(actors: &'a [u8], films: &'a [u8]) -> Self {
        Self { actors, films }
    }

    /// Films `actor` appeared in, in record order.
    pub fn films_of(&self, actor: &str) -> DecodeResult<Option<Vec<Film>>> {
        faults_counted(self.films_of_inner(actor))
    }

    /// Names of the cast of `film`, in record order.
    pub fn cast_of(&self, film: &Film) -> DecodeResult<Option<Vec<String>>> {
        faults_counted(self.cast_of_inner(film))
    }

    /// Like `films_of`, but a film reference that does not decode is skipped.
    pub fn films_of_lossy(&self, actor: &str) -> DecodeResult<Option<Expansion<Film>>> {
        let children = match faults_counted(self.actor_children(actor))? {
            Some(c) => c,
            None => return Ok(None),
        };
        let out = decode_each(children, |c| decode_film(self.films, c), |c, e| {
            warn!("actor '{}': film @{}: {}", actor, c, e)
        });
        record_decoded(out.items.len() + 1);
        Ok(Some(out))
    }

    /// Like `cast_of`, but an actor reference that does not decode is skipped.
    pub fn cast_of_lossy(&self, film: &Film) -> DecodeResult<Option<Expansion<String>>> {
        let children = match faults_counted(self.film_children(film))? {
            Some(c) => c,
            None => return Ok(None),
        };
        let out = decode_each(children, |c| decode_actor_name(self.actors, c), |c, e| {
            warn!("film {}: actor @{}: {}", film, c, e)
        });
        record_decoded(out.items.len() + 1);
        Ok(Some(out))
    }

    pub fn actor_count(&self) -> DecodeResult<usize> {
        Ok(OffsetTable::parse(self.actors)?.len())
    }

    pub fn film_count(&self) -> DecodeResult<usize> {
        Ok(OffsetTable::parse(self.films)?.len())
    }

    fn actor_children(&self, actor: &str) -> DecodeResult<Option<Vec<Offset>>> {
        let found = find_actor(self.actors, actor)?;
        record_actor_lookup(found.is_some());
        match found {
            Some(off) => Ok(Some(decode_actor_child_offsets(self.actors, off)?)),
            None => Ok(None),
        }
    }

    fn film_children(&self, film: &Film) -> DecodeResult<Option<Vec<Offset>>> {
        let found = find_film(self.films, film)?;
        record_film_lookup(found.is_some());
        match found {
            Some(off) => Ok(Some(decode_film_child_offsets(self.films, off)?)),
            None => Ok(None),
        }
    }

    fn films_of_inner(&self, actor: &str) -> DecodeResult<Option<Vec<Film>>> {
        let Some(children) = self.actor_children(actor)? else {
            return Ok(None);
        };
        let films = children
            .into_iter()
            .map(|c| decode_film(self.films, c))
            .collect::<DecodeResult<Vec<_>>>()?;
        record_decoded(films.len() + 1);
        Ok(Some(films))
    }

    fn cast_of_inner(&self, film: &Film) -> DecodeResult<Option<Vec<String>>> {
        let Some(children) = self.film_children(film)? else {
            return Ok(None);
        };
        let cast = children
            .into_iter()
            .map(|c| decode_actor_name(self.actors, c))
            .collect::<DecodeResult<Vec<_>>>()?;
        record_decoded(cast.len() + 1);
        Ok(Some(cast))
    }
}

fn faults_counted<T>(r: DecodeResult<T>) -> DecodeResult<T> {
    if r.is_err() {
        record_decode_fault();
    }
    r
}

fn decode_each<T>(
    children: Vec<Offset>,
    decode: impl Fn(Offset) -> DecodeResult<T>,
    on_fault: impl Fn(Offset, &DecodeError),
) -> Expansion<T> {
    let mut out = Expansion { items: Vec::with_capacity(children.len()), faults: 0 };
    for c in children {
        match decode(c) {
            Ok(v) => out.items.push(v),
            Err(e) => {
                on_fault(c, &e);
                record_decode_fault();
                out.faults += 1;
            }
        }
    }
    out
}
