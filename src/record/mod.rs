//! record — decoding of single actor/film records at a given offset.
//!
//! Pure parsing: no lookups, no search, no allocation beyond the values returned.
//!
//! Подмодули:
//! - common.rs — Offset, padding/alignment arithmetic, checked readers
//! - actor.rs  — actor record (name + film offsets)
//! - film.rs   — film record (title + year + actor offsets), Film value

pub mod actor;
pub mod common;
pub mod film;

pub use actor::{
    actor_name_bytes, decode_actor, decode_actor_child_offsets, decode_actor_name, ActorRecord,
};
pub use common::{actor_layout, film_layout, Offset, RecordLayout};
pub use film::{decode_film, decode_film_child_offsets, film_key, Film};
