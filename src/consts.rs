//! Общие константы формата actordata/moviedata.
//!
//! Layout (both files):
//! [count i32][offset i32 * count][records...]
//!
//! Actor record:
//! [name\0][pad to even][film_count i16][pad to 4][film_off i32 * film_count]
//!
//! Film record:
//! [title\0][year-1900 u8][pad to even][cast_count i16][pad to 4][actor_off i32 * cast_count]
//!
//! Padding is measured from the start of the record, not from the start of the file.

// -------- Files --------
pub const ACTOR_FILE: &str = "actordata";
pub const FILM_FILE: &str = "moviedata";

// -------- Offset table --------
pub const COUNT_SIZE: usize = 4;
pub const OFFSET_SIZE: usize = 4;

// -------- Records --------
pub const CHILD_COUNT_SIZE: usize = 2;
pub const YEAR_SIZE: usize = 1;
pub const YEAR_BASE: u16 = 1900;
