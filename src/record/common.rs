//! record/common — bounds-checked primitives shared by actor and film records.
//!
//! Every read goes through `slice_at`, so a bad offset or count surfaces as a
//! `DecodeError` instead of an out-of-range index.

use byteorder::{ByteOrder, LittleEndian};

use crate::consts::{CHILD_COUNT_SIZE, OFFSET_SIZE, YEAR_SIZE};
use crate::error::{DecodeError, DecodeResult};

/// Byte offset of a record, relative to the start of the buffer it lives in.
///
/// Obtained from an offset table or a child list; only turned back into a
/// position through the checked readers below.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Offset(u32);

impl Offset {
    pub const fn new(v: u32) -> Self {
        Self(v)
    }

    /// Validate a raw on-disk i32 read at byte position `at`.
    pub fn from_raw(value: i32, at: usize) -> DecodeResult<Self> {
        u32::try_from(value)
            .map(Self)
            .map_err(|_| DecodeError::NegativeOffset { at, value })
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the child count and the child offsets sit, relative to the record start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    pub count_at: usize,
    pub children_at: usize,
}

#[inline]
pub fn round_even(n: usize) -> usize {
    n + (n & 1)
}

#[inline]
pub fn round_quad(n: usize) -> usize {
    (n + 3) & !3
}

/// Actor: [name\0][pad even][count i16][pad 4][offsets].
pub fn actor_layout(name_len: usize) -> RecordLayout {
    let count_at = round_even(name_len + 1);
    RecordLayout {
        count_at,
        children_at: round_quad(count_at + CHILD_COUNT_SIZE),
    }
}

/// Film: [title\0][year u8][pad even][count i16][pad 4][offsets].
pub fn film_layout(title_len: usize) -> RecordLayout {
    let count_at = round_even(title_len + 1 + YEAR_SIZE);
    RecordLayout {
        count_at,
        children_at: round_quad(count_at + CHILD_COUNT_SIZE),
    }
}

pub fn slice_at<'a>(
    buf: &'a [u8],
    at: usize,
    len: usize,
    what: &'static str,
) -> DecodeResult<&'a [u8]> {
    at.checked_add(len)
        .and_then(|end| buf.get(at..end))
        .ok_or(DecodeError::OutOfBounds {
            what,
            at,
            len: buf.len(),
        })
}

pub fn read_u8_at(buf: &[u8], at: usize, what: &'static str) -> DecodeResult<u8> {
    Ok(slice_at(buf, at, 1, what)?[0])
}

pub fn read_i16_at(buf: &[u8], at: usize, what: &'static str) -> DecodeResult<i16> {
    Ok(LittleEndian::read_i16(slice_at(buf, at, 2, what)?))
}

pub fn read_i32_at(buf: &[u8], at: usize, what: &'static str) -> DecodeResult<i32> {
    Ok(LittleEndian::read_i32(slice_at(buf, at, 4, what)?))
}

/// NUL-terminated bytes starting at `at`, terminator excluded.
pub fn read_cstr_at(buf: &[u8], at: usize) -> DecodeResult<&[u8]> {
    let tail = buf.get(at..).ok_or(DecodeError::OutOfBounds {
        what: "string",
        at,
        len: buf.len(),
    })?;
    let nul = tail
        .iter()
        .position(|&b| b == 0)
        .ok_or(DecodeError::Unterminated { at })?;
    Ok(&tail[..nul])
}

pub fn utf8_at(bytes: &[u8], at: usize) -> DecodeResult<String> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|_| DecodeError::InvalidUtf8 { at })
}

/// Read the i16 child count at `record + layout.count_at` and the offsets that follow.
pub fn read_children(buf: &[u8], record: Offset, layout: RecordLayout) -> DecodeResult<Vec<Offset>> {
    let base = record.get();
    let count_pos = base.saturating_add(layout.count_at);
    let count = read_i16_at(buf, count_pos, "child count")?;
    if count < 0 {
        return Err(DecodeError::NegativeCount {
            at: count_pos,
            count: count as i32,
        });
    }
    let count = count as usize;
    let first = base.saturating_add(layout.children_at);
    let raw = slice_at(buf, first, count * OFFSET_SIZE, "child offsets")?;
    raw.chunks_exact(OFFSET_SIZE)
        .enumerate()
        .map(|(i, c)| Offset::from_raw(LittleEndian::read_i32(c), first + i * OFFSET_SIZE))
        .collect()
}
