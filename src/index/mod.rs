//! index — sorted offset tables at the head of actordata/moviedata.
//!
//! [count i32][offset i32 * count], offsets sorted by record key. Sortedness is
//! trusted here (doctor checks it); lookups never return a neighbour, only an
//! exact match.

use crate::consts::{COUNT_SIZE, OFFSET_SIZE};
use crate::error::{DecodeError, DecodeResult};
use crate::record::common::{read_i32_at, slice_at};
use crate::record::{actor_name_bytes, film_key, Film, Offset};

/// View over the offset table of one buffer.
#[derive(Clone, Copy, Debug)]
pub struct OffsetTable<'a> {
    buf: &'a [u8],
    count: usize,
}

impl<'a> OffsetTable<'a> {
    /// Validate the count and that the whole table fits in the buffer.
    pub fn parse(buf: &'a [u8]) -> DecodeResult<Self> {
        let raw = read_i32_at(buf, 0, "record count")
            .map_err(|_| DecodeError::TableTooShort { len: buf.len() })?;
        if raw < 0 {
            return Err(DecodeError::NegativeCount { at: 0, count: raw });
        }
        let count = raw as usize;
        let table_len = count.checked_mul(OFFSET_SIZE).unwrap_or(usize::MAX);
        slice_at(buf, COUNT_SIZE, table_len, "offset table")?;
        Ok(Self { buf, count })
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// The i-th record offset. `i` past the end is reported, never read.
    pub fn offset(&self, i: usize) -> DecodeResult<Offset> {
        if i >= self.count {
            return Err(DecodeError::OutOfBounds {
                what: "offset table index",
                at: i,
                len: self.count,
            });
        }
        let at = COUNT_SIZE + i * OFFSET_SIZE;
        Offset::from_raw(read_i32_at(self.buf, at, "offset table")?, at)
    }

    pub fn iter(&self) -> impl Iterator<Item = DecodeResult<Offset>> + '_ {
        (0..self.count).map(move |i| self.offset(i))
    }

    /// First index whose record is not `less` than the target (std lower_bound).
    /// Returns `len()` if every record sorts before the target.
    pub fn lower_bound<F>(&self, mut less: F) -> DecodeResult<usize>
    where
        F: FnMut(Offset) -> DecodeResult<bool>,
    {
        let (mut lo, mut hi) = (0usize, self.count);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if less(self.offset(mid)?)? {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Ok(lo)
    }
}

/// Offset of the actor record whose name equals `name` exactly (byte-wise).
pub fn find_actor(buf: &[u8], name: &str) -> DecodeResult<Option<Offset>> {
    let table = OffsetTable::parse(buf)?;
    let target = name.as_bytes();
    let i = table.lower_bound(|off| Ok(actor_name_bytes(buf, off)? < target))?;
    if i == table.len() {
        return Ok(None);
    }
    let off = table.offset(i)?;
    if actor_name_bytes(buf, off)? == target {
        Ok(Some(off))
    } else {
        Ok(None)
    }
}

/// Offset of the film record matching `film` on (title, year).
pub fn find_film(buf: &[u8], film: &Film) -> DecodeResult<Option<Offset>> {
    let table = OffsetTable::parse(buf)?;
    let target = (film.title.as_bytes(), film.year);
    let i = table.lower_bound(|off| Ok(film_key(buf, off)? < target))?;
    // Target sorting after every entry: bounds first, then decode.
    if i == table.len() {
        return Ok(None);
    }
    let off = table.offset(i)?;
    if film_key(buf, off)? == target {
        Ok(Some(off))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{decode_actor_name, decode_film};
    use crate::testing::DatasetBuilder;

    fn sample() -> (Vec<u8>, Vec<u8>) {
        DatasetBuilder::new()
            .credit("Kevin Bacon", "Apollo 13", 1995)
            .credit("Tom Hanks", "Apollo 13", 1995)
            .credit("Tom Hanks", "Big", 1988)
            .credit("Meg Ryan", "Joe Versus the Volcano", 1990)
            .credit("Tom Hanks", "Joe Versus the Volcano", 1990)
            .credit("Zelda", "Heat", 1986)
            .credit("Al Pacino", "Heat", 1995)
            .build()
    }

    #[test]
    fn table_reports_count() {
        let (actors, films) = sample();
        assert_eq!(OffsetTable::parse(&actors).unwrap().len(), 5);
        assert_eq!(OffsetTable::parse(&films).unwrap().len(), 5);
    }

    #[test]
    fn finds_every_present_actor() {
        let (actors, _) = sample();
        for name in ["Al Pacino", "Kevin Bacon", "Meg Ryan", "Tom Hanks", "Zelda"] {
            let off = find_actor(&actors, name).unwrap().expect(name);
            assert_eq!(decode_actor_name(&actors, off).unwrap(), name);
        }
    }

    #[test]
    fn absent_actor_is_none_not_neighbour() {
        let (actors, _) = sample();
        // before first, between, prefix of a real name, after last
        for name in ["", "Aaron", "Kevin", "Kevin Bacon ", "Tom", "Zzz"] {
            assert_eq!(find_actor(&actors, name).unwrap(), None, "{name:?}");
        }
    }

    #[test]
    fn film_lookup_uses_title_and_year() {
        let (_, films) = sample();
        let off = find_film(&films, &Film::new("Heat", 1986)).unwrap().unwrap();
        assert_eq!(decode_film(&films, off).unwrap(), Film::new("Heat", 1986));
        let off = find_film(&films, &Film::new("Heat", 1995)).unwrap().unwrap();
        assert_eq!(decode_film(&films, off).unwrap(), Film::new("Heat", 1995));
        assert_eq!(find_film(&films, &Film::new("Heat", 1990)).unwrap(), None);
    }

    #[test]
    fn film_sorting_after_all_entries_is_none() {
        let (_, films) = sample();
        assert_eq!(find_film(&films, &Film::new("Zardoz", 1974)).unwrap(), None);
        assert_eq!(find_film(&films, &Film::new("Joe Versus the Volcano", 2000)).unwrap(), None);
    }

    #[test]
    fn empty_table_finds_nothing() {
        let (actors, films) = DatasetBuilder::new().build();
        assert_eq!(find_actor(&actors, "anyone").unwrap(), None);
        assert_eq!(find_film(&films, &Film::new("x", 1900)).unwrap(), None);
    }

    #[test]
    fn short_or_negative_table_is_a_fault() {
        assert_eq!(
            OffsetTable::parse(&[1, 0]).unwrap_err(),
            DecodeError::TableTooShort { len: 2 }
        );
        let neg = (-3i32).to_le_bytes();
        assert_eq!(
            OffsetTable::parse(&neg).unwrap_err(),
            DecodeError::NegativeCount { at: 0, count: -3 }
        );
        // claims 10 entries but holds none
        let big = 10i32.to_le_bytes();
        assert!(matches!(
            find_actor(&big, "x"),
            Err(DecodeError::OutOfBounds { what: "offset table", .. })
        ));
    }
}
