use crate::error::DecodeResult;

use super::common::{actor_layout, read_children, read_cstr_at, utf8_at, Offset};

/// Decoded actor record (copied out of the buffer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRecord {
    pub name: String,
    pub films: Vec<Offset>,
}

/// Raw name bytes of the actor at `off`. Used by lookups to compare without allocating.
pub fn actor_name_bytes(buf: &[u8], off: Offset) -> DecodeResult<&[u8]> {
    read_cstr_at(buf, off.get())
}

pub fn decode_actor_name(buf: &[u8], off: Offset) -> DecodeResult<String> {
    utf8_at(actor_name_bytes(buf, off)?, off.get())
}

/// Film offsets (into the film buffer) listed by the actor record at `off`.
pub fn decode_actor_child_offsets(buf: &[u8], off: Offset) -> DecodeResult<Vec<Offset>> {
    let name = actor_name_bytes(buf, off)?;
    read_children(buf, off, actor_layout(name.len()))
}

pub fn decode_actor(buf: &[u8], off: Offset) -> DecodeResult<ActorRecord> {
    let name = actor_name_bytes(buf, off)?;
    let films = read_children(buf, off, actor_layout(name.len()))?;
    Ok(ActorRecord {
        name: utf8_at(name, off.get())?,
        films,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    // "Bob\0" count=2 at 4, pad to 8, offsets 100, 200
    fn bob() -> Vec<u8> {
        let mut b = b"Bob\0".to_vec();
        b.extend_from_slice(&2i16.to_le_bytes());
        b.extend_from_slice(&[0, 0]);
        b.extend_from_slice(&100i32.to_le_bytes());
        b.extend_from_slice(&200i32.to_le_bytes());
        b
    }

    #[test]
    fn decodes_name_and_children() {
        let buf = bob();
        let rec = decode_actor(&buf, Offset::new(0)).unwrap();
        assert_eq!(rec.name, "Bob");
        assert_eq!(rec.films, vec![Offset::new(100), Offset::new(200)]);
    }

    #[test]
    fn truncated_child_list_is_a_fault() {
        let mut buf = bob();
        buf.truncate(buf.len() - 2);
        let err = decode_actor_child_offsets(&buf, Offset::new(0)).unwrap_err();
        assert!(matches!(err, DecodeError::OutOfBounds { what: "child offsets", .. }));
    }

    #[test]
    fn negative_count_is_a_fault() {
        let mut buf = bob();
        buf[4..6].copy_from_slice(&(-1i16).to_le_bytes());
        assert_eq!(
            decode_actor_child_offsets(&buf, Offset::new(0)),
            Err(DecodeError::NegativeCount { at: 4, count: -1 })
        );
    }
}
