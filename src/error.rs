//! Decode faults raised while interpreting actordata/moviedata bytes.
//!
//! A decode fault is never the same thing as a lookup miss: misses are `Ok(None)`,
//! faults are `Err(DecodeError)`.

use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// A fixed-size field or slice does not fit in the buffer.
    #[error("{what} at offset {at} runs past end of buffer (len {len})")]
    OutOfBounds {
        what: &'static str,
        at: usize,
        len: usize,
    },

    /// No NUL terminator between `at` and the end of the buffer.
    #[error("string at offset {at} is not NUL-terminated")]
    Unterminated { at: usize },

    #[error("negative count {count} at offset {at}")]
    NegativeCount { at: usize, count: i32 },

    #[error("negative record offset {value} at offset {at}")]
    NegativeOffset { at: usize, value: i32 },

    #[error("string at offset {at} is not valid UTF-8")]
    InvalidUtf8 { at: usize },

    /// Buffer is too short to hold the record count.
    #[error("buffer of {len} bytes is too short for an offset table")]
    TableTooShort { len: usize },
}
