//! Support for encoding and decoding values in the big-endian binary NBT
//! format.
//!
//! # Examples
//!
//! ```
//! use nbt_codec::{compound, to_binary, List, Value};
//!
//! let c = compound! {
//!     "byte" => 5_i8,
//!     "string" => "hello",
//!     "list_of_float" => List::Float(vec![
//!         std::f32::consts::PI,
//!         std::f32::consts::E,
//!         1.4142
//!     ]),
//! };
//!
//! let mut buf = vec![];
//!
//! to_binary(&c, &mut buf).unwrap();
//! ```
//!
//! Decode NBT data from its binary form.
//!
//! ```
//! use nbt_codec::{compound, from_binary, Value};
//!
//! let some_bytes = [10, 0, 0, 3, 0, 3, 105, 110, 116, 0, 0, 222, 173, 0];
//!
//! let expected_value = compound! {
//!     "int" => 0xdead
//! };
//!
//! let nbt = from_binary(&mut some_bytes.as_slice()).unwrap();
//!
//! assert_eq!(nbt, Value::Compound(expected_value));
//! ```

use std::io;

use thiserror::Error;

use crate::{Tag, UnknownTagId, MAX_DEPTH};

mod decode;
mod encode;
mod modified_utf8;
#[cfg(test)]
mod tests;

pub use decode::*;
pub use encode::*;

/// Errors that can occur when encoding or decoding binary NBT data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("an I/O error occurred: {0}")]
    Io(#[source] io::Error),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unknown tag id {0}")]
    UnknownTag(u8),
    #[error("malformed input around byte {offset}")]
    MalformedString { offset: usize },
    #[error("malformed input: partial character at end")]
    PartialCharacter,
    #[error("tried to process NBT data with too high complexity, depth > {}", MAX_DEPTH)]
    DepthExceeded,
    #[error("missing element type on list of length {0}")]
    MissingListType(i32),
    #[error("negative length {0}")]
    NegativeLength(i32),
    #[error("encoded string too long: {0} bytes")]
    StringTooLong(usize),
    #[error("{tag} of length {len} exceeds maximum of i32::MAX")]
    LengthOverflow { tag: Tag, len: usize },
    #[error("an End tag cannot be stored in a compound (key {0:?})")]
    EndInCompound(String),
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            Error::UnexpectedEof
        } else {
            Error::Io(e)
        }
    }
}

impl From<UnknownTagId> for Error {
    fn from(e: UnknownTagId) -> Self {
        Error::UnknownTag(e.0)
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
