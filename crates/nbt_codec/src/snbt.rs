//! Support for the stringified text form of NBT (SNBT).
//!
//! # Examples
//!
//! ```
//! use nbt_codec::{compound, from_snbt_str, to_snbt_string, List};
//!
//! let c = from_snbt_str(r#"{name: "Steve", pos: [1.5d, 64d, -3.25d], flags: [B; 1, 0]}"#).unwrap();
//!
//! assert_eq!(
//!     c,
//!     compound! {
//!         "name" => "Steve",
//!         "pos" => List::Double(vec![1.5, 64.0, -3.25]),
//!         "flags" => vec![1_i8, 0],
//!     }
//! );
//!
//! assert_eq!(
//!     to_snbt_string(&c),
//!     r#"{name:"Steve",pos:[1.5d,64.0d,-3.25d],flags:[B;1b,0b]}"#
//! );
//! ```
//!
//! Parse failures carry an excerpt of the input that ends at the point of
//! failure.
//!
//! ```
//! use nbt_codec::from_snbt_str;
//!
//! let err = from_snbt_str("{a: [1, \"two\"]}").unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     "Unable to insert String into List of Int at: {a: [1, \"two\"<--[HERE]"
//! );
//! ```

use thiserror::Error;

use crate::{Compound, Value};

mod literal;
mod reader;
#[cfg(test)]
mod tests;
mod writer;

pub use reader::SnbtReader;
pub use writer::{to_snbt_string, SnbtWriter};

/// Number of characters of input shown before the failure marker.
pub const EXCERPT_LEN: usize = 35;

/// Parses a compound from the start of `snbt`.
///
/// Text following the closing `}` of the root compound is ignored. Use
/// [`SnbtReader::cursor`] to find out where parsing stopped.
pub fn from_snbt_str(snbt: &str) -> Result<Compound> {
    SnbtReader::new(snbt).read_compound()
}

/// Parses any single value from the start of `snbt`.
///
/// Like [`from_snbt_str`], trailing text is ignored.
pub fn value_from_snbt_str(snbt: &str) -> Result<Value> {
    SnbtReader::new(snbt).read_value()
}

/// The category of an [`SnbtError`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SnbtErrorKind {
    /// The text does not follow the SNBT grammar.
    Syntax,
    /// A list or array element has a different type than its container
    /// allows.
    TypeMismatch,
}

/// An error produced while parsing SNBT.
///
/// Displays as the message followed by an excerpt of up to
/// [`EXCERPT_LEN`] characters preceding the failure, e.g.
/// `Expected ':' but got '1' at: {foo 1<--[HERE]`.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[error("{message} at: {excerpt}")]
pub struct SnbtError {
    kind: SnbtErrorKind,
    message: String,
    excerpt: String,
    cursor: usize,
}

impl SnbtError {
    pub(crate) fn new(
        kind: SnbtErrorKind,
        message: impl Into<String>,
        input: &[char],
        cursor: usize,
    ) -> Self {
        let end = cursor.min(input.len());
        let start = end.saturating_sub(EXCERPT_LEN);

        let mut excerpt = String::new();
        if end > EXCERPT_LEN {
            excerpt.push_str("...");
        }
        excerpt.extend(&input[start..end]);
        excerpt.push_str("<--[HERE]");

        Self {
            kind,
            message: message.into(),
            excerpt,
            cursor,
        }
    }

    pub fn kind(&self) -> SnbtErrorKind {
        self.kind
    }

    /// The description of what went wrong, without the excerpt.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The input preceding the failure, ending in `<--[HERE]`.
    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    /// Position of the failure, counted in characters from the start of the
    /// input.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

pub type Result<T, E = SnbtError> = std::result::Result<T, E>;
