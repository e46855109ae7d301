//! Support for serde.
//!
//! [`Value`](crate::Value), [`List`](crate::List) and
//! [`Compound`](crate::Compound) implement `Serialize` and `Deserialize`, so
//! they can be converted to and from other self-describing formats. They also
//! implement `Deserializer`, which allows deserializing Rust types directly
//! out of decoded NBT.
//!
//! # Examples
//!
//! ```
//! use nbt_codec::compound;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, PartialEq, Debug)]
//! struct Player {
//!     name: String,
//!     health: f32,
//!     flying: bool,
//! }
//!
//! let c = compound! {
//!     "name" => "Steve",
//!     "health" => 20.0_f32,
//!     "flying" => false,
//! };
//!
//! let player = Player::deserialize(c).unwrap();
//!
//! assert_eq!(
//!     player,
//!     Player {
//!         name: "Steve".into(),
//!         health: 20.0,
//!         flying: false,
//!     }
//! );
//! ```

use std::fmt;

use thiserror::Error;

mod de;
mod ser;

/// Errors that can occur while deserializing from a value.
#[derive(Clone, Error, Debug)]
#[error("{0}")]
pub struct Error(Box<str>);

impl Error {
    fn new(s: impl Into<Box<str>>) -> Self {
        Self(s.into())
    }
}

impl serde::de::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: fmt::Display,
    {
        Self::new(format!("{msg}"))
    }
}
