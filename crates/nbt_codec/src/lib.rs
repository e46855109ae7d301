//! A codec for Named Binary Tag (NBT) data and its stringified text form
//! (SNBT).
//!
//! Values can be built in memory with [`Value`], [`List`] and [`Compound`]
//! (or the [`compound!`] macro), encoded to and decoded from the big-endian
//! binary format with the [`binary`] module, and parsed from or rendered to
//! SNBT with the [`snbt`] module.
//!
//! The codec never touches files or compression streams. Callers hand it any
//! [`std::io::Read`]/[`std::io::Write`] (possibly wrapped in a decompressor)
//! or a `&str`.
//!
//! # Features
//!
//! - `binary` (default): the binary codec.
//! - `snbt` (default): the SNBT reader and writer. Also provides the
//!   [`Display`](std::fmt::Display) impls of the value types.
//! - `serde`: `Serialize`/`Deserialize` impls for the value types.
// Run locally with `RUSTDOCFLAGS="--cfg docsrs" cargo +nightly doc --all-features --open`
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "binary")]
#[cfg_attr(docsrs, doc(cfg(feature = "binary")))]
pub use binary::{from_binary, to_binary};
pub use compound::Compound;
pub use error::*;
pub use list::List;
#[cfg(feature = "snbt")]
#[cfg_attr(docsrs, doc(cfg(feature = "snbt")))]
pub use snbt::{from_snbt_str, to_snbt_string};
pub use tag::Tag;
pub use value::{Value, ValueRef};

#[cfg(feature = "binary")]
#[cfg_attr(docsrs, doc(cfg(feature = "binary")))]
pub mod binary;
pub mod compound;
mod error;
pub mod list;
#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde;
#[cfg(feature = "snbt")]
#[cfg_attr(docsrs, doc(cfg(feature = "snbt")))]
pub mod snbt;
mod tag;
pub mod value;

/// Maximum nesting of lists and compounds accepted by the decoders and
/// produced by the encoder.
pub const MAX_DEPTH: usize = 512;

/// A convenience macro for constructing [`Compound`]s.
///
/// Key expressions must implement `Into<String>` while value expressions must
/// implement `Into<Value>`.
///
/// # Examples
///
/// ```
/// use nbt_codec::{compound, List};
///
/// let c = compound! {
///     "byte" => 123_i8,
///     "list_of_int" => List::Int(vec![3, -7, 5]),
///     "list_of_string" => List::String(vec![
///         "foo".to_owned(),
///         "bar".to_owned(),
///         "baz".to_owned()
///     ]),
///     "string" => "aé日",
///     "compound" => compound! {
///         "foo" => 1,
///         "bar" => 2,
///         "baz" => 3,
///     },
///     "int_array" => vec![5, -9, i32::MIN, 0, i32::MAX],
///     "byte_array" => vec![0_i8, 2, 3],
///     "long_array" => vec![123_i64, 456, 789],
/// };
///
/// println!("{c:?}");
/// ```
#[macro_export]
macro_rules! compound {
    ($($key:expr => $value:expr),* $(,)?) => {
        <$crate::Compound as ::std::iter::FromIterator<(::std::string::String, $crate::Value)>>::from_iter([
            $(
                (
                    ::std::convert::Into::<::std::string::String>::into($key),
                    ::std::convert::Into::<$crate::Value>::into($value)
                ),
            )*
        ])
    };
}
