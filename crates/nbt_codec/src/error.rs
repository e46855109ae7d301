use thiserror::Error;

use crate::Tag;

/// A numeric type id outside of `0..=12` was encountered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("unknown tag id {0}")]
pub struct UnknownTagId(pub u8);

/// A value was inserted into a container that holds a different kind of
/// element.
///
/// `container` is the kind of the receiving container (a [`Tag::List`] or one
/// of the array tags) while `expected` is the element kind that container
/// holds.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("Unable to insert {actual} into {container} of {expected}")]
pub struct TypeMismatch {
    pub container: Tag,
    pub expected: Tag,
    pub actual: Tag,
}
