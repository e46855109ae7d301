use std::fmt;

use crate::UnknownTagId;

/// One of the possible NBT data types.
///
/// The discriminant of each variant is the numeric type id written on the
/// wire.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum Tag {
    // Variant order is significant!
    End,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
    LongArray,
}

/// Lookup table from type id to tag, indexed by the id itself.
const TAGS: [Tag; 13] = [
    Tag::End,
    Tag::Byte,
    Tag::Short,
    Tag::Int,
    Tag::Long,
    Tag::Float,
    Tag::Double,
    Tag::ByteArray,
    Tag::String,
    Tag::List,
    Tag::Compound,
    Tag::IntArray,
    Tag::LongArray,
];

impl Tag {
    /// Returns the numeric type id of this tag.
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Returns the name of this tag for error reporting purposes.
    pub const fn name(self) -> &'static str {
        match self {
            Tag::End => "End",
            Tag::Byte => "Byte",
            Tag::Short => "Short",
            Tag::Int => "Int",
            Tag::Long => "Long",
            Tag::Float => "Float",
            Tag::Double => "Double",
            Tag::ByteArray => "ByteArray",
            Tag::String => "String",
            Tag::List => "List",
            Tag::Compound => "Compound",
            Tag::IntArray => "IntArray",
            Tag::LongArray => "LongArray",
        }
    }
}

impl TryFrom<u8> for Tag {
    type Error = UnknownTagId;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        TAGS.get(usize::from(id))
            .copied()
            .ok_or(UnknownTagId(id))
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
