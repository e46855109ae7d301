use serde::{Serialize, Serializer};

use crate::value::ValueRef;
use crate::{Compound, List, Value};

impl Serialize for ValueRef<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match *self {
            ValueRef::End => serializer.serialize_unit(),
            ValueRef::Byte(v) => serializer.serialize_i8(*v),
            ValueRef::Short(v) => serializer.serialize_i16(*v),
            ValueRef::Int(v) => serializer.serialize_i32(*v),
            ValueRef::Long(v) => serializer.serialize_i64(*v),
            ValueRef::Float(v) => serializer.serialize_f32(*v),
            ValueRef::Double(v) => serializer.serialize_f64(*v),
            ValueRef::ByteArray(v) => v.serialize(serializer),
            ValueRef::String(v) => serializer.serialize_str(v),
            ValueRef::List(v) => v.serialize(serializer),
            ValueRef::Compound(v) => v.serialize(serializer),
            ValueRef::IntArray(v) => v.serialize(serializer),
            ValueRef::LongArray(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_value_ref().serialize(serializer)
    }
}

/// Lists are sequences. An empty list is an empty sequence regardless of its
/// element type.
impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self)
    }
}

/// Compounds are maps, serialized in insertion order.
impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self)
    }
}
