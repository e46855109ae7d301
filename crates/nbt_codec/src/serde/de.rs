use std::fmt;

use serde::de::value::{MapAccessDeserializer, MapDeserializer, SeqAccessDeserializer};
use serde::de::{self, IntoDeserializer, SeqAccess, Visitor};
use serde::{forward_to_deserialize_any, Deserialize, Deserializer};

use super::Error;
use crate::{Compound, List, Value};

/// Implements `Visitor` methods that convert their argument infallibly.
macro_rules! visit_scalars {
    ($($method:ident($ty:ty) => $conv:expr;)*) => {
        $(
            fn $method<E>(self, v: $ty) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok($conv(v))
            }
        )*
    };
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a valid NBT type")
            }

            visit_scalars! {
                visit_bool(bool) => |v: bool| Value::Byte(v.into());
                visit_i8(i8) => Value::Byte;
                visit_i16(i16) => Value::Short;
                visit_i32(i32) => Value::Int;
                visit_i64(i64) => Value::Long;
                // Unsigned integers keep their bit pattern.
                visit_u8(u8) => |v: u8| Value::Byte(v as i8);
                visit_u16(u16) => |v: u16| Value::Short(v as i16);
                visit_u32(u32) => |v: u32| Value::Int(v as i32);
                visit_f32(f32) => Value::Float;
                visit_f64(f64) => Value::Double;
                visit_str(&str) => |v: &str| Value::String(v.to_owned());
                visit_string(String) => Value::String;
                visit_bytes(&[u8]) => |v: &[u8]| Value::ByteArray(bytes_to_i8(v));
                visit_byte_buf(Vec<u8>) => |v: Vec<u8>| Value::ByteArray(bytes_to_i8(&v));
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(v)
                    .map(Value::Long)
                    .map_err(|_| E::custom(format!("integer {v} does not fit in a Long")))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Value::End)
            }

            fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                Ok(List::deserialize(SeqAccessDeserializer::new(seq))?.into())
            }

            fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                Ok(Compound::deserialize(MapAccessDeserializer::new(map))?.into())
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> Deserialize<'de> for List {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ListVisitor;

        impl<'de> Visitor<'de> for ListVisitor {
            type Value = List;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a sequence or bytes")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                // The first element decides the type of the rest.
                match seq.next_element::<Value>()? {
                    Some(v) => match v {
                        Value::End => Err(de::Error::custom("End cannot be a list element")),
                        Value::Byte(v) => deserialize_seq_remainder(v, seq),
                        Value::Short(v) => deserialize_seq_remainder(v, seq),
                        Value::Int(v) => deserialize_seq_remainder(v, seq),
                        Value::Long(v) => deserialize_seq_remainder(v, seq),
                        Value::Float(v) => deserialize_seq_remainder(v, seq),
                        Value::Double(v) => deserialize_seq_remainder(v, seq),
                        Value::ByteArray(v) => deserialize_seq_remainder(v, seq),
                        Value::String(v) => deserialize_seq_remainder(v, seq),
                        Value::List(v) => deserialize_seq_remainder(v, seq),
                        Value::Compound(v) => deserialize_seq_remainder(v, seq),
                        Value::IntArray(v) => deserialize_seq_remainder(v, seq),
                        Value::LongArray(v) => deserialize_seq_remainder(v, seq),
                    },
                    None => Ok(List::End),
                }
            }

            fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(List::Byte(bytes_to_i8(&v)))
            }

            fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(List::Byte(bytes_to_i8(v)))
            }
        }

        deserializer.deserialize_seq(ListVisitor)
    }
}

/// Deserializes the remainder of a sequence after having determined the type
/// of the first element.
fn deserialize_seq_remainder<'de, T, A>(first: T, mut seq: A) -> Result<List, A::Error>
where
    T: Deserialize<'de>,
    A: de::SeqAccess<'de>,
    List: From<Vec<T>>,
{
    let mut vec = match seq.size_hint() {
        Some(n) => Vec::with_capacity(n + 1),
        None => Vec::new(),
    };

    vec.push(first);

    while let Some(v) = seq.next_element()? {
        vec.push(v);
    }

    Ok(vec.into())
}

impl<'de> Deserialize<'de> for Compound {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CompoundVisitor;

        impl<'de> Visitor<'de> for CompoundVisitor {
            type Value = Compound;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a map with string keys")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut compound = Compound::new();

                while let Some((k, v)) = map.next_entry::<String, Value>()? {
                    compound.insert(k, v);
                }

                Ok(compound)
            }
        }

        deserializer.deserialize_map(CompoundVisitor)
    }
}

fn bytes_to_i8(bytes: &[u8]) -> Vec<i8> {
    bytes.iter().map(|&b| b as i8).collect()
}

fn i8_to_bytes(bytes: Vec<i8>) -> Vec<u8> {
    bytes.into_iter().map(|b| b as u8).collect()
}

impl<'de> Deserializer<'de> for Compound {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_map(MapDeserializer::new(self.into_iter()))
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Compound {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::End => visitor.visit_unit(),
            Value::Byte(v) => visitor.visit_i8(v),
            Value::Short(v) => visitor.visit_i16(v),
            Value::Int(v) => visitor.visit_i32(v),
            Value::Long(v) => visitor.visit_i64(v),
            Value::Float(v) => visitor.visit_f32(v),
            Value::Double(v) => visitor.visit_f64(v),
            Value::ByteArray(v) => visitor.visit_byte_buf(i8_to_bytes(v)),
            Value::String(v) => visitor.visit_string(v),
            Value::List(v) => v.deserialize_any(visitor),
            Value::Compound(v) => v.into_deserializer().deserialize_any(visitor),
            Value::IntArray(v) => v.into_deserializer().deserialize_any(visitor),
            Value::LongArray(v) => v.into_deserializer().deserialize_any(visitor),
        }
    }

    fn deserialize_bool<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Byte(b) => visitor.visit_bool(b != 0),
            _ => self.deserialize_any(visitor),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::End => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()), // Unit variant.
            other => other.deserialize_any(visitor),
        }
    }

    forward_to_deserialize_any! {
        i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct newtype_struct seq tuple
        tuple_struct map struct identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> Deserializer<'de> for List {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        struct EndSeqAccess;

        impl<'de> SeqAccess<'de> for EndSeqAccess {
            type Error = Error;

            fn next_element_seed<T>(&mut self, _seed: T) -> Result<Option<T::Value>, Self::Error>
            where
                T: de::DeserializeSeed<'de>,
            {
                Ok(None)
            }
        }

        match self {
            List::End => visitor.visit_seq(EndSeqAccess),
            List::Byte(v) => visitor.visit_byte_buf(i8_to_bytes(v)),
            List::Short(v) => v.into_deserializer().deserialize_any(visitor),
            List::Int(v) => v.into_deserializer().deserialize_any(visitor),
            List::Long(v) => v.into_deserializer().deserialize_any(visitor),
            List::Float(v) => v.into_deserializer().deserialize_any(visitor),
            List::Double(v) => v.into_deserializer().deserialize_any(visitor),
            List::ByteArray(v) => v.into_deserializer().deserialize_any(visitor),
            List::String(v) => v.into_deserializer().deserialize_any(visitor),
            List::List(v) => v.into_deserializer().deserialize_any(visitor),
            List::Compound(v) => v.into_deserializer().deserialize_any(visitor),
            List::IntArray(v) => v.into_deserializer().deserialize_any(visitor),
            List::LongArray(v) => v.into_deserializer().deserialize_any(visitor),
        }
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for List {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}
