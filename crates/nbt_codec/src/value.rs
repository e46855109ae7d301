use std::borrow::Cow;

use crate::tag::Tag;
use crate::{Compound, List};

/// Represents an arbitrary NBT value.
///
/// Cloning a value produces a fully independent deep copy; containers own
/// their children exclusively.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    /// The terminator marker. Only ever produced when a root tag of id `0` is
    /// decoded.
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    ByteArray(Vec<i8>),
    String(String),
    List(List),
    Compound(Compound),
    IntArray(Vec<i32>),
    LongArray(Vec<i64>),
}

/// Represents a reference to an arbitrary NBT value, where the tag is not part
/// of the reference.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum ValueRef<'a> {
    End,
    Byte(&'a i8),
    Short(&'a i16),
    Int(&'a i32),
    Long(&'a i64),
    Float(&'a f32),
    Double(&'a f64),
    ByteArray(&'a [i8]),
    String(&'a str),
    List(&'a List),
    Compound(&'a Compound),
    IntArray(&'a [i32]),
    LongArray(&'a [i64]),
}

macro_rules! impl_tag {
    ($name:ident $(<$lifetime:lifetime>)?) => {
        impl $(<$lifetime>)? $name $(<$lifetime>)? {
            /// Returns the type of this value.
            pub fn tag(&self) -> Tag {
                match self {
                    Self::End => Tag::End,
                    Self::Byte(_) => Tag::Byte,
                    Self::Short(_) => Tag::Short,
                    Self::Int(_) => Tag::Int,
                    Self::Long(_) => Tag::Long,
                    Self::Float(_) => Tag::Float,
                    Self::Double(_) => Tag::Double,
                    Self::ByteArray(_) => Tag::ByteArray,
                    Self::String(_) => Tag::String,
                    Self::List(_) => Tag::List,
                    Self::Compound(_) => Tag::Compound,
                    Self::IntArray(_) => Tag::IntArray,
                    Self::LongArray(_) => Tag::LongArray,
                }
            }

            /// Returns the numeric type id of this value.
            pub fn id(&self) -> u8 {
                self.tag().id()
            }
        }
    };
}

impl_tag!(Value);
impl_tag!(ValueRef<'a>);

macro_rules! impl_accessors {
    ($($variant:ident($ty:ty) => $as:ident, $as_mut:ident, $into:ident;)*) => {
        impl Value {
            $(
                pub fn $as(&self) -> Option<&$ty> {
                    match self {
                        Self::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                pub fn $as_mut(&mut self) -> Option<&mut $ty> {
                    match self {
                        Self::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                pub fn $into(self) -> Option<$ty> {
                    match self {
                        Self::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            )*
        }
    };
}

impl_accessors! {
    Byte(i8) => as_byte, as_byte_mut, into_byte;
    Short(i16) => as_short, as_short_mut, into_short;
    Int(i32) => as_int, as_int_mut, into_int;
    Long(i64) => as_long, as_long_mut, into_long;
    Float(f32) => as_float, as_float_mut, into_float;
    Double(f64) => as_double, as_double_mut, into_double;
    ByteArray(Vec<i8>) => as_byte_array, as_byte_array_mut, into_byte_array;
    String(String) => as_string, as_string_mut, into_string;
    List(List) => as_list, as_list_mut, into_list;
    Compound(Compound) => as_compound, as_compound_mut, into_compound;
    IntArray(Vec<i32>) => as_int_array, as_int_array_mut, into_int_array;
    LongArray(Vec<i64>) => as_long_array, as_long_array_mut, into_long_array;
}

impl Value {
    /// Borrows this value as a [`ValueRef`].
    pub fn as_value_ref(&self) -> ValueRef<'_> {
        self.into()
    }
}

impl<'a> ValueRef<'a> {
    /// Clones the referenced data into an owned [`Value`].
    pub fn to_value(self) -> Value {
        match self {
            ValueRef::End => Value::End,
            ValueRef::Byte(v) => Value::Byte(*v),
            ValueRef::Short(v) => Value::Short(*v),
            ValueRef::Int(v) => Value::Int(*v),
            ValueRef::Long(v) => Value::Long(*v),
            ValueRef::Float(v) => Value::Float(*v),
            ValueRef::Double(v) => Value::Double(*v),
            ValueRef::ByteArray(v) => Value::ByteArray(v.to_vec()),
            ValueRef::String(v) => Value::String(v.to_owned()),
            ValueRef::List(v) => Value::List(v.clone()),
            ValueRef::Compound(v) => Value::Compound(v.clone()),
            ValueRef::IntArray(v) => Value::IntArray(v.to_vec()),
            ValueRef::LongArray(v) => Value::LongArray(v.to_vec()),
        }
    }
}

impl<'a> From<&'a Value> for ValueRef<'a> {
    fn from(v: &'a Value) -> Self {
        match v {
            Value::End => ValueRef::End,
            Value::Byte(v) => ValueRef::Byte(v),
            Value::Short(v) => ValueRef::Short(v),
            Value::Int(v) => ValueRef::Int(v),
            Value::Long(v) => ValueRef::Long(v),
            Value::Float(v) => ValueRef::Float(v),
            Value::Double(v) => ValueRef::Double(v),
            Value::ByteArray(v) => ValueRef::ByteArray(v),
            Value::String(v) => ValueRef::String(v),
            Value::List(v) => ValueRef::List(v),
            Value::Compound(v) => ValueRef::Compound(v),
            Value::IntArray(v) => ValueRef::IntArray(v),
            Value::LongArray(v) => ValueRef::LongArray(v),
        }
    }
}

impl<'a> From<&'a List> for ValueRef<'a> {
    fn from(v: &'a List) -> Self {
        Self::List(v)
    }
}

impl<'a> From<&'a Compound> for ValueRef<'a> {
    fn from(v: &'a Compound) -> Self {
        Self::Compound(v)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::Byte(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::Short(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

/// Bools are usually represented as `0` or `1` bytes in NBT.
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Byte(i8::from(b))
    }
}

impl From<Vec<i8>> for Value {
    fn from(v: Vec<i8>) -> Self {
        Self::ByteArray(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl<'a> From<&'a str> for Value {
    fn from(v: &'a str) -> Self {
        Self::String(v.to_owned())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(v: Cow<'a, str>) -> Self {
        Self::String(v.into_owned())
    }
}

impl From<List> for Value {
    fn from(v: List) -> Self {
        Self::List(v)
    }
}

impl From<Compound> for Value {
    fn from(v: Compound) -> Self {
        Self::Compound(v)
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Self::IntArray(v)
    }
}

impl From<Vec<i64>> for Value {
    fn from(v: Vec<i64>) -> Self {
        Self::LongArray(v)
    }
}
