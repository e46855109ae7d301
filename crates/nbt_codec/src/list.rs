use std::iter::FusedIterator;

use crate::tag::Tag;
use crate::value::ValueRef;
use crate::{Compound, TypeMismatch, Value};

/// An NBT list value.
///
/// NBT lists are homogeneous, meaning each list element must be of the same
/// type. This is opposed to a format like JSON where lists can be
/// heterogeneous. Here is a JSON list that would be illegal in NBT:
///
/// ```json
/// [42, "hello", {}]
/// ```
///
/// Every possible element type has its own variant. An empty list carries no
/// element type on the wire, so all empty lists compare equal regardless of
/// variant.
#[derive(Clone, Debug, Default)]
pub enum List {
    /// The list with the element type of `TAG_End` and length of zero.
    #[default]
    End,
    Byte(Vec<i8>),
    Short(Vec<i16>),
    Int(Vec<i32>),
    Long(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    ByteArray(Vec<Vec<i8>>),
    String(Vec<String>),
    List(Vec<List>),
    Compound(Vec<Compound>),
    IntArray(Vec<Vec<i32>>),
    LongArray(Vec<Vec<i64>>),
}

/// Applies `$f` to the inner vector of every non-`End` variant.
macro_rules! with_vec {
    ($list:expr, $end:expr, |$v:ident| $f:expr) => {
        match $list {
            List::End => $end,
            List::Byte($v) => $f,
            List::Short($v) => $f,
            List::Int($v) => $f,
            List::Long($v) => $f,
            List::Float($v) => $f,
            List::Double($v) => $f,
            List::ByteArray($v) => $f,
            List::String($v) => $f,
            List::List($v) => $f,
            List::Compound($v) => $f,
            List::IntArray($v) => $f,
            List::LongArray($v) => $f,
        }
    };
}

impl List {
    /// Returns an empty list.
    pub fn new() -> Self {
        Self::End
    }

    /// Returns an empty list whose elements will be of type `tag`, or `None`
    /// if `tag` is [`Tag::End`].
    pub fn empty_of(tag: Tag) -> Option<Self> {
        Some(match tag {
            Tag::End => return None,
            Tag::Byte => List::Byte(Vec::new()),
            Tag::Short => List::Short(Vec::new()),
            Tag::Int => List::Int(Vec::new()),
            Tag::Long => List::Long(Vec::new()),
            Tag::Float => List::Float(Vec::new()),
            Tag::Double => List::Double(Vec::new()),
            Tag::ByteArray => List::ByteArray(Vec::new()),
            Tag::String => List::String(Vec::new()),
            Tag::List => List::List(Vec::new()),
            Tag::Compound => List::Compound(Vec::new()),
            Tag::IntArray => List::IntArray(Vec::new()),
            Tag::LongArray => List::LongArray(Vec::new()),
        })
    }

    /// Returns the length of this list.
    pub fn len(&self) -> usize {
        with_vec!(self, 0, |v| v.len())
    }

    /// Returns `true` if this list has no elements. `false` otherwise.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element type of this list. Empty lists always report
    /// [`Tag::End`].
    pub fn element_tag(&self) -> Tag {
        if self.is_empty() {
            return Tag::End;
        }

        match self {
            List::End => Tag::End,
            List::Byte(_) => Tag::Byte,
            List::Short(_) => Tag::Short,
            List::Int(_) => Tag::Int,
            List::Long(_) => Tag::Long,
            List::Float(_) => Tag::Float,
            List::Double(_) => Tag::Double,
            List::ByteArray(_) => Tag::ByteArray,
            List::String(_) => Tag::String,
            List::List(_) => Tag::List,
            List::Compound(_) => Tag::Compound,
            List::IntArray(_) => Tag::IntArray,
            List::LongArray(_) => Tag::LongArray,
        }
    }

    /// Returns a reference to the element at `index`.
    pub fn get(&self, index: usize) -> Option<ValueRef<'_>> {
        Some(match self {
            List::End => return None,
            List::Byte(v) => ValueRef::Byte(v.get(index)?),
            List::Short(v) => ValueRef::Short(v.get(index)?),
            List::Int(v) => ValueRef::Int(v.get(index)?),
            List::Long(v) => ValueRef::Long(v.get(index)?),
            List::Float(v) => ValueRef::Float(v.get(index)?),
            List::Double(v) => ValueRef::Double(v.get(index)?),
            List::ByteArray(v) => ValueRef::ByteArray(v.get(index)?),
            List::String(v) => ValueRef::String(v.get(index)?),
            List::List(v) => ValueRef::List(v.get(index)?),
            List::Compound(v) => ValueRef::Compound(v.get(index)?),
            List::IntArray(v) => ValueRef::IntArray(v.get(index)?),
            List::LongArray(v) => ValueRef::LongArray(v.get(index)?),
        })
    }

    /// Returns an iterator over the elements of this list.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            front: 0,
            back: self.len(),
        }
    }

    /// Appends `value` to the end of this list.
    ///
    /// An empty list takes on the type of the first value pushed into it.
    /// Afterwards, only values of that same type are accepted.
    pub fn try_push<V: Into<Value>>(&mut self, value: V) -> Result<(), TypeMismatch> {
        let value = value.into();

        if self.is_empty() {
            if let Some(empty) = List::empty_of(value.tag()) {
                *self = empty;
            }
        }

        match (&mut *self, value) {
            (List::Byte(l), Value::Byte(v)) => l.push(v),
            (List::Short(l), Value::Short(v)) => l.push(v),
            (List::Int(l), Value::Int(v)) => l.push(v),
            (List::Long(l), Value::Long(v)) => l.push(v),
            (List::Float(l), Value::Float(v)) => l.push(v),
            (List::Double(l), Value::Double(v)) => l.push(v),
            (List::ByteArray(l), Value::ByteArray(v)) => l.push(v),
            (List::String(l), Value::String(v)) => l.push(v),
            (List::List(l), Value::List(v)) => l.push(v),
            (List::Compound(l), Value::Compound(v)) => l.push(v),
            (List::IntArray(l), Value::IntArray(v)) => l.push(v),
            (List::LongArray(l), Value::LongArray(v)) => l.push(v),
            (list, value) => {
                return Err(TypeMismatch {
                    container: Tag::List,
                    expected: list.element_tag(),
                    actual: value.tag(),
                })
            }
        }

        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// down. Returns `None` if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<Value> {
        if index >= self.len() {
            return None;
        }

        Some(match self {
            List::End => return None,
            List::Byte(v) => Value::Byte(v.remove(index)),
            List::Short(v) => Value::Short(v.remove(index)),
            List::Int(v) => Value::Int(v.remove(index)),
            List::Long(v) => Value::Long(v.remove(index)),
            List::Float(v) => Value::Float(v.remove(index)),
            List::Double(v) => Value::Double(v.remove(index)),
            List::ByteArray(v) => Value::ByteArray(v.remove(index)),
            List::String(v) => Value::String(v.remove(index)),
            List::List(v) => Value::List(v.remove(index)),
            List::Compound(v) => Value::Compound(v.remove(index)),
            List::IntArray(v) => Value::IntArray(v.remove(index)),
            List::LongArray(v) => Value::LongArray(v.remove(index)),
        })
    }

    /// Removes every element, leaving an untyped empty list.
    pub fn clear(&mut self) {
        *self = List::End;
    }
}

impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (a, b) if a.is_empty() && b.is_empty() => true,
            (List::Byte(a), List::Byte(b)) => a == b,
            (List::Short(a), List::Short(b)) => a == b,
            (List::Int(a), List::Int(b)) => a == b,
            (List::Long(a), List::Long(b)) => a == b,
            (List::Float(a), List::Float(b)) => a == b,
            (List::Double(a), List::Double(b)) => a == b,
            (List::ByteArray(a), List::ByteArray(b)) => a == b,
            (List::String(a), List::String(b)) => a == b,
            (List::List(a), List::List(b)) => a == b,
            (List::Compound(a), List::Compound(b)) => a == b,
            (List::IntArray(a), List::IntArray(b)) => a == b,
            (List::LongArray(a), List::LongArray(b)) => a == b,
            _ => false,
        }
    }
}

impl TryFrom<Vec<Value>> for List {
    type Error = TypeMismatch;

    fn try_from(values: Vec<Value>) -> Result<Self, Self::Error> {
        let mut list = List::new();
        for v in values {
            list.try_push(v)?;
        }
        Ok(list)
    }
}

macro_rules! impl_from_vec {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Vec<$ty>> for List {
                fn from(v: Vec<$ty>) -> Self {
                    List::$variant(v)
                }
            }
        )*
    };
}

impl_from_vec! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    Vec<i8> => ByteArray,
    String => String,
    List => List,
    Compound => Compound,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
}

impl<'a> IntoIterator for &'a List {
    type Item = ValueRef<'a>;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the elements of a [`List`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    list: &'a List,
    front: usize,
    back: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = ValueRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let item = self.list.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.back - self.front;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.list.get(self.back)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
