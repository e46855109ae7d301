use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};
use tracing::{debug, trace};

use super::modified_utf8::decode_modified_utf8;
use super::{Error, Result};
use crate::tag::Tag;
use crate::{Compound, List, Value, MAX_DEPTH};

/// Upper bound on capacity reserved up front from an untrusted length prefix.
const PREALLOC_LIMIT: usize = 4096;

/// Decodes uncompressed NBT binary data from the provided reader.
///
/// Reads a one byte type id. An id of `0` yields [`Value::End`] without
/// consuming anything else. Otherwise the root name is read and discarded,
/// followed by the payload of the root value.
pub fn from_binary<R: Read>(reader: R) -> Result<Value> {
    from_binary_named(reader).map(|(value, _)| value)
}

/// Like [`from_binary`], but also returns the name of the root value.
///
/// The name of an `End` root is always the empty string.
pub fn from_binary_named<R: Read>(reader: R) -> Result<(Value, String)> {
    let mut state = DecodeState { reader, depth: 0 };

    let tag = state.read_tag()?;

    if tag == Tag::End {
        trace!("decoded end tag at root");
        return Ok((Value::End, String::new()));
    }

    let root_name = state.read_string()?;
    let value = state.read_payload(tag)?;

    trace!(%tag, root_name = %root_name, "decoded root value");

    debug_assert_eq!(state.depth, 0);
    Ok((value, root_name))
}

/// Decodes the payload of a value whose type id was already consumed.
///
/// `depth` is the nesting level of the value being read. Lists and
/// compounds found deeper than [`MAX_DEPTH`] are rejected.
pub fn read_payload<R: Read>(id: u8, reader: R, depth: usize) -> Result<Value> {
    let tag = Tag::try_from(id)?;
    DecodeState { reader, depth }.read_payload(tag)
}

struct DecodeState<R> {
    reader: R,
    /// Nesting level of the value about to be read.
    depth: usize,
}

impl<R: Read> DecodeState<R> {
    #[inline]
    fn check_depth<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth > MAX_DEPTH {
            debug!(depth = self.depth, "NBT depth limit exceeded while decoding");
            return Err(Error::DepthExceeded);
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn read_tag(&mut self) -> Result<Tag> {
        Ok(Tag::try_from(self.reader.read_u8()?)?)
    }

    fn read_payload(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => Value::End,
            Tag::Byte => Value::Byte(self.reader.read_i8()?),
            Tag::Short => Value::Short(self.read_short()?),
            Tag::Int => Value::Int(self.read_int()?),
            Tag::Long => Value::Long(self.read_long()?),
            Tag::Float => Value::Float(self.read_float()?),
            Tag::Double => Value::Double(self.read_double()?),
            Tag::ByteArray => Value::ByteArray(self.read_byte_array()?),
            Tag::String => Value::String(self.read_string()?),
            Tag::List => Value::List(self.check_depth(Self::read_any_list)?),
            Tag::Compound => Value::Compound(self.check_depth(Self::read_compound)?),
            Tag::IntArray => Value::IntArray(self.read_int_array()?),
            Tag::LongArray => Value::LongArray(self.read_long_array()?),
        })
    }

    fn read_short(&mut self) -> Result<i16> {
        Ok(self.reader.read_i16::<BigEndian>()?)
    }

    fn read_int(&mut self) -> Result<i32> {
        Ok(self.reader.read_i32::<BigEndian>()?)
    }

    fn read_long(&mut self) -> Result<i64> {
        Ok(self.reader.read_i64::<BigEndian>()?)
    }

    fn read_float(&mut self) -> Result<f32> {
        Ok(self.reader.read_f32::<BigEndian>()?)
    }

    fn read_double(&mut self) -> Result<f64> {
        Ok(self.reader.read_f64::<BigEndian>()?)
    }

    fn read_len(&mut self) -> Result<usize> {
        let len = self.read_int()?;
        usize::try_from(len).map_err(|_| Error::NegativeLength(len))
    }

    fn read_string(&mut self) -> Result<String> {
        let len = usize::from(self.reader.read_u16::<BigEndian>()?);
        let bytes = self.read_exact_vec(len)?;
        decode_modified_utf8(&bytes)
    }

    fn read_exact_vec(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        self.reader
            .by_ref()
            .take(len as u64)
            .read_to_end(&mut buf)?;

        if buf.len() != len {
            return Err(Error::UnexpectedEof);
        }

        Ok(buf)
    }

    fn read_byte_array(&mut self) -> Result<Vec<i8>> {
        let len = self.read_len()?;
        self.read_bytes(len)
    }

    fn read_bytes(&mut self, len: usize) -> Result<Vec<i8>> {
        Ok(self
            .read_exact_vec(len)?
            .into_iter()
            .map(|b| b as i8)
            .collect())
    }

    fn read_int_array(&mut self) -> Result<Vec<i32>> {
        let len = self.read_len()?;
        self.read_n(len, Self::read_int)
    }

    fn read_long_array(&mut self) -> Result<Vec<i64>> {
        let len = self.read_len()?;
        self.read_n(len, Self::read_long)
    }

    fn read_n<T, F>(&mut self, len: usize, mut read_elem: F) -> Result<Vec<T>>
    where
        F: FnMut(&mut Self) -> Result<T>,
    {
        let mut vec = Vec::with_capacity(len.min(PREALLOC_LIMIT));
        for _ in 0..len {
            vec.push(read_elem(self)?);
        }
        Ok(vec)
    }

    fn read_any_list(&mut self) -> Result<List> {
        let elem_tag = self.read_tag()?;
        let raw_len = self.read_int()?;
        let len = usize::try_from(raw_len).map_err(|_| Error::NegativeLength(raw_len))?;

        if len == 0 {
            return Ok(List::End);
        }

        Ok(match elem_tag {
            Tag::End => return Err(Error::MissingListType(raw_len)),
            Tag::Byte => List::Byte(self.read_bytes(len)?),
            Tag::Short => List::Short(self.read_n(len, Self::read_short)?),
            Tag::Int => List::Int(self.read_n(len, Self::read_int)?),
            Tag::Long => List::Long(self.read_n(len, Self::read_long)?),
            Tag::Float => List::Float(self.read_n(len, Self::read_float)?),
            Tag::Double => List::Double(self.read_n(len, Self::read_double)?),
            Tag::ByteArray => List::ByteArray(self.read_n(len, Self::read_byte_array)?),
            Tag::String => List::String(self.read_n(len, Self::read_string)?),
            Tag::List => List::List(self.read_n(len, |st| st.check_depth(Self::read_any_list))?),
            Tag::Compound => {
                List::Compound(self.read_n(len, |st| st.check_depth(Self::read_compound))?)
            }
            Tag::IntArray => List::IntArray(self.read_n(len, Self::read_int_array)?),
            Tag::LongArray => List::LongArray(self.read_n(len, Self::read_long_array)?),
        })
    }

    fn read_compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();

        loop {
            let tag = self.read_tag()?;
            if tag == Tag::End {
                return Ok(compound);
            }

            let name = self.read_string()?;
            let value = self.read_payload(tag)?;

            compound.insert(name, value);
        }
    }
}
