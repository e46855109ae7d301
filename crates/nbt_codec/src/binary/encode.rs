use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use tracing::{debug, trace};

use super::modified_utf8::{encode_modified_utf8, encoded_len};
use super::{Error, Result};
use crate::tag::Tag;
use crate::value::ValueRef;
use crate::{Compound, List, MAX_DEPTH};

/// Encodes uncompressed NBT binary data to the provided writer, using the
/// empty string as the root name.
///
/// Any value may be written at the top level, including `End`, which is
/// encoded as a single zero byte.
pub fn to_binary<'a, V, W>(value: V, writer: W) -> Result<()>
where
    V: Into<ValueRef<'a>>,
    W: Write,
{
    to_binary_named(value, writer, "")
}

/// Like [`to_binary`], but gives the root value the name `root_name`.
pub fn to_binary_named<'a, V, W>(value: V, writer: W, root_name: &str) -> Result<()>
where
    V: Into<ValueRef<'a>>,
    W: Write,
{
    let value: ValueRef = value.into();
    let tag = value.tag();
    let mut state = EncodeState { writer, depth: 0 };

    state.write_tag(tag)?;

    if tag != Tag::End {
        state.write_string(root_name)?;
        state.write_value(value)?;
    }

    trace!(%tag, root_name = %root_name, "encoded root value");

    debug_assert_eq!(state.depth, 0);
    Ok(())
}

/// Encodes only the payload of `value`. No type id or name is written.
pub fn write_payload<'a, V, W>(value: V, writer: W) -> Result<()>
where
    V: Into<ValueRef<'a>>,
    W: Write,
{
    EncodeState { writer, depth: 0 }.write_value(value.into())
}

/// Returns the number of bytes that will be written when
/// [`to_binary_named`] is called with this value and root name.
///
/// If `to_binary_named` results in `Ok`, the exact number of bytes
/// reported by this function will have been written. If the result is
/// `Err`, then the reported count will be greater than or equal to the
/// number of bytes that have actually been written.
pub fn written_size<'a, V>(value: V, root_name: &str) -> usize
where
    V: Into<ValueRef<'a>>,
{
    fn value_size(val: ValueRef) -> usize {
        match val {
            ValueRef::End => 0,
            ValueRef::Byte(_) => 1,
            ValueRef::Short(_) => 2,
            ValueRef::Int(_) => 4,
            ValueRef::Long(_) => 8,
            ValueRef::Float(_) => 4,
            ValueRef::Double(_) => 8,
            ValueRef::ByteArray(v) => 4 + v.len(),
            ValueRef::String(v) => string_size(v),
            ValueRef::List(v) => 1 + 4 + v.iter().map(value_size).sum::<usize>(),
            ValueRef::Compound(v) => compound_size(v),
            ValueRef::IntArray(v) => 4 + v.len() * 4,
            ValueRef::LongArray(v) => 4 + v.len() * 8,
        }
    }

    fn string_size(s: &str) -> usize {
        2 + encoded_len(s)
    }

    fn compound_size(c: &Compound) -> usize {
        c.iter()
            .map(|(k, v)| 1 + string_size(k) + value_size(v.into()))
            .sum::<usize>()
            + 1
    }

    let value: ValueRef = value.into();

    match value {
        ValueRef::End => 1,
        _ => 1 + string_size(root_name) + value_size(value),
    }
}

struct EncodeState<W> {
    writer: W,
    /// Nesting level of the value about to be written.
    depth: usize,
}

impl<W: Write> EncodeState<W> {
    #[inline]
    fn check_depth<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth > MAX_DEPTH {
            debug!(depth = self.depth, "NBT depth limit exceeded while encoding");
            return Err(Error::DepthExceeded);
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn write_tag(&mut self, tag: Tag) -> Result<()> {
        Ok(self.writer.write_u8(tag.id())?)
    }

    fn write_value(&mut self, v: ValueRef) -> Result<()> {
        match v {
            ValueRef::End => Ok(()),
            ValueRef::Byte(v) => Ok(self.writer.write_i8(*v)?),
            ValueRef::Short(v) => Ok(self.writer.write_i16::<BigEndian>(*v)?),
            ValueRef::Int(v) => Ok(self.writer.write_i32::<BigEndian>(*v)?),
            ValueRef::Long(v) => Ok(self.writer.write_i64::<BigEndian>(*v)?),
            ValueRef::Float(v) => Ok(self.writer.write_f32::<BigEndian>(*v)?),
            ValueRef::Double(v) => Ok(self.writer.write_f64::<BigEndian>(*v)?),
            ValueRef::ByteArray(v) => self.write_byte_array(v),
            ValueRef::String(v) => self.write_string(v),
            ValueRef::List(v) => self.check_depth(|st| st.write_any_list(v)),
            ValueRef::Compound(v) => self.check_depth(|st| st.write_compound(v)),
            ValueRef::IntArray(v) => self.write_int_array(v),
            ValueRef::LongArray(v) => self.write_long_array(v),
        }
    }

    fn write_len(&mut self, len: usize, tag: Tag) -> Result<()> {
        match i32::try_from(len) {
            Ok(len) => Ok(self.writer.write_i32::<BigEndian>(len)?),
            Err(_) => Err(Error::LengthOverflow { tag, len }),
        }
    }

    fn write_byte_array(&mut self, bytes: &[i8]) -> Result<()> {
        self.write_len(bytes.len(), Tag::ByteArray)?;

        let bytes: Vec<u8> = bytes.iter().map(|&b| b as u8).collect();
        Ok(self.writer.write_all(&bytes)?)
    }

    fn write_string(&mut self, s: &str) -> Result<()> {
        let len = encoded_len(s);

        match u16::try_from(len) {
            Ok(n) => self.writer.write_u16::<BigEndian>(n)?,
            Err(_) => return Err(Error::StringTooLong(len)),
        }

        // Conversion to modified UTF-8 never shrinks the string. If the new
        // len is equal to the original len, the bytes are identical.
        if len == s.len() {
            self.writer.write_all(s.as_bytes())?;
        } else {
            let mut buf = Vec::with_capacity(len);
            encode_modified_utf8(s, &mut buf);
            self.writer.write_all(&buf)?;
        }

        Ok(())
    }

    fn write_any_list(&mut self, list: &List) -> Result<()> {
        self.write_tag(list.element_tag())?;
        self.write_len(list.len(), Tag::List)?;

        if let List::Byte(v) = list {
            let bytes: Vec<u8> = v.iter().map(|&b| b as u8).collect();
            return Ok(self.writer.write_all(&bytes)?);
        }

        for elem in list {
            self.write_value(elem)?;
        }

        Ok(())
    }

    fn write_compound(&mut self, c: &Compound) -> Result<()> {
        for (k, v) in c {
            let tag = v.tag();

            if tag == Tag::End {
                return Err(Error::EndInCompound(k.clone()));
            }

            self.write_tag(tag)?;
            self.write_string(k)?;
            self.write_value(v.into())?;
        }
        self.write_tag(Tag::End)?;

        Ok(())
    }

    fn write_int_array(&mut self, ia: &[i32]) -> Result<()> {
        self.write_len(ia.len(), Tag::IntArray)?;

        for i in ia {
            self.writer.write_i32::<BigEndian>(*i)?;
        }

        Ok(())
    }

    fn write_long_array(&mut self, la: &[i64]) -> Result<()> {
        self.write_len(la.len(), Tag::LongArray)?;

        for l in la {
            self.writer.write_i64::<BigEndian>(*l)?;
        }

        Ok(())
    }
}
