use std::fmt::{self, Display, Formatter, Write};

use super::reader::is_bare_char;
use crate::value::ValueRef;
use crate::{Compound, List, Value};

/// Writes values as canonical SNBT to any [`fmt::Write`].
///
/// Integers carry the suffixes `b`, `s` and `L` (none for `Int`), floats `f`
/// and `d`. Arrays are written as `[B;1b,2b]`, `[I;1,2]` and `[L;1L,2L]`.
/// Strings are always quoted while compound keys are quoted only when
/// necessary.
pub struct SnbtWriter<W> {
    output: W,
}

impl<W: Write> SnbtWriter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }

    pub fn into_inner(self) -> W {
        self.output
    }

    /// Writes a value to the output.
    pub fn write_value(&mut self, value: ValueRef) -> fmt::Result {
        match value {
            // Not representable in SNBT.
            ValueRef::End => self.output.write_str("END"),
            ValueRef::Byte(v) => write!(self.output, "{v}b"),
            ValueRef::Short(v) => write!(self.output, "{v}s"),
            ValueRef::Int(v) => write!(self.output, "{v}"),
            ValueRef::Long(v) => write!(self.output, "{v}L"),
            ValueRef::Float(v) => write!(self.output, "{v:?}f"),
            ValueRef::Double(v) => write!(self.output, "{v:?}d"),
            ValueRef::ByteArray(v) => self.write_array("B;", v, |w, b| write!(w, "{b}b")),
            ValueRef::String(v) => self.write_quoted(v),
            ValueRef::List(v) => self.write_list(v),
            ValueRef::Compound(v) => self.write_compound(v),
            ValueRef::IntArray(v) => self.write_array("I;", v, |w, i| write!(w, "{i}")),
            ValueRef::LongArray(v) => self.write_array("L;", v, |w, l| write!(w, "{l}L")),
        }
    }

    fn write_array<T>(
        &mut self,
        prefix: &str,
        elems: &[T],
        mut write_elem: impl FnMut(&mut W, &T) -> fmt::Result,
    ) -> fmt::Result {
        self.output.write_char('[')?;
        self.output.write_str(prefix)?;

        for (i, elem) in elems.iter().enumerate() {
            if i != 0 {
                self.output.write_char(',')?;
            }
            write_elem(&mut self.output, elem)?;
        }

        self.output.write_char(']')
    }

    fn write_list(&mut self, list: &List) -> fmt::Result {
        self.output.write_char('[')?;

        for (i, elem) in list.iter().enumerate() {
            if i != 0 {
                self.output.write_char(',')?;
            }
            self.write_value(elem)?;
        }

        self.output.write_char(']')
    }

    fn write_compound(&mut self, compound: &Compound) -> fmt::Result {
        self.output.write_char('{')?;

        for (i, (k, v)) in compound.iter().enumerate() {
            if i != 0 {
                self.output.write_char(',')?;
            }

            if !k.is_empty() && k.chars().all(is_bare_char) {
                self.output.write_str(k)?;
            } else {
                self.write_quoted(k)?;
            }

            self.output.write_char(':')?;
            self.write_value(v.into())?;
        }

        self.output.write_char('}')
    }

    fn write_quoted(&mut self, s: &str) -> fmt::Result {
        self.output.write_char('"')?;

        for c in s.chars() {
            if c == '\\' || c == '"' {
                self.output.write_char('\\')?;
            }
            self.output.write_char(c)?;
        }

        self.output.write_char('"')
    }
}

/// Converts a value to a string in canonical SNBT.
pub fn to_snbt_string<'a, V>(value: V) -> String
where
    V: Into<ValueRef<'a>>,
{
    let value: ValueRef = value.into();
    value.to_string()
}

impl Display for ValueRef<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        SnbtWriter::new(f).write_value(*self)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.as_value_ref(), f)
    }
}

impl Display for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&ValueRef::List(self), f)
    }
}

impl Display for Compound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&ValueRef::Compound(self), f)
    }
}
