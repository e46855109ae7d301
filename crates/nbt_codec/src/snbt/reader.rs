use tracing::debug;

use super::literal::classify;
use super::{Result, SnbtError, SnbtErrorKind};
use crate::tag::Tag;
use crate::{Compound, List, TypeMismatch, Value, MAX_DEPTH};

/// A cursor over SNBT text.
///
/// Each `read_*` call parses one value starting at the current position and
/// leaves the cursor just past it.
pub struct SnbtReader {
    input: Vec<char>,
    cursor: usize,
    /// Nesting level of the value about to be read.
    depth: usize,
}

impl SnbtReader {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            cursor: 0,
            depth: 0,
        }
    }

    /// Number of characters consumed so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reads a compound. Leading whitespace is skipped.
    pub fn read_compound(&mut self) -> Result<Compound> {
        self.check_depth(Self::parse_compound)
    }

    /// Reads a value of any type. Leading whitespace is skipped.
    pub fn read_value(&mut self) -> Result<Value> {
        self.skip_whitespace();

        match self.peek(0) {
            None => Err(self.syntax_error("Expected value")),
            Some('{') => Ok(Value::Compound(self.read_compound()?)),
            Some('[') => self.check_depth(Self::read_list_or_array),
            Some('"') => Ok(Value::String(self.read_quoted_string()?)),
            Some(_) => self.read_literal(),
        }
    }

    fn check_depth<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        if self.depth > MAX_DEPTH {
            debug!(
                depth = self.depth,
                cursor = self.cursor,
                "SNBT depth limit exceeded"
            );
            return Err(self.syntax_error(format!("Maximum nesting depth of {MAX_DEPTH} exceeded")));
        }

        self.depth += 1;
        let res = f(self);
        self.depth -= 1;
        res
    }

    fn syntax_error(&self, message: impl Into<String>) -> SnbtError {
        SnbtError::new(SnbtErrorKind::Syntax, message, &self.input, self.cursor)
    }

    fn type_error(&self, mismatch: TypeMismatch) -> SnbtError {
        SnbtError::new(
            SnbtErrorKind::TypeMismatch,
            mismatch.to_string(),
            &self.input,
            self.cursor,
        )
    }

    fn can_read(&self, offset: usize) -> bool {
        self.cursor + offset < self.input.len()
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.cursor + offset).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek(0).is_some_and(char::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Consumes a `,` and the whitespace around it, if present.
    fn has_separator(&mut self) -> bool {
        self.skip_whitespace();

        if self.peek(0) == Some(',') {
            self.cursor += 1;
            self.skip_whitespace();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        self.skip_whitespace();

        match self.peek(0) {
            Some(c) if c == expected => {
                self.cursor += 1;
                Ok(())
            }
            Some(c) => Err(self.syntax_error(format!("Expected '{expected}' but got '{c}'"))),
            None => Err(self.syntax_error(format!("Expected '{expected}' but got '<EOF>'"))),
        }
    }

    fn parse_compound(&mut self) -> Result<Compound> {
        self.expect('{')?;
        self.skip_whitespace();

        let mut compound = Compound::new();

        while self.peek(0).is_some_and(|c| c != '}') {
            let key = self.read_key()?;
            if key.is_empty() {
                return Err(self.syntax_error("Expected non-empty key"));
            }

            self.expect(':')?;
            let value = self.read_value()?;
            compound.insert(key, value);

            if !self.has_separator() {
                break;
            }
            if !self.can_read(0) {
                return Err(self.syntax_error("Expected key"));
            }
        }

        self.expect('}')?;
        Ok(compound)
    }

    fn read_key(&mut self) -> Result<String> {
        self.skip_whitespace();

        match self.peek(0) {
            None => Err(self.syntax_error("Expected key")),
            Some('"') => self.read_quoted_string(),
            Some(_) => Ok(self.read_bare()),
        }
    }

    /// Reads a run of characters that may appear unquoted.
    fn read_bare(&mut self) -> String {
        let start = self.cursor;

        while self.peek(0).is_some_and(is_bare_char) {
            self.cursor += 1;
        }

        self.input[start..self.cursor].iter().collect()
    }

    fn read_quoted_string(&mut self) -> Result<String> {
        // Opening quote.
        self.cursor += 1;

        let mut out = String::new();
        let mut escape = false;

        while let Some(c) = self.peek(0) {
            self.cursor += 1;

            if escape {
                if c != '\\' && c != '"' {
                    return Err(self.syntax_error(format!("Invalid escape of '{c}'")));
                }
                escape = false;
            } else if c == '\\' {
                escape = true;
                continue;
            } else if c == '"' {
                return Ok(out);
            }

            out.push(c);
        }

        Err(self.syntax_error("Missing termination quote"))
    }

    fn read_literal(&mut self) -> Result<Value> {
        let token = self.read_bare();

        if token.is_empty() {
            return Err(self.syntax_error("Expected value"));
        }

        Ok(classify(&token))
    }

    /// `[X;` opens an array unless `X` is a quote. Anything else opening with
    /// `[` is a list.
    fn read_list_or_array(&mut self) -> Result<Value> {
        match (self.peek(1), self.peek(2)) {
            (Some(kind), Some(';')) if kind != '"' => self.read_array(kind),
            _ => Ok(Value::List(self.read_list()?)),
        }
    }

    fn read_list(&mut self) -> Result<List> {
        self.expect('[')?;
        self.skip_whitespace();

        if !self.can_read(0) {
            return Err(self.syntax_error("Expected value"));
        }

        let mut list = List::new();

        while self.peek(0).is_some_and(|c| c != ']') {
            let value = self.read_value()?;

            if let Err(mismatch) = list.try_push(value) {
                return Err(self.type_error(mismatch));
            }

            if !self.has_separator() {
                break;
            }
            if !self.can_read(0) {
                return Err(self.syntax_error("Expected value"));
            }
        }

        self.expect(']')?;
        Ok(list)
    }

    fn read_array(&mut self, kind: char) -> Result<Value> {
        // `[`, the kind character and `;`.
        self.cursor += 3;
        self.skip_whitespace();

        if !self.can_read(0) {
            return Err(self.syntax_error("Expected value"));
        }

        match kind {
            'B' => self
                .read_array_elements(Tag::ByteArray, Tag::Byte, |v| match *v {
                    Value::Byte(b) => Some(b),
                    Value::Int(i) => i8::try_from(i).ok(),
                    _ => None,
                })
                .map(Value::ByteArray),
            'I' => self
                .read_array_elements(Tag::IntArray, Tag::Int, |v| v.as_int().copied())
                .map(Value::IntArray),
            'L' => self
                .read_array_elements(Tag::LongArray, Tag::Long, |v| match *v {
                    Value::Long(l) => Some(l),
                    Value::Int(i) => Some(i64::from(i)),
                    _ => None,
                })
                .map(Value::LongArray),
            _ => Err(self.syntax_error(format!("Invalid array type '{kind}' found"))),
        }
    }

    /// Reads comma separated array elements up to and including the closing
    /// `]`. Unsuffixed integers are accepted wherever `convert` can fit them
    /// into the element type.
    fn read_array_elements<T>(
        &mut self,
        container: Tag,
        expected: Tag,
        convert: impl Fn(&Value) -> Option<T>,
    ) -> Result<Vec<T>> {
        let mut out = vec![];

        while self.peek(0).is_some_and(|c| c != ']') {
            let value = self.read_value()?;

            match convert(&value) {
                Some(elem) => out.push(elem),
                None => {
                    return Err(self.type_error(TypeMismatch {
                        container,
                        expected,
                        actual: value.tag(),
                    }))
                }
            }

            if !self.has_separator() {
                break;
            }
            if !self.can_read(0) {
                return Err(self.syntax_error("Expected value"));
            }
        }

        self.expect(']')?;
        Ok(out)
    }
}

/// Characters allowed in unquoted keys and literals.
pub(super) fn is_bare_char(c: char) -> bool {
    matches!(c, 'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '+' | '.')
}
