//! Utilities for working with Java's "Modified UTF-8" character encoding.
//!
//! Text is encoded one UTF-16 code unit at a time, so characters outside the
//! basic multilingual plane become two 3-byte surrogate sequences. The NUL
//! character is encoded as the 2-byte sequence `C0 80`.
//!
//! The decoder is deliberately lenient in one place: any byte below `0x80`,
//! including a raw `0x00`, decodes to the character with that value. Data
//! produced by the encoder never contains a raw `0x00`, but existing data that
//! does is still accepted.
//!
//! Java strings may hold lone surrogates, which have no `char` equivalent. A
//! 3-byte sequence encoding one decodes to U+FFFD REPLACEMENT CHARACTER.
//!
//! For more information, refer to [Wikipedia].
//!
//! [Wikipedia]: https://en.wikipedia.org/wiki/UTF-8#Modified_UTF-8

use super::{Error, Result};

/// Returns the number of bytes `text` occupies once encoded.
pub(crate) fn encoded_len(text: &str) -> usize {
    text.chars()
        .map(|c| match u32::from(c) {
            // Fast path for ASCII here makes a huge difference in benchmarks.
            0x0001..=0x007f => 1,
            0x0000 | 0x0080..=0x07ff => 2,
            0x0800..=0xffff => 3,
            _ => 6,
        })
        .sum()
}

/// Encodes `text`, appending the bytes to `buf`.
pub(crate) fn encode_modified_utf8(text: &str, buf: &mut Vec<u8>) {
    for unit in text.encode_utf16() {
        match unit {
            0x0001..=0x007f => buf.push(unit as u8),
            0x0000 | 0x0080..=0x07ff => buf.extend([
                0xc0 | (unit >> 6) as u8,
                0x80 | (unit & 0x3f) as u8,
            ]),
            _ => buf.extend([
                0xe0 | (unit >> 12) as u8,
                0x80 | ((unit >> 6) & 0x3f) as u8,
                0x80 | (unit & 0x3f) as u8,
            ]),
        }
    }
}

/// Decodes a complete modified UTF-8 byte sequence.
pub(crate) fn decode_modified_utf8(bytes: &[u8]) -> Result<String> {
    if bytes.is_ascii() {
        return Ok(bytes.iter().copied().map(char::from).collect());
    }

    let continuation = |offset: usize| -> Result<u16> {
        let b = *bytes.get(offset).ok_or(Error::PartialCharacter)?;
        if b & 0xc0 != 0x80 {
            return Err(Error::MalformedString { offset });
        }
        Ok(u16::from(b & 0x3f))
    };

    let mut units = Vec::with_capacity(bytes.len());
    let mut pos = 0;

    while pos < bytes.len() {
        let b = bytes[pos];

        match b >> 4 {
            0x0..=0x7 => {
                units.push(u16::from(b));
                pos += 1;
            }
            0xc | 0xd => {
                let b2 = continuation(pos + 1)?;
                units.push((u16::from(b & 0x1f) << 6) | b2);
                pos += 2;
            }
            0xe => {
                let b2 = continuation(pos + 1)?;
                let b3 = continuation(pos + 2)?;
                units.push((u16::from(b & 0x0f) << 12) | (b2 << 6) | b3);
                pos += 3;
            }
            _ => return Err(Error::MalformedString { offset: pos }),
        }
    }

    Ok(String::from_utf16_lossy(&units))
}
