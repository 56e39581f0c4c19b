//! Unicode code point to UTF-8 byte-sequence encoding.
//!
//! # Compatibility Layout
//!
//! The default [`Utf8Mode::Compat`] reproduces the byte layout existing
//! consumers were built against, which differs from RFC 3629:
//!
//! | Code point range    | Bytes | Pattern                               |
//! |---------------------|-------|---------------------------------------|
//! | 0x000000 - 0x00007F | 1     | `0xxxxxxx`                            |
//! | 0x000080 - 0x0007FF | 2     | `110xxxxx 10xxxxxx`                   |
//! | 0x000800 - 0x0FFFFF | 3     | `1110xxxx 10xxxxxx 10xxxxxx`          |
//! | 0x100000 - 0x10FFFF | 4     | `11110xxx 10xxxxxx 10xxxxxx 10xxxxxx` |
//! | 0x110000 and above  | 0     | empty                                 |
//!
//! The three-byte row extends to 0x0FFFFF, and its lead byte only keeps
//! bits 12-15, so code points 0x010000 - 0x0FFFFF lose their high bits.
//! [`Utf8Mode::Standard`] produces real UTF-8 instead.

use std::fmt;

/// Longest encoding produced, excluding the terminator.
pub const MAX_ENCODED_LEN: usize = 4;

/// Byte layout used by [`encode_utf8_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Utf8Mode {
    /// Legacy layout: three bytes up to 0x0FFFFF, four bytes up to 0x10FFFF.
    #[default]
    Compat,
    /// RFC 3629: three bytes up to 0xFFFF, four bytes up to 0x10FFFF.
    /// Surrogates and values past 0x10FFFF encode as empty.
    Standard,
}

/// An encoded code point: up to four bytes, always followed by `0x00`.
///
/// Owned inline; the encoder keeps no reference to it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Utf8Char {
    /// Encoded bytes, then the terminator at `len`, then zero padding.
    buf: [u8; MAX_ENCODED_LEN + 1],
    len: u8,
}

impl Utf8Char {
    /// Encoding of an unencodable code point.
    pub const EMPTY: Utf8Char = Utf8Char {
        buf: [0; MAX_ENCODED_LEN + 1],
        len: 0,
    };

    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The encoded bytes, without the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len()]
    }

    /// The encoded bytes followed by the `0x00` terminator.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len()]
    }

    /// The full fixed-size buffer, terminator and padding included.
    #[inline]
    pub fn as_buffer(&self) -> &[u8; MAX_ENCODED_LEN + 1] {
        &self.buf
    }

    /// The encoded bytes as `&str`, if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }
}

impl AsRef<[u8]> for Utf8Char {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Utf8Char {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Utf8Char(")?;
        for (i, b) in self.as_bytes().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{b:02X}")?;
        }
        write!(f, ")")
    }
}

/// Encode a code point with the compatibility layout.
pub fn encode_utf8(code_point: u32) -> Utf8Char {
    encode_utf8_with(code_point, Utf8Mode::Compat)
}

/// Encode a code point with an explicit layout.
pub fn encode_utf8_with(code_point: u32, mode: Utf8Mode) -> Utf8Char {
    let encoded = match mode {
        Utf8Mode::Compat => encode_compat(code_point),
        Utf8Mode::Standard => encode_standard(code_point),
    };
    if encoded.is_empty() {
        tracing::trace!(code_point, ?mode, "code point outside encodable range");
    }
    encoded
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "every byte is masked to its payload bits before narrowing"
)]
fn encode_compat(ic: u32) -> Utf8Char {
    let mut buf = [0u8; MAX_ENCODED_LEN + 1];
    let len = if ic < 0x80 {
        buf[0] = ic as u8;
        1
    } else if ic < 0x800 {
        buf[0] = 0xC0 | ((ic >> 6) & 0x1F) as u8;
        buf[1] = 0x80 | (ic & 0x3F) as u8;
        2
    } else if ic < 0x10_0000 {
        buf[0] = 0xE0 | ((ic >> 12) & 0x0F) as u8;
        buf[1] = 0x80 | ((ic >> 6) & 0x3F) as u8;
        buf[2] = 0x80 | (ic & 0x3F) as u8;
        3
    } else if ic < 0x11_0000 {
        buf[0] = 0xF0 | ((ic >> 18) & 0x07) as u8;
        buf[1] = 0x80 | ((ic >> 12) & 0x3F) as u8;
        buf[2] = 0x80 | ((ic >> 6) & 0x3F) as u8;
        buf[3] = 0x80 | (ic & 0x3F) as u8;
        4
    } else {
        0
    };
    Utf8Char { buf, len }
}

fn encode_standard(code_point: u32) -> Utf8Char {
    let Some(c) = char::from_u32(code_point) else {
        return Utf8Char::EMPTY;
    };
    let mut buf = [0u8; MAX_ENCODED_LEN + 1];
    let len = c.encode_utf8(&mut buf[..MAX_ENCODED_LEN]).len();
    Utf8Char {
        buf,
        // `char::encode_utf8` writes at most four bytes.
        len: u8::try_from(len).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests;
