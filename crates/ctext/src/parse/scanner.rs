//! Byte cursor used by the number scanners.
//!
//! Reads past the end of the view return `0x00`, the same byte a C scanner
//! sees at the terminator. An interior NUL therefore ends a number exactly
//! where it would end one in a null-terminated buffer.

/// Returns true for the bytes C's `isspace` accepts in the "C" locale.
#[inline]
pub(crate) fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// Copyable cursor over a byte view.
///
/// Being [`Copy`], a scanner doubles as its own snapshot: save it before a
/// speculative run and restore it if the run does not pan out.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> u8 {
        self.buf.get(self.pos + offset).copied().unwrap_or(0)
    }

    /// Byte at the current position, or `0x00` past the end.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(0)
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(1)
    }

    #[inline]
    pub(crate) fn peek2(&self) -> u8 {
        self.byte_at(2)
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Bytes from `start` up to the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a [u8] {
        &self.buf[start..self.pos]
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Consume `b` if it is the current byte.
    pub(crate) fn eat(&mut self, b: u8) -> bool {
        if self.current() == b && b != 0 {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume bytes while `pred` holds. Returns how many were consumed.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(u8) -> bool) -> usize {
        let start = self.pos;
        while self.pos < self.buf.len() && pred(self.current()) {
            self.advance();
        }
        self.pos - start
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(is_c_space);
    }

    /// Consume an optional `+`/`-`. Returns true when the sign is negative.
    pub(crate) fn eat_sign(&mut self) -> bool {
        if self.eat(b'-') {
            true
        } else {
            self.eat(b'+');
            false
        }
    }

    /// Whether the upcoming bytes equal `word`, ignoring ASCII case.
    pub(crate) fn at_word_ignore_case(&self, word: &[u8]) -> bool {
        self.buf
            .get(self.pos..self.pos + word.len())
            .is_some_and(|window| window.eq_ignore_ascii_case(word))
    }

    /// Whether the current byte is `0` followed by `x`/`X` and a hex digit.
    pub(crate) fn at_hex_prefix(&self) -> bool {
        self.current() == b'0'
            && matches!(self.peek(), b'x' | b'X')
            && self.peek2().is_ascii_hexdigit()
    }
}
