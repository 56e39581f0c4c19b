//! Integer prefix scanning with `strtol` rules.

use super::scanner::Scanner;

/// Largest radix with a digit alphabet (`0-9`, `a-z`).
pub(crate) const MAX_RADIX: u32 = 36;

/// Whether `base` is accepted: 0 (auto-detect) or `2..=36`.
#[inline]
pub(crate) fn is_valid_base(base: u32) -> bool {
    base == 0 || (2..=MAX_RADIX).contains(&base)
}

/// An integer literal recognised at the start of the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct IntLiteral {
    pub negative: bool,
    /// Magnitude of the digits, saturated at `u64::MAX`.
    pub magnitude: u64,
    /// Byte offset just past the last digit.
    pub end: usize,
}

impl IntLiteral {
    /// Signed value clamped to `[min, max]`. The flag reports whether
    /// clamping changed the value.
    pub(crate) fn clamp(self, min: i64, max: i64) -> (i64, bool) {
        let exact = if self.negative {
            -i128::from(self.magnitude)
        } else {
            i128::from(self.magnitude)
        };
        let clamped = exact.clamp(i128::from(min), i128::from(max));
        // `clamped` lies within `[min, max]`, both of which are i64.
        let value = i64::try_from(clamped).unwrap_or(if self.negative { min } else { max });
        (value, clamped != exact)
    }
}

/// Scan `[whitespace][sign][prefix]digits` in `base`.
///
/// Returns `None` when the base is invalid or no digit is found. A `0x`
/// that is not followed by a hex digit is not a prefix: in base 0 or 16 the
/// `0` alone is the literal.
pub(crate) fn scan_integer(bytes: &[u8], base: u32) -> Option<IntLiteral> {
    if !is_valid_base(base) {
        return None;
    }

    let mut s = Scanner::new(bytes);
    s.skip_whitespace();
    let negative = s.eat_sign();

    let radix = match base {
        0 | 16 if s.at_hex_prefix() => {
            s.advance_n(2);
            16
        }
        0 if s.current() == b'0' => 8,
        0 => 10,
        other => other,
    };

    let mut magnitude: u64 = 0;
    let digits = s.eat_while(|b| match char::from(b).to_digit(MAX_RADIX) {
        Some(d) if d < radix => {
            magnitude = magnitude
                .saturating_mul(u64::from(radix))
                .saturating_add(u64::from(d));
            true
        }
        _ => false,
    });

    if digits == 0 {
        return None;
    }

    Some(IntLiteral {
        negative,
        magnitude,
        end: s.pos(),
    })
}
