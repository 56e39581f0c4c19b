//! Floating-point prefix scanning with `strtod` rules.
//!
//! Accepted forms, after optional whitespace and sign:
//!
//! ```text
//! decimal   := digits [ "." digits? ] [ exponent ] | "." digits [ exponent ]
//! exponent  := ("e" | "E") [ sign ] digits
//! hex       := "0" ("x" | "X") hexdigits [ "." hexdigits? ] [ ("p" | "P") [ sign ] digits ]
//! special   := "inf" | "infinity" | "nan" [ "(" [A-Za-z0-9_]* ")" ]
//! ```
//!
//! An exponent marker without digits is not part of the literal.

use super::scanner::Scanner;

/// Hex mantissa digits kept before further digits only shift the exponent.
/// Fifteen hex digits fit in 60 bits, well inside `u64`.
const HEX_MANTISSA_LIMIT: u64 = 1 << 60;

/// Cap on a binary exponent; anything larger already over/underflows `f64`.
const HEX_EXPONENT_LIMIT: i64 = 100_000;

/// A floating-point literal recognised at the start of the input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum FloatLiteral<'a> {
    /// Decimal text (sign included, whitespace excluded), ready for
    /// `str::parse`.
    Decimal(&'a str),
    /// `mantissa * 2^exponent`.
    Hex {
        negative: bool,
        mantissa: u64,
        exponent: i64,
    },
    Infinity { negative: bool },
    Nan { negative: bool },
}

/// Scan a float literal. Returns the literal and the offset just past it.
pub(crate) fn scan_float(bytes: &[u8]) -> Option<(FloatLiteral<'_>, usize)> {
    let mut s = Scanner::new(bytes);
    s.skip_whitespace();
    let start = s.pos();
    let negative = s.eat_sign();

    if s.at_word_ignore_case(b"inf") {
        let word = if s.at_word_ignore_case(b"infinity") { 8 } else { 3 };
        s.advance_n(word);
        return Some((FloatLiteral::Infinity { negative }, s.pos()));
    }

    if s.at_word_ignore_case(b"nan") {
        s.advance_n(3);
        eat_nan_payload(&mut s);
        return Some((FloatLiteral::Nan { negative }, s.pos()));
    }

    if s.current() == b'0' && matches!(s.peek(), b'x' | b'X') {
        let after_sign = s;
        s.advance_n(2);
        if let Some(literal) = scan_hex_body(&mut s, negative) {
            return Some((literal, s.pos()));
        }
        // `0x` with no hex digits: the literal is just the `0`.
        s = after_sign;
    }

    let integer_digits = s.eat_while(|b| b.is_ascii_digit());
    let mut fraction_digits = 0;
    if s.current() == b'.' {
        let before_dot = s;
        s.advance();
        fraction_digits = s.eat_while(|b| b.is_ascii_digit());
        if integer_digits + fraction_digits == 0 {
            s = before_dot;
        }
    }
    if integer_digits + fraction_digits == 0 {
        return None;
    }

    if matches!(s.current(), b'e' | b'E') {
        let before_exponent = s;
        s.advance();
        s.eat_sign();
        if s.eat_while(|b| b.is_ascii_digit()) == 0 {
            s = before_exponent;
        }
    }

    let text = std::str::from_utf8(s.slice_from(start)).ok()?;
    Some((FloatLiteral::Decimal(text), s.pos()))
}

/// Optional `(n-char-sequence)` after `nan`. Only consumed when closed.
fn eat_nan_payload(s: &mut Scanner<'_>) {
    if s.current() != b'(' {
        return;
    }
    let mut probe = *s;
    probe.advance();
    probe.eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
    if probe.eat(b')') {
        *s = probe;
    }
}

/// Hex digits, optional fraction and optional binary exponent, with the
/// cursor already past `0x`. Returns `None` if there is no hex digit.
fn scan_hex_body(s: &mut Scanner<'_>, negative: bool) -> Option<FloatLiteral<'static>> {
    let mut mantissa: u64 = 0;
    let mut exponent: i64 = 0;
    let mut sticky = false;

    let mut push_digit = |b: u8, fractional: bool| {
        let digit = u64::from(char::from(b).to_digit(16).unwrap_or(0));
        if mantissa < HEX_MANTISSA_LIMIT {
            mantissa = mantissa * 16 + digit;
            if fractional {
                exponent -= 4;
            }
        } else {
            sticky |= digit != 0;
            if !fractional {
                exponent += 4;
            }
        }
    };

    let mut digits = 0;
    while s.current().is_ascii_hexdigit() {
        push_digit(s.current(), false);
        s.advance();
        digits += 1;
    }
    if s.current() == b'.' {
        s.advance();
        while s.current().is_ascii_hexdigit() {
            push_digit(s.current(), true);
            s.advance();
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    if matches!(s.current(), b'p' | b'P') {
        let before_exponent = *s;
        s.advance();
        let exponent_negative = s.eat_sign();
        let mut value: i64 = 0;
        let exponent_digits = s.eat_while(|b| {
            if b.is_ascii_digit() {
                value = (value * 10 + i64::from(b - b'0')).min(HEX_EXPONENT_LIMIT);
                true
            } else {
                false
            }
        });
        if exponent_digits == 0 {
            *s = before_exponent;
        } else if exponent_negative {
            exponent -= value;
        } else {
            exponent += value;
        }
    }

    // Digits are only dropped once the mantissa spans 61 bits, so bit 0 sits
    // below the rounding position of any target format and can carry the
    // sticky bit.
    Some(FloatLiteral::Hex {
        negative,
        mantissa: mantissa | u64::from(sticky),
        exponent,
    })
}

/// Round `mantissa * 2^exponent` once, to nearest with ties to even, into a
/// binary format with `precision` significand bits whose smallest normal
/// value is `2^(min_exp - 1)`.
///
/// `precision` and `min_exp` follow `f64::MANTISSA_DIGITS` and
/// `f64::MIN_EXP`. The result is returned as an `f64` that is exactly
/// representable in the target format, so narrowing it afterwards is exact.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the kept significand fits the target precision; shift and scale are range-checked"
)]
pub(crate) fn hex_value(mantissa: u64, exponent: i64, precision: u32, min_exp: i32) -> f64 {
    if mantissa == 0 {
        return 0.0;
    }
    let exponent = exponent.clamp(-2 * HEX_EXPONENT_LIMIT, 2 * HEX_EXPONENT_LIMIT);

    // Weight of the leading bit, then of the last bit the format keeps.
    let top = exponent + i64::from(u64::BITS - mantissa.leading_zeros()) - 1;
    let lsb = top.max(i64::from(min_exp) - 1) - i64::from(precision) + 1;
    let shift = lsb - exponent;

    let (kept, scale) = if shift <= 0 {
        (mantissa, exponent)
    } else if shift > i64::from(u64::BITS) {
        // Below half the smallest subnormal.
        return 0.0;
    } else {
        let shift = shift as u32;
        let wide = u128::from(mantissa);
        let kept = wide >> shift;
        let remainder = wide & ((1u128 << shift) - 1);
        let half = 1u128 << (shift - 1);
        let round_up = remainder > half || (remainder == half && kept & 1 == 1);
        ((kept + u128::from(round_up)) as u64, lsb)
    };

    // Applied in two halves so neither power leaves the normal range.
    let scale = scale as i32;
    let half = scale / 2;
    kept as f64 * 2f64.powi(half) * 2f64.powi(scale - half)
}
