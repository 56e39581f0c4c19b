//! Numeric parsing with a consumption cursor.
//!
//! Every parser interprets a *prefix* of its input and reports, alongside
//! the value, how many bytes it consumed:
//!
//! | `consumed`           | Meaning                                   |
//! |----------------------|-------------------------------------------|
//! | `0`                  | no number at the start; value is zero     |
//! | `0 < consumed < len` | partial parse; trailing bytes left over   |
//! | `consumed == len`    | the whole input is the number             |
//!
//! Leading whitespace and the sign count towards `consumed` only when a
//! number follows them. A NUL byte ends the scan, as it would in a
//! null-terminated buffer, so `&str` and [`CStr`](std::ffi::CStr) inputs
//! with the same text always agree.
//!
//! The `*_exact` variants turn anything short of full consumption into a
//! [`ParseError`].

mod float;
mod integer;
mod scanner;

use crate::AsText;
use float::{hex_value, scan_float, FloatLiteral};
use integer::{is_valid_base, scan_integer};

/// A parsed value and the number of input bytes that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parsed<T> {
    pub value: T,
    pub consumed: usize,
}

impl<T> Parsed<T> {
    #[inline]
    pub fn new(value: T, consumed: usize) -> Self {
        Parsed { value, consumed }
    }

    /// Whether any number was recognised.
    #[inline]
    pub fn matched(&self) -> bool {
        self.consumed > 0
    }

    /// Whether a number was recognised and it spans the entire `input`.
    pub fn is_complete<S: AsText + ?Sized>(&self, input: &S) -> bool {
        self.matched() && self.consumed == input.text_bytes().len()
    }

    /// The unconsumed tail of `input`.
    pub fn rest<'a, S: AsText + ?Sized>(&self, input: &'a S) -> &'a [u8] {
        input.text_bytes().get(self.consumed..).unwrap_or_default()
    }

    /// [`rest`](Self::rest) for `&str` input.
    pub fn rest_str<'a>(&self, input: &'a str) -> &'a str {
        input.get(self.consumed..).unwrap_or("")
    }

    /// Check full consumption of `input`, yielding the bare value.
    pub fn complete<S: AsText + ?Sized>(self, input: &S) -> Result<T, ParseError> {
        let len = input.text_bytes().len();
        if !self.matched() {
            Err(ParseError::NoDigits)
        } else if self.consumed != len {
            Err(ParseError::TrailingInput {
                consumed: self.consumed,
                len,
            })
        } else {
            Ok(self.value)
        }
    }
}

impl<T: Default> Parsed<T> {
    /// The "nothing recognised" result: zero value, nothing consumed.
    #[inline]
    pub fn none() -> Self {
        Parsed::new(T::default(), 0)
    }
}

/// Why a strict parse rejected its input.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid numeric base {0}: expected 0 or 2..=36")]
    InvalidBase(u32),
    #[error("no number found at start of input")]
    NoDigits,
    #[error("trailing input after number: consumed {consumed} of {len} bytes")]
    TrailingInput { consumed: usize, len: usize },
}

// ── Integers ─────────────────────────────────────────────────────────────

/// Integer result types the prefix parser can produce.
trait IntTarget: Copy + Default {
    const MIN: i64;
    const MAX: i64;

    /// Convert a value already clamped to `[MIN, MAX]`.
    fn from_clamped(value: i64) -> Self;
}

macro_rules! impl_int_target {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntTarget for $ty {
                const MIN: i64 = <$ty>::MIN as i64;
                const MAX: i64 = <$ty>::MAX as i64;

                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "callers clamp to the target range first"
                )]
                #[inline]
                fn from_clamped(value: i64) -> Self {
                    value as $ty
                }
            }
        )*
    };
}

impl_int_target!(i32, i64);

fn parse_integer<T: IntTarget>(bytes: &[u8], base: u32) -> Parsed<T> {
    if !is_valid_base(base) {
        tracing::debug!(base, "integer parse with invalid base");
        return Parsed::none();
    }
    let Some(literal) = scan_integer(bytes, base) else {
        return Parsed::none();
    };
    let (value, saturated) = literal.clamp(T::MIN, T::MAX);
    if saturated {
        tracing::trace!(value, "integer literal out of range; saturated");
    }
    Parsed::new(T::from_clamped(value), literal.end)
}

/// Parse a leading `i32` in `base` (0 auto-detects `0x` and `0` prefixes).
///
/// Out-of-range literals saturate at `i32::MIN`/`i32::MAX`; every digit is
/// still consumed. This differs from `(int)strtol(..)`, which saturates at
/// the `long` bounds and then wraps on the narrowing cast.
pub fn parse_int<T: AsText + ?Sized>(text: &T, base: u32) -> Parsed<i32> {
    parse_integer(text.text_bytes(), base)
}

/// Parse a leading `i64` in `base`. Same rules as [`parse_int`].
pub fn parse_long<T: AsText + ?Sized>(text: &T, base: u32) -> Parsed<i64> {
    parse_integer(text.text_bytes(), base)
}

/// [`parse_int`], requiring the whole input to be the number.
pub fn parse_int_exact<T: AsText + ?Sized>(text: &T, base: u32) -> Result<i32, ParseError> {
    if !is_valid_base(base) {
        return Err(ParseError::InvalidBase(base));
    }
    parse_int(text, base).complete(text)
}

/// [`parse_long`], requiring the whole input to be the number.
pub fn parse_long_exact<T: AsText + ?Sized>(text: &T, base: u32) -> Result<i64, ParseError> {
    if !is_valid_base(base) {
        return Err(ParseError::InvalidBase(base));
    }
    parse_long(text, base).complete(text)
}

// ── Floating point ───────────────────────────────────────────────────────

/// Floating-point result types the prefix parser can produce.
trait FloatTarget: std::str::FromStr + std::ops::Neg<Output = Self> + Copy + Default {
    const INFINITY: Self;
    const NAN: Self;
    const MANTISSA_DIGITS: u32;
    const MIN_EXP: i32;

    fn from_f64(value: f64) -> Self;
}

impl FloatTarget for f64 {
    const INFINITY: Self = f64::INFINITY;
    const NAN: Self = f64::NAN;
    const MANTISSA_DIGITS: u32 = f64::MANTISSA_DIGITS;
    const MIN_EXP: i32 = f64::MIN_EXP;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl FloatTarget for f32 {
    const INFINITY: Self = f32::INFINITY;
    const NAN: Self = f32::NAN;
    const MANTISSA_DIGITS: u32 = f32::MANTISSA_DIGITS;
    const MIN_EXP: i32 = f32::MIN_EXP;

    #[allow(
        clippy::cast_possible_truncation,
        reason = "callers pass values already rounded to f32 precision; out of range becomes infinity"
    )]
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
}

fn parse_floating<F: FloatTarget>(bytes: &[u8]) -> Parsed<F> {
    let Some((literal, end)) = scan_float(bytes) else {
        return Parsed::none();
    };

    let signed = |negative: bool, v: F| if negative { -v } else { v };
    let value = match literal {
        // Decimal text is converted directly in the target precision so
        // `f32` results are rounded once.
        FloatLiteral::Decimal(text) => match text.parse::<F>() {
            Ok(v) => v,
            Err(_) => {
                tracing::debug!(text, "scanned decimal literal rejected by conversion");
                return Parsed::none();
            }
        },
        FloatLiteral::Hex {
            negative,
            mantissa,
            exponent,
        } => {
            let value = hex_value(mantissa, exponent, F::MANTISSA_DIGITS, F::MIN_EXP);
            signed(negative, F::from_f64(value))
        }
        FloatLiteral::Infinity { negative } => signed(negative, F::INFINITY),
        FloatLiteral::Nan { negative } => signed(negative, F::NAN),
    };
    Parsed::new(value, end)
}

/// Parse a leading `f64`: decimal, hexadecimal (`0x1.8p3`), `inf`/`infinity`
/// or `nan`.
pub fn parse_double<T: AsText + ?Sized>(text: &T) -> Parsed<f64> {
    parse_floating(text.text_bytes())
}

/// Parse a leading `f32`. Same grammar as [`parse_double`].
pub fn parse_float<T: AsText + ?Sized>(text: &T) -> Parsed<f32> {
    parse_floating(text.text_bytes())
}

/// [`parse_double`], requiring the whole input to be the number.
pub fn parse_double_exact<T: AsText + ?Sized>(text: &T) -> Result<f64, ParseError> {
    parse_double(text).complete(text)
}

/// [`parse_float`], requiring the whole input to be the number.
pub fn parse_float_exact<T: AsText + ?Sized>(text: &T) -> Result<f32, ParseError> {
    parse_float(text).complete(text)
}

// ── Booleans ─────────────────────────────────────────────────────────────

/// Whole-input boolean: true only for `"true"` (any ASCII case) or `"1"`.
///
/// Not a prefix parse: `"true "`, `"yes"`, `"on"` and `""` are all false.
pub fn parse_bool<T: AsText + ?Sized>(text: &T) -> bool {
    let lowered = crate::to_lower_bytes(text);
    lowered == b"true" || lowered == b"1"
}
