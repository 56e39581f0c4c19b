//! ctext - Text and Numeric Utility Primitives
//!
//! Leaf-level helpers shared by the communication stack:
//! - Case-insensitive comparison, delimiter splitting, ASCII lowercasing
//! - Prefix number parsing with a consumption cursor (`strtol`/`strtod` rules)
//! - Unicode code point to UTF-8 byte-sequence encoding
//! - Fixed-format number and pointer rendering
//!
//! # Design Philosophy
//!
//! - **Stateless**: every function is a pure transformation over its inputs.
//!   Nothing is cached, nothing is global, so all of it is callable from any
//!   thread without coordination.
//! - **One view, many inputs**: operations take any [`AsText`] value, so
//!   owned strings, slices and null-terminated [`CStr`](std::ffi::CStr)
//!   buffers share a single implementation.
//! - **Quiet failure**: parsers report "nothing recognised" as a zero value
//!   with `consumed == 0`; the encoder reports an unencodable code point as
//!   an empty buffer. Strict `*_exact` parsers exist for callers that want a
//!   [`ParseError`] instead.

mod format;
mod parse;
mod strings;
mod text;
mod utf8;

pub use format::{pointer_to_text, ToText};
pub use parse::{
    parse_bool, parse_double, parse_double_exact, parse_float, parse_float_exact, parse_int,
    parse_int_exact, parse_long, parse_long_exact, ParseError, Parsed,
};
pub use strings::{iequals, split, split_bytes, split_owned, to_lower, to_lower_bytes};
pub use text::AsText;
pub use utf8::{encode_utf8, encode_utf8_with, Utf8Char, Utf8Mode, MAX_ENCODED_LEN};
