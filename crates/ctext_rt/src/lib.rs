//! ctext C Runtime (`libctext_rt`)
//!
//! C-ABI entry points over the `ctext` primitives, for hosts that hold
//! null-terminated `char*` buffers.
//!
//! # Build Modes
//!
//! - **rlib**: For Rust consumers
//! - **staticlib**: For linking into C/C++ hosts (`libctext_rt.a`)
//!
//! # Function Categories
//!
//! - **Predicates**: `ctext_iequals`
//! - **Parsing**: `ctext_stoi`, `ctext_stol`, `ctext_stod`, `ctext_stof`, `ctext_stob`
//! - **Transforms**: `ctext_string_to_lower`, `ctext_split`
//! - **Encoding**: `ctext_utf8_to_char`
//! - **Formatting**: `ctext_int_to_string`, `ctext_double_to_string`
//! - **Release**: `ctext_string_free`, `ctext_str_list_free`, `ctext_utf8_free`
//!
//! # Ownership
//!
//! Every returned buffer belongs to the caller and must be released with the
//! matching `*_free` function. Null input strings are treated as empty.
//!
//! # Safety
//!
//! All functions use `#[no_mangle]` and `extern "C"`. Pointer arguments must
//! be null or point to valid null-terminated strings. They're not marked
//! `unsafe` because they're FFI entry points, not Rust API functions.

#![allow(
    unsafe_code,
    reason = "C-ABI entry points require unsafe for raw pointer operations"
)]
#![allow(
    clippy::not_unsafe_ptr_arg_deref,
    reason = "FFI entry points receive pointers whose validity the C caller guarantees"
)]

use std::ffi::{c_char, c_int, CStr, CString};
use std::sync::Once;

use ctext::{
    encode_utf8, iequals, parse_bool, parse_double, parse_float, parse_int, parse_long,
    split_bytes, to_lower_bytes, ToText, MAX_ENCODED_LEN,
};

/// Size of every buffer returned by `ctext_utf8_to_char`: the longest
/// encoding plus its terminator.
pub const UTF8_BUFFER_LEN: usize = MAX_ENCODED_LEN + 1;

/// Owned list of C strings: `{ size_t len, char **items }`.
#[repr(C)]
pub struct CtextStrList {
    pub len: usize,
    pub items: *mut *mut c_char,
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=ctext=trace` or `RUST_LOG=ctext_rt=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// C entry point for [`init_tracing`].
#[no_mangle]
pub extern "C" fn ctext_init_tracing() {
    init_tracing();
}

// ── Boundary helpers ─────────────────────────────────────────────────────

/// View a C string, treating null as empty.
fn c_text<'a>(s: *const c_char) -> &'a CStr {
    if s.is_null() {
        tracing::trace!("null string pointer treated as empty");
        return c"";
    }
    // SAFETY: Caller guarantees s is a valid null-terminated string
    unsafe { CStr::from_ptr(s) }
}

/// Write the consumption cursor if the caller asked for it.
fn store_cursor(idx: *mut usize, consumed: usize) {
    if idx.is_null() {
        return;
    }
    // SAFETY: Caller guarantees a non-null idx points to a writable size_t
    unsafe { idx.write(consumed) };
}

/// Hand bytes to C as an owned null-terminated string.
///
/// Returns null if `bytes` contains a NUL, which cannot happen for text
/// derived from a C string.
fn into_c_string(bytes: Vec<u8>) -> *mut c_char {
    CString::new(bytes).map_or(std::ptr::null_mut(), CString::into_raw)
}

/// Map a C base argument onto the parser's base; negative bases are invalid.
fn parse_base(base: c_int) -> u32 {
    u32::try_from(base).unwrap_or(u32::MAX)
}

// ── Predicates ───────────────────────────────────────────────────────────

/// ASCII case-insensitive equality of two C strings.
#[no_mangle]
pub extern "C" fn ctext_iequals(a: *const c_char, b: *const c_char) -> bool {
    iequals(c_text(a), c_text(b))
}

// ── Parsing ──────────────────────────────────────────────────────────────

/// Parse a leading `int` in `base`. Writes the consumed byte count to `idx`
/// when `idx` is non-null.
#[no_mangle]
pub extern "C" fn ctext_stoi(s: *const c_char, idx: *mut usize, base: c_int) -> c_int {
    let parsed = parse_int(c_text(s), parse_base(base));
    store_cursor(idx, parsed.consumed);
    parsed.value
}

/// Parse a leading 64-bit integer in `base`.
#[no_mangle]
pub extern "C" fn ctext_stol(s: *const c_char, idx: *mut usize, base: c_int) -> i64 {
    let parsed = parse_long(c_text(s), parse_base(base));
    store_cursor(idx, parsed.consumed);
    parsed.value
}

/// Parse a leading `double`.
#[no_mangle]
pub extern "C" fn ctext_stod(s: *const c_char, idx: *mut usize) -> f64 {
    let parsed = parse_double(c_text(s));
    store_cursor(idx, parsed.consumed);
    parsed.value
}

/// Parse a leading `float`.
#[no_mangle]
pub extern "C" fn ctext_stof(s: *const c_char, idx: *mut usize) -> f32 {
    let parsed = parse_float(c_text(s));
    store_cursor(idx, parsed.consumed);
    parsed.value
}

/// Whole-string boolean: `"true"` (any case) or `"1"`.
#[no_mangle]
pub extern "C" fn ctext_stob(s: *const c_char) -> bool {
    parse_bool(c_text(s))
}

// ── Transforms ───────────────────────────────────────────────────────────

/// ASCII-lowercase a C string into a new allocation.
///
/// Release with `ctext_string_free`.
#[no_mangle]
pub extern "C" fn ctext_string_to_lower(s: *const c_char) -> *mut c_char {
    into_c_string(to_lower_bytes(c_text(s)))
}

/// Split `s` on every non-overlapping `delimiter`.
///
/// An empty delimiter yields a single segment holding all of `s`.
/// Release with `ctext_str_list_free`.
#[no_mangle]
pub extern "C" fn ctext_split(s: *const c_char, delimiter: *const c_char) -> CtextStrList {
    let segments = split_bytes(c_text(s).to_bytes(), c_text(delimiter).to_bytes());
    let items: Box<[*mut c_char]> = segments
        .into_iter()
        .map(|segment| into_c_string(segment.to_vec()))
        .collect();

    CtextStrList {
        len: items.len(),
        items: Box::into_raw(items).cast::<*mut c_char>(),
    }
}

/// Free a string returned by this library.
#[no_mangle]
pub extern "C" fn ctext_string_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    // SAFETY: s was produced by CString::into_raw in this crate
    drop(unsafe { CString::from_raw(s) });
}

/// Free a list returned by `ctext_split` and reset it to empty.
#[no_mangle]
pub extern "C" fn ctext_str_list_free(list: *mut CtextStrList) {
    if list.is_null() {
        return;
    }
    // SAFETY: Caller ensures list is valid
    let list = unsafe { &mut *list };
    if list.items.is_null() {
        return;
    }

    // SAFETY: items/len came from Box::into_raw on a boxed slice in ctext_split
    let items = unsafe {
        Box::from_raw(std::ptr::slice_from_raw_parts_mut(list.items, list.len))
    };
    for &item in &*items {
        ctext_string_free(item);
    }

    list.len = 0;
    list.items = std::ptr::null_mut();
}

// ── Encoding ─────────────────────────────────────────────────────────────

/// Encode a code point into a new `UTF8_BUFFER_LEN`-byte buffer.
///
/// The encoded bytes are followed by a terminator; code points the encoder
/// cannot represent give an empty string. Release with `ctext_utf8_free`.
#[no_mangle]
pub extern "C" fn ctext_utf8_to_char(code_point: u32) -> *mut c_char {
    let buffer = Box::new(*encode_utf8(code_point).as_buffer());
    Box::into_raw(buffer).cast::<c_char>()
}

/// Free a buffer returned by `ctext_utf8_to_char`.
#[no_mangle]
pub extern "C" fn ctext_utf8_free(buffer: *mut c_char) {
    if buffer.is_null() {
        return;
    }
    // SAFETY: buffer was produced by Box::into_raw on a [u8; UTF8_BUFFER_LEN]
    drop(unsafe { Box::from_raw(buffer.cast::<[u8; UTF8_BUFFER_LEN]>()) });
}

// ── Formatting ───────────────────────────────────────────────────────────

/// Render an integer in decimal. Release with `ctext_string_free`.
#[no_mangle]
pub extern "C" fn ctext_int_to_string(n: i64) -> *mut c_char {
    into_c_string(n.to_text().into_bytes())
}

/// Render a double with six fractional digits. Release with
/// `ctext_string_free`.
#[no_mangle]
pub extern "C" fn ctext_double_to_string(f: f64) -> *mut c_char {
    into_c_string(f.to_text().into_bytes())
}

#[cfg(test)]
mod tests;
