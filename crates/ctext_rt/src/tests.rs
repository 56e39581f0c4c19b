//! Tests for the `ctext_rt` C entry points.

use std::ffi::CStr;

use pretty_assertions::assert_eq;

use super::*;

/// Copy a returned C string and free it.
fn take_string(ptr: *mut c_char) -> String {
    assert!(!ptr.is_null());
    // SAFETY: ptr came from one of this crate's string-returning functions
    let text = unsafe { CStr::from_ptr(ptr) }
        .to_string_lossy()
        .into_owned();
    ctext_string_free(ptr);
    text
}

// ── Predicates ──────────────────────────────────────────────────────────

#[test]
fn iequals_compares_c_strings() {
    assert!(ctext_iequals(c"Expires".as_ptr(), c"EXPIRES".as_ptr()));
    assert!(!ctext_iequals(c"Expires".as_ptr(), c"Expire".as_ptr()));
}

#[test]
fn iequals_null_is_empty() {
    assert!(ctext_iequals(std::ptr::null(), c"".as_ptr()));
    assert!(!ctext_iequals(std::ptr::null(), c"x".as_ptr()));
}

// ── Parsing ─────────────────────────────────────────────────────────────

#[test]
fn stoi_writes_cursor() {
    let mut idx = usize::MAX;
    assert_eq!(ctext_stoi(c"42abc".as_ptr(), &mut idx, 10), 42);
    assert_eq!(idx, 2);

    assert_eq!(ctext_stoi(c"xyz".as_ptr(), &mut idx, 10), 0);
    assert_eq!(idx, 0);
}

#[test]
fn stoi_without_cursor() {
    assert_eq!(ctext_stoi(c"0x7f".as_ptr(), std::ptr::null_mut(), 0), 127);
}

#[test]
fn stoi_negative_base_is_invalid() {
    let mut idx = usize::MAX;
    assert_eq!(ctext_stoi(c"10".as_ptr(), &mut idx, -2), 0);
    assert_eq!(idx, 0);
}

#[test]
fn stol_handles_64_bit_values() {
    let mut idx = 0;
    assert_eq!(ctext_stol(c"-9000000000 ms".as_ptr(), &mut idx, 10), -9_000_000_000);
    assert_eq!(idx, 11);
}

#[test]
fn stod_and_stof_write_cursor() {
    let mut idx = 0;
    assert_eq!(ctext_stod(c"3.14e2".as_ptr(), &mut idx), 314.0);
    assert_eq!(idx, 6);

    assert_eq!(ctext_stof(c"0.25;q=1".as_ptr(), &mut idx), 0.25);
    assert_eq!(idx, 4);
}

#[test]
fn parse_null_string_consumes_nothing() {
    let mut idx = usize::MAX;
    assert_eq!(ctext_stod(std::ptr::null(), &mut idx), 0.0);
    assert_eq!(idx, 0);
}

#[test]
fn stob_matches_whole_string() {
    assert!(ctext_stob(c"TRUE".as_ptr()));
    assert!(ctext_stob(c"1".as_ptr()));
    assert!(!ctext_stob(c"yes".as_ptr()));
    assert!(!ctext_stob(std::ptr::null()));
}

// ── Transforms ──────────────────────────────────────────────────────────

#[test]
fn string_to_lower_returns_owned_copy() {
    let lowered = ctext_string_to_lower(c"AbC123".as_ptr());
    assert_eq!(take_string(lowered), "abc123");
}

#[test]
fn split_returns_all_segments() {
    let mut list = ctext_split(c"a,,b".as_ptr(), c",".as_ptr());
    assert_eq!(list.len, 3);

    // SAFETY: ctext_split returns `len` valid item pointers
    let segments: Vec<String> = unsafe { std::slice::from_raw_parts(list.items, list.len) }
        .iter()
        .map(|&item| unsafe { CStr::from_ptr(item) }.to_string_lossy().into_owned())
        .collect();
    assert_eq!(segments, vec!["a", "", "b"]);

    ctext_str_list_free(&mut list);
    assert_eq!(list.len, 0);
    assert!(list.items.is_null());

    // Freeing twice is a no-op once the list is reset.
    ctext_str_list_free(&mut list);
}

#[test]
fn split_empty_delimiter_yields_whole_input() {
    let mut list = ctext_split(c"abc".as_ptr(), c"".as_ptr());
    assert_eq!(list.len, 1);
    ctext_str_list_free(&mut list);
}

#[test]
fn free_functions_accept_null() {
    ctext_string_free(std::ptr::null_mut());
    ctext_utf8_free(std::ptr::null_mut());
    ctext_str_list_free(std::ptr::null_mut());
}

// ── Encoding ────────────────────────────────────────────────────────────

/// Copy the full buffer returned by `ctext_utf8_to_char` and free it.
fn take_utf8(ptr: *mut c_char) -> [u8; UTF8_BUFFER_LEN] {
    assert!(!ptr.is_null());
    // SAFETY: ctext_utf8_to_char always allocates UTF8_BUFFER_LEN bytes
    let bytes = unsafe { *ptr.cast::<[u8; UTF8_BUFFER_LEN]>() };
    ctext_utf8_free(ptr);
    bytes
}

#[test]
fn utf8_to_char_one_byte() {
    assert_eq!(take_utf8(ctext_utf8_to_char(0x24)), [0x24, 0, 0, 0, 0]);
}

#[test]
fn utf8_to_char_euro_sign() {
    assert_eq!(take_utf8(ctext_utf8_to_char(0x20AC)), [0xE2, 0x82, 0xAC, 0, 0]);
}

#[test]
fn utf8_to_char_four_bytes() {
    assert_eq!(
        take_utf8(ctext_utf8_to_char(0x10_FFFF)),
        [0xF4, 0x8F, 0xBF, 0xBF, 0]
    );
}

#[test]
fn utf8_to_char_out_of_range_is_empty() {
    assert_eq!(take_utf8(ctext_utf8_to_char(0x11_0000)), [0; UTF8_BUFFER_LEN]);
}

// ── Formatting ──────────────────────────────────────────────────────────

#[test]
fn number_to_string() {
    assert_eq!(take_string(ctext_int_to_string(-12)), "-12");
    assert_eq!(take_string(ctext_double_to_string(2.5)), "2.500000");
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    ctext_init_tracing();
}
