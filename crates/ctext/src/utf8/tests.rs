use pretty_assertions::assert_eq;

use super::*;

// === Compatibility layout ===

#[test]
fn ascii_is_one_byte() {
    let encoded = encode_utf8(0x24);
    assert_eq!(encoded.as_bytes(), &[0x24]);
    assert_eq!(encoded.as_bytes_with_nul(), &[0x24, 0x00]);
}

#[test]
fn nul_code_point_is_one_zero_byte() {
    let encoded = encode_utf8(0);
    assert_eq!(encoded.len(), 1);
    assert_eq!(encoded.as_bytes_with_nul(), &[0x00, 0x00]);
}

#[test]
fn two_byte_range() {
    assert_eq!(encode_utf8(0x80).as_bytes(), &[0xC2, 0x80]);
    assert_eq!(encode_utf8(0xE9).as_bytes(), "é".as_bytes());
    assert_eq!(encode_utf8(0x7FF).as_bytes(), &[0xDF, 0xBF]);
}

#[test]
fn euro_sign_is_three_bytes() {
    let encoded = encode_utf8(0x20AC);
    assert_eq!(encoded.as_bytes(), &[0xE2, 0x82, 0xAC]);
    assert_eq!(encoded.as_str(), Some("€"));
}

#[test]
fn three_byte_range_extends_to_0x0fffff() {
    // 0x1F600 keeps only bits 0-15 in three bytes.
    assert_eq!(encode_utf8(0x1_F600).as_bytes(), &[0xEF, 0x98, 0x80]);
    assert_eq!(encode_utf8(0x0F_FFFF).len(), 3);
    assert_eq!(encode_utf8(0x1_0000).as_bytes(), &[0xE0, 0x80, 0x80]);
}

#[test]
fn four_byte_range_starts_at_0x100000() {
    assert_eq!(encode_utf8(0x10_0000).as_bytes(), &[0xF4, 0x80, 0x80, 0x80]);
    assert_eq!(encode_utf8(0x10_FFFF).as_bytes(), &[0xF4, 0x8F, 0xBF, 0xBF]);
}

#[test]
fn out_of_range_is_empty_and_terminated() {
    for code_point in [0x11_0000, 0xFFFF_FFFF] {
        let encoded = encode_utf8(code_point);
        assert!(encoded.is_empty());
        assert_eq!(encoded.as_bytes_with_nul(), &[0x00]);
        assert_eq!(encoded, Utf8Char::EMPTY);
    }
}

#[test]
fn terminator_follows_last_byte() {
    for code_point in [0x41, 0x3A9, 0x20AC, 0x10_0001, 0x11_0000] {
        let encoded = encode_utf8(code_point);
        assert_eq!(encoded.as_buffer()[encoded.len()], 0);
    }
}

// === Standard layout ===

#[test]
fn standard_matches_compat_below_0x10000() {
    for code_point in [0x00, 0x7F, 0x80, 0x7FF, 0x800, 0x20AC, 0xFFFD] {
        assert_eq!(
            encode_utf8_with(code_point, Utf8Mode::Standard),
            encode_utf8(code_point)
        );
    }
}

#[test]
fn standard_encodes_supplementary_planes_in_four_bytes() {
    let encoded = encode_utf8_with(0x1_F600, Utf8Mode::Standard);
    assert_eq!(encoded.as_bytes(), &[0xF0, 0x9F, 0x98, 0x80]);
    assert_eq!(encoded.as_str(), Some("😀"));
}

#[test]
fn standard_rejects_surrogates_and_out_of_range() {
    assert!(encode_utf8_with(0xD800, Utf8Mode::Standard).is_empty());
    assert!(encode_utf8_with(0x11_0000, Utf8Mode::Standard).is_empty());
}

#[test]
fn default_mode_is_compat() {
    assert_eq!(Utf8Mode::default(), Utf8Mode::Compat);
}

#[test]
fn debug_prints_hex_bytes() {
    assert_eq!(format!("{:?}", encode_utf8(0x20AC)), "Utf8Char(E2 82 AC)");
    assert_eq!(format!("{:?}", Utf8Char::EMPTY), "Utf8Char()");
}

// === Property tests ===

#[allow(
    clippy::arc_with_non_send_sync,
    reason = "proptest macros internally use Arc"
)]
mod proptest_utf8 {
    use super::super::{encode_utf8, encode_utf8_with, Utf8Mode};
    use proptest::prelude::*;

    fn compat_len(code_point: u32) -> usize {
        match code_point {
            0..=0x7F => 1,
            0x80..=0x7FF => 2,
            0x800..=0xF_FFFF => 3,
            0x10_0000..=0x10_FFFF => 4,
            _ => 0,
        }
    }

    proptest! {
        #[test]
        fn compat_length_follows_range(code_point in any::<u32>()) {
            let encoded = encode_utf8(code_point);
            prop_assert_eq!(encoded.len(), compat_len(code_point));
            prop_assert_eq!(encoded.as_bytes_with_nul()[encoded.len()], 0);
        }

        #[test]
        fn compat_is_valid_utf8_below_0x10000(c in any::<char>().prop_filter("BMP", |c| u32::from(*c) < 0x1_0000)) {
            let mut buf = [0u8; 4];
            let expected: &str = c.encode_utf8(&mut buf);
            let encoded = encode_utf8(u32::from(c));
            prop_assert_eq!(encoded.as_str(), Some(expected));
        }

        #[test]
        fn standard_agrees_with_char_encoding(c in any::<char>()) {
            let mut buf = [0u8; 4];
            let expected = c.encode_utf8(&mut buf).as_bytes();
            let encoded = encode_utf8_with(u32::from(c), Utf8Mode::Standard);
            prop_assert_eq!(encoded.as_bytes(), expected);
        }
    }
}
