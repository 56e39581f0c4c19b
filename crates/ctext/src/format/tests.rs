use pretty_assertions::assert_eq;

use super::*;

#[test]
fn integers_render_decimal() {
    assert_eq!(42_i32.to_text(), "42");
    assert_eq!((-7_i64).to_text(), "-7");
    assert_eq!(u64::MAX.to_text(), "18446744073709551615");
    assert_eq!(0_usize.to_text(), "0");
}

#[test]
fn floats_render_six_fraction_digits() {
    assert_eq!(3.14_f64.to_text(), "3.140000");
    assert_eq!(0.5_f32.to_text(), "0.500000");
    assert_eq!((-2.0_f64).to_text(), "-2.000000");
    assert_eq!(1e20_f64.to_text(), "100000000000000000000.000000");
}

#[test]
fn float_rounding_at_sixth_digit() {
    assert_eq!(0.000_000_4_f64.to_text(), "0.000000");
    assert_eq!(1.234_567_8_f64.to_text(), "1.234568");
}

#[test]
fn float_special_values() {
    assert_eq!(f64::INFINITY.to_text(), "inf");
    assert_eq!(f64::NEG_INFINITY.to_text(), "-inf");
    assert_eq!(f64::NAN.to_text(), "nan");
    assert_eq!((-f32::NAN).to_text(), "-nan");
}

#[test]
fn pointer_renders_hex_address() {
    let value = 5_u8;
    let ptr: *const u8 = &value;
    let text = pointer_to_text(ptr);
    assert!(text.starts_with("0x"), "{text}");
    assert_eq!(
        usize::from_str_radix(&text[2..], 16).ok(),
        Some(ptr as usize)
    );
}

#[test]
fn null_pointer_renders_zero() {
    assert_eq!(pointer_to_text(std::ptr::null::<u8>()), "0x0");
}

#[test]
fn pointer_to_unsized_uses_data_address() {
    let slice: &[u8] = &[1, 2, 3];
    assert_eq!(
        pointer_to_text(slice as *const [u8]),
        pointer_to_text(slice.as_ptr())
    );
}
