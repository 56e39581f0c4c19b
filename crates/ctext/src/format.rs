//! Number and pointer rendering.
//!
//! Integers render in plain decimal. Floats render in fixed notation with six
//! fractional digits (`3.14` -> `"3.140000"`), the layout C's `%f` and
//! C++'s `std::to_string` produce, so text exchanged with peers built on
//! those keeps the same shape.

/// Render a value as text.
pub trait ToText {
    fn to_text(&self) -> String;
}

macro_rules! impl_to_text_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToText for $ty {
                #[inline]
                fn to_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

macro_rules! impl_to_text_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToText for $ty {
                fn to_text(&self) -> String {
                    if self.is_nan() {
                        // `%f` spells NaN in lowercase and keeps its sign.
                        let nan = if self.is_sign_negative() { "-nan" } else { "nan" };
                        return nan.to_string();
                    }
                    format!("{self:.6}")
                }
            }
        )*
    };
}

impl_to_text_integer!(i32, i64, isize, u32, u64, usize);
impl_to_text_float!(f32, f64);

/// Render a pointer's address as `0x`-prefixed lowercase hex.
///
/// A null pointer renders as `"0x0"`. For unsized pointees only the data
/// address is rendered.
pub fn pointer_to_text<T: ?Sized>(ptr: *const T) -> String {
    format!("{:p}", ptr.cast::<()>())
}

#[cfg(test)]
mod tests;
