//! Borrowed byte view shared by every operation in the crate.

use std::ffi::{CStr, CString};

/// Read-only byte view over text.
///
/// Bounded strings and null-terminated buffers convert to this view at the
/// call boundary, so each algorithm is written once over `&[u8]`. For
/// [`CStr`] and [`CString`] the view excludes the terminator.
pub trait AsText {
    /// The text as bytes, without any trailing terminator.
    fn text_bytes(&self) -> &[u8];
}

impl AsText for str {
    #[inline]
    fn text_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsText for String {
    #[inline]
    fn text_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsText for [u8] {
    #[inline]
    fn text_bytes(&self) -> &[u8] {
        self
    }
}

impl AsText for Vec<u8> {
    #[inline]
    fn text_bytes(&self) -> &[u8] {
        self
    }
}

impl AsText for CStr {
    #[inline]
    fn text_bytes(&self) -> &[u8] {
        self.to_bytes()
    }
}

impl AsText for CString {
    #[inline]
    fn text_bytes(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<T: AsText + ?Sized> AsText for &T {
    #[inline]
    fn text_bytes(&self) -> &[u8] {
        (**self).text_bytes()
    }
}
