//! String predicates and transforms.
//!
//! All comparisons and case folding are ASCII-only and byte-wise: bytes
//! outside `A`-`Z` are never altered, so lengths are always preserved.

use memchr::memmem;

use crate::AsText;

/// Case-insensitive equality under ASCII folding.
///
/// Inputs of different byte length are unequal without inspecting content.
/// Otherwise bytes are compared pairwise after lowercasing, stopping at the
/// first mismatch.
pub fn iequals<A, B>(a: &A, b: &B) -> bool
where
    A: AsText + ?Sized,
    B: AsText + ?Sized,
{
    let (a, b) = (a.text_bytes(), b.text_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b)
        .all(|(x, y)| x.to_ascii_lowercase() == y.to_ascii_lowercase())
}

/// Split `s` on every non-overlapping occurrence of `delimiter`.
///
/// `n` occurrences give exactly `n + 1` segments, in order; segments may be
/// empty. Joining the result with `delimiter` reproduces `s`.
///
/// An empty delimiter has no meaningful split points and yields `[s]`.
pub fn split<'a>(s: &'a str, delimiter: &str) -> Vec<&'a str> {
    if delimiter.is_empty() {
        tracing::trace!(len = s.len(), "split with empty delimiter; returning input unsplit");
        return vec![s];
    }
    s.split(delimiter).collect()
}

/// [`split`] with owned segments.
pub fn split_owned(s: &str, delimiter: &str) -> Vec<String> {
    split(s, delimiter).into_iter().map(str::to_owned).collect()
}

/// Byte-level [`split`] for text that is not known to be UTF-8.
///
/// Same segment contract as [`split`], including the empty-delimiter case.
pub fn split_bytes<'a>(s: &'a [u8], delimiter: &[u8]) -> Vec<&'a [u8]> {
    if delimiter.is_empty() {
        tracing::trace!(len = s.len(), "split with empty delimiter; returning input unsplit");
        return vec![s];
    }

    let mut segments = Vec::new();
    let mut start = 0;
    for pos in memmem::find_iter(s, delimiter) {
        segments.push(&s[start..pos]);
        start = pos + delimiter.len();
    }
    segments.push(&s[start..]);
    segments
}

/// ASCII-lowercase a string. Output length equals input length.
pub fn to_lower(s: &str) -> String {
    s.to_ascii_lowercase()
}

/// ASCII-lowercase arbitrary text into a new byte buffer.
pub fn to_lower_bytes<T: AsText + ?Sized>(text: &T) -> Vec<u8> {
    text.text_bytes().to_ascii_lowercase()
}
