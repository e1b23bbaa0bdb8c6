//! Character-offset text utilities.
//!
//! Every offset in this crate counts Unicode scalar values, so slicing a Rust
//! `String` first has to translate offsets to byte indices.

use std::borrow::Cow;

/// Number of characters in `s`.
///
/// # Examples
///
/// ```
/// use field_core::char_len;
///
/// assert_eq!(char_len(""), 0);
/// assert_eq!(char_len("a€b"), 3);
/// ```
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Translate a character offset into a byte index.
///
/// Offsets past the end clamp to `s.len()`.
///
/// # Examples
///
/// ```
/// use field_core::byte_offset;
///
/// let s = "a€b"; // '€' is 3 bytes
/// assert_eq!(byte_offset(s, 0), 0);
/// assert_eq!(byte_offset(s, 1), 1);
/// assert_eq!(byte_offset(s, 2), 4);
/// assert_eq!(byte_offset(s, 3), 5);
/// assert_eq!(byte_offset(s, 100), 5);
/// ```
pub fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Replace the characters in `[start, end)` of `value` with `replacement`.
///
/// Offsets are clamped to the value and normalized, so this never panics.
///
/// # Examples
///
/// ```
/// use field_core::splice_chars;
///
/// assert_eq!(splice_chars("hello world", 0, 5, "HI"), "HI world");
/// assert_eq!(splice_chars("a€b", 1, 2, ""), "ab");
/// assert_eq!(splice_chars("abc", 9, 9, "d"), "abcd");
/// ```
pub fn splice_chars(value: &str, start: usize, end: usize, replacement: &str) -> String {
    let (start, end) = (start.min(end), start.max(end));
    let start = byte_offset(value, start);
    let end = byte_offset(value, end);

    let mut out = String::with_capacity(value.len() - (end - start) + replacement.len());
    out.push_str(&value[..start]);
    out.push_str(replacement);
    out.push_str(&value[end..]);
    out
}

/// Remove CR and LF, for single-line fields.
///
/// Returns a `Cow::Borrowed` if the string contains no newlines.
///
/// # Examples
///
/// ```
/// use field_core::filter_single_line;
///
/// assert_eq!(filter_single_line("hunter2"), "hunter2");
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    if !s.contains(['\n', '\r']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| *c != '\n' && *c != '\r').collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_offset_walks_multibyte_chars() {
        let s = "p€ss";
        assert_eq!(byte_offset(s, 2), 4);
        assert_eq!(byte_offset(s, 4), s.len());
        assert_eq!(byte_offset("", 3), 0);
    }

    #[test]
    fn splice_normalizes_reversed_ranges() {
        assert_eq!(splice_chars("abcd", 3, 1, "X"), "aXd");
    }

    #[test]
    fn splice_keeps_multibyte_neighbours_intact() {
        assert_eq!(splice_chars("€€€", 1, 2, "x"), "€x€");
    }

    #[test]
    fn filter_single_line_borrows_when_clean() {
        assert!(matches!(filter_single_line("abc"), Cow::Borrowed(_)));
        assert_eq!(filter_single_line("\n\r"), "");
    }
}
