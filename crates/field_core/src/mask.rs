//! The masked projection of a true value.

use crate::text::char_len;

/// Glyph rendered in place of every real character unless configured otherwise.
pub const DEFAULT_MASK_GLYPH: char = '*';

/// Mask `value` with [`DEFAULT_MASK_GLYPH`].
///
/// # Examples
///
/// ```
/// use field_core::mask;
///
/// assert_eq!(mask(""), "");
/// assert_eq!(mask("reset"), "*****");
/// ```
#[inline]
pub fn mask(value: &str) -> String {
    mask_with(value, DEFAULT_MASK_GLYPH)
}

/// Mask `value` with `glyph`: one glyph per character of `value`.
///
/// The result depends only on the length of `value`, never on its content.
pub fn mask_with(value: &str, glyph: char) -> String {
    let n = char_len(value);
    let mut out = String::with_capacity(n * glyph.len_utf8());
    out.extend(std::iter::repeat_n(glyph, n));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_preserves_char_length() {
        for value in ["a", "hunter2", "p€ss wörd", "🔑🔑"] {
            assert_eq!(char_len(&mask(value)), char_len(value), "{value:?}");
        }
    }

    #[test]
    fn mask_reveals_no_characters() {
        let value = "s3cr*t";
        let masked = mask(value);
        assert!(masked.chars().all(|c| c == DEFAULT_MASK_GLYPH));
    }

    #[test]
    fn mask_depends_only_on_length() {
        assert_eq!(mask("abcd"), mask("wxyz"));
        assert_eq!(mask(&mask("abcd")), mask("abcd"));
    }

    #[test]
    fn custom_glyph_is_counted_per_char_not_per_byte() {
        let masked = mask_with("abc", '•');
        assert_eq!(masked, "•••");
        assert_eq!(masked.len(), 3 * '•'.len_utf8());
    }
}
