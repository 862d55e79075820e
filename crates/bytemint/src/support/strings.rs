//! # String Utilities

use std::borrow::Cow;

/// Visible stand-in for a space in debug renderings.
pub const VISIBLE_SPACE: &str = "⎵";

/// Visible stand-in for a newline in debug renderings.
pub const VISIBLE_NEWLINE: &str = "\\n";

/// Convert bytes to a [`String`], replacing invalid UTF-8 runs with U+FFFD.
///
/// Reuses the input allocation when the bytes are already valid.
pub fn string_from_utf8_lossy(v: Vec<u8>) -> String {
    match String::from_utf8(v) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Render whitespace which would otherwise be invisible in a label.
///
/// Spaces become [`VISIBLE_SPACE`]; newlines become [`VISIBLE_NEWLINE`].
pub fn visible_whitespace(s: &str) -> Cow<'_, str> {
    if s.contains([' ', '\n']) {
        Cow::Owned(
            s.replace(' ', VISIBLE_SPACE)
                .replace('\n', VISIBLE_NEWLINE),
        )
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_from_lossy_utf8() {
        let v = vec![0x61, 0x62, 0xff, 0x28];
        let s = string_from_utf8_lossy(v);
        assert_eq!(s, "ab\u{fffd}(");

        let v = vec![0x61, 0x62];
        let s = string_from_utf8_lossy(v);
        assert_eq!(s, "ab");
    }

    #[test]
    fn test_visible_whitespace() {
        assert_eq!(visible_whitespace("a b\nc"), "a⎵b\\nc");
        assert!(matches!(visible_whitespace("abc"), Cow::Borrowed("abc")));
    }
}
