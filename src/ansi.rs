//! ANSI SGR escape sequence scanning.
//!
//! Only Select Graphic Rendition sequences of the form `ESC [ params m`
//! (where `params` is any run of digits and `;`) are recognized. Everything
//! else, including a lone `ESC` or an unterminated sequence, is ordinary
//! text.
//!
//! The scanners work byte-wise in a single forward pass. Every byte of a
//! recognized sequence is ASCII, so slicing at sequence boundaries always
//! lands on a `char` boundary.

use std::borrow::Cow;

/// The escape byte that introduces every sequence.
pub const ESC: u8 = 0x1b;

/// Length of the escape sequence starting at `start`, if there is one.
///
/// ```
/// use charm_text::ansi::sequence_len_at;
///
/// assert_eq!(sequence_len_at("\x1b[31mred", 0), Some(5));
/// assert_eq!(sequence_len_at("\x1b[31", 0), None);
/// assert_eq!(sequence_len_at("plain", 0), None);
/// ```
#[must_use]
pub fn sequence_len_at(text: &str, start: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&ESC) || bytes.get(start + 1) != Some(&b'[') {
        return None;
    }

    let mut pos = start + 2;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'0'..=b'9' | b';' => pos += 1,
            b'm' => return Some(pos + 1 - start),
            _ => return None,
        }
    }
    None
}

/// Check whether `text` contains at least one escape sequence.
#[must_use]
pub fn has_ansi(text: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = memchr_esc(text.as_bytes(), from) {
        if sequence_len_at(text, pos).is_some() {
            return true;
        }
        from = pos + 1;
    }
    false
}

/// Remove every escape sequence from `text`.
///
/// All other characters are kept, in order. Borrows when there is nothing
/// to remove.
///
/// ```
/// use charm_text::ansi::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[31m\x1b[1mHello\x1b[0m World"), "Hello World");
/// ```
#[must_use]
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let Some(first) = memchr_esc(bytes, 0) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::new();
    let mut copied_to = 0;
    let mut pos = first;
    loop {
        if let Some(len) = sequence_len_at(text, pos) {
            out.push_str(&text[copied_to..pos]);
            pos += len;
            copied_to = pos;
        } else {
            pos += 1;
        }
        match memchr_esc(bytes, pos) {
            Some(next) => pos = next,
            None => break,
        }
    }

    if copied_to == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[copied_to..]);
    Cow::Owned(out)
}

/// The run of back-to-back escape sequences at the very start of `text`.
///
/// Returns an empty string when `text` does not begin with a sequence.
///
/// ```
/// use charm_text::ansi::extract_leading_prefix;
///
/// assert_eq!(extract_leading_prefix("\x1b[31m\x1b[1mHi\x1b[0m"), "\x1b[31m\x1b[1m");
/// assert_eq!(extract_leading_prefix("Hi \x1b[31mthere"), "");
/// ```
#[must_use]
pub fn extract_leading_prefix(text: &str) -> &str {
    let mut end = 0;
    while let Some(len) = sequence_len_at(text, end) {
        end += len;
    }
    &text[..end]
}

#[inline]
fn memchr_esc(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == ESC)
        .map(|offset| from + offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: &str = "\x1b[31m";
    const BOLD: &str = "\x1b[1m";
    const RESET: &str = "\x1b[0m";

    #[test]
    fn test_strip_ansi() {
        let input = format!("{RED}{BOLD}Hello{RESET} World");
        assert_eq!(strip_ansi(&input), "Hello World");
    }

    #[test]
    fn test_strip_ansi_borrows_plain_text() {
        assert!(matches!(strip_ansi("plain"), Cow::Borrowed("plain")));
        assert!(matches!(strip_ansi("lone \x1b escape"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_strip_ansi_keeps_unterminated_sequences() {
        assert_eq!(strip_ansi("\x1b[31"), "\x1b[31");
        assert_eq!(strip_ansi("\x1b[3xm"), "\x1b[3xm");
        assert_eq!(strip_ansi("a\x1b[mb"), "ab");
    }

    #[test]
    fn test_strip_ansi_extended_params() {
        assert_eq!(strip_ansi("\x1b[38;5;208morange\x1b[0m"), "orange");
    }

    #[test]
    fn test_strip_ansi_unicode_neighbours() {
        assert_eq!(strip_ansi("日\x1b[32m本\x1b[0m語"), "日本語");
    }

    #[test]
    fn test_extract_leading_prefix_cases() {
        let cases = [
            ("no_ansi", "Hello".to_string(), String::new()),
            (
                "ansi_at_start",
                format!("{RED}{BOLD}Hello{RESET}"),
                format!("{RED}{BOLD}"),
            ),
            (
                "ansi_not_at_start",
                format!("Hello {RED}world{RESET}"),
                String::new(),
            ),
            (
                "multiple_contiguous",
                format!("{RED}{BOLD}{RESET}X"),
                format!("{RED}{BOLD}{RESET}"),
            ),
            ("only_sequences", format!("{RED}{BOLD}"), format!("{RED}{BOLD}")),
        ];

        for (name, input, want) in cases {
            assert_eq!(extract_leading_prefix(&input), want, "case {name}");
        }
    }

    #[test]
    fn test_has_ansi() {
        assert!(has_ansi("x\x1b[0m"));
        assert!(!has_ansi("x\x1b[0"));
        assert!(!has_ansi("plain"));
    }

    #[test]
    fn test_sequence_len_at_offset() {
        let text = "ab\x1b[1;4mcd";
        assert_eq!(sequence_len_at(text, 2), Some(6));
        assert_eq!(sequence_len_at(text, 0), None);
        assert_eq!(sequence_len_at(text, 100), None);
    }
}
