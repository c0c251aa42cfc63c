//! Terminal column widths.
//!
//! Widths follow a small fixed rule set rather than full East Asian Width
//! tables: a code point is 0, 1 or 2 columns, and escape sequences are
//! removed before measuring.

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use unicode_general_category::{GeneralCategory, get_general_category};

use crate::ansi::strip_ansi;
use crate::sync::lock_recover;

/// Strings shorter than this are measured directly.
const CACHED_FROM: usize = 8;

const CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(n) => n,
    None => unreachable!(),
};

/// Inclusive code point ranges that occupy two columns.
const WIDE: [(u32, u32); 11] = [
    (0x1100, 0x115F),   // Hangul Jamo initials
    (0x2329, 0x232A),   // angle brackets
    (0x2E80, 0xA4CF),   // CJK radicals through Yi
    (0xAC00, 0xD7A3),   // Hangul syllables
    (0xF900, 0xFAFF),   // CJK compatibility ideographs
    (0xFE30, 0xFE6F),   // CJK compatibility forms
    (0xFF00, 0xFF60),   // fullwidth forms
    (0xFFE0, 0xFFE6),   // fullwidth signs
    (0x2600, 0x26FF),   // miscellaneous symbols
    (0x2700, 0x27BF),   // dingbats
    (0x1F300, 0x1FAFF), // emoji
];

fn is_zero_width_category(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark | GeneralCategory::EnclosingMark | GeneralCategory::Format
    )
}

static WIDTHS: LazyLock<Mutex<LruCache<String, usize>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(CACHE_CAPACITY)));

/// Columns a single code point occupies.
///
/// | Code point | Width |
/// |---|---|
/// | control (Cc), nonspacing or enclosing mark (Mn, Me), format (Cf), `U+FE00..=U+FE0F` | 0 |
/// | one of the wide ranges | 2 |
/// | anything else | 1 |
#[must_use]
pub fn rune_width(c: char) -> usize {
    let cp = u32::from(c);
    match c {
        _ if c.is_control() => 0,
        '\u{FE00}'..='\u{FE0F}' => 0,
        _ if is_zero_width_category(c) => 0,
        _ if WIDE.iter().any(|&(lo, hi)| lo <= cp && cp <= hi) => 2,
        _ => 1,
    }
}

/// Sum of [`rune_width`] over every code point of `text`.
///
/// Escape sequences are measured like any other text; use [`visible_len`]
/// for styled strings. Results for longer strings are kept in a shared
/// LRU cache.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    let measure = |s: &str| s.chars().map(rune_width).sum();
    if text.len() < CACHED_FROM {
        return measure(text);
    }

    if let Some(&width) = lock_recover(&WIDTHS).get(text) {
        return width;
    }
    let width = measure(text);
    lock_recover(&WIDTHS).put(text.to_owned(), width);
    width
}

/// Number of terminal columns `text` occupies once printed.
///
/// Escape sequences contribute nothing; every remaining code point
/// contributes [`rune_width`].
///
/// ```
/// use charm_text::cells::visible_len;
///
/// assert_eq!(visible_len("\x1b[1mbold\x1b[0m"), 4);
/// assert_eq!(visible_len("日本"), 4);
/// ```
#[must_use]
pub fn visible_len(text: &str) -> usize {
    cell_len(&strip_ansi(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_ascii_is_one_column() {
        assert!((' '..='~').all(|c| rune_width(c) == 1));
        assert_eq!(cell_len("id | name"), 9);
    }

    #[test]
    fn controls_are_zero() {
        for c in ['\0', '\t', '\n', '\x1b', '\x7f', '\u{0085}'] {
            assert_eq!(rune_width(c), 0, "{c:?}");
        }
    }

    #[test]
    fn marks_and_format_chars_are_zero() {
        assert_eq!(rune_width('\u{0301}'), 0);
        assert_eq!(rune_width('\u{20DD}'), 0); // enclosing circle
        assert_eq!(rune_width('\u{200B}'), 0);
        assert_eq!(cell_len("cafe\u{0301}"), 4);
    }

    #[test]
    fn only_mark_and_format_categories_are_zero() {
        // Hangul fillers and jamo are letters (Lo), not marks.
        assert_eq!(rune_width('\u{1160}'), 1);
        assert_eq!(rune_width('\u{11A8}'), 1);
        assert_eq!(rune_width('\u{3164}'), 2); // inside the CJK wide range
        assert_eq!(rune_width('\u{D7B0}'), 1); // just past the syllable block
        assert_eq!(rune_width('\u{FFA0}'), 1);
        // Arabic number sign and soft hyphen are format characters (Cf).
        assert_eq!(rune_width('\u{0600}'), 0);
        assert_eq!(rune_width('\u{00AD}'), 0);
        assert_eq!(rune_width('\u{200D}'), 0);
    }

    #[test]
    fn variation_selectors_are_zero() {
        assert!(('\u{FE00}'..='\u{FE0F}').all(|c| rune_width(c) == 0));
    }

    #[test]
    fn wide_range_boundaries() {
        assert_eq!(rune_width('\u{10FF}'), 1);
        assert_eq!(rune_width('\u{1100}'), 2);
        assert_eq!(rune_width('\u{115F}'), 2);
        assert_eq!(rune_width('\u{D7A3}'), 2);
        assert_eq!(rune_width('\u{FF01}'), 2);
        assert_eq!(rune_width('\u{FF61}'), 1); // halfwidth ideographic full stop
        assert_eq!(rune_width('\u{2600}'), 2);
        assert_eq!(rune_width('\u{27BF}'), 2);
        assert_eq!(rune_width('\u{1F600}'), 2);
        assert_eq!(rune_width('\u{1FAFF}'), 2);
    }

    #[test]
    fn narrow_non_ascii() {
        for c in ['é', 'ß', 'Ж', '\u{00A0}', '─', '│'] {
            assert_eq!(rune_width(c), 1, "{c:?}");
        }
    }

    #[test]
    fn mixed_strings() {
        assert_eq!(cell_len("表示: ok"), 8);
        assert_eq!(cell_len("한국어"), 6);
        assert_eq!(cell_len("\u{2764}\u{FE0F} x"), 4);
    }

    #[test]
    fn visible_len_skips_sequences() {
        assert_eq!(visible_len("\x1b[38;5;208mamber\x1b[0m now"), 9);
        assert_eq!(visible_len("\x1b[1m\x1b[0m"), 0);
        assert_eq!(visible_len(""), 0);
        // Not an SGR sequence: measured as text, ESC itself is zero.
        assert_eq!(visible_len("\x1b[2J"), 3);
    }

    #[test]
    fn cached_and_direct_agree() {
        let long = "status: 進行中 (3/4) ✓";
        let direct: usize = long.chars().map(rune_width).sum();
        assert_eq!(cell_len(long), direct);
        assert_eq!(cell_len(long), direct);
        assert_eq!(direct, 23);
    }
}
