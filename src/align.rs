//! Horizontal alignment of a line inside a fixed-width field.

use std::fmt;
use std::str::FromStr;

use crate::cells::visible_len;

/// Horizontal alignment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Alignment {
    /// Align content to the left (default).
    #[default]
    Left,
    /// Center content; an odd leftover space goes to the right.
    Center,
    /// Align content to the right.
    Right,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        })
    }
}

impl FromStr for Alignment {
    type Err = AlignmentParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" => Ok(Self::Right),
            _ => Err(AlignmentParseError(s.to_string())),
        }
    }
}

/// Returned when a string names no known alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentParseError(pub String);

impl fmt::Display for AlignmentParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown alignment: {}", self.0)
    }
}

impl std::error::Error for AlignmentParseError {}

/// Place `text` in a field `width` columns wide, then surround it with
/// `padding` spaces on each side.
///
/// Width is measured with [`visible_len`], so escape sequences are free and
/// wide glyphs count double. Content at least as wide as the field is never
/// cut: it is returned with only the padding added.
///
/// ```
/// use charm_text::align::{Alignment, pad};
///
/// assert_eq!(pad("ab", 5, Alignment::Left, 1), " ab    ");
/// assert_eq!(pad("ab", 5, Alignment::Center, 0), " ab  ");
/// assert_eq!(pad("toolong", 3, Alignment::Right, 1), " toolong ");
/// ```
#[must_use]
pub fn pad(text: &str, width: usize, align: Alignment, padding: usize) -> String {
    let content_width = visible_len(text);
    let gap = width.saturating_sub(content_width);
    let (left, right) = match align {
        Alignment::Left => (0, gap),
        Alignment::Right => (gap, 0),
        Alignment::Center => (gap / 2, gap - gap / 2),
    };

    let mut out = String::with_capacity(
        text.len()
            .saturating_add(gap)
            .saturating_add(padding.saturating_mul(2)),
    );
    push_spaces(&mut out, padding.saturating_add(left));
    out.push_str(text);
    push_spaces(&mut out, right.saturating_add(padding));
    out
}

#[inline]
fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
