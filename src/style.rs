//! Named text styles (bold, italic, underline, ...).
//!
//! Like [`Color`](crate::color::Color), a [`Style`] is a registry key and
//! carries no escape sequence of its own.

use std::borrow::Cow;
use std::fmt;

/// A style name looked up in a style registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Style(Cow<'static, str>);

impl Style {
    /// Clears every color and attribute.
    pub const RESET: Self = Self::from_static("reset");
    pub const BOLD: Self = Self::from_static("bold");
    pub const ITALIC: Self = Self::from_static("italic");
    pub const UNDERLINE: Self = Self::from_static("underline");

    /// Create a style from any name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The registry key for this style.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Style {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Style {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_names() {
        assert_eq!(Style::BOLD.name(), "bold");
        assert_eq!(Style::ITALIC.to_string(), "italic");
        assert_eq!(Style::from("blink"), Style::new("blink"));
    }
}
