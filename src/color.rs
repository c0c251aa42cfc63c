//! Named foreground colors.
//!
//! A [`Color`] is only a name. It is resolved to an escape sequence by a
//! [`StyleRegistry`](crate::theme::StyleRegistry) at render time, and a name
//! the registry does not know is silently ignored.
//!
//! ```
//! use charm_text::color::Color;
//!
//! let orange = Color::new("orange");
//! assert_eq!(orange.name(), "orange");
//! assert_eq!(Color::RED.name(), "red");
//! ```

use std::borrow::Cow;
use std::fmt;

/// A color name looked up in a style registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(Cow<'static, str>);

impl Color {
    pub const BLACK: Self = Self::from_static("black");
    pub const RED: Self = Self::from_static("red");
    pub const GREEN: Self = Self::from_static("green");
    pub const YELLOW: Self = Self::from_static("yellow");
    pub const BLUE: Self = Self::from_static("blue");
    pub const MAGENTA: Self = Self::from_static("magenta");
    pub const CYAN: Self = Self::from_static("cyan");
    pub const WHITE: Self = Self::from_static("white");
    /// Restores the terminal's default foreground color.
    pub const DEFAULT: Self = Self::from_static("color_reset");

    /// Create a color from any name.
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// The registry key for this color.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Color {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let colors = [
            Color::BLACK,
            Color::RED,
            Color::GREEN,
            Color::YELLOW,
            Color::BLUE,
            Color::MAGENTA,
            Color::CYAN,
            Color::WHITE,
        ];
        let names: Vec<&str> = colors.iter().map(Color::name).collect();
        assert_eq!(
            names,
            ["black", "red", "green", "yellow", "blue", "magenta", "cyan", "white"]
        );
    }

    #[test]
    fn test_display_and_conversions() {
        assert_eq!(Color::from("orange").to_string(), "orange");
        assert_eq!(Color::from(String::from("teal")), Color::new("teal"));
        assert_eq!(Color::DEFAULT.name(), "color_reset");
    }
}
