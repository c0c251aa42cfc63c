//! Text - a run of content with a color, styles or markup attached.
//!
//! `Text` is the pre-styled span a table cell or console line is built
//! from. It renders in one of three ways:
//!
//! - with `markup` set, the content is parsed as bracket-tag markup;
//! - otherwise, with a color or any style, the content is wrapped by
//!   [`StyleRegistry::colorize`];
//! - otherwise the content is emitted verbatim.

use std::fmt;

use crate::color::Color;
use crate::markup;
use crate::renderables::Renderable;
use crate::style::Style;
use crate::theme::{StyleRegistry, global_registry};

/// Styled text content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    /// The raw content.
    pub content: String,
    /// Foreground color, if any.
    pub color: Option<Color>,
    /// Styles applied in order after the color.
    pub styles: Vec<Style>,
    /// Interpret `content` as markup instead of applying color/styles.
    pub markup: bool,
}

impl Text {
    /// Create unstyled text.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Create text with a color and a list of styles.
    #[must_use]
    pub fn styled(
        content: impl Into<String>,
        color: Option<Color>,
        styles: impl IntoIterator<Item = Style>,
    ) -> Self {
        Self {
            content: content.into(),
            color,
            styles: styles.into_iter().collect(),
            markup: false,
        }
    }

    /// Create text whose content is bracket-tag markup.
    ///
    /// ```
    /// use charm_text::text::Text;
    /// use charm_text::renderables::Renderable;
    /// use charm_text::theme::StyleRegistry;
    ///
    /// let text = Text::markup("[bold]hi[/bold]");
    /// assert_eq!(text.render(&StyleRegistry::default()), "\x1b[1mhi\x1b[0m");
    /// ```
    #[must_use]
    pub fn markup(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            markup: true,
            ..Self::default()
        }
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Append a style.
    #[must_use]
    pub fn style(mut self, style: impl Into<Style>) -> Self {
        self.styles.push(style.into());
        self
    }

    /// Whether rendering would add any styling.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        !self.markup && self.color.is_none() && self.styles.is_empty()
    }
}

impl Renderable for Text {
    fn render(&self, registry: &StyleRegistry) -> String {
        if self.markup {
            markup::render(&self.content, registry)
        } else if self.is_plain() {
            self.content.clone()
        } else {
            registry.colorize(&self.content, self.color.as_ref(), &self.styles)
        }
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&global_registry()))
    }
}

impl From<&str> for Text {
    fn from(content: &str) -> Self {
        Self::new(content)
    }
}

impl From<String> for Text {
    fn from(content: String) -> Self {
        Self::new(content)
    }
}
