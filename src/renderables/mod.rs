//! Renderable components.
//!
//! Anything that can produce a display string implements [`Renderable`].
//! Table headers and cells are held as [`Content`], a closed set of the
//! three shapes a cell can take:
//!
//! - [`Content::Plain`]: strings and numbers converted automatically,
//!   rendered bold;
//! - [`Content::Text`]: a pre-styled [`Text`] span, rendered as given;
//! - [`Content::Custom`]: any user type implementing [`Renderable`].
//!
//! # Examples
//!
//! ```
//! use charm_text::prelude::*;
//!
//! let table = Table::new(["Name", "Qty"])
//!     .with_row_cells([Content::from("apples"), Content::from(3)])
//!     .with_row_cells([Content::from(Text::new("pears").color(Color::GREEN)), 12.into()]);
//!
//! let out = table.render_with(&StyleRegistry::default());
//! assert!(strip_ansi(&out).contains("│ apples │ 3   │"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::style::Style;
use crate::text::Text;
use crate::theme::StyleRegistry;

pub mod table;

pub use table::Table;

/// Trait for objects that can be rendered to a display string.
///
/// The string may span several lines and may contain escape sequences
/// resolved from `registry`.
pub trait Renderable {
    /// Produce the display string.
    fn render(&self, registry: &StyleRegistry) -> String;
}

impl Renderable for str {
    fn render(&self, _registry: &StyleRegistry) -> String {
        self.to_string()
    }
}

impl Renderable for String {
    fn render(&self, registry: &StyleRegistry) -> String {
        self.as_str().render(registry)
    }
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn render(&self, registry: &StyleRegistry) -> String {
        (*self).render(registry)
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn render(&self, registry: &StyleRegistry) -> String {
        (**self).render(registry)
    }
}

impl<T: Renderable + ?Sized> Renderable for Arc<T> {
    fn render(&self, registry: &StyleRegistry) -> String {
        (**self).render(registry)
    }
}

/// A table header or cell.
#[derive(Clone)]
pub enum Content {
    /// Automatically converted value, rendered bold.
    Plain(String),
    /// Pre-styled text, rendered as configured.
    Text(Text),
    /// A user-supplied renderable.
    Custom(Arc<dyn Renderable + Send + Sync>),
}

impl Content {
    /// Wrap a user renderable.
    pub fn custom(renderable: impl Renderable + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(renderable))
    }
}

impl Renderable for Content {
    fn render(&self, registry: &StyleRegistry) -> String {
        match self {
            Self::Plain(s) => registry.colorize(s, None, &[Style::BOLD]),
            Self::Text(text) => text.render(registry),
            Self::Custom(r) => r.render(registry),
        }
    }
}

impl fmt::Debug for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(s) => f.debug_tuple("Plain").field(s).finish(),
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Custom(_) => f.debug_tuple("Custom").finish_non_exhaustive(),
        }
    }
}

impl From<&str> for Content {
    fn from(s: &str) -> Self {
        Self::Plain(s.to_string())
    }
}

impl From<String> for Content {
    fn from(s: String) -> Self {
        Self::Plain(s)
    }
}

impl From<&String> for Content {
    fn from(s: &String) -> Self {
        Self::Plain(s.clone())
    }
}

impl From<Text> for Content {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}

impl From<Arc<dyn Renderable + Send + Sync>> for Content {
    fn from(renderable: Arc<dyn Renderable + Send + Sync>) -> Self {
        Self::Custom(renderable)
    }
}

macro_rules! impl_content_from_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Content {
                fn from(n: $t) -> Self {
                    Self::Plain(n.to_string())
                }
            }
        )*
    };
}

impl_content_from_number!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
