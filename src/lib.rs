//! # charm_text
//!
//! Styled text and table layout for the terminal.
//!
//! This library turns plain strings, ANSI-styled spans and a small
//! bracket-tag markup language into fixed-width terminal output, and lays
//! such content out in bordered tables whose columns line up regardless of
//! escape sequences or double-width glyphs.
//!
//! ## Quick Start
//!
//! ```
//! use charm_text::prelude::*;
//!
//! let table = Table::new(["Name", "Status"])
//!     .alignments([Alignment::Left, Alignment::Center])
//!     .with_row_cells([Content::from("db"), Text::markup("[green]up[/green]").into()])
//!     .with_row([Some("cache"), None]);
//!
//! let mut console = Console::builder().build_with_writer(Vec::new());
//! console.print_renderable(&table).unwrap();
//! ```
//!
//! ## Core Concepts
//!
//! - **StyleRegistry**: names (`bold`, `red`, ...) mapped to escape sequences
//! - **Text**: content with a color, styles, or markup
//! - **Renderable**: anything that produces a display string
//! - **Table**: headers, rows of optional cells, alignment, padding, border
//! - **Console**: writes strings (plain or markup) and renderables

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod align;
pub mod ansi;
pub mod r#box;
pub mod cells;
pub mod color;
pub mod console;
pub mod lines;
pub mod logging;
pub mod markup;
pub mod renderables;
pub mod style;
pub mod sync;
pub mod text;
pub mod theme;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::align::{Alignment, pad};
    pub use crate::ansi::strip_ansi;
    pub use crate::r#box::BorderStyle;
    pub use crate::cells::visible_len;
    pub use crate::color::Color;
    pub use crate::console::{Console, ConsoleBuilder, Mode};
    pub use crate::logging::StyledLogger;
    pub use crate::renderables::{Content, Renderable, Table};
    pub use crate::style::Style;
    pub use crate::text::Text;
    pub use crate::theme::{StyleRegistry, global_registry, register_global};
}

// Re-export key types at crate root
pub use align::Alignment;
pub use r#box::BorderStyle;
pub use color::Color;
pub use console::{Console, Mode};
pub use renderables::{Content, Renderable, Table};
pub use style::Style;
pub use text::Text;
pub use theme::{RegistryError, StyleRegistry};
