//! Table - bordered grid layout of styled, multi-line cells.
//!
//! A [`Table`] has a fixed list of headers and any number of rows. Each
//! cell may be absent (blank), span several lines, and carry escape
//! sequences; columns are sized by visible width so styling never skews
//! the borders.
//!
//! # Examples
//!
//! ```
//! use charm_text::ansi::strip_ansi;
//! use charm_text::renderables::table::Table;
//!
//! let table = Table::new(["Name", "Value"]).with_row_cells(["foo", "bar"]);
//! let out = table.render();
//!
//! assert_eq!(
//!     strip_ansi(&out),
//!     "┌──────┬───────┐\n\
//!      │ Name │ Value │\n\
//!      ├──────┼───────┤\n\
//!      │ foo  │ bar   │\n\
//!      └──────┴───────┘\n"
//! );
//! ```
//!
//! # Layout
//!
//! - Column width is the widest visible line in the column, header
//!   included. Content never wraps or truncates.
//! - Each cell is surrounded by `padding` spaces; borders span
//!   `width + 2 * padding`.
//! - A row is as tall as its tallest cell; shorter cells are filled with
//!   blank lines.
//! - A table with no headers renders to nothing and ignores rows.

use std::fmt;
use std::io::{self, Write};

use smallvec::smallvec;

use crate::align::{Alignment, pad};
use crate::r#box::BorderStyle;
use crate::cells::visible_len;
use crate::lines::{Lines, ensure_prefix_per_line};
use crate::renderables::{Content, Renderable};
use crate::theme::{StyleRegistry, global_registry};

/// Default number of spaces on each side of a cell.
pub const DEFAULT_PADDING: usize = 1;

/// Largest accepted padding; larger values are capped.
pub const MAX_PADDING: usize = 0xFFFF;

/// A bordered table.
#[derive(Debug, Clone)]
pub struct Table {
    headers: Vec<Content>,
    rows: Vec<Vec<Option<Content>>>,
    alignments: Vec<Alignment>,
    padding: usize,
    border: BorderStyle,
}

impl Table {
    /// Create a table with the given headers.
    ///
    /// Strings and numbers become bold [`Content::Plain`] headers.
    #[must_use]
    pub fn new<T: Into<Content>>(headers: impl IntoIterator<Item = T>) -> Self {
        let headers: Vec<Content> = headers.into_iter().map(Into::into).collect();
        Self {
            alignments: vec![Alignment::Left; headers.len()],
            headers,
            rows: Vec::new(),
            padding: DEFAULT_PADDING,
            border: BorderStyle::default(),
        }
    }

    /// Set the padding on each side of every cell.
    ///
    /// Values that do not fit a `usize` (negative ones, say) become zero;
    /// values above [`MAX_PADDING`] are capped.
    #[must_use]
    pub fn padding<P: TryInto<usize>>(mut self, padding: P) -> Self {
        self.padding = padding.try_into().map_or(0, |p: usize| p.min(MAX_PADDING));
        self
    }

    /// Set per-column alignments. Columns without an entry align left.
    #[must_use]
    pub fn alignments(mut self, alignments: impl IntoIterator<Item = Alignment>) -> Self {
        self.alignments = alignments.into_iter().collect();
        self
    }

    /// Set the border glyphs.
    #[must_use]
    pub fn border(mut self, border: BorderStyle) -> Self {
        self.border = border;
        self
    }

    /// Header contents.
    #[must_use]
    pub fn headers(&self) -> &[Content] {
        &self.headers
    }

    /// Stored rows, each exactly as wide as the header list.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Option<Content>>] {
        &self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Number of stored rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Configured padding.
    #[must_use]
    pub fn padding_width(&self) -> usize {
        self.padding
    }

    /// Configured border.
    #[must_use]
    pub fn border_style(&self) -> BorderStyle {
        self.border
    }

    /// Alignment of column `col` (left when unset).
    #[must_use]
    pub fn alignment(&self, col: usize) -> Alignment {
        self.alignments.get(col).copied().unwrap_or_default()
    }

    /// Append a row. `None` is a blank cell.
    ///
    /// Short rows are filled with blanks and long rows are cut to the
    /// header count. Ignored when the table has no headers.
    pub fn add_row<T: Into<Content>>(&mut self, cells: impl IntoIterator<Item = Option<T>>) {
        if self.headers.is_empty() {
            return;
        }
        let mut row: Vec<Option<Content>> = cells
            .into_iter()
            .take(self.headers.len())
            .map(|cell| cell.map(Into::into))
            .collect();
        row.resize_with(self.headers.len(), || None);
        self.rows.push(row);
    }

    /// Append a row in which every cell is present.
    pub fn add_row_cells<T: Into<Content>>(&mut self, cells: impl IntoIterator<Item = T>) {
        self.add_row(cells.into_iter().map(Some));
    }

    /// Append a row only if it has exactly one cell per header.
    ///
    /// Returns whether the row was added.
    pub fn add_row_strict<T: Into<Content>>(
        &mut self,
        cells: impl IntoIterator<Item = Option<T>>,
    ) -> bool {
        if self.headers.is_empty() {
            return false;
        }
        let row: Vec<Option<Content>> = cells
            .into_iter()
            .map(|cell| cell.map(Into::into))
            .collect();
        if row.len() != self.headers.len() {
            return false;
        }
        self.rows.push(row);
        true
    }

    /// Append several rows, as [`add_row`](Self::add_row).
    pub fn add_rows<R, T>(&mut self, rows: impl IntoIterator<Item = R>)
    where
        R: IntoIterator<Item = Option<T>>,
        T: Into<Content>,
    {
        for row in rows {
            self.add_row(row);
        }
    }

    /// Builder form of [`add_row`](Self::add_row).
    #[must_use]
    pub fn with_row<T: Into<Content>>(mut self, cells: impl IntoIterator<Item = Option<T>>) -> Self {
        self.add_row(cells);
        self
    }

    /// Builder form of [`add_row_cells`](Self::add_row_cells).
    #[must_use]
    pub fn with_row_cells<T: Into<Content>>(mut self, cells: impl IntoIterator<Item = T>) -> Self {
        self.add_row_cells(cells);
        self
    }

    /// Builder form of [`add_rows`](Self::add_rows).
    #[must_use]
    pub fn with_rows<R, T>(mut self, rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = Option<T>>,
        T: Into<Content>,
    {
        self.add_rows(rows);
        self
    }

    /// Render using a snapshot of the process-wide registry.
    #[must_use]
    pub fn render(&self) -> String {
        self.render_with(&global_registry())
    }

    /// Render using `registry` to resolve styles.
    #[must_use]
    pub fn render_with(&self, registry: &StyleRegistry) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let reset = registry.reset().unwrap_or_default();
        let split = |cell: Option<&Content>| -> Lines {
            match cell {
                Some(content) => ensure_prefix_per_line(&content.render(registry), reset),
                None => smallvec![String::new()],
            }
        };

        let header_lines: Vec<Lines> = self.headers.iter().map(|h| split(Some(h))).collect();
        let body_lines: Vec<Vec<Lines>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| split(cell.as_ref())).collect())
            .collect();

        let widths = column_widths(&header_lines, &body_lines);
        let box_widths: Vec<usize> = widths
            .iter()
            .map(|w| w.saturating_add(self.padding.saturating_mul(2)))
            .collect();
        log::debug!(
            "table layout: {} columns, {} rows, widths {widths:?}",
            widths.len(),
            body_lines.len()
        );

        let line_len = box_widths.iter().sum::<usize>() + box_widths.len() + 2;
        let mut out = String::with_capacity(line_len * (4 + body_lines.len()));

        out.push_str(&self.border.top(&box_widths));
        out.push('\n');
        self.push_block(&mut out, &header_lines, &widths);
        out.push_str(&self.border.separator(&box_widths));
        out.push('\n');
        for row in &body_lines {
            self.push_block(&mut out, row, &widths);
        }
        out.push_str(&self.border.bottom(&box_widths));
        out.push('\n');

        out
    }

    /// Write the rendered table to `writer` in a single write.
    ///
    /// # Errors
    ///
    /// Returns the writer's error unchanged.
    pub fn render_to<W: Write + ?Sized>(&self, writer: &mut W) -> io::Result<()> {
        self.render_to_with(writer, &global_registry())
    }

    /// [`render_to`](Self::render_to) with an explicit registry.
    ///
    /// # Errors
    ///
    /// Returns the writer's error unchanged.
    pub fn render_to_with<W: Write + ?Sized>(
        &self,
        writer: &mut W,
        registry: &StyleRegistry,
    ) -> io::Result<()> {
        writer.write_all(self.render_with(registry).as_bytes())
    }

    /// Emit the physical lines of one header block or row.
    fn push_block(&self, out: &mut String, cells: &[Lines], widths: &[usize]) {
        let height = cells.iter().map(|lines| lines.len()).max().unwrap_or(0).max(1);
        let vertical = self.border.vertical;

        for line_no in 0..height {
            out.push(vertical);
            for (col, (lines, &width)) in cells.iter().zip(widths).enumerate() {
                let line = lines.get(line_no).map_or("", String::as_str);
                out.push_str(&pad(line, width, self.alignment(col), self.padding));
                out.push(vertical);
            }
            out.push('\n');
        }
    }
}

/// Widest visible line per column, across the header and every row.
fn column_widths(header: &[Lines], body: &[Vec<Lines>]) -> Vec<usize> {
    let mut widths: Vec<usize> = header
        .iter()
        .map(|lines| lines.iter().map(|l| visible_len(l)).max().unwrap_or(0))
        .collect();

    for row in body {
        for (width, lines) in widths.iter_mut().zip(row) {
            for line in lines {
                *width = (*width).max(visible_len(line));
            }
        }
    }

    widths
}

impl Renderable for Table {
    fn render(&self, registry: &StyleRegistry) -> String {
        self.render_with(registry)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::render(self))
    }
}
