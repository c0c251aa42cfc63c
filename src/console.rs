//! Console - writes strings and renderables to an output sink.
//!
//! The console decides how a bare string is interpreted ([`Mode`]) and
//! hands everything else to the [`Renderable`] it is given.
//!
//! ```
//! use charm_text::console::{Console, Mode};
//!
//! let mut console = Console::builder().build_with_writer(Vec::new());
//! console.println("[bold]hi[/bold]").unwrap();
//! console.set_mode(Mode::Plain);
//! console.println("[bold]hi[/bold]").unwrap();
//!
//! let out = String::from_utf8(console.into_inner()).unwrap();
//! assert_eq!(out, "\x1b[1mhi\x1b[0m\n[bold]hi[/bold]\n");
//! ```

use std::fmt;
use std::io::{self, Stdout, Write};
use std::sync::Arc;

use crate::markup;
use crate::renderables::Renderable;
use crate::theme::{StyleRegistry, global_registry};

/// How the console interprets strings passed to [`Console::print`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Mode {
    /// Strings are written literally.
    Plain,
    /// Strings are parsed as bracket-tag markup.
    #[default]
    Markup,
}

/// The output console.
pub struct Console<W: Write = Stdout> {
    writer: W,
    mode: Mode,
    registry: Arc<StyleRegistry>,
}

impl Console<Stdout> {
    /// Create a console on standard output in markup mode.
    #[must_use]
    pub fn new() -> Self {
        ConsoleBuilder::default().build()
    }
}

impl Default for Console<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl Console<Stdout> {
    /// Create a console builder for custom configuration.
    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }
}

impl<W: Write> Console<W> {
    /// Change how strings are interpreted.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Current interpretation mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Registry used to resolve styles.
    #[must_use]
    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    /// Replace the registry.
    pub fn set_registry(&mut self, registry: impl Into<Arc<StyleRegistry>>) {
        self.registry = registry.into();
    }

    /// Write a string, interpreted according to the mode.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn print(&mut self, content: &str) -> io::Result<()> {
        let rendered = self.render_str(content);
        self.emit(&rendered, false)
    }

    /// [`print`](Self::print) followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn println(&mut self, content: &str) -> io::Result<()> {
        let rendered = self.render_str(content);
        self.emit(&rendered, true)
    }

    /// Render and write any renderable. The mode does not apply.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn print_renderable<R: Renderable + ?Sized>(&mut self, renderable: &R) -> io::Result<()> {
        let rendered = renderable.render(&self.registry);
        self.emit(&rendered, false)
    }

    /// [`print_renderable`](Self::print_renderable) followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn println_renderable<R: Renderable + ?Sized>(
        &mut self,
        renderable: &R,
    ) -> io::Result<()> {
        let rendered = renderable.render(&self.registry);
        self.emit(&rendered, true)
    }

    /// Borrow the underlying writer.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consume the console and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn render_str(&self, content: &str) -> String {
        match self.mode {
            Mode::Plain => content.to_string(),
            Mode::Markup => markup::render(content, &self.registry),
        }
    }

    fn emit(&mut self, rendered: &str, newline: bool) -> io::Result<()> {
        self.writer.write_all(rendered.as_bytes())?;
        if newline {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()
    }
}

impl<W: Write> fmt::Debug for Console<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("mode", &self.mode)
            .field("styles", &self.registry.len())
            .finish_non_exhaustive()
    }
}

/// Builder for creating a Console with custom settings.
#[derive(Debug, Default)]
pub struct ConsoleBuilder {
    mode: Option<Mode>,
    registry: Option<Arc<StyleRegistry>>,
}

impl ConsoleBuilder {
    /// Set the string interpretation mode.
    #[must_use]
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Use `registry` instead of a snapshot of the process-wide one.
    #[must_use]
    pub fn registry(mut self, registry: impl Into<Arc<StyleRegistry>>) -> Self {
        self.registry = Some(registry.into());
        self
    }

    /// Build a console on standard output.
    #[must_use]
    pub fn build(self) -> Console<Stdout> {
        self.build_with_writer(io::stdout())
    }

    /// Build a console writing to `writer`.
    #[must_use]
    pub fn build_with_writer<W: Write>(self, writer: W) -> Console<W> {
        Console {
            writer,
            mode: self.mode.unwrap_or_default(),
            registry: self.registry.unwrap_or_else(global_registry),
        }
    }
}
