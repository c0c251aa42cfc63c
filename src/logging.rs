//! Styled logger for the `log` crate.
//!
//! Each record is written as one line:
//!
//! ```text
//! [14:03:07] INFO     table layout done
//! ```
//!
//! with the level name colored through the logger's style registry.

use std::io::{self, Write};
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

use crate::color::Color;
use crate::console::{Console, ConsoleBuilder, Mode};
use crate::markup;
use crate::style::Style;
use crate::sync::lock_recover;
use crate::theme::StyleRegistry;

type Sink = Box<dyn Write + Send>;

const NO_STYLES: &[Style] = &[];
const ERROR_STYLES: &[Style] = &[Style::BOLD];

/// Logger that writes styled records to a console.
///
/// `StyledLogger` implements [`Log`], which requires `Sync`: the console is
/// behind a mutex with poison recovery, so records from several threads are
/// written whole, one after another.
pub struct StyledLogger {
    console: Mutex<Console<Sink>>,
    registry: StyleRegistry,
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    markup: bool,
    time_format: OwnedFormatItem,
}

impl StyledLogger {
    /// Create a logger writing to standard error.
    #[must_use]
    pub fn new() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| OwnedFormatItem::Compound(Vec::new().into_boxed_slice()));
        let console = ConsoleBuilder::default()
            .mode(Mode::Plain)
            .build_with_writer(Box::new(writer) as Sink);
        Self {
            console: Mutex::new(console),
            registry: StyleRegistry::default(),
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            markup: false,
            time_format,
        }
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Show or hide the `[HH:MM:SS]` timestamp.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Show or hide the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Interpret messages as bracket-tag markup.
    #[must_use]
    pub fn markup(mut self, markup: bool) -> Self {
        self.markup = markup;
        self
    }

    /// Resolve styles from `registry`.
    #[must_use]
    pub fn registry(mut self, registry: StyleRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the timestamp format (`time` format description syntax).
    ///
    /// An invalid description keeps the current format.
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Fails if a global logger is already set.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn level_style(level: Level) -> (Option<Color>, &'static [Style]) {
        match level {
            Level::Trace => (None, NO_STYLES),
            Level::Debug => (Some(Color::BLUE), NO_STYLES),
            Level::Info => (Some(Color::GREEN), NO_STYLES),
            Level::Warn => (Some(Color::YELLOW), NO_STYLES),
            Level::Error => (Some(Color::RED), ERROR_STYLES),
        }
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let registry = &self.registry;
        let mut line = String::new();

        if self.show_time {
            line.push('[');
            line.push_str(&self.format_time());
            line.push_str("] ");
        }

        if self.show_level {
            let padded = format!("{:<8}", record.level());
            match Self::level_style(record.level()) {
                (None, []) => line.push_str(&padded),
                (color, styles) => line.push_str(&registry.colorize(&padded, color.as_ref(), styles)),
            }
            line.push(' ');
        }

        let message = record.args().to_string();
        if self.markup {
            line.push_str(&markup::render(&message, registry));
        } else {
            line.push_str(&message);
        }

        line
    }
}

impl Default for StyledLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for StyledLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Formatting may log (markup spans), so it happens before locking.
        let line = self.format_record(record);
        // A logger has nowhere to report its own write failures.
        let _ = lock_recover(&self.console).println(&line);
    }

    fn flush(&self) {
        let _ = lock_recover(&self.console).writer_mut().flush();
    }
}
