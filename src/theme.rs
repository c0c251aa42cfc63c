//! The style registry: style and color names mapped to escape sequences.
//!
//! A [`StyleRegistry`] is a plain value. [`StyleRegistry::default`] is seeded
//! with the built-in names from `src/default_styles.tsv`; callers extend it
//! with [`StyleRegistry::register`] and pass it explicitly to whatever
//! renders (`Table::render_with`, `markup::render`, ...).
//!
//! For code that wants one registry for the whole process there is also a
//! shared instance ([`global_registry`] / [`register_global`]). It is
//! copy-on-write: readers get an `Arc` snapshot that never changes under
//! them, and registration swaps in an updated copy.
//!
//! Registries can also be extended from an ini file whose `[styles]`
//! section maps names to SGR parameters:
//!
//! ```ini
//! [styles]
//! orange = 38;5;208
//! warning = 1;33
//! ```

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock, RwLock};

use crate::color::Color;
use crate::style::Style;
use crate::sync::{read_recover, write_recover};

/// Registry key of the sequence that clears all styling.
pub const RESET: &str = "reset";

static DEFAULT_STYLES: LazyLock<HashMap<String, String>> = LazyLock::new(|| {
    let mut styles = HashMap::new();

    for (line_no, line) in include_str!("default_styles.tsv").lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (name, params) = line
            .split_once('\t')
            .expect("src/default_styles.tsv: expected TAB-separated name + SGR params");
        assert!(
            is_sgr_params(params),
            "src/default_styles.tsv:{}: invalid SGR params {params:?}",
            line_no + 1
        );

        let prior = styles.insert(name.to_string(), sgr(params));
        assert!(
            prior.is_none(),
            "src/default_styles.tsv:{}: duplicate style key {name:?}",
            line_no + 1
        );
    }

    styles
});

static GLOBAL: LazyLock<RwLock<Arc<StyleRegistry>>> =
    LazyLock::new(|| RwLock::new(Arc::new(StyleRegistry::default())));

/// Build the escape sequence for a list of SGR parameters (`"1;31"`).
#[must_use]
pub fn sgr(params: &str) -> String {
    format!("\x1b[{params}m")
}

fn is_sgr_params(params: &str) -> bool {
    !params.is_empty() && params.bytes().all(|b| b.is_ascii_digit() || b == b';')
}

/// Name → escape sequence mapping used to resolve colors and styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRegistry {
    styles: HashMap<String, String>,
}

impl StyleRegistry {
    /// Create a registry from a map of named sequences.
    ///
    /// If `inherit` is true, the registry starts with the built-in names
    /// and the provided entries override / extend them. Entries with an
    /// empty name or sequence are dropped.
    #[must_use]
    pub fn new(styles: Option<HashMap<String, String>>, inherit: bool) -> Self {
        let mut merged = if inherit {
            DEFAULT_STYLES.clone()
        } else {
            HashMap::new()
        };

        if let Some(styles) = styles {
            merged.extend(
                styles
                    .into_iter()
                    .filter(|(name, seq)| !name.is_empty() && !seq.is_empty()),
            );
        }

        Self { styles: merged }
    }

    /// A registry with no entries at all, not even `reset`.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(None, false)
    }

    /// Look up the sequence registered under `name` (exact match).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.styles.get(name).map(String::as_str)
    }

    /// Check whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// All registered entries.
    #[must_use]
    pub fn styles(&self) -> &HashMap<String, String> {
        &self.styles
    }

    /// The reset sequence, if the registry has one.
    #[must_use]
    pub fn reset(&self) -> Option<&str> {
        self.get(RESET)
    }

    /// Add or override a named sequence.
    ///
    /// Does nothing when either `name` or `sequence` is empty.
    ///
    /// ```
    /// use charm_text::theme::StyleRegistry;
    ///
    /// let mut registry = StyleRegistry::default();
    /// registry.register("orange", "\x1b[38;5;208m");
    /// assert_eq!(registry.get("orange"), Some("\x1b[38;5;208m"));
    /// ```
    pub fn register(&mut self, name: impl Into<String>, sequence: impl Into<String>) {
        let name = name.into();
        let sequence = sequence.into();
        if name.is_empty() || sequence.is_empty() {
            return;
        }
        log::trace!("registering style {name:?}");
        self.styles.insert(name, sequence);
    }

    /// Register `name` as the SGR sequence for `params` (e.g. `"38;5;208"`).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidSequence`] when `params` is empty or
    /// contains anything other than digits and `;`.
    pub fn register_sgr(&mut self, name: &str, params: &str) -> Result<(), RegistryError> {
        if !is_sgr_params(params.trim()) {
            return Err(RegistryError::InvalidSequence {
                name: name.to_string(),
                params: params.to_string(),
            });
        }
        self.register(name, sgr(params.trim()));
        Ok(())
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_style(mut self, name: impl Into<String>, sequence: impl Into<String>) -> Self {
        self.register(name, sequence);
        self
    }

    /// Wrap `text` in the sequences for `color` and `styles`.
    ///
    /// Emits the color's sequence, then each style's in order, then `text`,
    /// then the reset sequence. Unknown names are skipped, but the reset is
    /// still appended. A registry without a reset entry returns `text`
    /// unchanged.
    ///
    /// ```
    /// use charm_text::color::Color;
    /// use charm_text::style::Style;
    /// use charm_text::theme::StyleRegistry;
    ///
    /// let registry = StyleRegistry::default();
    /// let out = registry.colorize("world", Some(&Color::GREEN), &[Style::BOLD]);
    /// assert_eq!(out, "\x1b[32m\x1b[1mworld\x1b[0m");
    /// ```
    #[must_use]
    pub fn colorize(&self, text: &str, color: Option<&Color>, styles: &[Style]) -> String {
        let Some(reset) = self.reset() else {
            return text.to_string();
        };

        let mut out = String::with_capacity(text.len() + reset.len() + 8 * (styles.len() + 1));
        if let Some(seq) = color.and_then(|c| self.get(c.name())) {
            out.push_str(seq);
        }
        for seq in styles.iter().filter_map(|s| self.get(s.name())) {
            out.push_str(seq);
        }
        out.push_str(text);
        out.push_str(reset);
        out
    }

    /// [`colorize`](Self::colorize) each line, leaving empty lines empty.
    #[must_use]
    pub fn colorize_lines<S: AsRef<str>>(
        &self,
        lines: &[S],
        color: Option<&Color>,
        styles: &[Style],
    ) -> Vec<String> {
        lines
            .iter()
            .map(AsRef::as_ref)
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    self.colorize(line, color, styles)
                }
            })
            .collect()
    }

    /// Render the registry as an ini `[styles]` section.
    ///
    /// Only entries holding exactly one SGR sequence can be written; others
    /// (arbitrary registered strings) are left out.
    #[must_use]
    pub fn config(&self) -> String {
        let mut names: Vec<&str> = self.styles.keys().map(String::as_str).collect();
        names.sort_unstable();

        let mut out = String::from("[styles]\n");
        for name in names {
            let seq = &self.styles[name];
            let params = seq
                .strip_prefix("\x1b[")
                .and_then(|rest| rest.strip_suffix('m'))
                .filter(|params| is_sgr_params(params));
            if let Some(params) = params {
                out.push_str(name);
                out.push_str(" = ");
                out.push_str(params);
                out.push('\n');
            } else {
                log::debug!("style {name:?} is not a single SGR sequence; omitted from config");
            }
        }
        out
    }

    /// Parse an ini string with a `[styles]` section of `name = params`.
    ///
    /// Keys are lowercased. Blank lines and `#` / `;` comments are skipped,
    /// as are other sections.
    ///
    /// # Errors
    ///
    /// Fails on a missing `[styles]` section, a line without `=` or `:`, an
    /// empty key, a duplicate key, or parameters that are not SGR params.
    pub fn from_ini_str(contents: &str, inherit: bool) -> Result<Self, RegistryError> {
        let mut in_styles = false;
        let mut seen_styles_section = false;
        let mut styles: HashMap<String, String> = HashMap::new();

        for (line_no, raw_line) in contents.lines().enumerate() {
            let line = raw_line.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let section_name = line[1..line.len() - 1].trim();
                in_styles = section_name.eq_ignore_ascii_case("styles");
                seen_styles_section |= in_styles;
                continue;
            }

            if !in_styles {
                continue;
            }

            let (name, params) = line
                .split_once('=')
                .or_else(|| line.split_once(':'))
                .ok_or_else(|| RegistryError::InvalidIniLine {
                    line_no: line_no + 1,
                    line: raw_line.to_string(),
                })?;

            let name = name.trim().to_lowercase();
            if name.is_empty() {
                return Err(RegistryError::InvalidIniLine {
                    line_no: line_no + 1,
                    line: raw_line.to_string(),
                });
            }

            let params = params.trim();
            if !is_sgr_params(params) {
                return Err(RegistryError::InvalidSequence {
                    name,
                    params: params.to_string(),
                });
            }

            if styles.insert(name.clone(), sgr(params)).is_some() {
                return Err(RegistryError::DuplicateKey {
                    line_no: line_no + 1,
                    name,
                });
            }
        }

        if !seen_styles_section {
            return Err(RegistryError::MissingStylesSection);
        }

        Ok(Self::new(Some(styles), inherit))
    }

    /// Read an ini registry file from disk.
    ///
    /// # Errors
    ///
    /// I/O failures, plus everything [`from_ini_str`](Self::from_ini_str)
    /// rejects.
    pub fn read(path: impl AsRef<Path>, inherit: bool) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(&path).map_err(|err| RegistryError::Io {
            path: path.as_ref().to_path_buf(),
            err,
        })?;
        Self::from_ini_str(&contents, inherit)
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new(None, true)
    }
}

/// Snapshot of the process-wide registry.
///
/// The snapshot is immutable; later [`register_global`] calls do not affect
/// it.
#[must_use]
pub fn global_registry() -> Arc<StyleRegistry> {
    Arc::clone(&read_recover(&GLOBAL))
}

/// Add or override a named sequence in the process-wide registry.
///
/// Same rules as [`StyleRegistry::register`]. Safe to call from any thread.
pub fn register_global(name: impl Into<String>, sequence: impl Into<String>) {
    let mut guard = write_recover(&GLOBAL);
    Arc::make_mut(&mut guard).register(name, sequence);
}

/// Errors returned while building a registry from configuration.
#[derive(Debug)]
pub enum RegistryError {
    Io {
        path: std::path::PathBuf,
        err: std::io::Error,
    },
    MissingStylesSection,
    InvalidIniLine {
        line_no: usize,
        line: String,
    },
    DuplicateKey {
        line_no: usize,
        name: String,
    },
    InvalidSequence {
        name: String,
        params: String,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, err } => {
                write!(f, "failed to read style file {}: {err}", path.display())
            }
            Self::MissingStylesSection => write!(f, "style ini is missing a [styles] section"),
            Self::InvalidIniLine { line_no, line } => {
                write!(f, "invalid style ini line {line_no}: {line:?}")
            }
            Self::DuplicateKey { line_no, name } => {
                write!(f, "duplicate style key {name:?} at line {line_no}")
            }
            Self::InvalidSequence { name, params } => {
                write!(f, "invalid SGR parameters for style {name:?}: {params:?}")
            }
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { err, .. } => Some(err),
            _ => None,
        }
    }
}
