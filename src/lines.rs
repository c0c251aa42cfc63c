//! Per-line style normalization.
//!
//! A table draws a vertical border between cells on every physical line,
//! so a cell's styling must not depend on sequences bleeding across a line
//! break. [`ensure_prefix_per_line`] splits rendered text on `\n` and makes
//! each line carry its own leading style prefix and trailing reset.

use smallvec::SmallVec;

use crate::ansi::extract_leading_prefix;

/// The physical lines of one rendered cell. Most cells are a single line.
pub type Lines = SmallVec<[String; 1]>;

/// Split `text` into self-contained styled lines.
///
/// `prefix` below is the escape prefix at the start of the whole of `text`.
/// For each line:
///
/// | line                                  | result                  |
/// |---------------------------------------|-------------------------|
/// | empty                                 | empty                   |
/// | starts with its own prefix, ends with `reset` | unchanged       |
/// | starts with its own prefix, no reset  | line + reset            |
/// | no own prefix, ends with `reset`      | prefix + line           |
/// | no own prefix, no reset               | prefix + line + reset   |
///
/// ```
/// use charm_text::lines::ensure_prefix_per_line;
///
/// let lines = ensure_prefix_per_line("\x1b[31mone\ntwo\x1b[0m", "\x1b[0m");
/// assert_eq!(lines.as_slice(), ["\x1b[31mone\x1b[0m", "\x1b[31mtwo\x1b[0m"]);
/// ```
#[must_use]
pub fn ensure_prefix_per_line(text: &str, reset: &str) -> Lines {
    let prefix = extract_leading_prefix(text);
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                return String::new();
            }
            let own_prefix = !extract_leading_prefix(line).is_empty();
            let has_reset = line.ends_with(reset);
            match (own_prefix, has_reset) {
                (true, true) => line.to_string(),
                (true, false) => format!("{line}{reset}"),
                (false, true) => format!("{prefix}{line}"),
                (false, false) => format!("{prefix}{line}{reset}"),
            }
        })
        .collect()
}
