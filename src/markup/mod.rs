//! Markup parsing for bracket-tag text.
//!
//! Turns spans like `[bold red]Hello[/bold]` into escape sequences:
//!
//! ```
//! use charm_text::markup;
//! use charm_text::theme::StyleRegistry;
//!
//! let out = markup::render("say [bold red]hi[/b]!", &StyleRegistry::default());
//! assert_eq!(out, "say \x1b[1m\x1b[31mhi\x1b[0m!");
//! ```
//!
//! # Grammar
//!
//! A span is `[names]content[/label]`:
//!
//! - `names` is one or more ASCII letters or spaces. It is split on
//!   whitespace and every word is looked up, lowercased, in the registry.
//!   Unknown words are skipped.
//! - `label` is one or more ASCII letters or spaces (so `[/]` does not close
//!   anything). It is *not* compared with `names`: any well-formed closing
//!   tag ends the span.
//! - `content` is the shortest run of characters, never crossing a
//!   newline, up to the first closing tag.
//!
//! Spans do not nest or overlap; the first one found wins and scanning
//! resumes after it. Anything that does not form a complete span (an
//! unterminated tag, a lone closing tag, brackets around digits) is copied
//! through as literal text.

use crate::theme::{StyleRegistry, global_registry};

/// A matched `[names]content[/label]` span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span<'a> {
    /// Raw text between the opening brackets.
    names: &'a str,
    /// Text between the opening and closing tags.
    content: &'a str,
    /// Byte offset just past the closing tag.
    end: usize,
}

#[inline]
fn is_tag_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b' '
}

/// If `bytes[from..]` is one or more tag bytes followed by `]`, the index of
/// that `]`.
fn tag_body_end(bytes: &[u8], from: usize) -> Option<usize> {
    let len = bytes.get(from..)?.iter().take_while(|&&b| is_tag_byte(b)).count();
    (len > 0 && bytes.get(from + len) == Some(&b']')).then_some(from + len)
}

/// Outcome of scanning from one `[`.
enum Scan<'a> {
    Span(Span<'a>),
    /// No span starts here; no span can start before this offset either.
    Resume(usize),
}

/// Try to match a span whose opening `[` sits at `start`.
///
/// When the opening tag is well formed but no closing tag follows on the
/// same line, every later `[` up to the newline (or the end) would search
/// the same tail and fail too, so the scan resumes at that newline. This
/// keeps [`render`] linear in the input length.
fn scan_span(text: &str, start: usize) -> Scan<'_> {
    let bytes = text.as_bytes();
    let names_start = start + 1;
    let Some(names_end) = tag_body_end(bytes, names_start) else {
        return Scan::Resume(names_start);
    };
    let content_start = names_end + 1;

    let mut pos = content_start;
    while let Some(&b) = bytes.get(pos) {
        match b {
            b'\n' => return Scan::Resume(pos),
            b'[' if bytes.get(pos + 1) == Some(&b'/') => {
                if let Some(close) = tag_body_end(bytes, pos + 2) {
                    return Scan::Span(Span {
                        names: &text[names_start..names_end],
                        content: &text[content_start..pos],
                        end: close + 1,
                    });
                }
                pos += 1;
            }
            _ => pos += 1,
        }
    }
    Scan::Resume(bytes.len())
}

/// Render markup to a string with escape sequences from `registry`.
///
/// Each span becomes the concatenated sequences of its names, the content,
/// and the registry's reset sequence (nothing, if it has none).
#[must_use]
pub fn render(markup: &str, registry: &StyleRegistry) -> String {
    if !markup.contains('[') {
        return markup.to_string();
    }

    let reset = registry.reset().unwrap_or_default();
    let bytes = markup.as_bytes();
    let mut out = String::with_capacity(markup.len() + 16);
    let mut copied_to = 0;
    let mut pos = 0;

    while let Some(offset) = bytes[pos..].iter().position(|&b| b == b'[') {
        let start = pos + offset;
        let span = match scan_span(markup, start) {
            Scan::Span(span) => span,
            Scan::Resume(next) => {
                pos = next;
                continue;
            }
        };

        log::trace!("markup span [{}] at byte {start}", span.names);
        out.push_str(&markup[copied_to..start]);
        for name in span.names.split_whitespace() {
            if let Some(seq) = registry.get(&name.to_ascii_lowercase()) {
                out.push_str(seq);
            }
        }
        out.push_str(span.content);
        out.push_str(reset);

        copied_to = span.end;
        pos = span.end;
    }

    out.push_str(&markup[copied_to..]);
    out
}

/// [`render`] against a snapshot of the process-wide registry.
#[must_use]
pub fn render_global(markup: &str) -> String {
    render(markup, &global_registry())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::strip_ansi;

    const BOLD: &str = "\x1b[1m";
    const UNDERLINE: &str = "\x1b[4m";
    const RED: &str = "\x1b[31m";
    const RESET: &str = "\x1b[0m";

    fn registry() -> StyleRegistry {
        StyleRegistry::default()
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render("hello world", &registry()), "hello world");
        assert_eq!(render("", &registry()), "");
    }

    #[test]
    fn test_render_bold() {
        let out = render("[bold]foo[/bold]", &registry());
        assert_eq!(out, format!("{BOLD}foo{RESET}"));
        assert_eq!(strip_ansi(&out), "foo");
    }

    #[test]
    fn test_render_multiple_tags() {
        let out = render("[bold]foo[/bold] [underline]bar[/underline]", &registry());
        assert_eq!(out, format!("{BOLD}foo{RESET} {UNDERLINE}bar{RESET}"));
    }

    #[test]
    fn test_render_multiple_names_in_order() {
        let out = render("[red bold]x[/y]", &registry());
        assert_eq!(out, format!("{RED}{BOLD}x{RESET}"));
    }

    #[test]
    fn test_closing_label_not_checked() {
        let out = render("[bold]x[/italic]", &registry());
        assert_eq!(out, format!("{BOLD}x{RESET}"));
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let out = render("[BOLD Red]x[/b]", &registry());
        assert_eq!(out, format!("{BOLD}{RED}x{RESET}"));
    }

    #[test]
    fn test_unknown_names_still_reset() {
        let out = render("[sparkly]x[/sparkly]", &registry());
        assert_eq!(out, format!("x{RESET}"));
    }

    #[test]
    fn test_content_is_non_greedy() {
        let out = render("[bold]a[/bold]b[/bold]", &registry());
        assert_eq!(out, format!("{BOLD}a{RESET}b[/bold]"));
    }

    #[test]
    fn test_no_nesting() {
        // The inner opening tag is part of the outer span's content.
        let out = render("[bold]a[red]b[/red]c[/bold]", &registry());
        assert_eq!(out, format!("{BOLD}a[red]b{RESET}c[/bold]"));
    }

    #[test]
    fn test_unterminated_is_literal() {
        assert_eq!(render("[bold]hello", &registry()), "[bold]hello");
        assert_eq!(render("[bold hello", &registry()), "[bold hello");
        assert_eq!(render("[bold]x[/bold", &registry()), "[bold]x[/bold");
        assert_eq!(render("[/bold]", &registry()), "[/bold]");
    }

    #[test]
    fn test_empty_closing_tag_does_not_close() {
        assert_eq!(render("[bold]x[/]", &registry()), "[bold]x[/]");
    }

    #[test]
    fn test_span_does_not_cross_newline() {
        assert_eq!(render("[bold]a\nb[/bold]", &registry()), "[bold]a\nb[/bold]");
        let out = render("[bold]a[/bold]\n[red]b[/red]", &registry());
        assert_eq!(out, format!("{BOLD}a{RESET}\n{RED}b{RESET}"));
    }

    #[test]
    fn test_non_letter_tags_are_literal() {
        assert_eq!(render("[1]x[/1]", &registry()), "[1]x[/1]");
        assert_eq!(render("[]x[/a]", &registry()), "[]x[/a]");
        assert_eq!(render("[#ff0000]x[/]", &registry()), "[#ff0000]x[/]");
    }

    #[test]
    fn test_later_span_after_failed_bracket() {
        let out = render("a[b [bold]c[/bold]", &registry());
        assert_eq!(out, format!("a[b {BOLD}c{RESET}"));
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(render("[bold][/bold]", &registry()), format!("{BOLD}{RESET}"));
    }

    #[test]
    fn test_whitespace_only_names() {
        assert_eq!(render("[  ]x[/a]", &registry()), format!("x{RESET}"));
    }

    #[test]
    fn test_unicode_content() {
        let out = render("[red]🎉 日本語[/red] ok", &registry());
        assert_eq!(strip_ansi(&out), "🎉 日本語 ok");
    }

    #[test]
    fn test_registry_without_reset() {
        let registry = StyleRegistry::empty().with_style("bold", BOLD);
        assert_eq!(render("[bold]x[/bold]", &registry), format!("{BOLD}x"));
    }

    #[test]
    fn test_custom_registered_name() {
        let registry = registry().with_style("orange", "\x1b[38;5;208m");
        let out = render("[orange]x[/orange]", &registry);
        assert_eq!(out, format!("\x1b[38;5;208mx{RESET}"));
    }

    #[test]
    fn test_unclosed_tags_scan_in_linear_time() {
        // Every opener fails on the same tail; rescanning it per opener
        // would take seconds here.
        let input = "[a]".repeat(200_000);
        let start = std::time::Instant::now();
        assert_eq!(render(&input, &registry()), input);
        assert!(start.elapsed() < std::time::Duration::from_secs(2));

        let lines = format!("{}\n[bold]x[/bold]", "[a]".repeat(100_000));
        let out = render(&lines, &registry());
        assert!(out.ends_with(&format!("\n{BOLD}x{RESET}")));
    }

    #[test]
    fn test_resume_after_unclosed_line() {
        let out = render("[a] [b] [c\n[red]x[/r] [d", &registry());
        assert_eq!(out, format!("[a] [b] [c\n{RED}x{RESET} [d"));
    }

    #[test]
    fn test_no_panic_on_random_brackets() {
        for input in [
            "[[[]]]", "[[[", "]]]", "[/][/][/]", "[bold[italic]text[/]", "[=value]text[/]",
            "[", "[a", "[a]", "[a][", "[a][/", "[a][/b",
        ] {
            let out = render(input, &registry());
            assert!(strip_ansi(&out).len() <= input.len(), "input {input:?}");
        }
    }
}
