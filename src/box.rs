//! Border glyph sets for tables.

use std::fmt;

/// Which horizontal rule of a box to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowLevel {
    /// Top edge of the box.
    Top,
    /// Rule between the header block and the body.
    Separator,
    /// Bottom edge of the box.
    Bottom,
}

/// The glyphs a table border is drawn with.
///
/// ```text
/// top_left    ─ top_mid    ─ top_right
/// mid_left    ─ mid_mid    ─ mid_right
/// bottom_left ─ bottom_mid ─ bottom_right
/// ```
///
/// `vertical` separates cells on content lines; `horizontal` fills every
/// rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderStyle {
    pub top_left: char,
    pub top_mid: char,
    pub top_right: char,
    pub mid_left: char,
    pub mid_mid: char,
    pub mid_right: char,
    pub bottom_left: char,
    pub bottom_mid: char,
    pub bottom_right: char,
    pub vertical: char,
    pub horizontal: char,
}

impl BorderStyle {
    /// Create a border from its three rule rows plus the line glyphs.
    ///
    /// Each row is `[left, mid, right]`.
    #[must_use]
    pub const fn new(
        top: [char; 3],
        mid: [char; 3],
        bottom: [char; 3],
        vertical: char,
        horizontal: char,
    ) -> Self {
        Self {
            top_left: top[0],
            top_mid: top[1],
            top_right: top[2],
            mid_left: mid[0],
            mid_mid: mid[1],
            mid_right: mid[2],
            bottom_left: bottom[0],
            bottom_mid: bottom[1],
            bottom_right: bottom[2],
            vertical,
            horizontal,
        }
    }

    /// The `[left, mid, right]` glyphs for a rule.
    #[must_use]
    pub const fn row_chars(&self, level: RowLevel) -> [char; 3] {
        match level {
            RowLevel::Top => [self.top_left, self.top_mid, self.top_right],
            RowLevel::Separator => [self.mid_left, self.mid_mid, self.mid_right],
            RowLevel::Bottom => [self.bottom_left, self.bottom_mid, self.bottom_right],
        }
    }

    /// Build a horizontal rule over columns of the given box widths.
    ///
    /// No trailing newline.
    #[must_use]
    pub fn build_row(&self, widths: &[usize], level: RowLevel) -> String {
        let [left, mid, right] = self.row_chars(level);

        let total: usize = widths.iter().sum::<usize>() + widths.len() + 1;
        let mut result = String::with_capacity(total * self.horizontal.len_utf8());

        result.push(left);
        for (i, &width) in widths.iter().enumerate() {
            if i > 0 {
                result.push(mid);
            }
            result.extend(std::iter::repeat_n(self.horizontal, width));
        }
        result.push(right);

        result
    }

    /// Build the top border.
    #[must_use]
    pub fn top(&self, widths: &[usize]) -> String {
        self.build_row(widths, RowLevel::Top)
    }

    /// Build the header/body separator.
    #[must_use]
    pub fn separator(&self, widths: &[usize]) -> String {
        self.build_row(widths, RowLevel::Separator)
    }

    /// Build the bottom border.
    #[must_use]
    pub fn bottom(&self, widths: &[usize]) -> String {
        self.build_row(widths, RowLevel::Bottom)
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        SQUARE
    }
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sample 3x2 box
        let widths = [3, 3, 3];
        let v = self.vertical;
        writeln!(f, "{}", self.top(&widths))?;
        writeln!(f, "{v}   {v}   {v}   {v}")?;
        writeln!(f, "{}", self.separator(&widths))?;
        writeln!(f, "{v}   {v}   {v}   {v}")?;
        write!(f, "{}", self.bottom(&widths))
    }
}

// ============================================================================
// Built-in Border Styles
// ============================================================================

/// Square Unicode box drawing (the default).
pub const SQUARE: BorderStyle = BorderStyle::new(
    ['┌', '┬', '┐'],
    ['├', '┼', '┤'],
    ['└', '┴', '┘'],
    '│',
    '─',
);

/// ASCII box (safe for all terminals).
pub const ASCII: BorderStyle = BorderStyle::new(
    ['+', '+', '+'],
    ['+', '+', '+'],
    ['+', '+', '+'],
    '|',
    '-',
);

/// Rounded corners.
pub const ROUNDED: BorderStyle = BorderStyle::new(
    ['╭', '┬', '╮'],
    ['├', '┼', '┤'],
    ['╰', '┴', '╯'],
    '│',
    '─',
);

/// Heavy lines.
pub const HEAVY: BorderStyle = BorderStyle::new(
    ['┏', '┳', '┓'],
    ['┣', '╋', '┫'],
    ['┗', '┻', '┛'],
    '┃',
    '━',
);

/// Double lines.
pub const DOUBLE: BorderStyle = BorderStyle::new(
    ['╔', '╦', '╗'],
    ['╠', '╬', '╣'],
    ['╚', '╩', '╝'],
    '║',
    '═',
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_square() {
        assert_eq!(BorderStyle::default(), SQUARE);
    }

    #[test]
    fn test_build_rows() {
        let widths = [6, 7];
        assert_eq!(SQUARE.top(&widths), "┌──────┬───────┐");
        assert_eq!(SQUARE.separator(&widths), "├──────┼───────┤");
        assert_eq!(SQUARE.bottom(&widths), "└──────┴───────┘");
    }

    #[test]
    fn test_single_column_has_no_junction() {
        assert_eq!(ASCII.top(&[3]), "+---+");
        assert_eq!(DOUBLE.bottom(&[2]), "╚══╝");
    }

    #[test]
    fn test_zero_width_columns() {
        assert_eq!(SQUARE.top(&[0, 0]), "┌┬┐");
    }

    #[test]
    fn test_row_chars() {
        assert_eq!(HEAVY.row_chars(RowLevel::Separator), ['┣', '╋', '┫']);
        assert_eq!(ROUNDED.row_chars(RowLevel::Bottom), ['╰', '┴', '╯']);
    }

    #[test]
    fn test_display_sample() {
        let sample = ASCII.to_string();
        let lines: Vec<&str> = sample.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "+---+---+---+");
        assert_eq!(lines[1], "|   |   |   |");
    }
}
