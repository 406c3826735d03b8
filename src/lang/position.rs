//! Source positions.

use std::fmt;

/// A line/column location in program source.
///
/// Lines start at 1, columns at 0. The column counts characters already
/// consumed on the current line, so it doubles as the caret offset when
/// pointing at a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePosition {
    pub line: usize,
    pub column: usize,
}

impl FilePosition {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Account for one consumed character.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.at_new_line();
        } else {
            self.column += 1;
        }
    }

    pub fn at_new_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

impl Default for FilePosition {
    fn default() -> Self {
        Self::new(1, 0)
    }
}

impl fmt::Display for FilePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_line_one_column_zero() {
        let pos = FilePosition::default();
        assert_eq!(pos, FilePosition::new(1, 0));
    }

    #[test]
    fn newline_resets_column() {
        let mut pos = FilePosition::default();
        for ch in "ab\nc".chars() {
            pos.advance(ch);
        }
        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn copies_are_independent() {
        let mut pos = FilePosition::default();
        let snapshot = pos;
        pos.advance('x');
        assert_eq!(snapshot.column, 0);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn display_format() {
        assert_eq!(FilePosition::new(3, 7).to_string(), "line 3: 7");
    }
}
