//! Human-readable error reports with a caret under the offending column.

use crate::lang::LogoError;

/// Render `error` against the program it came from.
///
/// Positioned errors get the source line and a `^` under the column; the
/// rest are reported by message alone.
pub fn render(source: &str, error: &LogoError) -> String {
    let mut out = format!("error: {}\n", error.message);

    let Some(position) = error.position else {
        return out;
    };
    out.push_str(&format!("  --> {position}\n"));

    let Some(line) = source.lines().nth(position.line.saturating_sub(1)) else {
        return out;
    };
    let indent: String = line
        .chars()
        .take(position.column)
        .map(|c| if c == '\t' { '\t' } else { ' ' })
        .collect();
    out.push_str(&format!("   | {line}\n   | {indent}^\n"));
    out
}
