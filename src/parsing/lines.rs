//! Line splitting.

/// Splits raw export text into trimmed, non-blank lines in input order.
///
/// Handles `\n` and `\r\n` endings alike.
pub fn normalized_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
