// Output formatting — terminal display and the Markdown summary table.

pub mod markdown;
pub mod terminal;

/// Make arbitrary text safe to place inside a Markdown table cell.
///
/// Pipes would start a new column and newlines would end the row, so pipes
/// are escaped and any run of whitespace collapses to a single space.
pub fn escape_cell(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}
