// Markdown summary table.
//
// One row per ranked word: the word with its total count, the documents it
// came from, and sample sentences with the word in bold.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::escape_cell;
use crate::documents::document_label;
use crate::frequency::{rank, WordFrequencies};
use crate::sentences::highlight_text;

/// Title rendered above the table.
pub const TABLE_TITLE: &str = "Interesting Words Summary";

/// Column headers, in order.
pub const HEADERS: [&str; 3] = [
    "Word (Total Occurrences)",
    "Documents",
    "Sentences Containing The Word",
];

/// Separator placed between sample sentences inside one cell.
const SENTENCE_SEPARATOR: &str = "<br/><br/>";

/// word -> sample sentences containing it
pub type WordSentences = BTreeMap<String, Vec<String>>;

/// A fully populated summary table, ready to render or write.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub title: String,
    pub rows: Vec<[String; 3]>,
}

impl SummaryTable {
    /// Build the table from an aggregate frequency map and sample sentences.
    ///
    /// Fails when there is nothing to show: an empty frequency map, a word
    /// recorded against no documents, or an empty sentence map.
    pub fn build(frequencies: &WordFrequencies, sentences: &WordSentences) -> Result<Self> {
        if frequencies.is_empty()
            || frequencies.values().any(|docs| docs.is_empty())
            || sentences.is_empty()
        {
            anyhow::bail!("Invalid parameter: cannot build a summary table from empty data");
        }

        let rows = rank(frequencies)
            .into_iter()
            .map(|(word, total)| {
                let mut labels: Vec<String> =
                    frequencies[&word].keys().map(|doc| document_label(doc)).collect();
                labels.sort();

                let samples = sentences
                    .get(&word)
                    .map(|list| {
                        list.iter()
                            .map(|s| escape_cell(&highlight_text(s, &word)))
                            .collect::<Vec<_>>()
                            .join(SENTENCE_SEPARATOR)
                    })
                    .unwrap_or_default();

                [
                    escape_cell(&format!("{word} ({total})")),
                    escape_cell(&labels.join(", ")),
                    samples,
                ]
            })
            .collect();

        Ok(Self {
            title: TABLE_TITLE.to_string(),
            rows,
        })
    }

    /// Render the table as Markdown text.
    pub fn render(&self) -> String {
        let mut md = String::new();
        let _ = writeln!(md, "# {}", self.title);
        let _ = writeln!(md, "| {} |", HEADERS.join(" | "));
        let _ = writeln!(md, "|{}|", vec!["---"; HEADERS.len()].join("|"));
        for row in &self.rows {
            let _ = writeln!(md, "| {} |", row.join(" | "));
        }
        md
    }

    /// Write the rendered table to `path`, creating parent directories.
    ///
    /// Returns the path written, for display.
    pub fn dump(&self, path: &Path) -> Result<String> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, self.render())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(path = %path.display(), rows = self.rows.len(), "Summary table written");
        Ok(path.display().to_string())
    }
}
