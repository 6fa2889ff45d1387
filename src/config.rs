use std::path::PathBuf;

use anyhow::Result;

/// Default output file for the summary table.
pub const DEFAULT_TARGET: &str = "output.md";

/// Default cap on ranked words in the summary (0 disables the cap).
pub const DEFAULT_WORD_LIMIT: usize = 10;

/// Default number of keywords discovered per document.
pub const DEFAULT_WORDS_PER_DOCUMENT: usize = 50;

/// Resolved settings for one summary run.
///
/// Everything comes from the command line; nothing is read from the
/// environment or persisted between runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File or directory of documents to summarize
    pub input: PathBuf,
    /// Where the Markdown table is written
    pub target: PathBuf,
    /// Keep every matching sentence instead of one per document
    pub unlimited_examples: bool,
    /// Upper bound on ranked words, 0 means no bound
    pub interesting_words_limit: usize,
    /// How many keywords to discover per document
    pub words_per_document: usize,
}

impl Config {
    /// Settings with defaults for everything except the input path.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            target: PathBuf::from(DEFAULT_TARGET),
            unlimited_examples: false,
            interesting_words_limit: DEFAULT_WORD_LIMIT,
            words_per_document: DEFAULT_WORDS_PER_DOCUMENT,
        }
    }

    /// Cap on ranked words, `None` when unlimited.
    pub fn word_limit(&self) -> Option<usize> {
        (self.interesting_words_limit > 0).then_some(self.interesting_words_limit)
    }

    /// Cap on sample sentences taken from each document.
    pub fn sentence_limit(&self) -> Option<usize> {
        if self.unlimited_examples {
            None
        } else {
            Some(1)
        }
    }

    /// Check that the input path exists.
    /// Call this before any operation that reads documents.
    pub fn require_input(&self) -> Result<()> {
        if !self.input.exists() {
            anyhow::bail!("Path '{}' does not exist.", self.input.display());
        }
        Ok(())
    }
}
