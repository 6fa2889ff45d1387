use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use frequent_interesting_words::config::{
    Config, DEFAULT_TARGET, DEFAULT_WORDS_PER_DOCUMENT, DEFAULT_WORD_LIMIT,
};
use frequent_interesting_words::keywords::yake::YakeExtractor;
use frequent_interesting_words::output::terminal;
use frequent_interesting_words::pipeline::summary;

/// Extract the most frequent interesting words from a set of documents,
/// then generate a table summarizing the results.
#[derive(Parser)]
#[command(name = "frequent-interesting-words", version, about)]
struct Cli {
    /// File to summarize, or a directory whose files are all summarized
    #[arg(value_parser = existing_path)]
    path: PathBuf,

    /// Filepath for the output table
    #[arg(long, default_value = DEFAULT_TARGET)]
    target: PathBuf,

    /// Remove the one per document limit on example sentences in the table output
    #[arg(long)]
    unlimit_example_sentences: bool,

    /// Upper bound on the number of interesting words in the output table,
    /// ranked by frequency; 0 means no limit
    #[arg(long, default_value_t = DEFAULT_WORD_LIMIT)]
    interesting_words_limit: usize,

    /// How many interesting words to discover per document; reducing it
    /// improves performance but decreases validity
    #[arg(long, default_value_t = DEFAULT_WORDS_PER_DOCUMENT)]
    interesting_words_per_document: usize,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.path,
            target: cli.target,
            unlimited_examples: cli.unlimit_example_sentences,
            interesting_words_limit: cli.interesting_words_limit,
            words_per_document: cli.interesting_words_per_document,
        }
    }
}

/// Reject paths that don't exist during argument parsing (exit code 2).
fn existing_path(raw: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(raw);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("Path '{raw}' does not exist."))
    }
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout is reserved for the ranked word list
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("frequent_interesting_words=warn")
            }),
        )
        .with_writer(std::io::stderr)
        .init();

    let config: Config = Cli::parse().into();
    info!(?config, "Starting summary run");

    let summary = summary::run(&config, &YakeExtractor)?;

    // The ranking is shown even when there is nothing to tabulate
    terminal::display_ranked_words(&summary.ranked);

    let written = summary.table()?.dump(&config.target)?;
    terminal::display_saved(&written, summary.documents.len());

    Ok(())
}
