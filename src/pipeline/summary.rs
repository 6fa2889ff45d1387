// Summary pipeline: documents in, ranked interesting words and a table out.
//
// Strategy: read each document once to discover and count its keywords,
// merge the per-document maps, rank and cap the result, then read each
// document a second time to pull sample sentences for the words it
// contributed. Only one document is held in memory at a time.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::config::Config;
use crate::documents::{collect_document_paths, document_id, read_document};
use crate::frequency::{
    aggregate_words_with_frequency, build_interesting_word_frequencies, rank, WordFrequencies,
};
use crate::keywords::traits::KeywordExtractor;
use crate::output::markdown::{SummaryTable, WordSentences};
use crate::sentences::extract_sample_sentences;

/// Everything produced by one summary run.
#[derive(Debug, Clone)]
pub struct Summary {
    /// Documents that were processed, in processing order
    pub documents: Vec<PathBuf>,
    /// `(word, total)` pairs, most frequent first, after the word limit
    pub ranked: Vec<(String, u32)>,
    /// Aggregate word -> document -> count map, after the word limit
    pub frequencies: WordFrequencies,
    /// Sample sentences for each surviving word
    pub sentences: WordSentences,
}

impl Summary {
    /// Build the Markdown table for this run.
    ///
    /// Fails when the run found no interesting words.
    pub fn table(&self) -> Result<SummaryTable> {
        SummaryTable::build(&self.frequencies, &self.sentences)
    }
}

/// Run the summary pipeline over the configured input.
///
/// An input with no interesting words still succeeds with an empty ranking;
/// only building the table from it fails.
pub fn run(config: &Config, extractor: &dyn KeywordExtractor) -> Result<Summary> {
    config.require_input()?;

    let documents = collect_document_paths(&config.input)?;
    info!(count = documents.len(), input = %config.input.display(), "Documents to process");

    // Step 1: per-document keyword frequencies
    let pb = progress_bar(documents.len() as u64, "Counting keywords");
    let mut collection = Vec::with_capacity(documents.len());
    for path in &documents {
        let text = read_document(path)?;
        let frequencies = build_interesting_word_frequencies(
            &text,
            &document_id(path),
            extractor,
            config.words_per_document,
        )?;
        if frequencies.is_empty() {
            warn!(path = %path.display(), "No interesting words found in document");
        }
        collection.push(frequencies);
        pb.inc(1);
    }
    pb.finish_and_clear();

    // Step 2: merge, rank and cap
    let frequencies = aggregate_words_with_frequency(collection, config.word_limit());
    let ranked = rank(&frequencies);
    info!(
        words = ranked.len(),
        top_word = ranked.first().map(|(w, _)| w.as_str()).unwrap_or(""),
        "Ranked interesting words"
    );

    // Step 3: second pass for sample sentences
    let words_by_document = words_by_document(&frequencies, &ranked);
    let sentence_limit = config.sentence_limit();

    let pb = progress_bar(documents.len() as u64, "Sampling sentences");
    let mut sentences = WordSentences::new();
    for path in &documents {
        let Some(words) = words_by_document.get(&document_id(path)) else {
            pb.inc(1);
            continue;
        };
        let text = read_document(path)?;
        for word in words {
            sentences
                .entry(word.clone())
                .or_default()
                .extend(extract_sample_sentences(word, &text, sentence_limit));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(Summary {
        documents,
        ranked,
        frequencies,
        sentences,
    })
}

/// Invert the aggregate map: document -> words it contributed, in rank order.
fn words_by_document(
    frequencies: &WordFrequencies,
    ranked: &[(String, u32)],
) -> BTreeMap<String, Vec<String>> {
    let mut by_document: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (word, _) in ranked {
        if let Some(docs) = frequencies.get(word) {
            for document in docs.keys() {
                by_document
                    .entry(document.clone())
                    .or_default()
                    .push(word.clone());
            }
        }
    }
    by_document
}

fn progress_bar(len: u64, message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("  {msg} [{bar:30.cyan/blue}] {pos}/{len}")
            .expect("valid template")
            .progress_chars("=> "),
    );
    pb.set_message(message);
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_by_document_follows_rank_order() {
        let frequencies = WordFrequencies::from([
            (
                "cat".to_string(),
                BTreeMap::from([("a".to_string(), 2), ("b".to_string(), 1)]),
            ),
            ("mat".to_string(), BTreeMap::from([("a".to_string(), 1)])),
        ]);
        let ranked = rank(&frequencies);
        let inverted = words_by_document(&frequencies, &ranked);

        assert_eq!(inverted["a"], vec!["cat".to_string(), "mat".to_string()]);
        assert_eq!(inverted["b"], vec!["cat".to_string()]);
    }
}
