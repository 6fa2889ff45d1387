// Word frequency maps: per-document counting, cross-document merging and ranking.
//
// A `WordFrequencies` map goes word -> document -> count. Each document
// contributes one map; the aggregate is their deep merge.

use std::collections::{BTreeMap, HashSet};

use anyhow::Result;
use tracing::debug;

use crate::keywords::{extract_keywords, traits::KeywordExtractor};
use crate::tokenize;

/// Occurrence counts of each word within a single text.
pub type WordCounts = BTreeMap<String, u32>;

/// word -> (document id -> occurrence count)
pub type WordFrequencies = BTreeMap<String, BTreeMap<String, u32>>;

/// Count how often each of `words` occurs in `text`.
///
/// Matching is case-insensitive on both sides. Stop words are never counted,
/// even if they were asked for.
pub fn build_word_occurrence_map<S: AsRef<str>>(text: &str, words: &[S]) -> WordCounts {
    let wanted: HashSet<String> = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
    let stop_words = tokenize::english_stop_words();

    let mut counts = WordCounts::new();
    if wanted.is_empty() {
        return counts;
    }

    for token in tokenize::words(text) {
        let lower = token.to_lowercase();
        if stop_words.contains(&lower) || !wanted.contains(&lower) {
            continue;
        }
        *counts.entry(lower).or_insert(0) += 1;
    }
    counts
}

/// Build `{word: {document: count}}` for the interesting words of one document.
///
/// Returns an empty map when either the text or the document id is empty.
pub fn build_interesting_word_frequencies(
    text: &str,
    document: &str,
    extractor: &dyn KeywordExtractor,
    word_limit: usize,
) -> Result<WordFrequencies> {
    if text.is_empty() || document.is_empty() {
        return Ok(WordFrequencies::new());
    }

    let keywords = extract_keywords(extractor, text, word_limit)?;
    let counts = build_word_occurrence_map(text, &keywords);
    debug!(
        document,
        keywords = keywords.len(),
        counted = counts.len(),
        "Built document word frequencies"
    );

    Ok(counts
        .into_iter()
        .map(|(word, count)| (word, BTreeMap::from([(document.to_string(), count)])))
        .collect())
}

/// Reduce a frequency map to `(word, total)` pairs, most frequent first.
///
/// Ties are broken alphabetically so the order is deterministic.
pub fn rank(frequencies: &WordFrequencies) -> Vec<(String, u32)> {
    let mut ranked: Vec<(String, u32)> = frequencies
        .iter()
        .map(|(word, docs)| (word.clone(), docs.values().sum()))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Deep-merge a collection of per-document maps into one.
///
/// A word present in several documents keeps one count per document. If the
/// same document appears twice, the later count replaces the earlier one.
/// With `Some(n)`, only the top `n` words of the ranking survive; `Some(0)`
/// is treated like `None` and keeps every word.
pub fn aggregate_words_with_frequency<I>(collection: I, limit: Option<usize>) -> WordFrequencies
where
    I: IntoIterator<Item = WordFrequencies>,
{
    let mut merged = WordFrequencies::new();
    for frequencies in collection {
        for (word, docs) in frequencies {
            let entry = merged.entry(word).or_default();
            for (document, count) in docs {
                entry.insert(document, count);
            }
        }
    }

    if let Some(limit) = limit.filter(|&n| n > 0) {
        let keep: HashSet<String> = rank(&merged)
            .into_iter()
            .take(limit)
            .map(|(word, _)| word)
            .collect();
        merged.retain(|word, _| keep.contains(word));
    }

    merged
}
