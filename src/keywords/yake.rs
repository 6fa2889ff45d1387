// YAKE keyword extraction.
//
// Uses the `keyword_extraction` crate's YAKE implementation with the English
// stop-word list. YAKE scores candidates by casing, position, frequency,
// context spread and sentence spread; lower scores are better and the crate
// returns them best first.

use anyhow::Result;
use keyword_extraction::yake::{Yake, YakeParams};
use tracing::debug;

use super::traits::KeywordExtractor;
use crate::tokenize;

/// YAKE-based extractor, the default for document summaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct YakeExtractor;

impl KeywordExtractor for YakeExtractor {
    fn extract(&self, text: &str, limit: usize) -> Result<Vec<String>> {
        if limit == 0 || text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let stop_words = tokenize::english_stop_words();
        let stop_list: Vec<String> = stop_words.iter().cloned().collect();

        let yake = Yake::new(YakeParams::WithDefaults(text, &stop_list));
        let ranked = yake.get_ranked_keywords(limit);

        // Candidates may be phrases; keep single words in rank order.
        let mut keywords: Vec<String> = Vec::with_capacity(limit);
        for word in ranked.iter().flat_map(|k| tokenize::lowercase_words(k)) {
            if keywords.len() >= limit {
                break;
            }
            if stop_words.contains(&word) || keywords.contains(&word) {
                continue;
            }
            keywords.push(word);
        }

        debug!(count = keywords.len(), limit, "Extracted YAKE keywords");
        Ok(keywords)
    }
}
