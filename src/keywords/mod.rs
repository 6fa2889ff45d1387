// Keyword extraction — per-document "interesting word" discovery.

pub mod traits;
pub mod yake;

use anyhow::Result;

use self::traits::KeywordExtractor;

/// Extract up to `limit` lowercase keywords from `text`, best first.
pub fn extract_keywords(
    extractor: &dyn KeywordExtractor,
    text: &str,
    limit: usize,
) -> Result<Vec<String>> {
    if limit == 0 || text.trim().is_empty() {
        return Ok(Vec::new());
    }
    extractor.extract(text, limit)
}
