// Keyword extractor trait.
//
// The counting pipeline only needs an ordered list of candidate words per
// document. YAKE is the default; tests plug in fixed word lists.

use anyhow::Result;

/// Trait for pulling the most relevant single words out of a text.
pub trait KeywordExtractor {
    /// Return at most `limit` lowercase, de-duplicated words, most relevant first.
    fn extract(&self, text: &str, limit: usize) -> Result<Vec<String>>;
}

/// Extractor that always returns the same word list, truncated to the limit.
///
/// Useful when the caller already knows which words it cares about.
#[derive(Debug, Clone, Default)]
pub struct FixedKeywords(pub Vec<String>);

impl FixedKeywords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(words.into_iter().map(Into::into).collect())
    }
}

impl KeywordExtractor for FixedKeywords {
    fn extract(&self, _text: &str, limit: usize) -> Result<Vec<String>> {
        let mut out: Vec<String> = Vec::new();
        for word in &self.0 {
            let word = word.to_lowercase();
            if !out.contains(&word) {
                out.push(word);
            }
        }
        out.truncate(limit);
        Ok(out)
    }
}
