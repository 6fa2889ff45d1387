// Word and sentence tokenization shared by counting, sampling and highlighting.
//
// Word tokens are maximal runs of alphanumeric characters, so a possessive
// like "cat's" still yields "cat". Sentences end after terminal punctuation
// followed by whitespace, or at a blank line.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex_lite::Regex;
use stop_words::{get, LANGUAGE};

/// Byte ranges of the word tokens in `text`.
pub fn word_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = None;

    for (i, c) in text.char_indices() {
        match (c.is_alphanumeric(), start) {
            (true, None) => start = Some(i),
            (false, Some(s)) => {
                spans.push((s, i));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        spans.push((s, text.len()));
    }
    spans
}

/// Split text into word tokens, preserving case.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    word_spans(text)
        .into_iter()
        .map(move |(start, end)| &text[start..end])
}

/// Lowercased word tokens of `text`.
pub fn lowercase_words(text: &str) -> Vec<String> {
    words(text).map(str::to_lowercase).collect()
}

fn sentence_boundary() -> &'static Regex {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    BOUNDARY.get_or_init(|| {
        Regex::new(r#"[.!?]+["'”’)\]]*\s+|\n[ \t]*\n\s*"#).expect("valid sentence boundary regex")
    })
}

/// Split text into trimmed, non-empty sentences in document order.
pub fn sentences(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0;

    for boundary in sentence_boundary().find_iter(text) {
        push_sentence(&mut out, &text[start..boundary.end()]);
        start = boundary.end();
    }
    push_sentence(&mut out, &text[start..]);

    out
}

fn push_sentence(out: &mut Vec<String>, raw: &str) {
    let sentence = raw.trim();
    if !sentence.is_empty() {
        out.push(sentence.to_string());
    }
}

/// The English stop-word list, loaded once.
pub fn english_stop_words() -> &'static HashSet<String> {
    static STOP_WORDS: OnceLock<HashSet<String>> = OnceLock::new();
    STOP_WORDS.get_or_init(|| {
        let list: Vec<String> = get(LANGUAGE::English);
        list.into_iter().map(|w| w.to_lowercase()).collect()
    })
}
