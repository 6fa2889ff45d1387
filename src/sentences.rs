// Sample sentence extraction and Markdown highlighting.

use std::borrow::Cow;

use crate::tokenize;

/// Pull the sentences of `text` that contain `keyword` as a whole word.
///
/// Matching is case-insensitive. `limit` caps the number of sentences
/// returned; `None` returns all of them in document order.
pub fn extract_sample_sentences(keyword: &str, text: &str, limit: Option<usize>) -> Vec<String> {
    if keyword.is_empty() || text.is_empty() {
        return Vec::new();
    }

    let keyword = keyword.to_lowercase();
    let matching = tokenize::sentences(text)
        .into_iter()
        .filter(|sentence| tokenize::lowercase_words(sentence).contains(&keyword));

    match limit {
        Some(n) => matching.take(n).collect(),
        None => matching.collect(),
    }
}

/// Wrap every occurrence of `word` in `text` with Markdown bold markers.
///
/// Matching is case-insensitive on whole word tokens, so it agrees with how
/// words are counted. Possessive forms (`word's`, `word’s`, ``word`s``) are
/// highlighted as a single unit.
pub fn highlight_text<'a>(text: &'a str, word: &str) -> Cow<'a, str> {
    if text.is_empty() || word.is_empty() {
        return Cow::Borrowed(text);
    }

    let target = word.to_lowercase();
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for (start, end) in tokenize::word_spans(text) {
        if start < last || text[start..end].to_lowercase() != target {
            continue;
        }
        let end = end + possessive_len(&text[end..]);
        out.push_str(&text[last..start]);
        out.push_str("**");
        out.push_str(&text[start..end]);
        out.push_str("**");
        last = end;
    }

    if last == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

/// Byte length of a possessive suffix (`'s`, `’s`, `` `s ``) at the start of `rest`.
fn possessive_len(rest: &str) -> usize {
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(quote @ ('\'' | '’' | '`')), Some('s' | 'S')) => {
            let len = quote.len_utf8() + 1;
            if rest[len..].chars().next().is_some_and(char::is_alphanumeric) {
                0
            } else {
                len
            }
        }
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_sentences_empty_parameters() {
        assert!(extract_sample_sentences("mat", "", None).is_empty());
        assert!(extract_sample_sentences("", "cat on mat", None).is_empty());
    }

    #[test]
    fn sample_sentences_match_whole_words_only() {
        let text = "The cat sat. A catalog arrived. Cats nap. My cat ran.";
        assert_eq!(
            extract_sample_sentences("cat", text, None),
            vec!["The cat sat.", "My cat ran."]
        );
    }

    #[test]
    fn sample_sentences_are_case_insensitive() {
        let text = "Cat first. Nothing here. Then a CAT.";
        assert_eq!(
            extract_sample_sentences("cat", text, None),
            vec!["Cat first.", "Then a CAT."]
        );
    }

    #[test]
    fn sample_sentences_limit() {
        let text = "The cat sat. My cat ran. A cat slept.";
        assert_eq!(extract_sample_sentences("cat", text, Some(1)), vec!["The cat sat."]);
    }

    #[test]
    fn highlight_no_input() {
        assert_eq!(highlight_text("", "word"), "");
        assert_eq!(highlight_text("text", ""), "text");
    }

    #[test]
    fn highlight_word() {
        assert_eq!(highlight_text("cat on mat.", "cat"), "**cat** on mat.");
    }

    #[test]
    fn highlight_apostrophe() {
        assert_eq!(
            highlight_text("cat's on mat with cat.", "cat"),
            "**cat's** on mat with **cat**."
        );
    }

    #[test]
    fn highlight_keeps_original_case() {
        assert_eq!(highlight_text("Cat and cat", "cat"), "**Cat** and **cat**");
    }

    #[test]
    fn highlight_ignores_partial_words() {
        assert_eq!(highlight_text("catalog of cats", "cat"), "catalog of cats");
    }

    #[test]
    fn highlight_leaves_non_word_targets_alone() {
        assert_eq!(highlight_text("a c++ b", "c++"), "a c++ b");
    }

    #[test]
    fn highlight_non_ascii_words() {
        assert_eq!(
            highlight_text("Le café est bon. Über alles.", "café"),
            "Le **café** est bon. Über alles."
        );
        assert_eq!(highlight_text("Über alles.", "über"), "**Über** alles.");
    }

    #[test]
    fn highlight_typographic_possessive() {
        assert_eq!(
            highlight_text("The café’s terrace", "café"),
            "The **café’s** terrace"
        );
    }

    #[test]
    fn highlight_apostrophe_without_possessive() {
        assert_eq!(highlight_text("cat'sy", "cat"), "**cat**'sy");
    }
}
