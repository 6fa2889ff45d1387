// Terminal output for a finished summary run.
//
// stdout carries the ranked word list so it can be piped; everything
// decorative is kept to the final confirmation line.

use colored::Colorize;

/// Format ranked words as a bracketed, quoted list: `["cat", "mat"]`.
pub fn format_ranked_words(ranked: &[(String, u32)]) -> String {
    let words: Vec<&str> = ranked.iter().map(|(word, _)| word.as_str()).collect();
    format!("{words:?}")
}

/// Print the ranked word list.
pub fn display_ranked_words(ranked: &[(String, u32)]) {
    println!("{}", format_ranked_words(ranked));
}

/// Confirm where the summary table was written.
pub fn display_saved(path: &str, documents: usize) {
    println!(
        "{}",
        format!("Summary of {documents} document(s) saved to: {path}").bold()
    );
}
