// Frequent interesting words: keyword digests for small document collections.
//
// This is the library root. Each module is one stage of the summary
// pipeline, from reading documents to writing the Markdown table.

pub mod config;
pub mod documents;
pub mod frequency;
pub mod keywords;
pub mod output;
pub mod pipeline;
pub mod sentences;
pub mod tokenize;
