//! Core data types shared across pipeline stages.

use serde::Serialize;

/// A sentence segmented from the normalized document.
///
/// The span includes the sentence's trailing whitespace up to the start of
/// the next sentence, so concatenating every sentence in index order
/// reconstructs the normalized text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Verbatim text of the sentence, including trailing whitespace.
    pub text: String,
    /// Byte offset of the sentence start in the normalized text.
    pub start: usize,
    /// Byte offset one past the sentence end (start of the next sentence).
    pub end: usize,
    /// 0-based position in document order.
    pub index: usize,
}

/// Result of a summarization run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Selected sentences concatenated in document order.
    pub text: String,
    /// Indices of the selected sentences, ascending.
    pub selected: Vec<usize>,
    /// Total number of sentences the document segmented into.
    pub sentence_count: usize,
}
