//! Summarization pipeline
//!
//! [`Summarizer`] wires the stages together: whitespace normalization,
//! sentence segmentation, stop-word-filtered word tokenization, frequency
//! scoring, and top-K selection. One call runs one sequential computation
//! with no shared state, so a `Summarizer` can be reused across documents.

pub mod selector;

use tracing::debug;

use crate::error::SummarizeError;
use crate::nlp::normalizer::clean_whitespace;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{filtered_word_tokens, SentenceTokenizer};
use crate::rank::{score_sentences, word_frequencies};
use crate::summarizer::selector::SentenceSelector;
use crate::types::Summary;

/// Frequency-based extractive summarizer.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    stopwords: StopwordFilter,
    tokenizer: SentenceTokenizer,
    selector: SentenceSelector,
}

impl Summarizer {
    /// Create a summarizer with English stop words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the stop-word list for the given language code (e.g. `"de"`).
    pub fn with_language(mut self, language: &str) -> Self {
        self.stopwords = StopwordFilter::new(language);
        self
    }

    /// Replace the stop-word filter entirely.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Replace the sentence tokenizer (e.g. to add domain abbreviations).
    pub fn with_tokenizer(mut self, tokenizer: SentenceTokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Summarize `text` down to `length` sentences, in document order.
    ///
    /// # Errors
    ///
    /// [`SummarizeError::RequestExceedsAvailable`] when `length` exceeds the
    /// document's sentence count.
    pub fn summarize(&self, text: &str, length: usize) -> Result<String, SummarizeError> {
        self.run(text, length).map(|summary| summary.text)
    }

    /// Summarize `text`, also reporting the selected sentence indices and
    /// the total sentence count.
    pub fn run(&self, text: &str, length: usize) -> Result<Summary, SummarizeError> {
        let normalized = clean_whitespace(text);
        let sentences = self.tokenizer.segment(&normalized);
        debug!(sentences = sentences.len(), "segmented document");

        let words = filtered_word_tokens(&normalized, &self.stopwords);
        let frequencies = word_frequencies(&words);
        debug!(
            words = words.len(),
            vocabulary = frequencies.len(),
            "built frequency map"
        );

        let ranks = score_sentences(&frequencies, &sentences);
        let selected = self.selector.select_indices(&ranks, &sentences, length)?;
        debug!(selected = selected.len(), "selected sentences");

        let text: String = selected.iter().map(|&i| sentences[i].text.as_str()).collect();
        Ok(Summary {
            text,
            selected,
            sentence_count: sentences.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pipeline_end_to_end() {
        let text = "Cats are great. Dogs are great too. Cats and dogs are pets.";
        let summary = Summarizer::new().run(text, 2).unwrap();

        assert_eq!(summary.text, "Cats are great. Cats and dogs are pets.");
        assert_eq!(summary.selected, vec![0, 2]);
        assert_eq!(summary.sentence_count, 3);
    }

    #[test]
    fn test_normalizes_before_segmenting() {
        let wrapped = "Cats are great.\nDogs are great too.\r\nCats and dogs are pets.";
        let flat = "Cats are great. Dogs are great too. Cats and dogs are pets.";

        let summarizer = Summarizer::new();
        assert_eq!(
            summarizer.summarize(wrapped, 2).unwrap(),
            summarizer.summarize(flat, 2).unwrap()
        );
    }

    #[test]
    fn test_empty_document_errors_for_positive_length() {
        let err = Summarizer::new().summarize("", 1).unwrap_err();

        assert_eq!(
            err,
            SummarizeError::RequestExceedsAvailable {
                requested: 1,
                available: 0,
            }
        );
    }

    #[test]
    fn test_custom_stopwords_shift_the_ranking() {
        let text = "Alpha beta beta. Gamma delta. Beta beta beta.";

        // With "beta" as a stop word, the beta-heavy sentences stop scoring.
        let summarizer =
            Summarizer::new().with_stopwords(StopwordFilter::from_list(&["beta", "alpha"]));
        let summary = summarizer.run(text, 1).unwrap();

        assert_eq!(summary.selected, vec![1]);
    }
}
