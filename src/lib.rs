//! # freqsum
//!
//! Frequency-based extractive summarization for plain-text documents.
//!
//! The summary is built by ranking sentences on the cumulative document-wide
//! frequency of their non-stop words and returning the top-N sentences in
//! their original order. This is a bag-of-words heuristic: frequent
//! informative words are assumed to mark salient sentences. It makes no
//! attempt at semantic analysis, and no quality guarantee beyond that
//! heuristic is intended.
//!
//! # Pipeline
//!
//! 1. Normalize whitespace ([`nlp::normalizer`])
//! 2. Segment sentences and tokenize words ([`nlp::tokenizer`]), dropping
//!    stop words ([`nlp::stopwords`])
//! 3. Count word frequencies and score sentences ([`rank`])
//! 4. Select the top-N sentences and stitch them back together in document
//!    order ([`summarizer::selector`])
//!
//! # Quick start
//!
//! ```
//! let text = "Cats are great. Dogs are great too. Cats and dogs are pets.";
//! let summary = freqsum::summarize(text, 2).unwrap();
//! assert_eq!(summary, "Cats are great. Cats and dogs are pets.");
//! ```

pub mod error;
pub mod nlp;
pub mod rank;
pub mod summarizer;
pub mod types;

pub use error::SummarizeError;
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::SentenceTokenizer;
pub use summarizer::Summarizer;
pub use types::{Sentence, Summary};

/// Summarize `text` down to `length` sentences using the English defaults.
///
/// Convenience wrapper over [`Summarizer`]; construct one directly to pick a
/// different language or supply custom stop words.
///
/// # Errors
///
/// Returns [`SummarizeError::RequestExceedsAvailable`] when `length` is
/// larger than the number of sentences in `text`.
pub fn summarize(text: &str, length: usize) -> Result<String, SummarizeError> {
    Summarizer::new().summarize(text, length)
}
