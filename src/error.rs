//! Error types for the summarization pipeline.
//!
//! Normalization and tokenization never fail on well-formed text; an empty
//! or unsegmentable input simply yields zero sentences, after which the
//! selector's length check reports the only error the core can produce.

use thiserror::Error;

/// Errors produced by the summarization core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummarizeError {
    /// More sentences were requested than the document contains.
    #[error(
        "more sentences requested than available: requested {requested}, \
         document has {available}"
    )]
    RequestExceedsAvailable {
        /// Number of sentences asked for.
        requested: usize,
        /// Number of sentences the document segmented into.
        available: usize,
    },
}
