//! Natural Language Processing components
//!
//! This module provides whitespace normalization, sentence segmentation,
//! word tokenization, and stopword filtering.

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;
