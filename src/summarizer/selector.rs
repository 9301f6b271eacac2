//! Top-K sentence selection
//!
//! Picks the highest-scoring sentence indices from the rank map and stitches
//! the corresponding sentences back together in document order. Selection is
//! fully deterministic: ties break toward the lower index, and sentences
//! absent from the rank map participate with score zero, which is also the
//! fill rule when fewer than `length` sentences carry a nonzero score.

use rustc_hash::FxHashMap;

use crate::error::SummarizeError;
use crate::types::Sentence;

/// Selects the top-`length` sentences and concatenates them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Create a selector.
    pub fn new() -> Self {
        Self
    }

    /// Pick the `length` highest-scoring sentence indices, ascending.
    ///
    /// Ordering is score descending with index ascending on ties, so the
    /// result is reproducible across runs and platforms.
    pub fn top_indices(
        &self,
        ranks: &FxHashMap<usize, u32>,
        sentences: &[Sentence],
        length: usize,
    ) -> Vec<usize> {
        let mut scored: Vec<(usize, u32)> = sentences
            .iter()
            .map(|s| (s.index, ranks.get(&s.index).copied().unwrap_or(0)))
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

        let mut selected: Vec<usize> = scored.into_iter().take(length).map(|(i, _)| i).collect();
        selected.sort_unstable();
        selected
    }

    /// Build the summary string for the requested sentence count.
    ///
    /// Selected sentences are concatenated in ascending index order with no
    /// added separator; each sentence already carries its original trailing
    /// whitespace. A `length` of zero yields an empty string.
    ///
    /// # Errors
    ///
    /// [`SummarizeError::RequestExceedsAvailable`] when `length` exceeds the
    /// number of sentences.
    pub fn select(
        &self,
        ranks: &FxHashMap<usize, u32>,
        sentences: &[Sentence],
        length: usize,
    ) -> Result<String, SummarizeError> {
        let indices = self.select_indices(ranks, sentences, length)?;
        Ok(indices.iter().map(|&i| sentences[i].text.as_str()).collect())
    }

    /// Like [`select`](Self::select), but returns the chosen indices.
    pub fn select_indices(
        &self,
        ranks: &FxHashMap<usize, u32>,
        sentences: &[Sentence],
        length: usize,
    ) -> Result<Vec<usize>, SummarizeError> {
        if length > sentences.len() {
            return Err(SummarizeError::RequestExceedsAvailable {
                requested: length,
                available: sentences.len(),
            });
        }
        Ok(self.top_indices(ranks, sentences, length))
    }
}
