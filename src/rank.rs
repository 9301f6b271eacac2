//! Frequency-based sentence scoring
//!
//! Builds a word→count map over the document's filtered word tokens, then
//! scores each sentence as the sum of the counts of its words. Frequent
//! informative words across the whole document are assumed to mark salient
//! sentences; this is a bag-of-words heuristic, not semantic analysis.

use rustc_hash::FxHashMap;

use crate::nlp::tokenizer::word_tokens;
use crate::types::Sentence;

/// Count occurrences of each word across the filtered document word
/// sequence. Built once per document; read-only afterwards.
pub fn word_frequencies(filtered_words: &[String]) -> FxHashMap<String, u32> {
    let mut frequencies = FxHashMap::default();
    for word in filtered_words {
        *frequencies.entry(word.clone()).or_insert(0) += 1;
    }
    frequencies
}

/// Map each sentence index to the sum of its words' document frequencies.
///
/// Each sentence is re-tokenized with the same word rule used for the
/// document; the stop-word filter is deliberately not applied again — stop
/// words are absent from the frequency map and so contribute zero. Sentences
/// with no scorable word get no entry.
pub fn score_sentences(
    frequencies: &FxHashMap<String, u32>,
    sentences: &[Sentence],
) -> FxHashMap<usize, u32> {
    let mut ranks = FxHashMap::default();
    for sentence in sentences {
        for word in word_tokens(&sentence.text) {
            if let Some(count) = frequencies.get(&word) {
                *ranks.entry(sentence.index).or_insert(0) += count;
            }
        }
    }
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;
    use crate::nlp::tokenizer::{filtered_word_tokens, SentenceTokenizer};

    fn to_strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn test_word_frequencies_count_occurrences() {
        let words = to_strings(&["cats", "dogs", "cats", "pets", "cats"]);
        let frequencies = word_frequencies(&words);

        assert_eq!(frequencies.get("cats"), Some(&3));
        assert_eq!(frequencies.get("dogs"), Some(&1));
        assert_eq!(frequencies.get("pets"), Some(&1));
        assert_eq!(frequencies.get("birds"), None);
    }

    #[test]
    fn test_empty_word_sequence() {
        let frequencies = word_frequencies(&[]);
        assert!(frequencies.is_empty());
    }

    #[test]
    fn test_sentence_scores_sum_frequencies() {
        let text = "Cats are great. Dogs are great too. Cats and dogs are pets.";
        let stopwords = StopwordFilter::from_list(&["are", "and", "too"]);
        let sentences = SentenceTokenizer::new().segment(text);
        let frequencies = word_frequencies(&filtered_word_tokens(text, &stopwords));

        let ranks = score_sentences(&frequencies, &sentences);

        // cats=2, great=2, dogs=2, pets=1
        assert_eq!(ranks.get(&0), Some(&4)); // cats + great
        assert_eq!(ranks.get(&1), Some(&4)); // dogs + great
        assert_eq!(ranks.get(&2), Some(&5)); // cats + dogs + pets
    }

    #[test]
    fn test_sentence_with_word_occurring_n_times_scores_at_least_n() {
        let text = "Ferris builds. Ferris ships. Ferris rests.";
        let stopwords = StopwordFilter::empty();
        let sentences = SentenceTokenizer::new().segment(text);
        let frequencies = word_frequencies(&filtered_word_tokens(text, &stopwords));

        let ranks = score_sentences(&frequencies, &sentences);

        // "ferris" appears 3 times document-wide, so every sentence
        // containing it scores at least 3.
        for sentence in &sentences {
            assert!(*ranks.get(&sentence.index).unwrap() >= 3);
        }
    }

    #[test]
    fn test_stopword_only_sentence_gets_no_entry() {
        let text = "The and of. Cats rule.";
        let stopwords = StopwordFilter::from_list(&["the", "and", "of"]);
        let sentences = SentenceTokenizer::new().segment(text);
        let frequencies = word_frequencies(&filtered_word_tokens(text, &stopwords));

        let ranks = score_sentences(&frequencies, &sentences);

        assert_eq!(ranks.get(&0), None);
        assert_eq!(ranks.get(&1), Some(&2));
    }
}
