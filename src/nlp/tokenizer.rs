//! Sentence segmentation and word tokenization
//!
//! Sentence boundaries are detected with deterministic rules: terminal
//! punctuation followed by whitespace ends a sentence, except when a bare
//! period trails a known abbreviation or a single-letter initial. Decimal
//! points never split a sentence because they are not followed by
//! whitespace. Word tokenization uses Unicode word boundaries (UAX #29), so
//! punctuation never shows up as a word token.

use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::nlp::stopwords::StopwordFilter;
use crate::types::Sentence;

/// Lowercase abbreviations whose trailing period does not end a sentence.
/// Multi-part abbreviations keep their internal periods ("e.g", "i.e").
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "hon", "st", "jr", "sr", "gen", "col", "sgt", "capt",
    "lt", "vs", "etc", "inc", "ltd", "co", "corp", "dept", "est", "approx", "fig", "no", "vol",
    "pp", "ca", "cf", "al", "e.g", "i.e", "u.s", "u.k",
];

/// Terminal punctuation that can end a sentence.
const TERMINALS: [char; 4] = ['.', '!', '?', '\u{2026}'];

/// Closing quotes and brackets that may trail terminal punctuation.
const CLOSERS: [char; 6] = ['"', '\'', ')', ']', '\u{201D}', '\u{2019}'];

/// Rule-based sentence segmenter.
///
/// Segmentation is deterministic: identical input always yields the same
/// sentence sequence. Each produced [`Sentence`] span runs up to the start
/// of the next sentence, so the spans tile the normalized text exactly.
#[derive(Debug, Clone)]
pub struct SentenceTokenizer {
    abbreviations: FxHashSet<&'static str>,
}

impl Default for SentenceTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceTokenizer {
    /// Create a segmenter with the built-in abbreviation list.
    pub fn new() -> Self {
        Self {
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Treat additional lowercase abbreviations as non-terminal.
    pub fn with_abbreviations(mut self, extra: &[&'static str]) -> Self {
        self.abbreviations.extend(extra.iter().copied());
        self
    }

    /// Segment normalized text into sentences in document order.
    ///
    /// Whitespace-only input yields no sentences. Trailing text without
    /// terminal punctuation becomes a final sentence of its own.
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut sentences: Vec<Sentence> = Vec::new();
        let mut sent_start = 0usize;
        let mut i = 0usize;

        while i < chars.len() {
            let (_, ch) = chars[i];
            if !TERMINALS.contains(&ch) {
                i += 1;
                continue;
            }

            // Absorb runs of terminal punctuation ("?!", "...") and any
            // closing quotes/brackets that follow.
            let mut j = i + 1;
            while j < chars.len() && (TERMINALS.contains(&chars[j].1) || CLOSERS.contains(&chars[j].1)) {
                j += 1;
            }

            let at_end = j >= chars.len();
            let followed_by_space = !at_end && chars[j].1.is_whitespace();
            let bare_period = ch == '.' && j == i + 1;
            let suppressed = bare_period && self.is_abbreviation_before(&chars, i);

            if (at_end || followed_by_space) && !suppressed {
                // Consume the following whitespace into this sentence so the
                // spans tile the input.
                let mut k = j;
                while k < chars.len() && chars[k].1.is_whitespace() {
                    k += 1;
                }
                let end = if k < chars.len() { chars[k].0 } else { text.len() };
                push_span(&mut sentences, text, sent_start, end);
                sent_start = end;
                i = k;
            } else {
                i = j;
            }
        }

        // Trailing fragment without terminal punctuation.
        push_span(&mut sentences, text, sent_start, text.len());
        sentences
    }

    /// Check whether the word immediately before the period at char position
    /// `dot` is a known abbreviation or a single-letter initial.
    fn is_abbreviation_before(&self, chars: &[(usize, char)], dot: usize) -> bool {
        let mut word: Vec<char> = Vec::new();
        let mut p = dot;
        while p > 0 {
            let prev = chars[p - 1].1;
            if prev.is_alphanumeric() || prev == '.' {
                word.push(prev);
                p -= 1;
            } else {
                break;
            }
        }
        if word.is_empty() {
            return false;
        }
        word.reverse();
        if word.len() == 1 && word[0].is_alphabetic() {
            return true; // initial, e.g. "J. Smith"
        }
        let word: String = word.iter().collect::<String>().to_lowercase();
        self.abbreviations.contains(word.trim_matches('.'))
    }
}

fn push_span(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    if start >= end {
        return;
    }
    let slice = &text[start..end];
    if slice.chars().all(char::is_whitespace) {
        return;
    }
    sentences.push(Sentence {
        text: slice.to_string(),
        start,
        end,
        index: sentences.len(),
    });
}

/// Tokenize text into lowercase word units on Unicode word boundaries.
///
/// Punctuation is never emitted; decimals like `3.14` and contractions like
/// `don't` stay single tokens.
pub fn word_tokens(text: &str) -> Vec<String> {
    text.unicode_words().map(|w| w.to_lowercase()).collect()
}

/// Lowercase word tokens with stop words removed.
///
/// This is the only place the stop-word filter is applied; per-sentence
/// scoring relies on frequency-map absence to zero out stop words instead
/// of filtering a second time.
pub fn filtered_word_tokens(text: &str, stopwords: &StopwordFilter) -> Vec<String> {
    word_tokens(text)
        .into_iter()
        .filter(|w| !stopwords.is_stopword(w))
        .collect()
}
