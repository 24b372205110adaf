//! Top-level module for the text analysis pipeline.
//!
//! The pipeline is a set of independent, stateless stages:
//! - Text cleaning (`normalizer`)
//! - Word / sentence / character splitting (`tokenizer`)
//! - Descriptive counts (`statistics`)
//! - Word and n-gram frequency tables (`frequency`)
//! - Lexicon-based polarity (`sentiment`)
//! - Stopword-filtered keyword ranking (`keywords`)
//!
//! Stages only share the tokenization step. The read-only word lists
//! (sentiment lexicon, stopwords) are built once per process.

/// Configurable text cleaning.
///
/// Unicode normalization, lowercasing, punctuation and numeral removal,
/// whitespace collapsing; each step can be toggled.
pub mod normalizer;

/// Splits text into word, sentence or character tokens.
pub mod tokenizer;

/// Character, word, sentence and vocabulary counts.
pub mod statistics;

/// Word and n-gram frequency tables ranked by count.
///
/// Ties are broken by first occurrence, so tables are deterministic.
pub mod frequency;

/// Positive / negative lexicon scoring.
pub mod sentiment;

/// Most frequent non-stopword tokens of a document.
pub mod keywords;

pub use frequency::{FrequencyEntry, FrequencyTable};
pub use normalizer::{normalize, NormalizationOptions};
pub use sentiment::{Lexicon, SentimentLabel, SentimentResult};
pub use statistics::TextStatistics;
pub use tokenizer::{tokenize, TokenMethod, TokenSequence};

/// Builds the shared word lists ahead of the first request.
///
/// Returns `(positive words, negative words, stopwords)`.
pub fn warm_up() -> (usize, usize, usize) {
	let lexicon = Lexicon::english();
	(lexicon.positive_len(), lexicon.negative_len(), keywords::stopword_count())
}
