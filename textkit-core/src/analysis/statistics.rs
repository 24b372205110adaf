use std::collections::HashSet;

use serde::Serialize;

use super::tokenizer::{self, TokenMethod, TokenSequence};

/// Descriptive counts of a text.
///
/// # Invariants
/// - `word_count >= unique_words`
/// - `sentence_count >= 1` whenever the text is not empty
/// - `average_word_length == 0.0` when there are no words
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStatistics {
	/// Unicode scalar values in the raw text.
	pub character_count: usize,
	pub character_count_no_spaces: usize,
	pub word_count: usize,
	/// Distinct words, case-sensitive.
	pub unique_words: usize,
	pub sentence_count: usize,
	pub average_word_length: f64,
}

/// Computes statistics for `text`, tokenizing it into words first.
pub fn compute(text: &str) -> TextStatistics {
	from_words(text, &tokenizer::words(text, false))
}

/// Computes statistics for `text` from its already tokenized words.
///
/// `words` should come from `TokenMethod::Word`; passing the output of
/// an upstream normalization step gives case-insensitive `unique_words`.
pub fn from_words(text: &str, words: &TokenSequence) -> TextStatistics {
	debug_assert_eq!(words.method(), TokenMethod::Word, "statistics expect word tokens");

	let character_count = text.chars().count();
	let character_count_no_spaces = text.chars().filter(|c| !c.is_whitespace()).count();

	let word_count = words.len();
	let unique_words = words.tokens().iter().collect::<HashSet<_>>().len();

	let sentences = tokenizer::tokenize(text, TokenMethod::Sentence, false).len();
	let sentence_count = if text.is_empty() { 0 } else { sentences.max(1) };

	let average_word_length = if word_count == 0 {
		0.0
	} else {
		let letters: usize = words.tokens().iter().map(|w| w.chars().count()).sum();
		letters as f64 / word_count as f64
	};

	TextStatistics {
		character_count,
		character_count_no_spaces,
		word_count,
		unique_words,
		sentence_count,
		average_word_length,
	}
}
