use std::collections::HashMap;

use crate::error::{Result, TextError};

use super::tokenizer::TokenSequence;

/// One row of a frequency table: an n-gram and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyEntry {
	/// The n-gram's tokens, in document order.
	pub tokens: Vec<String>,
	pub count: usize,
}

impl FrequencyEntry {
	/// The n-gram as text, tokens joined by a single space.
	pub fn text(&self) -> String {
		self.tokens.join(" ")
	}
}

/// Ranked n-gram frequencies of a token sequence.
///
/// # Invariants
/// - Entries are sorted by descending count, ties by first occurrence
/// - `total` and `unique` describe the full table, even when `entries`
///   was truncated to a top-k view
/// - `total` is the number of windows, which equals the sum of all counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
	n: usize,
	entries: Vec<FrequencyEntry>,
	total: usize,
	unique: usize,
}

impl FrequencyTable {
	/// Counts the contiguous `n`-grams of `tokens`.
	///
	/// # Parameters
	/// - `n`: window width, at least 1
	/// - `top_k`: if set (at least 1), only the `top_k` best entries are kept
	///
	/// # Errors
	/// Returns `TextError::InvalidOption` for `n == 0` or `top_k == Some(0)`.
	///
	/// # Notes
	/// - `n` larger than the token count gives an empty table, not an error.
	pub fn from_tokens(tokens: &[String], n: usize, top_k: Option<usize>) -> Result<Self> {
		if n < 1 {
			return Err(TextError::invalid_option("n", format!("must be >= 1, got {n}")));
		}
		if top_k == Some(0) {
			return Err(TextError::invalid_option("top_k", "must be >= 1"));
		}

		// Index into `counted` for each distinct window; `counted` keeps first-seen order
		let mut index: HashMap<&[String], usize> = HashMap::new();
		let mut counted: Vec<(&[String], usize)> = Vec::new();
		for window in tokens.windows(n) {
			match index.get(window) {
				Some(&i) => counted[i].1 += 1,
				None => {
					index.insert(window, counted.len());
					counted.push((window, 1));
				}
			}
		}

		let total = tokens.len().checked_sub(n).map_or(0, |rest| rest + 1);
		let unique = counted.len();
		debug_assert_eq!(total, counted.iter().map(|(_, count)| count).sum::<usize>());

		// Stable: equal counts keep first-occurrence order
		counted.sort_by(|a, b| b.1.cmp(&a.1));
		if let Some(k) = top_k {
			counted.truncate(k);
		}

		let entries = counted
			.into_iter()
			.map(|(window, count)| FrequencyEntry { tokens: window.to_vec(), count })
			.collect();

		log::debug!("{n}-gram table: {total} windows, {unique} distinct");
		Ok(Self { n, entries, total, unique })
	}

	pub fn n(&self) -> usize {
		self.n
	}

	/// Ranked entries (possibly truncated).
	pub fn entries(&self) -> &[FrequencyEntry] {
		&self.entries
	}

	/// Number of n-gram windows in the whole sequence.
	pub fn total(&self) -> usize {
		self.total
	}

	/// Number of distinct n-grams in the whole sequence.
	pub fn unique(&self) -> usize {
		self.unique
	}
}

/// Word frequencies: the `n = 1` table of `words`.
pub fn word_frequencies(words: &TokenSequence, top_k: Option<usize>) -> Result<FrequencyTable> {
	FrequencyTable::from_tokens(words.tokens(), 1, top_k)
}

/// N-gram frequencies over `words`.
pub fn ngram_frequencies(words: &TokenSequence, n: usize, top_k: Option<usize>) -> Result<FrequencyTable> {
	FrequencyTable::from_tokens(words.tokens(), n, top_k)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::analysis::tokenizer::words;
	use proptest::prelude::*;

	fn pairs(table: &FrequencyTable) -> Vec<(String, usize)> {
		table.entries().iter().map(|e| (e.text(), e.count)).collect()
	}

	#[test]
	fn top_k_truncates_view_not_totals() {
		let table = word_frequencies(&words("a a b", false), Some(1)).unwrap();
		assert_eq!(pairs(&table), [("a".to_owned(), 2)]);
		assert_eq!(table.total(), 3);
		assert_eq!(table.unique(), 2);
	}

	#[test]
	fn ties_keep_first_occurrence_order() {
		let table = word_frequencies(&words("z y x y z w", false), None).unwrap();
		assert_eq!(
			pairs(&table),
			[("z".to_owned(), 2), ("y".to_owned(), 2), ("x".to_owned(), 1), ("w".to_owned(), 1)]
		);
	}

	#[test]
	fn bigrams_over_windows() {
		let table = ngram_frequencies(&words("to be or not to be", false), 2, None).unwrap();
		assert_eq!(table.n(), 2);
		assert_eq!(table.total(), 5);
		assert_eq!(table.unique(), 4);
		assert_eq!(table.entries()[0].tokens, ["to", "be"]);
		assert_eq!(table.entries()[0].count, 2);
		assert_eq!(table.entries()[0].text(), "to be");
	}

	#[test]
	fn wide_window_gives_empty_table() {
		let table = ngram_frequencies(&words("only two", false), 3, Some(5)).unwrap();
		assert!(table.entries().is_empty());
		assert_eq!(table.total(), 0);
		assert_eq!(table.unique(), 0);
	}

	#[test]
	fn empty_sequence_gives_empty_table() {
		let table = word_frequencies(&words("", false), None).unwrap();
		assert!(table.entries().is_empty());
		assert_eq!(table.total(), 0);
	}

	#[test]
	fn zero_width_is_rejected() {
		let err = ngram_frequencies(&words("a b", false), 0, None).unwrap_err();
		assert!(matches!(err, TextError::InvalidOption { name: "n", .. }));
	}

	#[test]
	fn zero_top_k_is_rejected() {
		let err = word_frequencies(&words("a b", false), Some(0)).unwrap_err();
		assert!(matches!(err, TextError::InvalidOption { name: "top_k", .. }));
	}

	proptest! {
		#[test]
		fn unigram_table_equals_word_table(text in "[abc ]{0,60}") {
			let seq = words(&text, false);
			prop_assert_eq!(
				ngram_frequencies(&seq, 1, None).unwrap(),
				word_frequencies(&seq, None).unwrap()
			);
		}

		#[test]
		fn total_is_sum_of_counts(text in "[abc ]{0,60}", n in 1usize..4) {
			let table = ngram_frequencies(&words(&text, false), n, None).unwrap();
			prop_assert_eq!(table.total(), table.entries().iter().map(|e| e.count).sum::<usize>());
			prop_assert!(table.unique() <= table.total());
		}
	}
}
