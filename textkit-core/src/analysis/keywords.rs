use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{Result, TextError};

use super::frequency::FrequencyTable;
use super::tokenizer;

/// Keywords returned when the caller does not ask for a specific count.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// English function words, including the contraction fragments
/// (`isn`, `t`, `ll`, ...) left behind by word tokenization.
pub const ENGLISH_STOPWORDS: &[&str] = &[
	"i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
	"you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
	"she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
	"their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
	"these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
	"had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
	"because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
	"between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
	"up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
	"here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
	"most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
	"too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
	"d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
	"didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
	"isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
	"shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
	"wouldn't",
];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

/// Returns true if `word` (already lowercased) is an English stopword.
pub fn is_stopword(word: &str) -> bool {
	STOPWORDS.contains(word)
}

/// Number of distinct stopwords.
pub fn stopword_count() -> usize {
	STOPWORDS.len()
}

/// Word count and ranked keywords of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordReport {
	/// All word tokens, before stopword filtering.
	pub word_count: usize,
	/// Most frequent keywords first; ties in first-occurrence order.
	pub keywords: Vec<String>,
}

/// Extracts the `top_n` most frequent keywords of `text`.
///
/// Tokens are lowercased words; a keyword is a purely alphabetic
/// token that is not a stopword.
///
/// # Errors
/// Returns `TextError::InvalidOption` if `top_n` is 0.
pub fn extract_keywords(text: &str, top_n: usize) -> Result<KeywordReport> {
	if top_n < 1 {
		return Err(TextError::invalid_option("top_n", "must be >= 1"));
	}

	let words = tokenizer::words(text, true);
	let candidates: Vec<String> = words
		.tokens()
		.iter()
		.filter(|w| w.chars().all(char::is_alphabetic) && !is_stopword(w))
		.cloned()
		.collect();

	let table = FrequencyTable::from_tokens(&candidates, 1, Some(top_n))?;
	let keywords = table.entries().iter().map(|e| e.text()).collect();

	Ok(KeywordReport { word_count: words.len(), keywords })
}
