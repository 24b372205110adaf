use std::collections::HashSet;
use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use super::tokenizer::{self, TokenSequence};

/// Scores strictly above this are positive, strictly below its negation negative.
pub const POLARITY_THRESHOLD: f64 = 0.1;

const POSITIVE_WORDS: &[&str] = &[
	"amazing", "awesome", "beautiful", "best", "better", "brilliant", "calm", "charming",
	"cheerful", "clean", "delight", "delighted", "delightful", "easy", "enjoy", "enjoyed",
	"excellent", "exciting", "fantastic", "fast", "fine", "fun", "glad", "good", "gorgeous",
	"great", "happy", "helpful", "impressive", "incredible", "joy", "kind", "like", "liked",
	"love", "loved", "lovely", "nice", "outstanding", "perfect", "pleasant", "pleased",
	"positive", "recommend", "reliable", "satisfied", "smooth", "success", "successful",
	"super", "superb", "terrific", "thank", "thanks", "useful", "win", "wonderful", "wow",
];

const NEGATIVE_WORDS: &[&str] = &[
	"angry", "annoying", "awful", "bad", "boring", "broken", "bug", "buggy", "confusing",
	"crash", "dirty", "disappointed", "disappointing", "dislike", "fail", "failed", "failure",
	"fear", "hate", "hated", "horrible", "hurt", "poor", "negative", "painful", "problem",
	"sad", "scary", "slow", "sorry", "terrible", "ugly", "unhappy", "upset", "useless",
	"waste", "weak", "worse", "worst", "wrong",
];

static ENGLISH: Lazy<Lexicon> = Lazy::new(|| Lexicon::new(POSITIVE_WORDS, NEGATIVE_WORDS));

/// Polarity class of a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
	Positive,
	Negative,
	Neutral,
}

impl SentimentLabel {
	/// Label for a score in `[-1, 1]`.
	pub fn from_score(score: f64) -> Self {
		if score > POLARITY_THRESHOLD {
			SentimentLabel::Positive
		} else if score < -POLARITY_THRESHOLD {
			SentimentLabel::Negative
		} else {
			SentimentLabel::Neutral
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			SentimentLabel::Positive => "positive",
			SentimentLabel::Negative => "negative",
			SentimentLabel::Neutral => "neutral",
		}
	}
}

impl fmt::Display for SentimentLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Outcome of lexicon scoring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
	pub label: SentimentLabel,
	/// `(positive - negative) / max(1, positive + negative)`, always in `[-1, 1]`.
	pub score: f64,
	pub positive_count: usize,
	pub negative_count: usize,
}

/// Two fixed word sets tagged with polarity.
///
/// Lookups are case-insensitive: words are stored and matched lowercased.
/// A lexicon is never mutated once built, so one instance can be shared
/// by any number of readers.
#[derive(Debug, Clone)]
pub struct Lexicon {
	positive: HashSet<String>,
	negative: HashSet<String>,
}

impl Lexicon {
	/// Builds a lexicon from positive and negative word lists.
	pub fn new<P, N, S>(positive: P, negative: N) -> Self
	where
		P: IntoIterator<Item = S>,
		N: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		Self {
			positive: positive.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
			negative: negative.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
		}
	}

	/// Built-in English lexicon, created on first use and shared process-wide.
	pub fn english() -> &'static Lexicon {
		&ENGLISH
	}

	pub fn positive_len(&self) -> usize {
		self.positive.len()
	}

	pub fn negative_len(&self) -> usize {
		self.negative.len()
	}

	/// Scores a word sequence.
	///
	/// Purely lexical: each token counts once for its polarity,
	/// order and context are ignored.
	pub fn score(&self, words: &TokenSequence) -> SentimentResult {
		let (mut positive_count, mut negative_count) = (0usize, 0usize);
		for token in words.tokens() {
			let folded = token.to_lowercase();
			if self.positive.contains(&folded) {
				positive_count += 1;
			} else if self.negative.contains(&folded) {
				negative_count += 1;
			}
		}

		let matched = positive_count + negative_count;
		let score = (positive_count as f64 - negative_count as f64) / matched.max(1) as f64;

		SentimentResult { label: SentimentLabel::from_score(score), score, positive_count, negative_count }
	}
}

/// Scores `text` with the built-in English lexicon.
pub fn analyze(text: &str) -> SentimentResult {
	Lexicon::english().score(&tokenizer::words(text, true))
}
