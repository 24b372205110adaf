use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::TextError;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

/// How a text is split into tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenMethod {
	/// Maximal runs of word characters (letters, marks, digits, `_`).
	Word,
	/// Segments between runs of `.`, `!` and `?`, trimmed.
	Sentence,
	/// One token per Unicode scalar value, whitespace included.
	Char,
}

impl TokenMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			TokenMethod::Word => "word",
			TokenMethod::Sentence => "sentence",
			TokenMethod::Char => "char",
		}
	}
}

impl fmt::Display for TokenMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for TokenMethod {
	type Err = TextError;

	/// Parses `word`, `sentence` or `char` (surrounding whitespace and case ignored).
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"word" => Ok(TokenMethod::Word),
			"sentence" => Ok(TokenMethod::Sentence),
			"char" => Ok(TokenMethod::Char),
			_ => Err(TextError::InvalidMethod(s.to_owned())),
		}
	}
}

/// Ordered tokens of a text, tagged with the method that produced them.
///
/// # Invariants
/// - Tokens are in document order
/// - `Word` and `Sentence` tokens are never empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
	method: TokenMethod,
	tokens: Vec<String>,
}

impl TokenSequence {
	pub fn method(&self) -> TokenMethod {
		self.method
	}

	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	pub fn into_tokens(self) -> Vec<String> {
		self.tokens
	}
}

/// Splits `text` into tokens using `method`.
///
/// If `lowercase` is set, every token is lowercased after splitting.
/// Empty text yields an empty sequence whatever the method.
pub fn tokenize(text: &str, method: TokenMethod, lowercase: bool) -> TokenSequence {
	let raw: Vec<&str> = match method {
		TokenMethod::Word => WORD.find_iter(text).map(|m| m.as_str()).collect(),
		TokenMethod::Sentence => SENTENCE_END
			.split(text)
			.map(str::trim)
			.filter(|segment| !segment.is_empty())
			.collect(),
		TokenMethod::Char => text.char_indices().map(|(i, c)| &text[i..i + c.len_utf8()]).collect(),
	};

	let tokens = if lowercase {
		raw.into_iter().map(str::to_lowercase).collect()
	} else {
		raw.into_iter().map(str::to_owned).collect()
	};

	TokenSequence { method, tokens }
}

/// Word tokens of `text`; shorthand for `tokenize(text, TokenMethod::Word, lowercase)`.
pub fn words(text: &str, lowercase: bool) -> TokenSequence {
	tokenize(text, TokenMethod::Word, lowercase)
}
