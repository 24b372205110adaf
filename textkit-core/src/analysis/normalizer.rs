use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

// Anything that is neither a word character nor whitespace.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"));
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Cleaning steps to apply to a text.
///
/// Each flag toggles one step; steps always run in the same order
/// (see [`normalize`]). Missing fields deserialize to their default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizationOptions {
	pub lowercase: bool,
	pub remove_punctuation: bool,
	pub remove_numbers: bool,
	pub remove_extra_whitespace: bool,
	pub normalize_unicode: bool,
}

impl Default for NormalizationOptions {
	fn default() -> Self {
		Self {
			lowercase: true,
			remove_punctuation: true,
			remove_numbers: false,
			remove_extra_whitespace: true,
			normalize_unicode: true,
		}
	}
}

impl NormalizationOptions {
	/// Every step enabled.
	pub fn all() -> Self {
		Self {
			lowercase: true,
			remove_punctuation: true,
			remove_numbers: true,
			remove_extra_whitespace: true,
			normalize_unicode: true,
		}
	}

	/// Every step disabled; `normalize` returns its input unchanged.
	pub fn none() -> Self {
		Self {
			lowercase: false,
			remove_punctuation: false,
			remove_numbers: false,
			remove_extra_whitespace: false,
			normalize_unicode: false,
		}
	}
}

/// Cleans `text` according to `options`.
///
/// Enabled steps run in this order:
/// 1. Unicode NFKC normalization
/// 2. Lowercasing
/// 3. Punctuation replaced by a space (so `"a,b"` stays two words)
/// 4. Decimal digits removed
/// 5. Whitespace runs collapsed to one space, then trimmed
///
/// Collapsing runs last so that the gaps left by steps 3 and 4 disappear.
/// Running `normalize` twice with the same options gives the same result as once.
pub fn normalize(text: &str, options: &NormalizationOptions) -> String {
	let mut out = if options.normalize_unicode {
		text.nfkc().collect::<String>()
	} else {
		text.to_owned()
	};

	if options.lowercase {
		out = out.to_lowercase();
	}
	if options.remove_punctuation {
		out = PUNCTUATION.replace_all(&out, " ").into_owned();
	}
	if options.remove_numbers {
		out = DIGITS.replace_all(&out, "").into_owned();
	}
	if options.remove_extra_whitespace {
		out = WHITESPACE.replace_all(&out, " ").trim().to_owned();
	}

	out
}
