//! Request and response bodies of the HTTP API.

use serde::{Deserialize, Serialize};
use textkit_core::analysis::{FrequencyTable, NormalizationOptions, SentimentLabel, SentimentResult};

fn default_method() -> String {
	"word".to_owned()
}

fn default_n() -> usize {
	1
}

#[derive(Deserialize)]
pub struct TextInput {
	pub text: String,
}

/// `/v1/clean` body; omitted flags take their default.
#[derive(Deserialize)]
pub struct CleanInput {
	pub text: String,
	#[serde(flatten)]
	pub options: NormalizationOptions,
}

#[derive(Deserialize)]
pub struct TokenizeInput {
	pub text: String,
	/// Parsed by the handler so that unknown methods get a descriptive error.
	#[serde(default = "default_method")]
	pub method: String,
	#[serde(default)]
	pub lowercase: bool,
}

#[derive(Deserialize)]
pub struct WordFrequencyInput {
	pub text: String,
	pub top_k: Option<usize>,
	#[serde(default)]
	pub lowercase: bool,
}

#[derive(Deserialize)]
pub struct NGramInput {
	pub text: String,
	#[serde(default = "default_n")]
	pub n: usize,
	pub top_k: Option<usize>,
	#[serde(default)]
	pub lowercase: bool,
}

#[derive(Deserialize)]
pub struct UploadQuery {
	pub top_n: Option<usize>,
}

#[derive(Deserialize)]
pub struct ChatRequest {
	pub message: String,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
	pub response: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
	pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
}

#[derive(Serialize)]
pub struct CleanResponse {
	pub cleaned_text: String,
}

#[derive(Serialize)]
pub struct TokenizeResponse {
	pub tokens: Vec<String>,
	pub count: usize,
}

#[derive(Serialize)]
pub struct WordFrequency {
	pub word: String,
	pub frequency: usize,
}

#[derive(Serialize)]
pub struct WordFrequencyResponse {
	pub word_frequencies: Vec<WordFrequency>,
	pub total_words: usize,
	pub unique_words: usize,
}

impl From<FrequencyTable> for WordFrequencyResponse {
	fn from(table: FrequencyTable) -> Self {
		Self {
			word_frequencies: table
				.entries()
				.iter()
				.map(|e| WordFrequency { word: e.text(), frequency: e.count })
				.collect(),
			total_words: table.total(),
			unique_words: table.unique(),
		}
	}
}

#[derive(Serialize)]
pub struct NGramFrequency {
	/// Tokens joined by a single space.
	pub ngram: String,
	pub frequency: usize,
}

#[derive(Serialize)]
pub struct NGramResponse {
	pub ngrams: Vec<NGramFrequency>,
	pub total_ngrams: usize,
	pub unique_ngrams: usize,
}

impl From<FrequencyTable> for NGramResponse {
	fn from(table: FrequencyTable) -> Self {
		Self {
			ngrams: table
				.entries()
				.iter()
				.map(|e| NGramFrequency { ngram: e.text(), frequency: e.count })
				.collect(),
			total_ngrams: table.total(),
			unique_ngrams: table.unique(),
		}
	}
}

#[derive(Serialize)]
pub struct SentimentResponse {
	pub sentiment: SentimentLabel,
	pub score: f64,
	pub positive_words: usize,
	pub negative_words: usize,
}

impl From<SentimentResult> for SentimentResponse {
	fn from(result: SentimentResult) -> Self {
		Self {
			sentiment: result.label,
			score: result.score,
			positive_words: result.positive_count,
			negative_words: result.negative_count,
		}
	}
}

#[derive(Serialize)]
pub struct UploadResponse {
	pub filename: String,
	pub word_count: usize,
	pub top_keywords: Vec<String>,
	pub extracted_text: String,
}
