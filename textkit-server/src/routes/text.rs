use actix_web::{post, web, HttpResponse};
use textkit_core::analysis::sentiment::analyze as analyze_sentiment;
use textkit_core::analysis::{frequency, normalize, statistics, tokenize, tokenizer, TokenMethod};

use crate::error::ApiError;
use crate::models::{
	CleanInput, CleanResponse, NGramInput, NGramResponse, SentimentResponse, TextInput, TokenizeInput,
	TokenizeResponse, WordFrequencyInput, WordFrequencyResponse,
};

/// HTTP POST endpoint `/v1/clean`
///
/// Applies the requested normalization flags and returns the cleaned text.
#[post("/v1/clean")]
pub async fn clean(body: web::Json<CleanInput>) -> HttpResponse {
	HttpResponse::Ok().json(CleanResponse { cleaned_text: normalize(&body.text, &body.options) })
}

/// HTTP POST endpoint `/v1/tokenize`
///
/// Returns 400 if `method` is not one of `word`, `sentence`, `char`.
#[post("/v1/tokenize")]
pub async fn tokenize_text(body: web::Json<TokenizeInput>) -> Result<HttpResponse, ApiError> {
	let method: TokenMethod = body.method.parse()?;
	let tokens = tokenize(&body.text, method, body.lowercase).into_tokens();
	Ok(HttpResponse::Ok().json(TokenizeResponse { count: tokens.len(), tokens }))
}

/// HTTP POST endpoint `/v1/stats`
#[post("/v1/stats")]
pub async fn stats(body: web::Json<TextInput>) -> HttpResponse {
	HttpResponse::Ok().json(statistics::compute(&body.text))
}

/// HTTP POST endpoint `/v1/word-frequency`
///
/// Words ranked by frequency, optionally truncated to `top_k`.
/// Totals always describe the whole text.
#[post("/v1/word-frequency")]
pub async fn word_frequency(body: web::Json<WordFrequencyInput>) -> Result<HttpResponse, ApiError> {
	let words = tokenizer::words(&body.text, body.lowercase);
	let table = frequency::word_frequencies(&words, body.top_k)?;
	Ok(HttpResponse::Ok().json(WordFrequencyResponse::from(table)))
}

/// HTTP POST endpoint `/v1/ngrams`
///
/// Returns 400 if `n` or `top_k` is 0.
#[post("/v1/ngrams")]
pub async fn ngrams(body: web::Json<NGramInput>) -> Result<HttpResponse, ApiError> {
	let words = tokenizer::words(&body.text, body.lowercase);
	let table = frequency::ngram_frequencies(&words, body.n, body.top_k)?;
	Ok(HttpResponse::Ok().json(NGramResponse::from(table)))
}

/// HTTP POST endpoint `/v1/sentiment`
#[post("/v1/sentiment")]
pub async fn sentiment(body: web::Json<TextInput>) -> HttpResponse {
	HttpResponse::Ok().json(SentimentResponse::from(analyze_sentiment(&body.text)))
}
