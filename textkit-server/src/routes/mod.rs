use actix_web::error::JsonPayloadError;
use actix_web::web;

use crate::error::ApiError;

// In-process app with default settings, for handler tests.
#[cfg(test)]
macro_rules! test_app {
	() => {
		test_app!(crate::config::ServerConfig::default())
	};
	($config:expr) => {{
		let config = $config;
		actix_web::test::init_service(
			actix_web::App::new()
				.app_data(crate::routes::json_config(config.max_json_bytes))
				.app_data(crate::routes::query_config())
				.app_data(actix_web::web::Data::new(config))
				.configure(crate::routes::configure),
		)
		.await
	}};
}

/// Root, health and chat echo endpoints.
pub mod chat;

/// Text analysis endpoints.
pub mod text;

/// PDF upload and keyword extraction.
pub mod upload;

/// Registers every endpoint.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(chat::root)
		.service(chat::health)
		.service(chat::chat)
		.service(text::clean)
		.service(text::tokenize_text)
		.service(text::stats)
		.service(text::word_frequency)
		.service(text::ngrams)
		.service(text::sentiment)
		.service(upload::upload_pdf);
}

/// JSON extractor settings: body size limit and `{detail}` error bodies.
///
/// Bodies over `limit` answer 413, like oversized uploads.
pub fn json_config(limit: usize) -> web::JsonConfig {
	web::JsonConfig::default().limit(limit).error_handler(|err, _| {
		match err {
			JsonPayloadError::Overflow { limit } | JsonPayloadError::OverflowKnownLength { limit, .. } => {
				ApiError::PayloadTooLarge(limit)
			}
			other => ApiError::BadRequest(other.to_string()),
		}
		.into()
	})
}

/// Query string extractor settings: `{detail}` error bodies.
pub fn query_config() -> web::QueryConfig {
	web::QueryConfig::default().error_handler(|err, _| ApiError::BadRequest(err.to_string()).into())
}
