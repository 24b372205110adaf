use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use textkit_core::TextError;
use thiserror::Error;

/// Error returned by every handler.
///
/// Rendered as `{"detail": "..."}` with a matching status code.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error(transparent)]
	Text(#[from] TextError),

	#[error("{0}")]
	BadRequest(String),

	#[error("request body exceeds the {0} byte limit")]
	PayloadTooLarge(usize),

	#[error("internal error: {0}")]
	Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
	detail: String,
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::Text(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
			ApiError::Text(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
			ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = self.status_code();
		if status.is_server_error() {
			log::error!("{self}");
		} else {
			log::debug!("rejected request: {self}");
		}
		HttpResponse::build(status).json(ErrorBody { detail: self.to_string() })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pipeline_rejections_are_client_errors() {
		let err = ApiError::from(TextError::InvalidMethod("foo".to_owned()));
		assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
		assert!(err.to_string().contains("foo"));
	}

	#[test]
	fn io_failures_are_server_errors() {
		let err = ApiError::from(TextError::Io(std::io::Error::other("disk")));
		assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn oversized_upload() {
		assert_eq!(ApiError::PayloadTooLarge(10).status_code(), StatusCode::PAYLOAD_TOO_LARGE);
	}
}
