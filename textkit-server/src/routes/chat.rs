use actix_web::{get, post, web, HttpResponse, Responder};

use crate::models::{ChatRequest, ChatResponse, HealthResponse, MessageResponse};

/// HTTP GET endpoint `/`
///
/// Short welcome message pointing at the API.
#[get("/")]
pub async fn root() -> impl Responder {
	HttpResponse::Ok().json(MessageResponse {
		message: "Text Processing API. POST text to /v1/clean, /v1/tokenize, /v1/stats, \
		          /v1/word-frequency, /v1/ngrams, /v1/sentiment, /v1/chat or a PDF to /v1/upload.",
	})
}

/// HTTP GET endpoint `/v1/health`
#[get("/v1/health")]
pub async fn health() -> impl Responder {
	HttpResponse::Ok().json(HealthResponse { status: "healthy" })
}

/// HTTP POST endpoint `/v1/chat`
///
/// Echoes the message back with a prefix.
#[post("/v1/chat")]
pub async fn chat(body: web::Json<ChatRequest>) -> impl Responder {
	HttpResponse::Ok().json(ChatResponse { response: format!("You said: {}", body.message) })
}
