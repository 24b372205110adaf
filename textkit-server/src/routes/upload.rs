use actix_multipart::Multipart;
use actix_web::http::header::{self, ContentDisposition};
use actix_web::{post, web, HttpResponse};
use futures_util::TryStreamExt;
use textkit_core::analysis::keywords;
use textkit_core::{io, TextError};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::models::{UploadQuery, UploadResponse};

/// Reads the first multipart field that carries a filename.
///
/// # Behavior
/// - Fields without a filename are skipped.
/// - The filename is checked before the body is read, so non-PDF
///   uploads are rejected without buffering them.
/// - Stops with `PayloadTooLarge` as soon as `limit` bytes are exceeded.
async fn read_pdf_field(payload: &mut Multipart, limit: usize) -> Result<(String, Vec<u8>), ApiError> {
	while let Some(mut field) = payload.try_next().await.map_err(|e| ApiError::BadRequest(e.to_string()))? {
		let filename = field
			.headers()
			.get(header::CONTENT_DISPOSITION)
			.and_then(|value| ContentDisposition::from_raw(value).ok())
			.and_then(|disposition| disposition.get_filename().map(str::to_owned));

		let Some(filename) = filename else {
			continue;
		};

		if !io::has_extension(&filename, "pdf") {
			return Err(ApiError::BadRequest("Only PDF files are allowed".to_owned()));
		}

		let mut bytes = Vec::new();
		while let Some(chunk) = field.try_next().await.map_err(|e| ApiError::BadRequest(e.to_string()))? {
			if bytes.len() + chunk.len() > limit {
				return Err(ApiError::PayloadTooLarge(limit));
			}
			bytes.extend_from_slice(&chunk);
		}
		return Ok((filename, bytes));
	}

	Err(ApiError::BadRequest("Missing file field".to_owned()))
}

/// HTTP POST endpoint `/v1/upload`
///
/// Accepts a multipart form with a PDF file, extracts its text and
/// returns the word count and the most frequent keywords.
///
/// # Notes
/// - `top_n` query parameter, defaults to the configured keyword count.
/// - Extraction runs on the blocking thread pool.
/// - `extracted_text` is truncated to the configured excerpt length.
#[post("/v1/upload")]
pub async fn upload_pdf(
	config: web::Data<ServerConfig>,
	query: web::Query<UploadQuery>,
	mut payload: Multipart,
) -> Result<HttpResponse, ApiError> {
	let top_n = query.top_n.unwrap_or(config.keyword_count);
	if top_n == 0 {
		return Err(TextError::invalid_option("top_n", "must be >= 1").into());
	}

	let (filename, bytes) = read_pdf_field(&mut payload, config.max_upload_bytes).await?;
	log::info!("processing upload '{}' ({} bytes)", filename, bytes.len());

	let text = web::block(move || io::extract_pdf_text(&bytes))
		.await
		.map_err(|e| ApiError::Internal(format!("extraction task failed: {e}")))??;

	let report = keywords::extract_keywords(&text, top_n)?;

	Ok(HttpResponse::Ok().json(UploadResponse {
		filename,
		word_count: report.word_count,
		top_keywords: report.keywords,
		extracted_text: io::excerpt(&text, config.excerpt_chars),
	}))
}

#[cfg(test)]
mod tests {
	use actix_web::http::StatusCode;
	use actix_web::test;
	use serde_json::Value;

	use crate::config::ServerConfig;

	const BOUNDARY: &str = "textkit-test-boundary";

	fn multipart_body(disposition: &str, content: &str) -> String {
		format!(
			"--{BOUNDARY}\r\nContent-Disposition: {disposition}\r\nContent-Type: application/octet-stream\r\n\r\n{content}\r\n--{BOUNDARY}--\r\n"
		)
	}

	// One-page Helvetica PDF showing `text` through the font resource `font`; only `/F1` exists.
	fn sample_pdf(font: &str, text: &str) -> String {
		let content = format!("BT /{font} 12 Tf 72 720 Td ({text}) Tj ET");
		let objects = [
			"<< /Type /Catalog /Pages 2 0 R >>".to_owned(),
			"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_owned(),
			"<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>".to_owned(),
			"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_owned(),
			format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
		];

		let mut pdf = String::from("%PDF-1.4\n");
		let mut offsets = Vec::new();
		for (i, object) in objects.iter().enumerate() {
			offsets.push(pdf.len());
			pdf.push_str(&format!("{} 0 obj\n{object}\nendobj\n", i + 1));
		}
		let xref = pdf.len();
		pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
		for offset in offsets {
			pdf.push_str(&format!("{offset:010} 00000 n \n"));
		}
		pdf.push_str(&format!("trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n", objects.len() + 1));
		pdf
	}

	fn upload_request(uri: &str, body: String) -> test::TestRequest {
		test::TestRequest::post()
			.uri(uri)
			.insert_header(("content-type", format!("multipart/form-data; boundary={BOUNDARY}")))
			.set_payload(body)
	}

	#[actix_web::test]
	async fn non_pdf_is_rejected() {
		let app = test_app!();
		let body = multipart_body(r#"form-data; name="file"; filename="notes.txt""#, "hello");
		let resp = test::call_service(&app, upload_request("/v1/upload", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["detail"], "Only PDF files are allowed");
	}

	#[actix_web::test]
	async fn missing_file_field_is_rejected() {
		let app = test_app!();
		let body = multipart_body(r#"form-data; name="comment""#, "no file here");
		let resp = test::call_service(&app, upload_request("/v1/upload", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["detail"], "Missing file field");
	}

	#[actix_web::test]
	async fn oversized_upload_is_rejected() {
		let app = test_app!(ServerConfig { max_upload_bytes: 4, ..ServerConfig::default() });
		let body = multipart_body(r#"form-data; name="file"; filename="big.pdf""#, "much more than four bytes");
		let resp = test::call_service(&app, upload_request("/v1/upload", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
	}

	#[actix_web::test]
	async fn zero_keywords_is_rejected() {
		let app = test_app!();
		let body = multipart_body(r#"form-data; name="file"; filename="doc.pdf""#, "%PDF-1.4");
		let resp = test::call_service(&app, upload_request("/v1/upload?top_n=0", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn pdf_keywords_are_ranked() {
		let app = test_app!();
		let body = multipart_body(r#"form-data; name="file"; filename="good.pdf""#, &sample_pdf("F1", "Engine engine wheel"));
		let resp = test::call_service(&app, upload_request("/v1/upload", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::OK);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["filename"], "good.pdf");
		assert_eq!(body["word_count"], 3);
		assert_eq!(body["top_keywords"], serde_json::json!(["engine", "wheel"]));
		assert_eq!(body["extracted_text"], "Engine engine wheel");
	}

	#[actix_web::test]
	async fn extracted_text_is_cut_to_excerpt_length() {
		let app = test_app!(ServerConfig { excerpt_chars: 6, ..ServerConfig::default() });
		let body = multipart_body(r#"form-data; name="file"; filename="good.pdf""#, &sample_pdf("F1", "Engine engine wheel"));
		let resp = test::call_service(&app, upload_request("/v1/upload?top_n=1", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::OK);
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body["extracted_text"], "Engine...");
		assert_eq!(body["top_keywords"], serde_json::json!(["engine"]));
		assert_eq!(body["word_count"], 3);
	}

	#[actix_web::test]
	async fn unreadable_pdf_is_rejected() {
		let app = test_app!();
		let body = multipart_body(r#"form-data; name="file"; filename="x.pdf""#, "this is not a document");
		let resp = test::call_service(&app, upload_request("/v1/upload", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert!(body["detail"].as_str().unwrap().contains("error extracting text"));
	}

	#[actix_web::test]
	async fn undefined_font_leaves_server_up() {
		let app = test_app!();
		let body = multipart_body(r#"form-data; name="file"; filename="bad.pdf""#, &sample_pdf("F9", "Engine engine wheel"));
		let resp = test::call_service(&app, upload_request("/v1/upload", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert!(body["detail"].as_str().unwrap().contains("error extracting text"));

		let resp = test::call_service(&app, test::TestRequest::get().uri("/v1/health").to_request()).await;
		assert_eq!(resp.status(), StatusCode::OK);
	}

	#[actix_web::test]
	async fn malformed_query_gets_detail_body() {
		let app = test_app!();
		let body = multipart_body(r#"form-data; name="file"; filename="doc.pdf""#, "%PDF-1.4");
		let resp = test::call_service(&app, upload_request("/v1/upload?top_n=abc", body).to_request()).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		let body: Value = test::read_body_json(resp).await;
		assert!(body["detail"].as_str().unwrap().contains("Query deserialize error"));
	}
}
