use std::any::Any;
use std::fs::File;
use std::io::Read;
use std::panic;
use std::path::Path;

use crate::error::{Result, TextError};

/// Reads a whole text file into a `String`.
pub fn read_text_file<P: AsRef<Path>>(filename: P) -> Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Extracts the text of every page of an in-memory PDF document.
///
/// - Pages are concatenated in document order
/// - Leading and trailing whitespace is trimmed
///
/// # Errors
/// Returns `TextError::Extraction` if the bytes are not a readable PDF,
/// including documents that make the parser panic (e.g. a content
/// stream naming a font the page does not define).
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
	let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes))
		.map_err(|payload| TextError::Extraction(panic_message(payload.as_ref())))?
		.map_err(|e| TextError::Extraction(e.to_string()))?;
	log::debug!("extracted {} bytes of text from a {} byte document", text.len(), bytes.len());
	Ok(text.trim().to_owned())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(msg) = payload.downcast_ref::<&str>() {
		format!("malformed document: {msg}")
	} else if let Some(msg) = payload.downcast_ref::<String>() {
		format!("malformed document: {msg}")
	} else {
		"malformed document".to_owned()
	}
}

/// Returns true if `filename` ends with `.extension` (case-insensitive).
///
/// Examples:
/// - `"report.pdf"`, `"pdf"` → `true`
/// - `"REPORT.PDF"`, `"pdf"` → `true`
/// - `"report.pdf.txt"`, `"pdf"` → `false`
pub fn has_extension<P: AsRef<Path>>(filename: P, extension: &str) -> bool {
	filename
		.as_ref()
		.extension()
		.map(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension))
		.unwrap_or(false)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./data/sample.txt"` → `"sample"`
/// - `"sample.txt"` → `"sample"`
pub fn get_filename<P: AsRef<Path>>(input_path: P) -> Result<String> {
	let stem = input_path.as_ref().file_stem().ok_or_else(|| {
		TextError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, "Path has no filename"))
	})?;

	Ok(stem.to_string_lossy().to_string())
}

/// Returns at most `max_chars` characters of `text`, followed by `...`
/// when something was cut off.
pub fn excerpt(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}...", &text[..cut]),
		None => text.to_owned(),
	}
}
