use thiserror::Error;

/// Errors raised by the analysis pipeline and the I/O helpers.
///
/// Pipeline errors are always raised before any work is done,
/// so a caller never observes a partial result.
#[derive(Error, Debug)]
pub enum TextError {
	/// Tokenization method outside `word`, `sentence`, `char`.
	#[error("invalid tokenization method '{0}', expected one of: word, sentence, char")]
	InvalidMethod(String),

	/// Numeric option outside its accepted range.
	#[error("invalid option '{name}': {reason}")]
	InvalidOption { name: &'static str, reason: String },

	/// Text could not be extracted from a document.
	#[error("error extracting text: {0}")]
	Extraction(String),

	#[error(transparent)]
	Io(#[from] std::io::Error),
}

impl TextError {
	/// Shorthand for `TextError::InvalidOption`.
	pub fn invalid_option(name: &'static str, reason: impl Into<String>) -> Self {
		Self::InvalidOption { name, reason: reason.into() }
	}

	/// Whether the error was caused by the caller's input rather than the environment.
	pub fn is_client_error(&self) -> bool {
		!matches!(self, Self::Io(_))
	}
}

pub type Result<T> = std::result::Result<T, TextError>;
