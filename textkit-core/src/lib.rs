//! Text analysis library.
//!
//! This crate provides a small, stateless text processing pipeline including:
//! - Configurable text normalization (cleaning)
//! - Word, sentence and character tokenization
//! - Descriptive statistics, word and n-gram frequencies
//! - Lexicon-based sentiment scoring and keyword extraction
//! - I/O helpers for reading text files and extracting text from PDFs
//!
//! Every analysis is a pure function of its input: the same text and options
//! always produce the same result.

/// Text analysis components.
///
/// One module per pipeline stage. Stages only share the tokenization step.
pub mod analysis;

/// Error type shared by the whole crate.
pub mod error;

/// I/O utilities (file loading, PDF extraction, path helpers).
pub mod io;

pub use error::{Result, TextError};
