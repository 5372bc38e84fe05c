//! Error types for KeyValues decoding.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when decoding a KeyValues document.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// The text does not follow the KeyValues grammar.
	#[error("syntax error at {line}:{column}: {message}")]
	Syntax {
		/// 1-based line of the offending character.
		line: usize,
		/// 1-based column of the offending character.
		column: usize,
		/// Human-readable description of the problem.
		message: String,
	},

	/// The input bytes are not valid UTF-8.
	#[error("input is not valid UTF-8: {0}")]
	Utf8(#[from] std::string::FromUtf8Error),

	/// Error reading a document from disk.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error reading a document from an arbitrary byte stream.
	#[error("I/O error reading input: {0}")]
	Read(std::io::Error),
}

impl DecodeError {
	pub(crate) fn syntax(line: usize, column: usize, message: impl Into<String>) -> Self {
		Self::Syntax {
			line,
			column,
			message: message.into(),
		}
	}
}

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, DecodeError>;
