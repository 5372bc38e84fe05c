//! Error types for catalog fetching.

use thiserror::Error;

/// Errors that can occur while fetching or decoding the remote catalog.
#[derive(Debug, Error)]
pub enum FetchError {
	/// The endpoint answered with a non-success status.
	#[error("catalog request returned HTTP {0}")]
	Status(u16),

	/// The request could not be completed (DNS, connect, TLS, timeout).
	#[error("catalog request failed: {0}")]
	Transport(#[source] ureq::Error),

	/// The response body could not be read or exceeded the size limit.
	#[error("failed to read catalog response: {0}")]
	Body(#[source] ureq::Error),

	/// The response body is not the expected JSON document.
	#[error("malformed catalog JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, FetchError>;
