//! Error and warning types for building and querying a library.

use std::fmt;

use steamcat_catalog::AppId;
use steamcat_vdf::DecodeError;
use thiserror::Error;

/// What was found where the builder expected a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actual {
	/// No child with that key.
	Missing,
	/// A child exists but holds a string.
	Scalar,
}

impl fmt::Display for Actual {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Actual::Missing => "missing",
			Actual::Scalar => "a scalar, not a mapping",
		})
	}
}

/// Errors that prevent a library from being built at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
	/// The per-game block could not be located.
	#[error("unexpected config shape: expected a mapping at {path}, but \"{segment}\" is {actual}")]
	UnexpectedShape {
		/// The full expected path, dot separated.
		path: String,
		/// The first segment that did not resolve to a mapping.
		segment: String,
		/// What was found at that segment.
		actual: Actual,
	},
}

/// Returned when picking from a library with no records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot pick a game from an empty library")]
pub struct EmptyLibraryError;

/// Errors from loading a library straight from a config file.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The file could not be read or is not valid KeyValues text.
	#[error(transparent)]
	Decode(#[from] DecodeError),

	/// The file decoded but does not contain the expected blocks.
	#[error(transparent)]
	Build(#[from] BuildError),
}

/// Non-fatal problems found while building a library.
///
/// The affected entry is skipped or degraded, and the build continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildWarning {
	/// A per-game key is not a decimal app id; the entry is skipped.
	InvalidAppId {
		/// The offending key.
		key: String,
	},
	/// A per-game value is a string; the record gets no tags.
	EntryNotMapping {
		/// The entry's app id.
		id: AppId,
	},
	/// The entry's `tags` child is a string; the record gets no tags.
	TagsNotMapping {
		/// The entry's app id.
		id: AppId,
	},
	/// One child of a `tags` block is a mapping; that tag is skipped.
	TagNotScalar {
		/// The entry's app id.
		id: AppId,
		/// Key of the skipped child inside `tags`.
		key: String,
	},
	/// A second key parsed to an id already in the library; the later entry is skipped.
	DuplicateAppId {
		/// The offending key, as written.
		key: String,
		/// The id it shares with an earlier entry.
		id: AppId,
	},
	/// The catalog refresh failed, so every record has an empty name.
	CatalogUnavailable {
		/// The refresh error, rendered.
		reason: String,
	},
}

impl fmt::Display for BuildWarning {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			BuildWarning::InvalidAppId { key } => write!(f, "entry \"{key}\" is not a numeric app id and was skipped"),
			BuildWarning::EntryNotMapping { id } => write!(f, "app {id} is not a block; loaded without tags"),
			BuildWarning::TagsNotMapping { id } => write!(f, "app {id} has a malformed tags entry; loaded without tags"),
			BuildWarning::TagNotScalar { id, key } => write!(f, "app {id} tag \"{key}\" is not a string and was skipped"),
			BuildWarning::DuplicateAppId { key, id } => {
				write!(f, "entry \"{key}\" repeats app id {id} and was skipped")
			}
			BuildWarning::CatalogUnavailable { reason } => write!(f, "game names unavailable: {reason}"),
		}
	}
}

/// Result type for library construction.
pub type Result<T> = std::result::Result<T, BuildError>;
