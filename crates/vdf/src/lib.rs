//! KeyValues (VDF) decoding for steamcat.
//!
//! Valve stores per-user client settings, such as `sharedconfig.vdf`, in a
//! plain-text nested key/value format:
//!
//! ```text
//! "UserRoamingConfigStore"
//! {
//!     "Software"
//!     {
//!         "Valve"
//!         {
//!             "Steam"
//!             {
//!                 "apps"
//!                 {
//!                     "440"
//!                     {
//!                         "tags"
//!                         {
//!                             "0"     "Shooter"
//!                         }
//!                     }
//!                 }
//!             }
//!         }
//!     }
//! }
//! ```
//!
//! This crate turns such text into an untyped [`Node`] tree. It enforces no
//! schema; consumers navigate the tree and match on each node's shape.

pub mod error;
mod node;
mod parser;

use std::io::Read;
use std::path::Path;

pub use error::{DecodeError, Result};
pub use node::{Mapping, Node, NodeKind};
pub use parser::{MAX_DEPTH, decode_str};

/// Decodes a KeyValues document from a byte stream.
///
/// The stream is read to completion before parsing.
pub fn decode(mut reader: impl Read) -> Result<Node> {
	let mut bytes = Vec::new();
	reader.read_to_end(&mut bytes).map_err(DecodeError::Read)?;
	let text = String::from_utf8(bytes)?;
	decode_str(&text)
}

/// Decodes a KeyValues document from a file.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Node> {
	let path = path.as_ref();
	let bytes = std::fs::read(path).map_err(|e| DecodeError::Io {
		path: path.to_path_buf(),
		error: e,
	})?;
	let text = String::from_utf8(bytes)?;
	decode_str(&text)
}
