//! The untyped document tree produced by the decoder.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, Keys};

/// A single value in a KeyValues document.
///
/// KeyValues has no schema: every value is either a string or a nested block of
/// further key/value pairs. Callers that expect a particular shape match on the
/// variant at each step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
	/// A quoted or bare string value, e.g. `"name" "Portal"`.
	Scalar(String),
	/// A brace-delimited block, e.g. `"tags" { ... }`.
	Mapping(Mapping),
}

/// The two shapes a [`Node`] can take, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
	/// See [`Node::Scalar`].
	Scalar,
	/// See [`Node::Mapping`].
	Mapping,
}

impl fmt::Display for NodeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			NodeKind::Scalar => "scalar",
			NodeKind::Mapping => "mapping",
		})
	}
}

impl Node {
	/// Returns the string value, or `None` for a mapping.
	pub fn as_scalar(&self) -> Option<&str> {
		match self {
			Node::Scalar(value) => Some(value),
			Node::Mapping(_) => None,
		}
	}

	/// Returns the nested block, or `None` for a scalar.
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Node::Scalar(_) => None,
			Node::Mapping(mapping) => Some(mapping),
		}
	}

	/// Which variant this node is.
	pub fn kind(&self) -> NodeKind {
		match self {
			Node::Scalar(_) => NodeKind::Scalar,
			Node::Mapping(_) => NodeKind::Mapping,
		}
	}

	/// Follows `segments` through nested mappings using exact key matches.
	///
	/// Returns `None` as soon as a segment is missing or a scalar is reached
	/// before the path is exhausted. An empty path returns `self`.
	pub fn path(&self, segments: &[&str]) -> Option<&Node> {
		segments
			.iter()
			.try_fold(self, |node, segment| node.as_mapping()?.get(segment))
	}
}

impl From<&str> for Node {
	fn from(value: &str) -> Self {
		Node::Scalar(value.to_string())
	}
}

impl From<String> for Node {
	fn from(value: String) -> Self {
		Node::Scalar(value)
	}
}

impl From<Mapping> for Node {
	fn from(value: Mapping) -> Self {
		Node::Mapping(value)
	}
}

/// An insertion-ordered block of key/value pairs.
///
/// Iteration follows document order. Inserting an existing key replaces its
/// value in place, so a duplicated key keeps the position of its first
/// occurrence and the value of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
	entries: IndexMap<String, Node>,
}

impl Mapping {
	/// Creates an empty mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Inserts a pair, returning the value previously stored under `key`.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) -> Option<Node> {
		self.entries.insert(key.into(), value.into())
	}

	/// Looks up a child by exact key.
	pub fn get(&self, key: &str) -> Option<&Node> {
		self.entries.get(key)
	}

	/// Looks up a child by exact key, falling back to the first key that
	/// matches ignoring ASCII case.
	pub fn get_ignore_ascii_case(&self, key: &str) -> Option<&Node> {
		self.get(key).or_else(|| {
			self.entries
				.iter()
				.find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
				.map(|(_, node)| node)
		})
	}

	/// Number of pairs in this block.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns `true` if the block has no pairs.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates pairs in document order.
	pub fn iter(&self) -> Iter<'_, String, Node> {
		self.entries.iter()
	}

	/// Iterates keys in document order.
	pub fn keys(&self) -> Keys<'_, String, Node> {
		self.entries.keys()
	}
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Mapping {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut mapping = Mapping::new();
		for (key, value) in iter {
			mapping.insert(key, value);
		}
		mapping
	}
}

impl<'a> IntoIterator for &'a Mapping {
	type Item = (&'a String, &'a Node);
	type IntoIter = Iter<'a, String, Node>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl IntoIterator for Mapping {
	type Item = (String, Node);
	type IntoIter = IntoIter<String, Node>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}
