//! Library construction from a decoded `sharedconfig.vdf` tree.
//!
//! The client keeps per-user app state under a fixed chain of blocks:
//!
//! ```text
//! UserRoamingConfigStore > Software > Valve > Steam > apps > <appid> > tags > <n> "<tag>"
//! ```
//!
//! Failing to reach `apps` is fatal ([`BuildError::UnexpectedShape`]). Below
//! that point problems are per entry: they are logged, collected as
//! [`BuildWarning`]s, and the entry is skipped or loaded without tags.

use std::collections::HashSet;

use steamcat_catalog::{AppId, NameTable};
use steamcat_vdf::{Mapping, Node};
use tracing::{debug, warn};

use crate::error::{Actual, BuildError, BuildWarning, Result};
use crate::{GameRecord, Library};


/// Blocks leading from the document root to the per-game entries.
pub const APPS_PATH: [&str; 5] = ["UserRoamingConfigStore", "Software", "Valve", "Steam", "apps"];

/// Key of the per-game child holding the tag list.
pub const TAGS_KEY: &str = "tags";

/// A built library together with the non-fatal problems found on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltLibrary {
	/// One record per accepted entry, in document order.
	pub library: Library,
	/// Per-entry problems, in the order they were found.
	pub warnings: Vec<BuildWarning>,
}

impl Library {
	/// Builds a library from a decoded config tree, resolving display names
	/// through `names`.
	///
	/// Ids missing from `names` get an empty name. Every warning is also
	/// emitted through `tracing`.
	///
	/// # Errors
	///
	/// Returns [`BuildError::UnexpectedShape`] when any block on [`APPS_PATH`]
	/// is missing or is a string. No partial library is produced in that case.
	pub fn build(tree: &Node, names: &NameTable) -> Result<BuiltLibrary> {
		let apps = locate_apps(tree)?;
		let mut games = Vec::with_capacity(apps.len());
		let mut warnings = Vec::new();
		let mut seen = HashSet::with_capacity(apps.len());

		for (key, entry) in apps {
			let Some(id) = parse_app_id(key) else {
				report(&mut warnings, BuildWarning::InvalidAppId { key: key.clone() });
				continue;
			};
			// "7" and "007" name the same app; the first one wins.
			if !seen.insert(id) {
				report(&mut warnings, BuildWarning::DuplicateAppId { key: key.clone(), id });
				continue;
			}
			let tags = collect_tags(id, entry, &mut warnings);
			let name = names.name(id).unwrap_or_default();
			games.push(GameRecord::new(id, name, tags));
		}

		debug!(games = games.len(), warnings = warnings.len(), "library built");
		Ok(BuiltLibrary {
			library: Library::new(games),
			warnings,
		})
	}

	/// Like [`Library::build`], discarding the collected warnings.
	pub fn from_tree(tree: &Node, names: &NameTable) -> Result<Library> {
		Ok(Self::build(tree, names)?.library)
	}
}

/// Walks [`APPS_PATH`], requiring a mapping at every step.
///
/// Segments match exactly first and then ignoring ASCII case, since clients
/// have written both `apps` and `Apps`.
fn locate_apps(tree: &Node) -> Result<&Mapping> {
	let mut current = match tree {
		Node::Mapping(root) => root,
		Node::Scalar(_) => return Err(unexpected_shape(APPS_PATH[0], Actual::Missing)),
	};

	for segment in APPS_PATH {
		current = match current.get_ignore_ascii_case(segment) {
			Some(Node::Mapping(next)) => next,
			Some(Node::Scalar(_)) => return Err(unexpected_shape(segment, Actual::Scalar)),
			None => return Err(unexpected_shape(segment, Actual::Missing)),
		};
	}

	Ok(current)
}

fn unexpected_shape(segment: &str, actual: Actual) -> BuildError {
	BuildError::UnexpectedShape {
		path: APPS_PATH.join("."),
		segment: segment.to_string(),
		actual,
	}
}

/// Accepts plain decimal digits only; no sign, no whitespace.
fn parse_app_id(key: &str) -> Option<AppId> {
	if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	key.parse().ok()
}

/// Reads the direct `tags` child of one entry.
fn collect_tags(id: AppId, entry: &Node, warnings: &mut Vec<BuildWarning>) -> Vec<String> {
	let attributes = match entry {
		Node::Mapping(attributes) => attributes,
		Node::Scalar(_) => {
			report(warnings, BuildWarning::EntryNotMapping { id });
			return Vec::new();
		}
	};

	let tags = match attributes.get(TAGS_KEY) {
		Some(Node::Mapping(tags)) => tags,
		Some(Node::Scalar(_)) => {
			report(warnings, BuildWarning::TagsNotMapping { id });
			return Vec::new();
		}
		None => return Vec::new(),
	};

	let mut collected = Vec::with_capacity(tags.len());
	for (key, value) in tags {
		match value {
			Node::Scalar(tag) => collected.push(tag.clone()),
			Node::Mapping(_) => report(warnings, BuildWarning::TagNotScalar { id, key: key.clone() }),
		}
	}
	collected
}

fn report(warnings: &mut Vec<BuildWarning>, warning: BuildWarning) {
	warn!(%warning, "malformed library entry");
	warnings.push(warning);
}
