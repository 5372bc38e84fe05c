//! Read-only queries over a built [`Library`].

use std::collections::BTreeMap;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::EmptyLibraryError;
use crate::{GameRecord, Library};

impl Library {
	/// Records carrying `tag` (exact, case-sensitive), in library order.
	///
	/// A tag nobody carries yields an empty library.
	pub fn tagged_with(&self, tag: &str) -> Library {
		self.iter().filter(|game| game.has_tag(tag)).cloned().collect()
	}

	/// Every distinct tag with the number of records carrying it.
	///
	/// A record listing the same tag twice counts once.
	pub fn tag_counts(&self) -> BTreeMap<&str, usize> {
		let mut counts = BTreeMap::new();
		for game in self {
			let mut seen: Vec<&str> = Vec::with_capacity(game.tags().len());
			for tag in game.tags() {
				if seen.contains(&tag.as_str()) {
					continue;
				}
				seen.push(tag);
				*counts.entry(tag.as_str()).or_insert(0) += 1;
			}
		}
		counts
	}
}

/// Picks a record uniformly at random using the thread-local generator.
pub fn random_from(library: &Library) -> Result<&GameRecord, EmptyLibraryError> {
	random_from_with(library, &mut rand::rng())
}

/// Picks a record uniformly at random using `rng`.
pub fn random_from_with<'a, R>(library: &'a Library, rng: &mut R) -> Result<&'a GameRecord, EmptyLibraryError>
where
	R: Rng + ?Sized,
{
	library.as_slice().choose(rng).ok_or(EmptyLibraryError)
}
