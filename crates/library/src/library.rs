use std::slice;

use steamcat_catalog::AppId;

use crate::GameRecord;

/// An ordered collection of owned [`GameRecord`]s.
///
/// Built once from a config tree; queries return new libraries rather than
/// mutating this one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Library {
	games: Vec<GameRecord>,
}

impl Library {
	pub fn new(games: Vec<GameRecord>) -> Self {
		Self { games }
	}

	pub fn len(&self) -> usize {
		self.games.len()
	}

	pub fn is_empty(&self) -> bool {
		self.games.is_empty()
	}

	pub fn iter(&self) -> slice::Iter<'_, GameRecord> {
		self.games.iter()
	}

	pub fn as_slice(&self) -> &[GameRecord] {
		&self.games
	}

	/// First record with the given id.
	pub fn get(&self, id: AppId) -> Option<&GameRecord> {
		self.games.iter().find(|game| game.id() == id)
	}

	/// Returns the same records ordered by ascending id.
	pub fn sorted_by_id(mut self) -> Self {
		self.games.sort_by_key(GameRecord::id);
		self
	}
}

impl From<Vec<GameRecord>> for Library {
	fn from(games: Vec<GameRecord>) -> Self {
		Self::new(games)
	}
}

impl FromIterator<GameRecord> for Library {
	fn from_iter<I: IntoIterator<Item = GameRecord>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl IntoIterator for Library {
	type Item = GameRecord;
	type IntoIter = std::vec::IntoIter<GameRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.games.into_iter()
	}
}

impl<'a> IntoIterator for &'a Library {
	type Item = &'a GameRecord;
	type IntoIter = slice::Iter<'a, GameRecord>;

	fn into_iter(self) -> Self::IntoIter {
		self.games.iter()
	}
}
