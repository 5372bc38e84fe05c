use steamcat_catalog::AppId;

/// One owned game and the user's tags for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
	id: AppId,
	name: String,
	tags: Vec<String>,
}

impl GameRecord {
	pub fn new(id: AppId, name: impl Into<String>, tags: Vec<String>) -> Self {
		Self {
			id,
			name: name.into(),
			tags,
		}
	}

	pub fn id(&self) -> AppId {
		self.id
	}

	/// Catalog display name; empty when the catalog did not know the id.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Tags in document order. May contain duplicates.
	pub fn tags(&self) -> &[String] {
		&self.tags
	}

	/// Exact, case-sensitive tag membership.
	pub fn has_tag(&self, tag: &str) -> bool {
		self.tags.iter().any(|t| t == tag)
	}
}
