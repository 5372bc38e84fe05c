//! The in-memory id to name table.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::Result;
use crate::{AppId, CatalogApp};

/// Anything that can produce the full app catalog.
pub trait CatalogSource {
	/// Fetches every catalog entry in one go.
	fn fetch_apps(&self) -> Result<Vec<CatalogApp>>;
}

impl CatalogSource for [CatalogApp] {
	fn fetch_apps(&self) -> Result<Vec<CatalogApp>> {
		Ok(self.to_vec())
	}
}

impl CatalogSource for Vec<CatalogApp> {
	fn fetch_apps(&self) -> Result<Vec<CatalogApp>> {
		self.as_slice().fetch_apps()
	}
}

/// Maps app identifiers to their canonical display names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTable {
	names: HashMap<AppId, String>,
}

impl NameTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Rebuilds the table from `source`.
	///
	/// The whole catalog is fetched and decoded before the table is touched, so
	/// on error the previous contents are kept as they were. On success the
	/// table holds exactly the fetched entries; for a repeated id the later
	/// entry wins.
	pub fn refresh<S>(&mut self, source: &S) -> Result<()>
	where
		S: CatalogSource + ?Sized,
	{
		let apps = match source.fetch_apps() {
			Ok(apps) => apps,
			Err(e) => {
				warn!(error = %e, kept = self.names.len(), "catalog refresh failed, keeping previous names");
				return Err(e);
			}
		};

		self.names.clear();
		self.names.extend(apps.into_iter().map(|app| (app.id, app.name)));
		info!(entries = self.names.len(), "catalog refreshed");
		Ok(())
	}

	/// Display name for `id`, if the catalog knows it.
	pub fn name(&self, id: AppId) -> Option<&str> {
		self.names.get(&id).map(String::as_str)
	}

	pub fn insert(&mut self, id: AppId, name: impl Into<String>) -> Option<String> {
		self.names.insert(id, name.into())
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}

impl<N: Into<String>> FromIterator<(AppId, N)> for NameTable {
	fn from_iter<I: IntoIterator<Item = (AppId, N)>>(iter: I) -> Self {
		Self {
			names: iter.into_iter().map(|(id, name)| (id, name.into())).collect(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::FetchError;

	struct Unavailable;

	impl CatalogSource for Unavailable {
		fn fetch_apps(&self) -> Result<Vec<CatalogApp>> {
			Err(FetchError::Status(503))
		}
	}

	#[test]
	fn refresh_replaces_previous_entries() {
		let mut table = NameTable::from_iter([(1, "Old"), (2, "Stale")]);
		let catalog = vec![CatalogApp::new(1, "New"), CatalogApp::new(3, "Added")];

		table.refresh(&catalog).unwrap();

		assert_eq!(table.name(1), Some("New"));
		assert_eq!(table.name(2), None);
		assert_eq!(table.name(3), Some("Added"));
		assert_eq!(table.len(), 2);
	}

	#[test]
	fn failed_refresh_keeps_table() {
		let mut table = NameTable::from_iter([(1, "A")]);
		let before = table.clone();

		let err = table.refresh(&Unavailable).unwrap_err();

		assert!(matches!(err, FetchError::Status(503)));
		assert_eq!(table, before);
	}

	#[test]
	fn later_duplicate_wins() {
		let mut table = NameTable::new();
		table
			.refresh(&[CatalogApp::new(7, "first"), CatalogApp::new(7, "second")][..])
			.unwrap();
		assert_eq!(table.name(7), Some("second"));
		assert_eq!(table.len(), 1);
	}
}
