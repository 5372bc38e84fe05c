//! Locates `sharedconfig.vdf` in a local Steam install.
//!
//! The client keeps one `userdata/<account id>` directory per account that has
//! signed in; the tag store for each lives at `7/remote/sharedconfig.vdf`.

use std::fs;
use std::path::{Path, PathBuf};

/// Likely Steam install roots for the current user.
pub fn steam_roots() -> Vec<PathBuf> {
	let mut roots = Vec::new();
	if let Some(home) = dirs::home_dir() {
		roots.push(home.join(".steam").join("steam"));
	}
	if let Some(data) = dirs::data_dir() {
		roots.push(data.join("Steam"));
	}
	roots
}

/// Every `sharedconfig.vdf` under `steam_root`, sorted by path.
pub fn shared_configs(steam_root: &Path) -> Vec<PathBuf> {
	let Ok(entries) = fs::read_dir(steam_root.join("userdata")) else {
		return Vec::new();
	};

	let mut found: Vec<_> = entries
		.flatten()
		.map(|entry| entry.path().join("7").join("remote").join("sharedconfig.vdf"))
		.filter(|path| path.is_file())
		.collect();
	found.sort();
	found
}

/// First `sharedconfig.vdf` found across [`steam_roots`].
pub fn discover_shared_config() -> Option<PathBuf> {
	let path = steam_roots().iter().flat_map(|root| shared_configs(root)).next()?;
	tracing::debug!(path = %path.display(), "discovered sharedconfig.vdf");
	Some(path)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn touch_config(root: &Path, account: &str) -> PathBuf {
		let dir = root.join("userdata").join(account).join("7").join("remote");
		fs::create_dir_all(&dir).unwrap();
		let path = dir.join("sharedconfig.vdf");
		fs::write(&path, "\"UserRoamingConfigStore\" { }").unwrap();
		path
	}

	#[test]
	fn finds_configs_sorted() {
		let root = tempfile::tempdir().unwrap();
		let second = touch_config(root.path(), "222");
		let first = touch_config(root.path(), "111");
		fs::create_dir_all(root.path().join("userdata").join("333")).unwrap();

		assert_eq!(shared_configs(root.path()), vec![first, second]);
	}

	#[test]
	fn missing_userdata_is_empty() {
		let root = tempfile::tempdir().unwrap();
		assert!(shared_configs(root.path()).is_empty());
	}
}
