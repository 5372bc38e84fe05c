//! Optional user settings, read from TOML.
//!
//! ```toml
//! library_file = "/home/me/.steam/steam/userdata/1234/7/remote/sharedconfig.vdf"
//!
//! [catalog]
//! endpoint = "https://api.steampowered.com/ISteamApps/GetAppList/v2/"
//! timeout_secs = 30
//! ```

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;
use steamcat::CatalogConfig;

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
	/// Path to `sharedconfig.vdf`.
	pub library_file: Option<PathBuf>,
	/// Catalog connection overrides.
	pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogSettings {
	pub endpoint: Option<String>,
	pub timeout_secs: Option<u64>,
}

impl Settings {
	/// `$XDG_CONFIG_HOME/steamcat/config.toml` or the platform equivalent.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("steamcat").join("config.toml"))
	}

	pub fn parse(input: &str) -> Result<Self, toml::de::Error> {
		toml::from_str(input)
	}

	/// Loads settings from `path`. A missing file yields the defaults.
	pub fn load(path: &Path) -> anyhow::Result<Self> {
		match std::fs::read_to_string(path) {
			Ok(content) => Self::parse(&content).with_context(|| format!("invalid settings in {}", path.display())),
			Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
			Err(e) => Err(e).with_context(|| format!("failed to read settings {}", path.display())),
		}
	}

	/// Catalog settings with command-line overrides applied on top.
	///
	/// A zero timeout keeps the default.
	pub fn catalog_config(&self, endpoint: Option<String>, timeout_secs: Option<u64>) -> CatalogConfig {
		let mut config = CatalogConfig::default();
		if let Some(endpoint) = endpoint.or_else(|| self.catalog.endpoint.clone()) {
			config.endpoint = endpoint;
		}
		if let Some(secs) = timeout_secs.or(self.catalog.timeout_secs).filter(|&secs| secs > 0) {
			config.timeout = Duration::from_secs(secs);
		}
		config
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn parses_full_file() {
		let settings = Settings::parse(
			r#"
library_file = "/tmp/sharedconfig.vdf"

[catalog]
endpoint = "http://localhost:8080/apps"
timeout_secs = 5
"#,
		)
		.unwrap();

		assert_eq!(settings.library_file, Some(PathBuf::from("/tmp/sharedconfig.vdf")));
		assert_eq!(settings.catalog.endpoint.as_deref(), Some("http://localhost:8080/apps"));
		assert_eq!(settings.catalog.timeout_secs, Some(5));
	}

	#[test]
	fn empty_file_is_default() {
		assert_eq!(Settings::parse("").unwrap(), Settings::default());
	}

	#[test]
	fn unknown_keys_are_rejected() {
		assert!(Settings::parse("libary_file = \"typo\"").is_err());
	}

	#[test]
	fn missing_file_is_default() {
		let dir = tempfile::tempdir().unwrap();
		assert_eq!(Settings::load(&dir.path().join("config.toml")).unwrap(), Settings::default());
	}

	#[test]
	fn malformed_file_is_error() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("config.toml");
		std::fs::write(&path, "library_file = [").unwrap();

		let err = Settings::load(&path).unwrap_err();
		assert!(err.to_string().starts_with("invalid settings in"), "{err}");
	}

	#[test]
	fn flags_override_file() {
		let settings = Settings {
			library_file: None,
			catalog: CatalogSettings {
				endpoint: Some("http://file".into()),
				timeout_secs: Some(5),
			},
		};

		let from_file = settings.catalog_config(None, None);
		assert_eq!(from_file.endpoint, "http://file");
		assert_eq!(from_file.timeout, Duration::from_secs(5));

		let overridden = settings.catalog_config(Some("http://flag".into()), Some(9));
		assert_eq!(overridden.endpoint, "http://flag");
		assert_eq!(overridden.timeout, Duration::from_secs(9));

		assert_eq!(Settings::default().catalog_config(None, None), CatalogConfig::default());
	}

	#[test]
	fn zero_timeout_keeps_default() {
		let settings = Settings::parse("[catalog]\ntimeout_secs = 0\n").unwrap();
		assert_eq!(settings.catalog_config(None, None).timeout, CatalogConfig::default().timeout);
	}
}
