//! Blocking HTTP source for the catalog.

use std::time::Duration;

use tracing::debug;
use ureq::Agent;

use crate::app_list::{CatalogApp, parse_app_list};
use crate::error::{FetchError, Result};
use crate::table::CatalogSource;

/// Public Steam Web API endpoint listing every app.
pub const DEFAULT_ENDPOINT: &str = "https://api.steampowered.com/ISteamApps/GetAppList/v2/";

/// Upper bound for one request, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The full catalog is tens of megabytes; larger bodies are refused.
pub const DEFAULT_BODY_LIMIT: u64 = 64 * 1024 * 1024;

/// Connection settings for [`HttpCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
	/// URL answering with the `applist` JSON document.
	pub endpoint: String,
	/// Global timeout covering the whole request.
	pub timeout: Duration,
	/// Maximum accepted response size in bytes.
	pub body_limit: u64,
}

impl Default for CatalogConfig {
	fn default() -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_string(),
			timeout: DEFAULT_TIMEOUT,
			body_limit: DEFAULT_BODY_LIMIT,
		}
	}
}

/// Fetches the catalog over HTTP with a bounded timeout.
#[derive(Debug)]
pub struct HttpCatalog {
	agent: Agent,
	config: CatalogConfig,
}

impl HttpCatalog {
	pub fn new(config: CatalogConfig) -> Self {
		let agent_config = Agent::config_builder().timeout_global(Some(config.timeout)).build();
		Self {
			agent: Agent::new_with_config(agent_config),
			config,
		}
	}

	pub fn config(&self) -> &CatalogConfig {
		&self.config
	}

	fn fetch_body(&self) -> Result<String> {
		debug!(endpoint = %self.config.endpoint, timeout = ?self.config.timeout, "requesting catalog");

		let mut response = self
			.agent
			.get(self.config.endpoint.as_str())
			.call()
			.map_err(|e| match e {
				ureq::Error::StatusCode(code) => FetchError::Status(code),
				other => FetchError::Transport(other),
			})?;

		response
			.body_mut()
			.with_config()
			.limit(self.config.body_limit)
			.read_to_string()
			.map_err(FetchError::Body)
	}
}

impl Default for HttpCatalog {
	fn default() -> Self {
		Self::new(CatalogConfig::default())
	}
}

impl CatalogSource for HttpCatalog {
	fn fetch_apps(&self) -> Result<Vec<CatalogApp>> {
		let body = self.fetch_body()?;
		let apps = parse_app_list(&body)?;
		debug!(apps = apps.len(), bytes = body.len(), "catalog decoded");
		Ok(apps)
	}
}
