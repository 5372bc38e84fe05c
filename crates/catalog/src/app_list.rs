//! Wire format of the `GetAppList` response.

use serde::Deserialize;

use crate::AppId;
use crate::error::Result;

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogApp {
	/// Numeric app identifier.
	#[serde(rename = "appid")]
	pub id: AppId,
	/// Canonical display name.
	pub name: String,
}

impl CatalogApp {
	pub fn new(id: AppId, name: impl Into<String>) -> Self {
		Self { id, name: name.into() }
	}
}

#[derive(Deserialize)]
struct Envelope {
	#[serde(rename = "applist", alias = "appList")]
	app_list: AppList,
}

#[derive(Deserialize)]
struct AppList {
	apps: Vec<CatalogApp>,
}

/// Decodes a `{"applist": {"apps": [...]}}` response body.
pub fn parse_app_list(body: &str) -> Result<Vec<CatalogApp>> {
	let envelope: Envelope = serde_json::from_str(body)?;
	Ok(envelope.app_list.apps)
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::FetchError;

	#[test]
	fn parses_envelope() {
		let body = r#"{"applist":{"apps":[{"appid":10,"name":"Counter-Strike"},{"appid":20,"name":"Team Fortress Classic"}]}}"#;
		assert_eq!(
			parse_app_list(body).unwrap(),
			vec![
				CatalogApp::new(10, "Counter-Strike"),
				CatalogApp::new(20, "Team Fortress Classic"),
			]
		);
	}

	#[test]
	fn accepts_camel_case_envelope() {
		let body = r#"{"appList":{"apps":[{"appid":440,"name":"Team Fortress 2"}]}}"#;
		assert_eq!(parse_app_list(body).unwrap(), vec![CatalogApp::new(440, "Team Fortress 2")]);
	}

	#[test]
	fn empty_catalog() {
		assert!(parse_app_list(r#"{"applist":{"apps":[]}}"#).unwrap().is_empty());
	}

	#[test]
	fn rejects_wrong_shape() {
		for body in [r#"{"apps":[]}"#, r#"{"applist":{"apps":[{"appid":"x","name":"y"}]}}"#, "not json"] {
			assert!(matches!(parse_app_list(body), Err(FetchError::Json(_))), "accepted {body}");
		}
	}
}
