//! Remote app catalog for steamcat.
//!
//! The local client config only knows app identifiers. Display names come
//! from Valve's public `GetAppList` endpoint, which returns every app in one
//! response:
//!
//! ```json
//! { "applist": { "apps": [ { "appid": 440, "name": "Team Fortress 2" } ] } }
//! ```
//!
//! [`NameTable::refresh`] pulls that document through a [`CatalogSource`]
//! ([`HttpCatalog`] in production) and rebuilds the id to name table the
//! library builder joins against.

pub mod error;
mod app_list;
mod http;
mod table;

pub use app_list::{CatalogApp, parse_app_list};
pub use error::{FetchError, Result};
pub use http::{CatalogConfig, DEFAULT_BODY_LIMIT, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, HttpCatalog};
pub use table::{CatalogSource, NameTable};

/// Numeric app identifier shared by the catalog and the local config.
pub type AppId = u32;
