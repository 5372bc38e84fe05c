//! Tagged game library for steamcat.
//!
//! Reads the Steam client's per-user `sharedconfig.vdf`, pairs every owned app
//! with the tags the user gave it and the display name from the public
//! catalog, and answers simple questions about the result:
//!
//! ```no_run
//! use steamcat::{HttpCatalog, generate_library_from, random_from};
//!
//! let built = generate_library_from("sharedconfig.vdf", &HttpCatalog::default())?;
//! let arcade = built.library.tagged_with("Arcade");
//! if let Ok(game) = random_from(&arcade) {
//!     println!("play {} ({})", game.name(), game.id());
//! }
//! # Ok::<(), steamcat::LoadError>(())
//! ```
//!
//! Decoding lives in [`steamcat_vdf`], catalog fetching in
//! [`steamcat_catalog`]; this crate joins the two and owns the query layer.

pub mod build;
pub mod error;
mod game;
mod library;
mod query;

use std::path::Path;

pub use build::{APPS_PATH, BuiltLibrary, TAGS_KEY};
pub use error::{Actual, BuildError, BuildWarning, EmptyLibraryError, LoadError};
pub use game::GameRecord;
pub use library::Library;
pub use query::{random_from, random_from_with};
pub use steamcat_catalog::{AppId, CatalogApp, CatalogConfig, CatalogSource, FetchError, HttpCatalog, NameTable};

/// Decodes the config file at `path` and builds a library against `names`.
pub fn load_library(path: impl AsRef<Path>, names: &NameTable) -> Result<BuiltLibrary, LoadError> {
	let tree = steamcat_vdf::decode_file(path)?;
	Ok(Library::build(&tree, names)?)
}

/// Refreshes a fresh name table from `source`, then loads the library.
///
/// A failed refresh is not fatal: every record is built with an empty name
/// and the failure leads the returned warnings as
/// [`BuildWarning::CatalogUnavailable`].
pub fn generate_library_from<S>(path: impl AsRef<Path>, source: &S) -> Result<BuiltLibrary, LoadError>
where
	S: CatalogSource + ?Sized,
{
	let mut names = NameTable::new();
	let refreshed = names.refresh(source);
	let mut built = load_library(path, &names)?;
	if let Err(error) = refreshed {
		built.warnings.insert(0, BuildWarning::CatalogUnavailable {
			reason: error.to_string(),
		});
	}
	Ok(built)
}
