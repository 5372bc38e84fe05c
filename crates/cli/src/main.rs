//! steamcat binary.
//!
//! Loads the local `sharedconfig.vdf`, resolves names through the public app
//! catalog (unless `--offline`), and answers list / random / tags queries.

mod cli;
mod commands;
mod discover;
mod settings;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command};
use settings::Settings;
use steamcat::{HttpCatalog, Library, NameTable, load_library, random_from};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	// Logs go to stderr so stdout stays pipeable.
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	let settings = match cli.settings.clone().or_else(Settings::default_path) {
		Some(path) => Settings::load(&path)?,
		None => Settings::default(),
	};

	let path = resolve_library_file(&cli, &settings)?;
	info!(path = %path.display(), "loading library");

	let mut names = NameTable::new();
	if cli.offline {
		info!("offline: skipping catalog download");
	} else {
		let catalog = HttpCatalog::new(settings.catalog_config(cli.endpoint.clone(), cli.timeout));
		if names.refresh(&catalog).is_err() {
			warn!("continuing without catalog names");
		}
	}

	let built = load_library(&path, &names).with_context(|| format!("failed to load {}", path.display()))?;
	if !built.warnings.is_empty() {
		warn!(count = built.warnings.len(), "some library entries were malformed");
	}

	let mut out = io::stdout().lock();
	match cli.command {
		Command::List { tag, sort } => {
			let library = filter_by(built.library, tag.as_deref());
			let library = if sort { library.sorted_by_id() } else { library };
			commands::list(&library, &mut out)?;
		}
		Command::Random { tag } => {
			let library = filter_by(built.library, tag.as_deref());
			let game = random_from(&library).with_context(|| match &tag {
				Some(tag) => format!("no games tagged \"{tag}\""),
				None => "the library is empty".to_string(),
			})?;
			commands::write_game(game, &mut out)?;
		}
		Command::Tags => commands::tags(&built.library, &mut out)?,
	}

	Ok(())
}

/// `--file`, then the settings file, then the local Steam install.
fn resolve_library_file(cli: &Cli, settings: &Settings) -> anyhow::Result<PathBuf> {
	cli.file
		.clone()
		.or_else(|| settings.library_file.clone())
		.or_else(discover::discover_shared_config)
		.context("no sharedconfig.vdf given and none found in the Steam install; pass --file")
}

fn filter_by(library: Library, tag: Option<&str>) -> Library {
	match tag {
		Some(tag) => library.tagged_with(tag),
		None => library,
	}
}
