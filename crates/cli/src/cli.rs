//! CLI schema for the steamcat binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "steamcat")]
#[command(about = "Query your Steam library by the tags you gave your games")]
#[command(version)]
pub struct Cli {
	/// Path to sharedconfig.vdf (default: settings file, then the local Steam install)
	#[arg(short, long, value_name = "PATH", global = true)]
	pub file: Option<PathBuf>,

	/// Settings file (default: $XDG_CONFIG_HOME/steamcat/config.toml)
	#[arg(long, value_name = "PATH", global = true)]
	pub settings: Option<PathBuf>,

	/// Skip the catalog download; game names stay empty
	#[arg(long, global = true)]
	pub offline: bool,

	/// Catalog endpoint URL
	#[arg(long, value_name = "URL", global = true)]
	pub endpoint: Option<String>,

	/// Catalog request timeout in seconds
	#[arg(long, value_name = "SECS", global = true, value_parser = clap::value_parser!(u64).range(1..))]
	pub timeout: Option<u64>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
	/// List games, optionally only those carrying a tag
	List {
		/// Only games with this exact tag
		#[arg(short, long)]
		tag: Option<String>,

		/// Order by app id instead of config order
		#[arg(long)]
		sort: bool,
	},
	/// Print one game picked at random
	Random {
		/// Pick among games with this exact tag
		#[arg(short, long)]
		tag: Option<String>,
	},
	/// Print every tag with the number of games carrying it
	Tags,
}
