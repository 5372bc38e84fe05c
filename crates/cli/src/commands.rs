//! Plain-text output for each subcommand.
//!
//! Records print as `id<TAB>name<TAB>tag, tag`; an unresolved name prints empty.

use std::io::{self, Write};

use steamcat::{GameRecord, Library};

pub fn write_game(game: &GameRecord, out: &mut impl Write) -> io::Result<()> {
	writeln!(out, "{}\t{}\t{}", game.id(), game.name(), game.tags().join(", "))
}

pub fn list(library: &Library, out: &mut impl Write) -> io::Result<()> {
	for game in library {
		write_game(game, out)?;
	}
	Ok(())
}

/// One `count<TAB>tag` line per distinct tag, sorted by tag.
pub fn tags(library: &Library, out: &mut impl Write) -> io::Result<()> {
	for (tag, count) in library.tag_counts() {
		writeln!(out, "{count}\t{tag}")?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn sample() -> Library {
		Library::new(vec![
			GameRecord::new(1, "A", vec!["Arcade".into(), "Sports".into()]),
			GameRecord::new(3, "", vec![]),
			GameRecord::new(2, "B", vec!["Sports".into()]),
		])
	}

	fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
		let mut out = Vec::new();
		f(&mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	#[test]
	fn list_prints_tab_separated_rows() {
		assert_eq!(
			render(|out| list(&sample(), out)),
			"1\tA\tArcade, Sports\n3\t\t\n2\tB\tSports\n"
		);
	}

	#[test]
	fn tags_prints_counts() {
		assert_eq!(render(|out| tags(&sample(), out)), "1\tArcade\n2\tSports\n");
	}
}
