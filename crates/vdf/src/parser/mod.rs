//! # Parser
//!
//! Recursive descent over KeyValues text. There is no separate lexer: tokens
//! are read straight off the input while tracking line and column for error
//! reporting.
//!
//! ## Supported Syntax
//!
//! ```text
//! document  = pair* EOF
//! pair      = key condition? ( block | value condition? )
//! block     = "{" pair* "}"
//! key       = token
//! value     = token
//! token     = quoted | bare
//! quoted    = '"' ( escape | any-but-quote )* '"'
//! escape    = "\" ( "n" | "t" | "\" | '"' )
//! bare      = ( any-but-whitespace-brace-quote )+
//! condition = "[" any-but-"]"* "]"
//! comment   = "//" any-but-newline*
//! ```
//!
//! Unknown escapes are kept verbatim, so unescaped Windows paths survive.
//! Conditions such as `[$WIN32]` are accepted and discarded.

use crate::error::{DecodeError, Result};
use crate::node::{Mapping, Node};

#[cfg(test)]
mod tests;

/// Blocks nested deeper than this are rejected instead of recursing further.
pub const MAX_DEPTH: usize = 256;

/// Maintains the parser's state for recursive descent parsing.
struct Parser<'a> {
	/// The remaining unparsed input.
	input: &'a str,
	/// 1-based line of the next character.
	line: usize,
	/// 1-based column of the next character.
	column: usize,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str) -> Self {
		Self {
			input,
			line: 1,
			column: 1,
		}
	}

	/// Peeks at the next character without consuming it.
	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	/// Consumes and returns the next character, advancing line and column.
	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.input = &self.input[ch.len_utf8()..];
		if ch == '\n' {
			self.line += 1;
			self.column = 1;
		} else {
			self.column += 1;
		}
		Some(ch)
	}

	/// Consumes characters while `predicate` holds.
	fn skip_while<F>(&mut self, predicate: F)
	where
		F: Fn(char) -> bool,
	{
		while self.peek().is_some_and(&predicate) {
			self.next();
		}
	}

	/// Consumes and returns characters that satisfy a predicate.
	fn take_while<F>(&mut self, predicate: F) -> String
	where
		F: Fn(char) -> bool,
	{
		let mut result = String::new();
		while let Some(ch) = self.peek() {
			if !predicate(ch) {
				break;
			}
			result.push(ch);
			self.next();
		}
		result
	}

	/// Skips whitespace and `//` line comments.
	fn skip_trivia(&mut self) {
		loop {
			self.skip_while(char::is_whitespace);
			if !self.input.starts_with("//") {
				return;
			}
			self.skip_while(|ch| ch != '\n');
		}
	}

	fn location(&self) -> (usize, usize) {
		(self.line, self.column)
	}

	/// Creates a syntax error at the current position.
	fn error(&self, message: impl Into<String>) -> DecodeError {
		DecodeError::syntax(self.line, self.column, message)
	}

	/// Parses pairs until end of input (`opened_at == None`) or the `}` closing
	/// the block opened at `opened_at`.
	fn parse_pairs(&mut self, opened_at: Option<(usize, usize)>, depth: usize) -> Result<Mapping> {
		let mut mapping = Mapping::new();
		loop {
			self.skip_trivia();
			match (self.peek(), opened_at) {
				(None, None) => return Ok(mapping),
				(None, Some((line, column))) => {
					return Err(self.error(format!("expected '}}' to close block opened at {line}:{column}, found end of input")));
				}
				(Some('}'), Some(_)) => {
					self.next();
					return Ok(mapping);
				}
				(Some('}'), None) => return Err(self.error("unexpected '}' with no open block")),
				(Some(_), _) => {
					let (key, value) = self.parse_pair(depth)?;
					mapping.insert(key, value);
				}
			}
		}
	}

	/// Parses `key value` or `key { ... }`.
	fn parse_pair(&mut self, depth: usize) -> Result<(String, Node)> {
		let key = self.parse_token("key")?;
		self.skip_trivia();
		self.skip_condition()?;

		let value = match self.peek() {
			Some('{') => {
				if depth >= MAX_DEPTH {
					return Err(self.error(format!("blocks nested deeper than {MAX_DEPTH} levels")));
				}
				let opened_at = self.location();
				self.next();
				Node::Mapping(self.parse_pairs(Some(opened_at), depth + 1)?)
			}
			Some('}') | None => return Err(self.error(format!("key \"{key}\" has no value"))),
			Some(_) => {
				let value = self.parse_token("value")?;
				self.skip_trivia();
				self.skip_condition()?;
				Node::Scalar(value)
			}
		};

		Ok((key, value))
	}

	/// Parses a quoted or bare token.
	fn parse_token(&mut self, what: &str) -> Result<String> {
		match self.peek() {
			Some('"') => self.parse_quoted(),
			Some(ch @ ('{' | '}')) => Err(self.error(format!("expected {what}, found '{ch}'"))),
			None => Err(self.error(format!("expected {what}, found end of input"))),
			Some(_) => Ok(self.take_while(|ch| !ch.is_whitespace() && !matches!(ch, '{' | '}' | '"'))),
		}
	}

	/// Parses a `"..."` string, resolving escapes.
	fn parse_quoted(&mut self) -> Result<String> {
		let (line, column) = self.location();
		self.next();

		let mut result = String::new();
		while let Some(ch) = self.next() {
			match ch {
				'"' => return Ok(result),
				'\\' => match self.next() {
					Some('n') => result.push('\n'),
					Some('t') => result.push('\t'),
					Some('\\') => result.push('\\'),
					Some('"') => result.push('"'),
					Some(other) => {
						result.push('\\');
						result.push(other);
					}
					None => break,
				},
				ch => result.push(ch),
			}
		}

		Err(DecodeError::syntax(line, column, "unterminated quoted string"))
	}

	/// Skips a `[$PLATFORM]` condition if one follows.
	fn skip_condition(&mut self) -> Result<()> {
		if self.peek() != Some('[') {
			return Ok(());
		}

		let (line, column) = self.location();
		self.skip_while(|ch| ch != ']' && ch != '\n');
		if self.next() != Some(']') {
			return Err(DecodeError::syntax(line, column, "unterminated condition"));
		}
		self.skip_trivia();
		Ok(())
	}
}

/// Decodes KeyValues text into a tree whose root is always a [`Node::Mapping`].
///
/// A leading byte-order mark is ignored.
///
/// # Errors
///
/// Returns [`DecodeError::Syntax`] with the 1-based line and column of the
/// first problem found.
///
/// # Examples
///
/// ```
/// use steamcat_vdf::{decode_str, Node};
///
/// let root = decode_str(r#""Steam" { "apps" { "10" { } } }"#).unwrap();
/// assert!(root.path(&["Steam", "apps", "10"]).is_some_and(|n| n.as_mapping().is_some()));
/// ```
pub fn decode_str(input: &str) -> Result<Node> {
	let input = input.strip_prefix('\u{feff}').unwrap_or(input);
	let mut parser = Parser::new(input);
	Ok(Node::Mapping(parser.parse_pairs(None, 0)?))
}
