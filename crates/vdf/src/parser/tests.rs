use pretty_assertions::assert_eq;
use rstest::rstest;

use super::*;

fn mapping<const N: usize>(pairs: [(&str, Node); N]) -> Node {
	Node::Mapping(Mapping::from_iter(pairs))
}

fn scalar(value: &str) -> Node {
	Node::from(value)
}

fn syntax_error(input: &str) -> (usize, usize, String) {
	match decode_str(input) {
		Err(DecodeError::Syntax { line, column, message }) => (line, column, message),
		other => panic!("expected syntax error, got {other:?}"),
	}
}

#[test]
fn decodes_nested_blocks() {
	let input = r#"
"UserRoamingConfigStore"
{
	"Software"
	{
		"apps"
		{
			"10"
			{
				"tags"
				{
					"0"		"Action"
					"1"		"Classic"
				}
			}
			"20"
			{
			}
		}
	}
}
"#;
	let expected = mapping([(
		"UserRoamingConfigStore",
		mapping([(
			"Software",
			mapping([(
				"apps",
				mapping([
					(
						"10",
						mapping([("tags", mapping([("0", scalar("Action")), ("1", scalar("Classic"))]))]),
					),
					("20", mapping([])),
				]),
			)]),
		)]),
	)]);

	assert_eq!(decode_str(input).unwrap(), expected);
}

#[test]
fn empty_input_is_empty_mapping() {
	assert_eq!(decode_str("").unwrap(), mapping([]));
	assert_eq!(decode_str("  // only a comment\n").unwrap(), mapping([]));
}

#[test]
fn comments_and_bare_tokens() {
	let input = "// header\nroot {\n\tbare value // trailing\n\t\"quoted\" \"with space\"\n}\n";
	let expected = mapping([(
		"root",
		mapping([("bare", scalar("value")), ("quoted", scalar("with space"))]),
	)]);
	assert_eq!(decode_str(input).unwrap(), expected);
}

#[test]
fn bare_tokens_stop_at_braces() {
	assert_eq!(
		decode_str("a{b c}").unwrap(),
		mapping([("a", mapping([("b", scalar("c"))]))])
	);
}

#[test]
fn escapes_are_resolved() {
	let root = decode_str(r#""k" "a\"b\\c\nd\te\q""#).unwrap();
	assert_eq!(root.path(&["k"]), Some(&scalar("a\"b\\c\nd\te\\q")));
}

#[test]
fn conditions_are_ignored() {
	let input = "\"k\" \"v\" [$WIN32]\n\"block\" [$OSX] { \"x\" \"y\" }";
	assert_eq!(
		decode_str(input).unwrap(),
		mapping([("k", scalar("v")), ("block", mapping([("x", scalar("y"))]))])
	);
}

#[test]
fn duplicate_keys_keep_first_position_and_last_value() {
	let root = decode_str(r#""a" "1" "b" "2" "a" "3""#).unwrap();
	let block = root.as_mapping().unwrap();
	assert_eq!(block.keys().collect::<Vec<_>>(), ["a", "b"]);
	assert_eq!(block.get("a"), Some(&scalar("3")));
}

#[test]
fn byte_order_mark_is_skipped() {
	assert_eq!(decode_str("\u{feff}\"a\" \"1\"").unwrap(), mapping([("a", scalar("1"))]));
}

#[test]
fn non_ascii_text_survives() {
	let root = decode_str("\"name\" \"ポータル 2\"").unwrap();
	assert_eq!(root.path(&["name"]).and_then(Node::as_scalar), Some("ポータル 2"));
}

#[rstest]
#[case::unterminated_string("\"a\" \"unterminated", 1, 5, "unterminated quoted string")]
#[case::stray_close("}", 1, 1, "unexpected '}'")]
#[case::unclosed_block("\"a\" {\n \"b\" \"c\"\n", 3, 1, "opened at 1:5")]
#[case::key_at_end("\"a\"", 1, 4, "has no value")]
#[case::key_before_close("\"a\" }", 1, 5, "has no value")]
#[case::open_without_key("{ }", 1, 1, "expected key, found '{'")]
#[case::unterminated_condition("\"a\" \"b\" [$WIN32", 1, 9, "unterminated condition")]
fn reports_positioned_errors(#[case] input: &str, #[case] line: usize, #[case] column: usize, #[case] needle: &str) {
	let (got_line, got_column, message) = syntax_error(input);
	assert_eq!((got_line, got_column), (line, column), "message: {message}");
	assert!(message.contains(needle), "{message:?} does not contain {needle:?}");
}

#[test]
fn nesting_limit() {
	let nested = |levels: usize| "a {".repeat(levels) + &"}".repeat(levels);

	assert!(decode_str(&nested(MAX_DEPTH)).is_ok());

	let (_, _, message) = syntax_error(&nested(MAX_DEPTH + 1));
	assert!(message.contains("nested deeper"));
}
