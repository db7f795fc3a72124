//! End-to-end tests: small grammars driven through `Parser::run`.

use runescan::prelude::*;
use runescan::tree::Node;
use runescan::ScanConfig;

type Tree = Node<String>;
type Next = Option<State<Tree>>;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn root() -> Tree {
    Node::leaf("root".to_string())
}

// ---
// Digits: the smallest useful machine
// ---

fn digits(p: &mut Parser<'_, Tree>) -> Next {
    p.cursor.accept_run('0'..='9');
    let token = p.cursor.emit();
    p.tree.current_mut().add_child(Node::leaf(token.to_string()));
    None
}

#[test]
fn test_digits_stop_at_first_letter() {
    init_tracing();
    let mut parser = Parser::new("123abc", root());
    assert!(parser.run(State(digits)).is_ok());

    assert!(!parser.cursor.has_error());
    assert_eq!(parser.cursor.offset(), 3);
    assert_eq!(parser.cursor.peek(), Some('a'));

    let tree = parser.into_root();
    assert_eq!(tree.children(), &[Node::leaf("123".to_string())]);
}

#[test]
fn test_end_of_input_is_a_clean_stop() {
    let mut parser = Parser::new("42", root());
    assert!(parser.run(State(digits)).is_ok());
    assert!(parser.cursor.is_at_end());
}

// ---
// S-expressions: nesting through the builder stack
// ---

fn space(p: &mut Parser<'_, Tree>) -> Next {
    p.cursor.accept_run(" \t\n");
    p.cursor.discard();
    match p.cursor.peek() {
        None => None,
        Some('(') => State::next(open_list),
        Some(')') => State::next(close_list),
        Some(c) if c.is_alphanumeric() => State::next(atom),
        Some(c) => {
            fail!(p.cursor, "unexpected {:?}", c);
            None
        }
    }
}

fn open_list(p: &mut Parser<'_, Tree>) -> Next {
    p.cursor.read_rune();
    p.cursor.discard();
    p.tree.push(Node::leaf("list".to_string()));
    State::next(space)
}

fn close_list(p: &mut Parser<'_, Tree>) -> Next {
    if p.tree.depth() == 1 {
        fail!(p.cursor, "unbalanced ')'");
        return None;
    }
    p.cursor.read_rune();
    p.cursor.discard();
    p.tree.pop();
    State::next(space)
}

fn atom(p: &mut Parser<'_, Tree>) -> Next {
    p.cursor.accept_run(char::is_alphanumeric);
    let token = p.cursor.emit();
    p.tree.current_mut().add_child(Node::leaf(token.to_string()));
    State::next(space)
}

fn list(children: Vec<Tree>) -> Tree {
    Node::with_children("list".to_string(), children)
}

fn leaf(s: &str) -> Tree {
    Node::leaf(s.to_string())
}

#[test]
fn test_nested_lists_build_a_tree() {
    init_tracing();
    let tree = parse("(a (b c)\n d)", root(), State(space)).unwrap();
    let expected = Node::with_children(
        "root".to_string(),
        vec![list(vec![leaf("a"), list(vec![leaf("b"), leaf("c")]), leaf("d")])],
    );
    assert_eq!(tree, expected);
}

#[test]
fn test_sibling_lists_keep_order() {
    let tree = parse("(x) (y)", root(), State(space)).unwrap();
    let values: Vec<_> = tree.children().iter().map(|n| n.children()[0].value().as_str()).collect();
    assert_eq!(values, vec!["x", "y"]);
}

#[test]
fn test_unexpected_rune_is_reported() {
    init_tracing();
    let mut parser = Parser::new("(a\n  [b])", root());
    let error = parser.run(State(space)).unwrap_err();

    assert_eq!(error.line(), 2);
    assert_eq!(error.column(), 3);
    assert_eq!(error.message(), "unexpected '['");
    assert!(error.to_string().starts_with("Error in line 2 at position 3: unexpected '['\ncontext:\n"));

    // The diagnostic stays on the cursor after the run.
    assert!(parser.cursor.has_error());
    assert!(!parser.cursor.is_at_end());
    assert_eq!(parser.cursor.error().map(|e| e.offset()), Some(error.offset()));
}

#[test]
fn test_unbalanced_close_fails() {
    let error = parse("a)", root(), State(space)).unwrap_err();
    assert_eq!(error.message(), "unbalanced ')'");
    assert_eq!(error.column(), 2);
}

#[test]
fn test_unclosed_list_is_left_to_the_grammar() {
    let mut parser = Parser::new("(a (b", root());
    assert!(parser.run(State(space)).is_ok());
    assert_eq!(parser.tree.depth(), 3);
}

#[test]
fn test_source_name_from_config() {
    let config = ScanConfig::named("broken.lisp");
    let result = runescan::parse_with_config("(?", root(), State(space), config);
    let error = result.unwrap_err();
    let report = format!("{:?}", miette::Report::new(error));
    assert!(report.contains("broken.lisp"));
}

// ---
// Enum-of-states machines
// ---

/// Comma separated fields, one child per field.
#[derive(Debug, Clone, Copy)]
enum Csv {
    Field,
    Separator,
}

impl Transition<Tree> for Csv {
    fn step(self, p: &mut Parser<'_, Tree>) -> Option<Self> {
        match self {
            Csv::Field => {
                p.cursor.advance_until(",\n");
                let field = p.cursor.emit();
                p.tree.current_mut().add_child(Node::leaf(field.to_string()));
                Some(Csv::Separator)
            }
            Csv::Separator => match p.cursor.read_rune() {
                Some(',') => {
                    p.cursor.discard();
                    Some(Csv::Field)
                }
                _ => None,
            },
        }
    }
}

#[test]
fn test_enum_states() {
    let row = parse("a,bb,,c\nignored", root(), Csv::Field).unwrap();
    let fields: Vec<_> = row.children().iter().map(|n| n.value().as_str()).collect();
    assert_eq!(fields, vec!["a", "bb", "", "c"]);
}

// ---
// Long chains run in constant stack space
// ---

fn one_rune(p: &mut Parser<'_, Tree>) -> Next {
    p.cursor.read_rune();
    State::next(one_rune)
}

#[test]
fn test_long_state_chains_do_not_recurse() {
    let input = "x".repeat(200_000);
    let mut parser = Parser::new(&input, root());
    assert!(parser.run(State(one_rune)).is_ok());
    assert_eq!(parser.cursor.offset(), input.len());
    assert!(parser.cursor.is_at_end());
}

#[test]
fn test_state_returning_none_stops_without_halt() {
    fn stop(_: &mut Parser<'_, Tree>) -> Next {
        None
    }
    let mut parser = Parser::new("untouched", root());
    assert!(parser.run(State(stop)).is_ok());
    assert!(!parser.cursor.has_error());
    assert_eq!(parser.cursor.remaining(), "untouched");
}

// ---
// Prelude imports leave std methods alone
// ---

#[test]
fn test_prelude_does_not_shadow_std_contains() {
    let text = String::from("(a b)");
    assert!(text.contains("a b"));
    assert!(text.as_str().contains('('));

    let brackets = ['(', ')'];
    assert!(brackets.contains(&'('));
    assert!(!brackets.as_slice().contains(&'['));
}

// ---
// Partial trees
// ---

#[test]
fn test_partial_tree_survives_a_failed_run() {
    let mut parser = Parser::new("(a (b ]", root());
    assert!(parser.run(State(space)).is_err());

    // Both lists are still open, so the root has nothing attached yet.
    assert!(parser.root().is_empty());

    let tree = parser.into_root();
    let expected = Node::with_children(
        "root".to_string(),
        vec![list(vec![leaf("a"), list(vec![leaf("b")])])],
    );
    assert_eq!(tree, expected);
}
