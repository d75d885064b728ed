//! Structural extraction of the descriptor line.
//!
//! `NAME=({S1,S2,...},{A1,A2,...},Prog,INIT,{F1,F2,...})`

use crate::core::Descriptor;
use crate::parser::error::ParseError;
use crate::parser::lexer::{Cursor, TokenKind};
use tracing::debug;

/// One comma-separated component inside the descriptor's parentheses.
#[derive(Debug)]
enum Component {
    Set(Vec<String>),
    Ident(String),
}

impl Component {
    fn describe(&self) -> String {
        match self {
            Self::Set(_) => "a set".to_string(),
            Self::Ident(name) => format!("identifier '{name}'"),
        }
    }
}

/// Components in order: states, alphabet, `Prog` placeholder, initial
/// state, final states.
const COMPONENTS: usize = 5;

fn malformed(
    offset: usize,
    expected: impl Into<String>,
    found: impl Into<String>,
) -> ParseError {
    ParseError::MalformedDescriptor {
        offset,
        expected: expected.into(),
        found: found.into(),
    }
}

fn expect(cursor: &mut Cursor, kind: TokenKind) -> Result<(), ParseError> {
    match cursor.peek() {
        Some(token) if token.kind == kind => {
            cursor.advance();
            Ok(())
        }
        _ => Err(malformed(cursor.offset(), kind.to_string(), cursor.found())),
    }
}

fn ident(cursor: &mut Cursor, what: &str) -> Result<String, ParseError> {
    match cursor.peek().map(|t| &t.kind) {
        Some(TokenKind::Ident(name)) => {
            let name = name.clone();
            cursor.advance();
            Ok(name)
        }
        _ => Err(malformed(cursor.offset(), what, cursor.found())),
    }
}

/// Items of a brace group; the opening brace is already consumed.
fn set_items(cursor: &mut Cursor) -> Result<Vec<String>, ParseError> {
    let mut items = Vec::new();
    if cursor.peek().is_some_and(|t| t.kind == TokenKind::RBrace) {
        cursor.advance();
        return Ok(items);
    }
    loop {
        items.push(ident(cursor, "a set member")?);
        match cursor.advance().map(|t| t.kind) {
            Some(TokenKind::Comma) => continue,
            Some(TokenKind::RBrace) => return Ok(items),
            Some(other) => {
                return Err(malformed(
                    cursor.offset(),
                    "',' or '}'",
                    other.to_string(),
                ))
            }
            None => return Err(malformed(cursor.offset(), "'}'", "end of input")),
        }
    }
}

fn component(cursor: &mut Cursor) -> Result<Component, ParseError> {
    if cursor.peek().is_some_and(|t| t.kind == TokenKind::LBrace) {
        cursor.advance();
        return set_items(cursor).map(Component::Set);
    }
    ident(cursor, "a set or an identifier").map(Component::Ident)
}

/// Component at `position` with the byte offset it started at.
type Located = (usize, Component);

fn expect_set(
    (offset, component): Located,
    position: usize,
    what: &str,
) -> Result<Vec<String>, ParseError> {
    match component {
        Component::Set(items) => Ok(items),
        other => Err(malformed(
            offset,
            format!("{what} at position {position}"),
            other.describe(),
        )),
    }
}

fn expect_ident(
    (offset, component): Located,
    position: usize,
    what: &str,
) -> Result<String, ParseError> {
    match component {
        Component::Ident(name) => Ok(name),
        other => Err(malformed(
            offset,
            format!("{what} at position {position}"),
            other.describe(),
        )),
    }
}

/// Parse a descriptor line into a [`Descriptor`].
///
/// Sets are taken as written; no member is checked against another set.
///
/// # Example
///
/// ```rust
/// use dfa_sim::parser::parse_descriptor;
///
/// let descriptor = parse_descriptor("M=({q0,q1},{a,b},Prog,q0,{q1})").unwrap();
/// assert_eq!(descriptor.name(), "M");
/// assert_eq!(descriptor.initial_state(), "q0");
/// assert!(descriptor.is_final("q1"));
///
/// assert!(parse_descriptor("M=({q0,q1},{a,b},Prog,q0)").is_err());
/// ```
pub fn parse_descriptor(line: &str) -> Result<Descriptor, ParseError> {
    let mut cursor = Cursor::new(line);

    let name = ident(&mut cursor, "automaton name")?;
    expect(&mut cursor, TokenKind::Equals)?;
    expect(&mut cursor, TokenKind::LParen)?;

    let mut components = Vec::with_capacity(COMPONENTS);
    loop {
        let offset = cursor.offset();
        components.push((offset, component(&mut cursor)?));
        match cursor.advance().map(|t| t.kind) {
            Some(TokenKind::Comma) => continue,
            Some(TokenKind::RParen) => break,
            Some(other) => {
                return Err(malformed(cursor.offset(), "',' or ')'", other.to_string()))
            }
            None => return Err(malformed(cursor.offset(), "')'", "end of input")),
        }
    }

    if !cursor.is_at_end() {
        return Err(malformed(cursor.offset(), "end of line", cursor.found()));
    }

    let end = cursor.offset();
    let [states, alphabet, placeholder, initial, finals]: [Located; COMPONENTS] =
        components.try_into().map_err(|found: Vec<Located>| {
            malformed(
                end,
                format!("{COMPONENTS} components (states, alphabet, Prog, initial, finals)"),
                format!("{} component(s)", found.len()),
            )
        })?;

    // positions count the name as 0
    let states = expect_set(states, 1, "state set")?;
    let alphabet = expect_set(alphabet, 2, "alphabet set")?;
    expect_ident(placeholder, 3, "program placeholder")?;
    let initial = expect_ident(initial, 4, "initial state")?;
    let finals = expect_set(finals, 5, "final state set")?;

    let descriptor = Descriptor::new(name, states, alphabet, initial, finals);
    debug!(
        name = descriptor.name(),
        states = descriptor.states().len(),
        symbols = descriptor.alphabet().len(),
        "descriptor parsed"
    );
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_malformed(line: &str) -> (usize, String, String) {
        match parse_descriptor(line) {
            Err(ParseError::MalformedDescriptor {
                offset,
                expected,
                found,
            }) => (offset, expected, found),
            other => panic!("expected MalformedDescriptor for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn extracts_all_fields_in_order() {
        let descriptor = parse_descriptor("Even=({q0,q1,q2},{a,b},Prog,q1,{q2,q0})").unwrap();

        assert_eq!(descriptor.name(), "Even");
        assert_eq!(
            descriptor.states().iter().collect::<Vec<_>>(),
            ["q0", "q1", "q2"]
        );
        assert_eq!(descriptor.alphabet().iter().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(descriptor.initial_state(), "q1");
        assert_eq!(
            descriptor.final_states().iter().collect::<Vec<_>>(),
            ["q2", "q0"]
        );
    }

    #[test]
    fn does_not_cross_validate_fields() {
        let descriptor = parse_descriptor("M=({q0},{a},Prog,q7,{q8})").unwrap();
        assert_eq!(descriptor.initial_state(), "q7");
        assert!(!descriptor.has_state("q7"));
    }

    #[test]
    fn tolerates_whitespace_and_carriage_return() {
        let descriptor = parse_descriptor(" M = ( {q0, q1} , {a} , Prog , q0 , {q1} )\r").unwrap();
        assert_eq!(descriptor.states().len(), 2);
        assert!(descriptor.is_final("q1"));
    }

    #[test]
    fn empty_braces_are_empty_sets() {
        let descriptor = parse_descriptor("M=({q0},{},Prog,q0,{})").unwrap();
        assert!(descriptor.alphabet().is_empty());
        assert!(descriptor.final_states().is_empty());
    }

    #[test]
    fn missing_final_group_is_malformed() {
        let (_, expected, found) = expect_malformed("M=({q0,q1},{a,b},Prog,q0)");
        assert!(expected.starts_with("5 components"));
        assert_eq!(found, "4 component(s)");
    }

    #[test]
    fn extra_component_is_malformed() {
        let (_, _, found) = expect_malformed("M=({q0},{a},Prog,q0,{q0},{q0})");
        assert_eq!(found, "6 component(s)");
    }

    #[test]
    fn missing_name_is_malformed() {
        let (offset, expected, found) = expect_malformed("=({q0},{a},Prog,q0,{q0})");
        assert_eq!(offset, 0);
        assert_eq!(expected, "automaton name");
        assert_eq!(found, "'='");
    }

    #[test]
    fn identifier_where_set_expected_is_malformed() {
        let (offset, expected, found) = expect_malformed("M=(q0,{a},Prog,q0,{q0})");
        assert_eq!(offset, 3);
        assert_eq!(expected, "state set at position 1");
        assert_eq!(found, "identifier 'q0'");
    }

    #[test]
    fn set_where_initial_state_expected_is_malformed() {
        let (_, expected, found) = expect_malformed("M=({q0},{a},Prog,{q0},{q0})");
        assert_eq!(expected, "initial state at position 4");
        assert_eq!(found, "a set");
    }

    #[test]
    fn unterminated_set_is_malformed() {
        let (_, expected, found) = expect_malformed("M=({q0,q1");
        assert_eq!(expected, "'}'");
        assert_eq!(found, "end of input");
    }

    #[test]
    fn trailing_tokens_are_malformed() {
        let (_, expected, _) = expect_malformed("M=({q0},{a},Prog,q0,{q0})x");
        assert_eq!(expected, "end of line");
    }

    #[test]
    fn blank_line_is_malformed() {
        let (offset, _, found) = expect_malformed("");
        assert_eq!(offset, 0);
        assert_eq!(found, "end of input");
    }
}
