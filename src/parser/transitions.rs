//! Structural extraction of the transition-function body.
//!
//! The body is a run of `(STATE,SYMBOL)=NEXTSTATE` entries with no required
//! separators between them.

use crate::core::TransitionTable;
use crate::parser::error::ParseError;
use crate::parser::lexer::{Cursor, TokenKind};
use tracing::debug;

struct Entry {
    from: String,
    symbol: String,
    to: String,
}

fn malformed(entry: usize, cursor: &Cursor, expected: impl Into<String>) -> ParseError {
    ParseError::MalformedTransition {
        entry,
        offset: cursor.offset(),
        expected: expected.into(),
        found: cursor.found(),
    }
}

fn ident(cursor: &mut Cursor) -> Option<String> {
    match cursor.peek().map(|t| &t.kind) {
        Some(TokenKind::Ident(name)) => {
            let name = name.clone();
            cursor.advance();
            Some(name)
        }
        _ => None,
    }
}

fn eat(cursor: &mut Cursor, kind: TokenKind) -> bool {
    if cursor.peek().is_some_and(|t| t.kind == kind) {
        cursor.advance();
        true
    } else {
        false
    }
}

/// Parse one entry; `number` is its 1-based position in the body.
fn entry(cursor: &mut Cursor, number: usize) -> Result<Entry, ParseError> {
    if !eat(cursor, TokenKind::LParen) {
        return Err(malformed(number, cursor, "'('"));
    }

    let key_offset = cursor.offset();
    let mut key = Vec::with_capacity(2);
    loop {
        let part = ident(cursor).ok_or_else(|| malformed(number, cursor, "a state or symbol"))?;
        key.push(part);
        if eat(cursor, TokenKind::RParen) {
            break;
        }
        if !eat(cursor, TokenKind::Comma) {
            return Err(malformed(number, cursor, "',' or ')'"));
        }
    }

    let [from, symbol]: [String; 2] = key.try_into().map_err(|parts: Vec<String>| {
        ParseError::MalformedTransition {
            entry: number,
            offset: key_offset,
            expected: "a (state,symbol) pair".to_string(),
            found: format!("{} key part(s)", parts.len()),
        }
    })?;

    if !eat(cursor, TokenKind::Equals) {
        return Err(malformed(number, cursor, "'=' followed by the next state"));
    }
    let to = ident(cursor).ok_or_else(|| malformed(number, cursor, "the next state"))?;

    Ok(Entry {
        from,
        symbol,
        to,
    })
}

/// Parse a transition-function body into a [`TransitionTable`].
///
/// Entries are inserted in document order; a repeated `(state, symbol)` key
/// overwrites the earlier target.
///
/// # Example
///
/// ```rust
/// use dfa_sim::parser::parse_transition_table;
///
/// let table = parse_transition_table("(q0,a)=q1(q1,b)=q1\n(q0,a)=q0").unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get("q0", "a"), Some("q0"));
/// ```
pub fn parse_transition_table(body: &str) -> Result<TransitionTable, ParseError> {
    let mut cursor = Cursor::new(body);
    let mut table = TransitionTable::new();
    let mut entries = 0;

    while !cursor.is_at_end() {
        entries += 1;
        let Entry { from, symbol, to } = entry(&mut cursor, entries)?;
        if let Some(previous) = table.insert(from, symbol, to) {
            debug!(entry = entries, previous = %previous, "transition overwritten");
        }
    }

    debug!(entries, transitions = table.len(), "transition table parsed");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expect_malformed(body: &str) -> (usize, usize, String, String) {
        match parse_transition_table(body) {
            Err(ParseError::MalformedTransition {
                entry,
                offset,
                expected,
                found,
            }) => (entry, offset, expected, found),
            other => panic!("expected MalformedTransition for {body:?}, got {other:?}"),
        }
    }

    #[test]
    fn parses_concatenated_entries_in_order() {
        let table = parse_transition_table("(q0,a)=q1(q1,b)=q1(q1,a)=q0").unwrap();
        assert_eq!(table.render(), "(q0,a)=q1\n(q1,b)=q1\n(q1,a)=q0\n");
    }

    #[test]
    fn empty_body_is_empty_table() {
        assert!(parse_transition_table("").unwrap().is_empty());
        assert!(parse_transition_table("  \n ").unwrap().is_empty());
    }

    #[test]
    fn last_duplicate_wins() {
        let table = parse_transition_table("(q0,a)=q1(q0,b)=q0(q0,a)=q2").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("q0", "a"), Some("q2"));
        assert_eq!(table.render(), "(q0,a)=q2\n(q0,b)=q0\n");
    }

    #[test]
    fn missing_next_state_is_malformed() {
        let (entry, _, expected, found) = expect_malformed("(q0,a)=q1(q1,b)");
        assert_eq!(entry, 2);
        assert_eq!(expected, "'=' followed by the next state");
        assert_eq!(found, "end of input");
    }

    #[test]
    fn dangling_equals_is_malformed() {
        let (entry, _, expected, _) = expect_malformed("(q0,a)=");
        assert_eq!(entry, 1);
        assert_eq!(expected, "the next state");
    }

    #[test]
    fn single_part_key_is_malformed() {
        let (entry, offset, expected, found) = expect_malformed("(q0,a)=q1(q1)=q0");
        assert_eq!(entry, 2);
        assert_eq!(offset, 10);
        assert_eq!(expected, "a (state,symbol) pair");
        assert_eq!(found, "1 key part(s)");
    }

    #[test]
    fn three_part_key_is_malformed() {
        let (_, _, _, found) = expect_malformed("(q0,a,b)=q1");
        assert_eq!(found, "3 key part(s)");
    }

    #[test]
    fn stray_token_between_entries_is_malformed() {
        let (entry, _, expected, found) = expect_malformed("(q0,a)=q1 q2 (q1,b)=q1");
        assert_eq!(entry, 2);
        assert_eq!(expected, "'('");
        assert_eq!(found, "identifier 'q2'");
    }
}
