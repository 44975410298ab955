use super::diagnostics::{column_number, line_number};
use super::error::{ErrorKind, ParseError, ParseResult};

/// The cursor: the full source text and the current read position.
///
/// The position is a byte offset that always sits on a character boundary.
/// It only moves forward, except through [`ParseState::restore`].
pub struct ParseState {
    input: String,
    position: usize,
}

impl ParseState {
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            position: 0,
        }
    }

    /// The full source text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The text that has not been consumed yet.
    pub fn remaining(&self) -> &str {
        &self.input[self.position..]
    }

    /// Up to `n` characters from the current position, without advancing.
    pub fn peek(&self, n: usize) -> &str {
        let rest = self.remaining();
        &rest[..prefix_len(rest, n)]
    }

    /// The next character, if any.
    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Up to `n` characters from the current position, advancing past them.
    pub fn consume(&mut self, n: usize) -> String {
        let len = prefix_len(self.remaining(), n);
        let start = self.position;
        self.position += len;
        self.input[start..self.position].to_string()
    }

    pub fn has_next(&self) -> bool {
        self.position < self.input.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Move back to a checkpoint taken with [`ParseState::position`].
    pub fn restore(&mut self, position: usize) {
        debug_assert!(position <= self.position, "restore may only move backwards");
        self.position = position;
    }

    /// Build an error located at the current position.
    pub fn error(
        &self,
        kind: ErrorKind,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> ParseError {
        self.error_at(self.position, kind, expected, found)
    }

    /// Build an error located at an earlier checkpoint.
    pub fn error_at(
        &self,
        offset: usize,
        kind: ErrorKind,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> ParseError {
        ParseError {
            kind,
            expected: expected.into(),
            found: found.into(),
            offset,
            line: line_number(&self.input, offset),
            column: column_number(&self.input, offset),
            committed: false,
        }
    }
}

/// Byte length of the first `n` characters of `text` (or all of it).
fn prefix_len(text: &str, n: usize) -> usize {
    text.char_indices().nth(n).map_or(text.len(), |(idx, _)| idx)
}

pub trait Parser<T>: Sized {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T>;
}

// Allow closures to be parsers
impl<T, F: Fn(&mut ParseState) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        self(state)
    }
}
