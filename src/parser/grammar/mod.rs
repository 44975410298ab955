//! Grammar for the scripting language
//!
//! This module contains all the parsing rules organized by category:
//! - `literal`: identifiers, numbers and strings
//! - `comment`: line and block comments
//! - `expression`: expression forms (infix operations, chains, literals, ...)
//! - `statement`: statements (functions, declarations, control flow, ...)

mod comment;
mod expression;
mod literal;
mod statement;

use log::debug;

use crate::ast::Program;

use super::combinators::{BoxedParser, eof, skip_space};
use super::error::ParseResult;
use super::state::{ParseState, Parser};

pub use comment::comment;
pub use expression::{chain, expression, infix_op};
pub use literal::{ident, number, string_literal};
pub use statement::{block, function, statement, statements};

/// program := statement* end_of_input
///
/// A statement that fails after consuming input reports its own error. A
/// statement that cannot even start leaves the end-of-input check to report
/// the first unconsumed character.
pub fn program() -> BoxedParser<Program> {
    skip_space() * statements() - eof() >> Program::new
}

/// Parse a complete source text
pub fn parse(state: &mut ParseState) -> ParseResult<Program> {
    debug!("parsing {} bytes", state.input().len());
    program().parse(state).inspect_err(|err| debug!("parse failed: {err}"))
}
