//! # scriptparse - a scannerless parser for a small C-family scripting language
//!
//! The crate turns source text into a tree of [`ast::Statement`]s. There is
//! no separate tokenizer: grammar rules work directly on the characters of
//! the input through a cursor that can be rewound.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Cursor]        parser::ParseState: text, position, checkpoint/restore
//!     ↓
//! [Primitives]    string, token, keyword, satisfy, eof
//!     ↓
//! [Combinators]   optional, many, choice, attempt, between, sep_by
//!     ↓
//! [Grammar]       one rule per statement and expression form
//!     ↓
//! ast::Program
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Committed choice
//! Ordered alternation only moves on to the next alternative when the
//! previous one failed *without consuming input*. Rules that need to look
//! further ahead before giving up are wrapped in
//! [`parser::attempt`], which rewinds the cursor on failure. Whether a branch
//! consumed input is always read off the cursor position, never guessed.
//!
//! Errors that no alternative could recover from (a statement that broke
//! after it started, an oversized number) are marked committed and pass
//! through `attempt` untouched, so they are reported where they happen.
//!
//! ### No operator precedence
//! An infix operation is `operand operator expression`. The right-hand side
//! is a whole expression, so every operator associates to the right:
//! `a + b + c` is `a + (b + c)` and `a * b + c` is `a * (b + c)`.
//!
//! ### All or nothing
//! [`parse`] either returns the complete program or a single
//! [`parser::ParseError`] carrying what was expected, what was found, the
//! byte offset and the line number.
//!
//! ## Example
//!
//! ```
//! use scriptparse::ast::statement::Statement;
//!
//! let program = scriptparse::parse("var x;\nx = f(1, 2);").unwrap();
//! assert_eq!(program.len(), 2);
//! assert!(matches!(program.statements[0], Statement::VarDecl(_)));
//! ```

pub mod ast;
pub mod fmt;
pub mod parser;

use ast::Program;
use parser::{ParseError, ParseState};

/// Parse a complete source text into its top-level statements.
pub fn parse(text: &str) -> Result<Program, ParseError> {
    let mut state = ParseState::new(text);
    parser::parse(&mut state)
}
