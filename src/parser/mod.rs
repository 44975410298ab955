//! Scannerless backtracking parser
//!
//! - `state`: the cursor over the source text and the [`Parser`] trait
//! - `combinators`: primitive parsers and the generic combinators built on them
//! - `grammar`: one rule per syntactic form, composed from the combinators
//! - `error` / `diagnostics`: failures and their source locations

mod combinators;
mod diagnostics;
mod error;
mod grammar;
mod state;

pub use combinators::*;
pub use diagnostics::{column_number, line_number};
pub use error::{ErrorKind, ParseError, ParseResult};
pub use grammar::*;
pub use state::{ParseState, Parser};
