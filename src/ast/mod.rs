//! Abstract syntax tree produced by the parser
//!
//! The tree is split the same way the grammar is: [`statement`] holds the
//! statement forms, [`expression`] the expression forms. Every node owns its
//! children; nothing is shared and nothing is mutated after construction.

pub mod expression;
pub mod statement;

use statement::Statement;

/// A whole source file: the top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// A function, usable both as a statement and as an expression.
///
/// `function foo(a, b) { ... }` and `function(a, b) { ... }` are both valid;
/// the latter has no name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    pub name: Option<String>,
    pub params: Vec<String>,
    pub body: Vec<Statement>,
}
