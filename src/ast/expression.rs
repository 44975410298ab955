use std::fmt;

use super::Function;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(Number),
    String(StringLiteral),
    Array(Array),
    Object(Object),
    Not(Not),
    Variable(Variable),
    New(New),
    Chain(Chain),
    InfixOp(InfixOp),
    Function(Function),
}

impl Expression {
    pub fn number(value: u64) -> Self {
        Expression::Number(Number { value })
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expression::String(StringLiteral {
            value: value.into(),
        })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(Variable { name: name.into() })
    }

    pub fn infix(op: InfixOperator, left: Expression, right: Expression) -> Self {
        Expression::InfixOp(InfixOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    pub value: u64,
}

/// String literal with the escaped quote already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array {
    pub elements: Vec<Expression>,
}

/// Object literal. Entries keep source order and duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    pub entries: Vec<(String, Expression)>,
}

/// `!expr`, where `expr` is everything to the right of the `!`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Not {
    pub expr: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct New {
    pub object: Box<Expression>,
}

/// A base expression followed by at least one call, index or property suffix.
///
/// The parser never produces a chain with an empty `links` list; a base
/// without suffixes is returned as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub object: Box<Expression>,
    pub links: Vec<ChainLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainLink {
    Call(Vec<Expression>),
    Index(Expression),
    Property(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixOp {
    pub op: InfixOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    StrictEq,
    Eq,
    StrictNotEq,
    NotEq,
    AddAssign,
    Add,
    Sub,
    Mul,
    GtEq,
    LtEq,
    Lt,
    Gt,
    And,
    Or,
}

impl InfixOperator {
    /// All operators in the order the parser tries them. Longer symbols come
    /// before any symbol that is a prefix of them.
    pub const ALL: [InfixOperator; 14] = [
        InfixOperator::StrictEq,
        InfixOperator::Eq,
        InfixOperator::StrictNotEq,
        InfixOperator::NotEq,
        InfixOperator::AddAssign,
        InfixOperator::Add,
        InfixOperator::Sub,
        InfixOperator::Mul,
        InfixOperator::GtEq,
        InfixOperator::LtEq,
        InfixOperator::Lt,
        InfixOperator::Gt,
        InfixOperator::And,
        InfixOperator::Or,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            InfixOperator::StrictEq => "===",
            InfixOperator::Eq => "==",
            InfixOperator::StrictNotEq => "!==",
            InfixOperator::NotEq => "!=",
            InfixOperator::AddAssign => "+=",
            InfixOperator::Add => "+",
            InfixOperator::Sub => "-",
            InfixOperator::Mul => "*",
            InfixOperator::GtEq => ">=",
            InfixOperator::LtEq => "<=",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
            InfixOperator::And => "&&",
            InfixOperator::Or => "||",
        }
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
