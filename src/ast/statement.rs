use super::Function;
use super::expression::Expression;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Comment(Comment),
    Function(Function),
    VarDecl(VarDecl),
    Assign(Assign),
    Return(Return),
    Throw(Throw),
    TryCatch(TryCatch),
    If(If),
    While(While),
    Expression(Expression),
}

/// A line (`// ...`) or block (`/* ... */`) comment, without its delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub content: String,
}

/// `var a, b;` / `let a;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    pub names: Vec<String>,
}

/// `[var|let] target = value, target = value;`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assign {
    pub assigns: Vec<Assignment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: Expression,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Return {
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throw {
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TryCatch {
    pub try_block: Vec<Statement>,
    pub catch_arg: Option<String>,
    pub catch_block: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    pub condition: Expression,
    pub then_block: Vec<Statement>,
    pub else_block: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct While {
    pub condition: Expression,
    pub body: Vec<Statement>,
}
