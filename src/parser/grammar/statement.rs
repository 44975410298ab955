//! Statement parsers

use log::trace;

use crate::ast::Function;
use crate::ast::expression::Expression;
use crate::ast::statement::{
    Assign, Assignment, If, Return, Statement, Throw, TryCatch, VarDecl, While,
};

use crate::parser::combinators::{
    BoxedParser, attempt, braces, choice, expect_comma, expect_equals, expect_semicolon, keyword,
    optional, parens, sep_by, sep_by1, spaced_keyword,
};
use crate::parser::state::{ParseState, Parser};

use super::comment::comment;
use super::expression::{chain, expression};
use super::literal::ident;

/// The statements between a pair of braces
type Block = Vec<Statement>;

/// statement := function | if | while | return | throw | try_catch | comment
///            | assign | var_decl | expression ";"
///
/// Keyword forms come first so that `if`, `while`, ... are never read as
/// plain identifiers.
pub fn statement() -> BoxedParser<Statement> {
    BoxedParser::new(|state: &mut ParseState| {
        choice(vec![
            function() >> Statement::Function,
            if_statement(),
            while_statement(),
            return_statement(),
            throw_statement(),
            try_catch(),
            comment() >> Statement::Comment,
            attempt(assign()),
            attempt(var_decl()),
            attempt(expression_statement()),
        ])
        .parse(state)
    })
}

/// statement*
///
/// Stops at the first statement that cannot even start. A statement that
/// fails after consuming input fails the whole list with a committed error,
/// so the location of the real mistake survives every enclosing `attempt`.
pub fn statements() -> BoxedParser<Block> {
    let statement = statement();
    BoxedParser::new(move |state: &mut ParseState| {
        let mut statements = Vec::new();
        while state.has_next() {
            let pos = state.position();
            match statement.parse(state) {
                Ok(stmt) => {
                    trace!("statement at offset {pos}: {stmt:?}");
                    statements.push(stmt);
                }
                Err(err) if err.committed || state.position() != pos => {
                    return Err(err.commit());
                }
                Err(_) => {
                    state.restore(pos);
                    break;
                }
            }
        }
        Ok(statements)
    })
}

/// block := "{" statement* "}"
pub fn block() -> BoxedParser<Block> {
    braces(statements())
}

/// function := "function" ident? "(" (ident ("," ident)*)? ")" block
pub fn function() -> BoxedParser<Function> {
    let name = optional(ident());
    let params = parens(sep_by(expect_comma(), ident()));
    (keyword("function") * name + params + block())
        >> |((name, params), body): ((Option<String>, Vec<String>), Block)| Function {
            name,
            params,
            body,
        }
}

fn declaration_keyword() -> BoxedParser<String> {
    spaced_keyword("var") | spaced_keyword("let")
}

/// var_decl := ("var" | "let") ident ("," ident)* ";"
pub fn var_decl() -> BoxedParser<Statement> {
    (declaration_keyword() * sep_by1(expect_comma(), ident()) - expect_semicolon())
        >> |names| Statement::VarDecl(VarDecl { names })
}

/// assign := ("var" | "let")? chain "=" expression ("," chain "=" expression)* ";"
pub fn assign() -> BoxedParser<Statement> {
    let assignment = ((chain() - expect_equals()) + expression())
        >> |(target, value): (Expression, Expression)| Assignment { target, value };
    (optional(declaration_keyword()) * sep_by1(expect_comma(), assignment) - expect_semicolon())
        >> |assigns| Statement::Assign(Assign { assigns })
}

/// return := "return" expression? ";"
pub fn return_statement() -> BoxedParser<Statement> {
    (keyword("return") * optional(expression()) - expect_semicolon())
        >> |value| Statement::Return(Return { value })
}

/// throw := "throw" expression ";"
pub fn throw_statement() -> BoxedParser<Statement> {
    (keyword("throw") * expression() - expect_semicolon())
        >> |value| Statement::Throw(Throw { value })
}

/// try_catch := "try" block "catch" ("(" ident ")")? block
pub fn try_catch() -> BoxedParser<Statement> {
    let try_block = keyword("try") * block();
    let catch_arg = keyword("catch") * optional(parens(ident()));
    (try_block + catch_arg + block())
        >> |((try_block, catch_arg), catch_block): ((Block, Option<String>), Block)| {
            Statement::TryCatch(TryCatch {
                try_block,
                catch_arg,
                catch_block,
            })
        }
}

/// if := "if" "(" expression ")" block ("else" block)?
pub fn if_statement() -> BoxedParser<Statement> {
    let condition = keyword("if") * parens(expression());
    let else_block = optional(keyword("else") * block());
    (condition + block() + else_block)
        >> |((condition, then_block), else_block): ((Expression, Block), Option<Block>)| {
            Statement::If(If {
                condition,
                then_block,
                else_block,
            })
        }
}

/// while := "while" "(" expression ")" block
pub fn while_statement() -> BoxedParser<Statement> {
    (keyword("while") * parens(expression()) + block())
        >> |(condition, body): (Expression, Block)| {
            Statement::While(While { condition, body })
        }
}

/// expression_statement := expression ";"
pub fn expression_statement() -> BoxedParser<Statement> {
    (expression() - expect_semicolon()) >> Statement::Expression
}
