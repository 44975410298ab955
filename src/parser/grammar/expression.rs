//! Expression parsers

use crate::ast::expression::{
    Array, Chain, ChainLink, Expression, InfixOp, InfixOperator, New, Not, Object,
};

use crate::parser::combinators::{
    BoxedParser, attempt, braces, brackets, choice, expect_bang, expect_colon, expect_comma,
    expect_dot, many, optional, parens, sep_by, sep_by_end, spaced_keyword, token,
};
use crate::parser::state::{ParseState, Parser};

use super::comment::comment;
use super::literal::{ident, number, string_expression, string_literal, variable};
use super::statement::function;

/// expression := new | operand (operator expression)? | object | not
///             | comment expression
///
/// An operand is parsed once and then extended into an infix operation when
/// an operator follows, so nested operands are never re-parsed.
pub fn expression() -> BoxedParser<Expression> {
    BoxedParser::new(|state: &mut ParseState| {
        choice(vec![
            new_expression(),
            operand_or_infix(),
            object(),
            not(),
            comment() * expression(),
        ])
        .parse(state)
    })
}

/// new := "new" whitespace expression
pub fn new_expression() -> BoxedParser<Expression> {
    spaced_keyword("new") * expression()
        >> |object| {
            Expression::New(New {
                object: Box::new(object),
            })
        }
}

/// not := "!" expression
pub fn not() -> BoxedParser<Expression> {
    expect_bang() * expression()
        >> |expr| {
            Expression::Not(Not {
                expr: Box::new(expr),
            })
        }
}

/// array := "[" (expression ("," expression)* ","?)? "]"
pub fn array() -> BoxedParser<Expression> {
    brackets(sep_by_end(expect_comma(), expression()))
        >> |elements| Expression::Array(Array { elements })
}

/// object := "{" (key ":" expression ("," key ":" expression)* ","?)? "}"
/// key := string | ident
pub fn object() -> BoxedParser<Expression> {
    let key = string_literal() | ident();
    let entry = (key - expect_colon()) + expression();
    braces(sep_by_end(expect_comma(), entry)) >> |entries| Expression::Object(Object { entries })
}

/// chain_link := "[" expression "]" | "(" arguments ")" | "." ident
fn chain_link() -> BoxedParser<ChainLink> {
    choice(vec![
        brackets(expression()) >> ChainLink::Index,
        parens(sep_by(expect_comma(), expression())) >> ChainLink::Call,
        expect_dot() * ident() >> ChainLink::Property,
    ])
}

/// chain := (variable | "(" expression ")") chain_link*
///
/// A base without any links is returned unchanged.
pub fn chain() -> BoxedParser<Expression> {
    let base = attempt(variable()) | parens(expression());
    (base + many(chain_link()))
        >> |(object, links): (Expression, Vec<ChainLink>)| {
            if links.is_empty() {
                object
            } else {
                Expression::Chain(Chain {
                    object: Box::new(object),
                    links,
                })
            }
        }
}

/// Everything an infix operation may start with; infix operations themselves
/// are excluded so the rule is not left-recursive. Variables and
/// parenthesised expressions are covered by `chain`, which returns a base
/// without links unchanged.
fn operand() -> BoxedParser<Expression> {
    choice(vec![
        function() >> Expression::Function,
        attempt(chain()),
        number(),
        string_expression(),
        array(),
    ])
}

fn infix_operator() -> BoxedParser<InfixOperator> {
    choice(
        InfixOperator::ALL
            .into_iter()
            .map(|op| token(op.symbol()) >> move |_| op)
            .collect(),
    )
}

/// The operator and right-hand side following an operand
fn infix_tail() -> BoxedParser<(InfixOperator, Expression)> {
    infix_operator() + expression()
}

fn infix(left: Expression, (op, right): (InfixOperator, Expression)) -> Expression {
    Expression::InfixOp(InfixOp {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// infix_op := operand operator expression
///
/// The right-hand side is a full expression, so `a + b + c` is `a + (b + c)`.
pub fn infix_op() -> BoxedParser<Expression> {
    (operand() + infix_tail())
        >> |(left, tail): (Expression, (InfixOperator, Expression))| infix(left, tail)
}

/// An operand, turned into an infix operation if an operator and a
/// right-hand side follow it
fn operand_or_infix() -> BoxedParser<Expression> {
    (operand() + optional(infix_tail()))
        >> |(left, tail): (Expression, Option<(InfixOperator, Expression)>)| match tail {
            Some(tail) => infix(left, tail),
            None => left,
        }
}
