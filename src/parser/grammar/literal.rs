//! Literal parsers: identifiers, numbers, strings

use crate::ast::expression::{Expression, Number, StringLiteral, Variable};

use crate::parser::combinators::{
    BoxedParser, between, choice, is_ident_char, is_ident_start, many, satisfy, satisfy1,
    skip_space, string, token,
};
use crate::parser::error::ErrorKind;
use crate::parser::state::{ParseState, Parser};

/// ident := [A-Za-z_] [A-Za-z0-9_]*
pub fn ident() -> BoxedParser<String> {
    let leading = satisfy1(is_ident_start, "alphabetical character or underscore");
    let rest = satisfy(is_ident_char);
    BoxedParser::new(move |state: &mut ParseState| {
        let mut name = leading.parse(state)?;
        name.push_str(&rest.parse(state)?);
        skip_space().parse(state)?;
        Ok(name)
    })
}

/// variable := ident
pub fn variable() -> BoxedParser<Expression> {
    ident() >> |name| Expression::Variable(Variable { name })
}

/// number := [0-9]+
///
/// A run of digits too large for `u64` is a committed error located at its
/// first digit.
pub fn number() -> BoxedParser<Expression> {
    let digits = satisfy1(|c| c.is_ascii_digit(), "a number");
    BoxedParser::new(move |state: &mut ParseState| {
        let start = state.position();
        let text = digits.parse(state)?;
        let Ok(value) = text.parse::<u64>() else {
            let err = state.error_at(
                start,
                ErrorKind::Predicate,
                "an integer that fits in 64 bits",
                text,
            );
            return Err(err.commit());
        };
        skip_space().parse(state)?;
        Ok(Expression::Number(Number { value }))
    })
}

/// Body of a string quoted with `quote`: any character but the quote, where
/// `\<quote>` stands for the quote itself. Other backslashes are kept as-is.
fn quoted(quote: char, escaped: &'static str) -> BoxedParser<String> {
    let single = BoxedParser::new(move |state: &mut ParseState| match state.peek_char() {
        Some(c) if c != quote => Ok(state.consume(1)),
        _ => Err(state.error(ErrorKind::Predicate, "a string character", state.peek(1))),
    });
    let piece = choice(vec![string(escaped) >> move |_| quote.to_string(), single]);
    let delimiter = if quote == '"' { "\"" } else { "'" };
    let body = between(string(delimiter), token(delimiter), many(piece));
    body >> |pieces: Vec<String>| pieces.concat()
}

/// string := "'" ("\'" | [^'])* "'" | '"' ('\"' | [^"])* '"'
pub fn string_literal() -> BoxedParser<String> {
    BoxedParser::new(|state: &mut ParseState| match state.peek_char() {
        Some('"') => quoted('"', "\\\"").parse(state),
        Some('\'') => quoted('\'', "\\'").parse(state),
        _ => Err(state.error(ErrorKind::Literal, "a quote", state.peek(1))),
    })
}

pub fn string_expression() -> BoxedParser<Expression> {
    string_literal() >> |value| Expression::String(StringLiteral { value })
}
