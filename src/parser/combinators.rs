use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use log::trace;

use super::error::{ErrorKind, ParseResult};
use super::state::{ParseState, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

pub struct BoxedParser<T> {
    parser: ParserFn<T>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(move |state| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState) -> ParseResult<T> {
        (self.parser)(state)
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let b = other.parse(state)?;
            Ok((a, b))
        })
    }

    /// Keep left: parse self then other, discard other's result
    pub fn skip<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            let _ = other.parse(state)?;
            Ok(a)
        })
    }

    /// Keep right: parse self then other, discard self's result
    pub fn skip_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let _ = self.parse(state)?;
            other.parse(state)
        })
    }

    /// Map: transform result
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }

    /// Choice: try self, and only if it failed without consuming input, try other
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState| {
            let pos = state.position();
            match self.parse(state) {
                Ok(a) => Ok(a),
                Err(err) if err.committed || state.position() != pos => Err(err),
                Err(_) => other.parse(state),
            }
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.skip_left(rhs)
    }
}

/// `|` for choice: A | B -> A or B
impl<T: 'static> BitOr<BoxedParser<T>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn bitor(self, rhs: BoxedParser<T>) -> Self::Output {
        self.or(rhs)
    }
}

/// `>>` for map: A >> fn -> B
impl<T: 'static, U: 'static, F: Fn(T) -> U + 'static> Shr<F> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn shr(self, f: F) -> Self::Output {
        self.map(f)
    }
}

// === Primitive Parsers ===

pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\n'
}

pub fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Match `literal` exactly
pub fn string(literal: &'static str) -> BoxedParser<String> {
    let len = literal.chars().count();
    BoxedParser::new(move |state: &mut ParseState| {
        if state.remaining().starts_with(literal) {
            Ok(state.consume(len))
        } else {
            Err(state.error(ErrorKind::Literal, literal, state.peek(len)))
        }
    })
}

/// Consume any run of spaces and newlines
pub fn skip_space() -> BoxedParser<()> {
    BoxedParser::new(|state: &mut ParseState| {
        let count = state.remaining().chars().take_while(|&c| is_space(c)).count();
        state.consume(count);
        Ok(())
    })
}

/// Match `literal` exactly, then skip trailing whitespace
pub fn token(literal: &'static str) -> BoxedParser<String> {
    string(literal) - skip_space()
}

/// Like [`token`], but refuses to match the prefix of a longer identifier
pub fn keyword(word: &'static str) -> BoxedParser<String> {
    let len = word.chars().count();
    BoxedParser::new(move |state: &mut ParseState| {
        let rest = state.remaining();
        let matched = rest.starts_with(word) && !rest[word.len()..].starts_with(is_ident_char);
        if !matched {
            let found = state.peek(len + 1).to_string();
            return Err(state.error(ErrorKind::Literal, word, found));
        }
        let keyword = state.consume(len);
        skip_space().parse(state)?;
        Ok(keyword)
    })
}

/// `word` followed by at least one space or newline
pub fn spaced_keyword(word: &'static str) -> BoxedParser<String> {
    let len = word.chars().count();
    BoxedParser::new(move |state: &mut ParseState| {
        let rest = state.remaining();
        let matched = rest.starts_with(word) && rest[word.len()..].starts_with(is_space);
        if !matched {
            let found = state.peek(len + 1).to_string();
            return Err(state.error(ErrorKind::Literal, format!("{word} "), found));
        }
        let keyword = state.consume(len);
        skip_space().parse(state)?;
        Ok(keyword)
    })
}

/// Consume the longest run of characters satisfying `predicate` (possibly none)
pub fn satisfy<F: Fn(char) -> bool + 'static>(predicate: F) -> BoxedParser<String> {
    BoxedParser::new(move |state: &mut ParseState| {
        let count = state.remaining().chars().take_while(|&c| predicate(c)).count();
        Ok(state.consume(count))
    })
}

/// Like [`satisfy`], but at least one character has to match
pub fn satisfy1<F: Fn(char) -> bool + 'static>(
    predicate: F,
    expected: &'static str,
) -> BoxedParser<String> {
    let run = satisfy(predicate);
    BoxedParser::new(move |state: &mut ParseState| {
        let matched = run.parse(state)?;
        if matched.is_empty() {
            return Err(state.error(ErrorKind::Predicate, expected, state.peek(1)));
        }
        Ok(matched)
    })
}

/// Succeeds only when all input has been consumed
pub fn eof() -> BoxedParser<()> {
    BoxedParser::new(|state: &mut ParseState| {
        if state.has_next() {
            Err(state.error(ErrorKind::EndOfInput, "end of input", state.peek(1)))
        } else {
            Ok(())
        }
    })
}

pub fn expect_comma() -> BoxedParser<String> {
    token(",")
}

pub fn expect_semicolon() -> BoxedParser<String> {
    token(";")
}

pub fn expect_dot() -> BoxedParser<String> {
    token(".")
}

pub fn expect_colon() -> BoxedParser<String> {
    token(":")
}

pub fn expect_equals() -> BoxedParser<String> {
    token("=")
}

pub fn expect_bang() -> BoxedParser<String> {
    token("!")
}

// === Combinators ===

/// Optional: parse zero or one
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        match parser.parse(state) {
            Ok(item) => Ok(Some(item)),
            Err(err) if err.committed => Err(err),
            Err(_) => {
                state.restore(pos);
                Ok(None)
            }
        }
    })
}

/// Parse zero or more occurrences
///
/// Stops at the first failure, and also at the first success that did not
/// move the cursor (that item is dropped).
pub fn many<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    let item = optional(parser);
    BoxedParser::new(move |state: &mut ParseState| {
        let mut results = Vec::new();
        loop {
            let pos = state.position();
            match item.parse(state)? {
                Some(value) if state.position() != pos => results.push(value),
                _ => break,
            }
        }
        Ok(results)
    })
}

/// Run `parser`, rewinding to the starting position if it fails
///
/// A committed error is still returned as-is, so no enclosing choice will
/// try another alternative.
pub fn attempt<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        parser.parse(state).inspect_err(|_| {
            if state.position() != pos {
                trace!("backtracking from {} to {}", state.position(), pos);
            }
            state.restore(pos);
        })
    })
}

/// Ordered choice over any number of parsers.
///
/// An alternative that fails after consuming input, or with a committed
/// error, ends the choice with its own error. Otherwise the next alternative
/// is tried from the same position. When every alternative fails, the last
/// one's error is returned.
pub fn choice<T: 'static>(parsers: Vec<BoxedParser<T>>) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState| {
        let pos = state.position();
        let mut last_error = None;
        for parser in &parsers {
            match parser.parse(state) {
                Ok(value) => return Ok(value),
                Err(err) if err.committed || state.position() != pos => return Err(err),
                Err(err) => last_error = Some(err),
            }
        }
        Err(last_error.unwrap_or_else(|| {
            state.error(ErrorKind::Predicate, "one of no alternatives", state.peek(1))
        }))
    })
}

/// `open`, `parser`, `close` as one unit: on any failure nothing is consumed
pub fn between<O: 'static, C: 'static, T: 'static>(
    open: BoxedParser<O>,
    close: BoxedParser<C>,
    parser: BoxedParser<T>,
) -> BoxedParser<T> {
    attempt((open * parser) - close)
}

pub fn parens<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    between(token("("), token(")"), parser)
}

pub fn braces<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    between(token("{"), token("}"), parser)
}

pub fn brackets<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    between(token("["), token("]"), parser)
}

/// Zero or more `parser` separated by `sep`, no trailing separator
///
/// sep_by(",", number) on "1,2,3" gives [1, 2, 3]; on "" it gives [].
pub fn sep_by<S: 'static, T: 'static>(
    sep: BoxedParser<S>,
    parser: BoxedParser<T>,
) -> BoxedParser<Vec<T>> {
    let first = optional(parser.clone());
    let rest = many(sep * parser);
    BoxedParser::new(move |state: &mut ParseState| {
        let Some(first) = first.parse(state)? else {
            return Ok(Vec::new());
        };
        let mut items = vec![first];
        items.extend(rest.parse(state)?);
        Ok(items)
    })
}

/// One or more `parser` separated by `sep`
pub fn sep_by1<S: 'static, T: 'static>(
    sep: BoxedParser<S>,
    parser: BoxedParser<T>,
) -> BoxedParser<Vec<T>> {
    let rest = many(sep * parser.clone());
    BoxedParser::new(move |state: &mut ParseState| {
        let mut items = vec![parser.parse(state)?];
        items.extend(rest.parse(state)?);
        Ok(items)
    })
}

/// Like [`sep_by`], but one trailing separator is allowed
///
/// "1,2,3," and "1,2,3" both give [1, 2, 3].
pub fn sep_by_end<S: 'static, T: 'static>(
    sep: BoxedParser<S>,
    parser: BoxedParser<T>,
) -> BoxedParser<Vec<T>> {
    sep_by(sep.clone(), parser) - optional(sep)
}
