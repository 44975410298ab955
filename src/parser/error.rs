/// What kind of expectation was not met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An exact keyword or symbol was required.
    Literal,
    /// A non-empty run of characters satisfying some condition was required.
    Predicate,
    /// Input remained after the program was complete.
    EndOfInput,
}

/// A parse failure: what was expected, what was found instead, and where.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "expected '{expected}' but found {} (offset {offset}, line {line})",
    describe_found(.found)
)]
pub struct ParseError {
    pub kind: ErrorKind,
    pub expected: String,
    pub found: String,
    pub offset: usize,
    pub line: usize,
    pub column: usize,
    /// A committed error is never backtracked past: `attempt`, `optional` and
    /// ordered choice hand it straight to their caller.
    pub committed: bool,
}

impl ParseError {
    /// Mark this error as committed.
    pub fn commit(mut self) -> Self {
        self.committed = true;
        self
    }
}

fn describe_found(found: &str) -> String {
    if found.is_empty() {
        "end of input".to_string()
    } else {
        format!("'{found}'")
    }
}

pub type ParseResult<T> = Result<T, ParseError>;
