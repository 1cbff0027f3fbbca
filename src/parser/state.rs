use thiserror::Error;

/// The one way a parser can fail. It carries no reason and no position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no match")]
pub struct NoMatch;

pub type ParseResult<T> = Result<T, NoMatch>;

/// A successful parse: the produced value and the unconsumed suffix of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<'a, T> {
    pub result: T,
    pub remaining: &'a str,
}

/// Outcome of running a parser over a complete input string.
pub type ParseOutcome<'a, T> = Result<Parsed<'a, T>, NoMatch>;

/// What the parse was looking for at the furthest offset any primitive reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expectation {
    pub offset: usize,
    pub expected: Vec<String>,
}

/// Cursor over the input of a single parse.
///
/// Combinators only ever move the cursor forward on success; a failing parser
/// leaves it where it found it.
pub struct ParseState<'a> {
    input: &'a str,
    offset: usize,
    furthest: Option<Expectation>,
}

impl<'a> ParseState<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            offset: 0,
            furthest: None,
        }
    }

    /// The part of the input that has not been consumed yet.
    pub fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    /// Consume `len` bytes. Callers must land on a char boundary.
    pub fn advance(&mut self, len: usize) {
        debug_assert!(self.input.is_char_boundary(self.offset + len));
        self.offset += len;
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    pub fn restore(&mut self, position: usize) {
        self.offset = position;
    }

    /// Note that `what` would have matched at the current offset.
    pub fn record_expected(&mut self, what: impl Into<String>) {
        let offset = self.offset;
        let what = what.into();
        if let Some(furthest) = &mut self.furthest {
            if furthest.offset > offset {
                return;
            }
            if furthest.offset == offset {
                if !furthest.expected.contains(&what) {
                    furthest.expected.push(what);
                }
                return;
            }
        }
        self.furthest = Some(Expectation {
            offset,
            expected: vec![what],
        });
    }

    /// Collapse whatever was expected at `offset` into the single rule `name`.
    pub fn relabel(&mut self, offset: usize, name: &str) {
        if let Some(furthest) = &self.furthest {
            if furthest.offset > offset {
                return;
            }
        }
        self.furthest = Some(Expectation {
            offset,
            expected: vec![name.to_string()],
        });
    }

    pub fn into_furthest(self) -> Option<Expectation> {
        self.furthest
    }
}

pub trait Parser<T> {
    fn parse(&self, state: &mut ParseState<'_>) -> ParseResult<T>;
}

// Allow closures to be parsers
impl<T, F: Fn(&mut ParseState<'_>) -> ParseResult<T>> Parser<T> for F {
    fn parse(&self, state: &mut ParseState<'_>) -> ParseResult<T> {
        self(state)
    }
}
