use std::ops::{Add, BitOr, Mul, Shr, Sub};
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use super::state::{Expectation, NoMatch, ParseOutcome, ParseResult, ParseState, Parsed, Parser};

type ParserFn<T> = Rc<dyn Fn(&mut ParseState<'_>) -> ParseResult<T>>;

// === Boxed Parser for type erasure ===

/// An immutable parser value.
///
/// Every combinator builds a new `BoxedParser` around the ones it was given;
/// none of them mutate an existing parser. Cloning shares the underlying logic.
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
            parser: Rc::new(move |state: &mut ParseState<'_>| parser.parse(state)),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, state: &mut ParseState<'_>) -> ParseResult<T> {
        (self.parser)(state)
    }
}

impl<T> BoxedParser<T> {
    /// Run against a whole input, yielding the result and the unconsumed suffix.
    pub fn run<'a>(&self, input: &'a str) -> ParseOutcome<'a, T> {
        self.run_traced(input).0
    }

    /// Like [`BoxedParser::run`], but also hands back what was expected at the
    /// furthest point the parse reached. The outcome is the same as `run`'s.
    pub fn run_traced<'a>(&self, input: &'a str) -> (ParseOutcome<'a, T>, Option<Expectation>) {
        let mut state = ParseState::new(input);
        let outcome = self.parse(&mut state).map(|result| Parsed {
            result,
            remaining: state.rest(),
        });
        (outcome, state.into_furthest())
    }
}

// === Combinators as methods ===

impl<T: 'static> BoxedParser<T> {
    /// Bind: run self, feed its result to `step`, run the parser `step` returns
    /// on what is left. If that second parser fails the whole chain fails and the
    /// input is left untouched.
    pub fn chain<U: 'static, F: Fn(T) -> BoxedParser<U> + 'static>(
        self,
        step: F,
    ) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let pos = state.position();
            let a = self.parse(state)?;
            match step(a).parse(state) {
                Ok(b) => Ok(b),
                Err(err) => {
                    state.restore(pos);
                    Err(err)
                }
            }
        })
    }

    /// Map: transform result. Same outcome as `chain(|x| pure(f(x)))`.
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let a = self.parse(state)?;
            Ok(f(a))
        })
    }

    /// Choice: try self, if fails try other on the original input
    pub fn or(self, other: BoxedParser<T>) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let pos = state.position();
            match self.parse(state) {
                Ok(a) => Ok(a),
                Err(_) => {
                    state.restore(pos);
                    other.parse(state)
                }
            }
        })
    }

    /// Sequence: parse self then other, return (T, U)
    pub fn seq<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<(T, U)>
    where
        T: Clone,
    {
        self.chain(move |a| other.clone().map(move |b| (a.clone(), b)))
    }

    /// Keep left: parse self then other, discard other's result
    pub fn use_left<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<T>
    where
        T: Clone,
    {
        self.chain(move |a| other.clone().map(move |_| a.clone()))
    }

    /// Keep right: parse self then other, discard self's result
    pub fn use_right<U: 'static>(self, other: BoxedParser<U>) -> BoxedParser<U> {
        self.chain(move |_| other.clone())
    }

    /// Name this parser. On failure, whatever was expected where it started is
    /// reported as `name` instead.
    pub fn label(self, name: &'static str) -> BoxedParser<T> {
        BoxedParser::new(move |state: &mut ParseState<'_>| {
            let pos = state.position();
            match self.parse(state) {
                Ok(v) => {
                    log::trace!("{name} matched {pos}..{}", state.position());
                    Ok(v)
                }
                Err(err) => {
                    log::trace!("{name} failed at {pos}");
                    state.relabel(pos, name);
                    Err(err)
                }
            }
        })
    }
}

// === Operator Overloading ===

/// `+` for sequence: A + B -> (A, B)
impl<T: Clone + 'static, U: 'static> Add<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<(T, U)>;

    fn add(self, rhs: BoxedParser<U>) -> Self::Output {
        self.seq(rhs)
    }
}

/// `-` for keep left: A - B -> A (parse B, discard result)
impl<T: Clone + 'static, U: 'static> Sub<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<T>;

    fn sub(self, rhs: BoxedParser<U>) -> Self::Output {
        self.use_left(rhs)
    }
}

/// `*` for keep right: A * B -> B (parse A, discard result)
impl<T: 'static, U: 'static> Mul<BoxedParser<U>> for BoxedParser<T> {
    type Output = BoxedParser<U>;

    fn mul(self, rhs: BoxedParser<U>) -> Self::Output {
        self.use_right(rhs)
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

/// Match `expected` exactly at the start of the input.
pub fn literal(expected: impl Into<String>) -> BoxedParser<String> {
    let expected: String = expected.into();
    BoxedParser::new(move |state: &mut ParseState<'_>| {
        if state.rest().starts_with(expected.as_str()) {
            state.advance(expected.len());
            Ok(expected.clone())
        } else {
            state.record_expected(format!("'{expected}'"));
            Err(NoMatch)
        }
    })
}

/// Succeed with `value` without consuming anything.
pub fn pure<T: Clone + 'static>(value: T) -> BoxedParser<T> {
    BoxedParser::new(move |_: &mut ParseState<'_>| Ok(value.clone()))
}

/// Never match.
pub fn fail<T: 'static>() -> BoxedParser<T> {
    BoxedParser::new(|_: &mut ParseState<'_>| Err(NoMatch))
}

/// First of `parsers` to match wins. An empty list never matches.
pub fn any<T: 'static>(parsers: Vec<BoxedParser<T>>) -> BoxedParser<T> {
    parsers.into_iter().reduce(BoxedParser::or).unwrap_or_else(fail)
}

/// Build the parser only when it is run, so rules can refer to each other.
/// `make` is called again on every run; nothing is cached.
pub fn lazy<T: 'static, F: Fn() -> BoxedParser<T> + 'static>(make: F) -> BoxedParser<T> {
    BoxedParser::new(move |state: &mut ParseState<'_>| make().parse(state))
}

/// A parser that can be used before it is defined, so that rules built once
/// can refer to each other. Running it before [`Forward::define`] never matches.
pub struct Forward<T> {
    slot: Rc<OnceCell<BoxedParser<T>>>,
}

impl<T: 'static> Forward<T> {
    pub fn new() -> Self {
        Forward {
            slot: Rc::new(OnceCell::new()),
        }
    }

    /// A parser that runs whatever gets defined later.
    pub fn handle(&self) -> BoxedParser<T> {
        let slot = Rc::clone(&self.slot);
        BoxedParser::new(move |state: &mut ParseState<'_>| match slot.get() {
            Some(parser) => parser.parse(state),
            None => Err(NoMatch),
        })
    }

    /// Only the first definition counts.
    pub fn define(&self, parser: &BoxedParser<T>) {
        let _ = self.slot.set(parser.clone());
    }
}

impl<T: 'static> Default for Forward<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a parser once and let it refer to itself through the handle passed
/// to `build`. The parser and its handle keep each other alive, so it is never
/// freed.
pub fn recursive<T: 'static>(
    build: impl FnOnce(BoxedParser<T>) -> BoxedParser<T>,
) -> BoxedParser<T> {
    let forward = Forward::new();
    let parser = build(forward.handle());
    forward.define(&parser);
    parser
}

/// Parse zero or more occurrences, as many as possible.
///
/// Each repetition nests one level deeper, and a `parser` that can succeed
/// without consuming input repeats until the stack runs out.
pub fn many0<T: Clone + 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    recursive(move |rest| {
        let more = parser + rest >> |(first, mut tail): (T, Vec<T>)| {
            tail.insert(0, first);
            tail
        };
        more | pure(Vec::new())
    })
}

/// Parse one or more occurrences
pub fn many1<T: Clone + 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    parser.clone() + many0(parser) >> |(first, mut tail): (T, Vec<T>)| {
        tail.insert(0, first);
        tail
    }
}
