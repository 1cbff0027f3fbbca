//! # Combicalc - Monadic Parser Combinators and an Arithmetic Grammar
//!
//! Combicalc is a small backtracking parser-combinator engine together with a
//! recursive-descent grammar for signed arithmetic written entirely in terms of
//! that engine.
//!
//! ## Architecture Overview
//!
//! The crate has two layers:
//!
//! 1. **Combinator engine** (`parser::combinators`, `parser::state`) - a generic
//!    parser abstraction with primitives (`literal`, `pure`, `fail`), sequencing
//!    (`chain`, `use_left`, `use_right`, `seq`), alternation (`or`, `any`),
//!    repetition (`many0`, `many1`), transformation (`map`) and recursive
//!    definitions (`lazy`, `recursive`, `Forward`).
//! 2. **Arithmetic grammar** (`parser::grammar`) - parsers for numbers,
//!    factors, terms and expressions over `+ - * /`, parentheses and unary
//!    minus, with the usual precedence and left-associativity.
//!
//! ## Pipeline Flow
//!
//! ```text
//! Input (&str)
//!     ↓
//! [ParseState] → cursor over the input
//!     ↓
//! [Grammar::expr] → f64 + unconsumed suffix, or NoMatch
//!     ↓
//! [evaluate] → Evaluation or EvalError
//! ```
//!
//! ## Key Design Decisions
//!
//! ### Parsers are values
//! A [`parser::BoxedParser`] wraps an `Rc<dyn Fn>` and is never mutated. Every
//! combinator returns a new parser, so grammar rules are built once, tied
//! together through [`parser::Forward`] handles, and reused for any number of
//! parses.
//!
//! ### `chain` is the only sequencing primitive
//! `chain` hands the value just parsed to a function that picks the next
//! parser. Everything else that sequences parsers is built on it. The grammar's
//! continuation rules match `op operand` pairs and yield a fold that applies
//! them to the running value in input order, which gives left-associativity
//! without left recursion.
//!
//! ### Failure carries no reason
//! Parsers fail with [`parser::NoMatch`]. A failed parser never consumes input,
//! so alternatives always start from where the failed branch started. A side
//! channel ([`parser::Expectation`]) records what was expected at the furthest
//! point reached, without influencing any outcome.
//!
//! ## Example
//!
//! ```
//! use combicalc::parser::parse_expression;
//!
//! let parsed = parse_expression("-5 * -(4 + -2) / (0 + 5) - 3 * 2 is pretty cool").unwrap();
//! assert_eq!(parsed.result, -4.0);
//! assert_eq!(parsed.remaining, " is pretty cool");
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - the combinator engine and the arithmetic grammar
//! - [`evaluate`] - evaluation entry point and caller-facing errors

pub mod evaluate;
pub mod parser;
