//! # Evaluation Entry Point
//!
//! This module is the boundary between the grammar and its callers. It runs
//! the expression grammar over a string and turns the outcome into either a
//! value or an [`EvalError`].
//!
//! By default trailing text after the expression is accepted and handed back
//! as [`Evaluation::remaining`]; pass [`Consumption::Complete`] to reject it.
//! Neither choice changes what the grammar itself matches.

use thiserror::Error;

use crate::parser::{Parsed, parse_expression_traced};

/// How much of the input an evaluation has to consume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Consumption {
    /// Any prefix that forms an expression is enough.
    #[default]
    Prefix,
    /// The expression must span the whole input.
    Complete,
}

/// A computed value and the text that followed the expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation<'a> {
    pub value: f64,
    pub remaining: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The input does not start with an expression.
    #[error("no expression found; expected {} at offset {offset}", describe(.expected))]
    NoMatch {
        /// Byte offset of the furthest point the parse reached
        offset: usize,
        /// Rules or literals that would have let the parse continue there
        expected: Vec<String>,
    },

    /// An expression was found but did not span the whole input.
    #[error("unexpected input at offset {offset}: {remaining:?}")]
    TrailingInput { offset: usize, remaining: String },
}

fn describe(expected: &[String]) -> String {
    match expected {
        [] => "an expression".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} or {last}", init.join(", ")),
    }
}

/// Evaluate the arithmetic expression at the start of `input`.
///
/// Division by zero is not an error: it yields an infinity or NaN.
pub fn evaluate(input: &str, consumption: Consumption) -> Result<Evaluation<'_>, EvalError> {
    let (outcome, furthest) = parse_expression_traced(input);

    let Ok(Parsed { result, remaining }) = outcome else {
        let (offset, expected) = furthest
            .map(|furthest| (furthest.offset, furthest.expected))
            .unwrap_or_default();
        log::debug!("no expression in {input:?}, stuck at offset {offset}");
        return Err(EvalError::NoMatch { offset, expected });
    };

    log::debug!("evaluated {input:?} to {result}, remaining {remaining:?}");

    if consumption == Consumption::Complete && !remaining.is_empty() {
        return Err(EvalError::TrailingInput {
            offset: input.len() - remaining.len(),
            remaining: remaining.to_string(),
        });
    }

    Ok(Evaluation {
        value: result,
        remaining,
    })
}
