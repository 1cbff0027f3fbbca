//! Grammar for signed arithmetic over `f64`
//!
//! The rules are organized by category:
//! - `literal`: digits, spaces and numbers
//! - `expression`: factors, terms, expressions and their continuations
//!
//! ```text
//! digit     := '0'..'9'
//! space     := (' ')*
//! num       := digit+
//! factor    := '(' space expr space ')' | '-' factor | num
//! term      := factor (space ('*' | '/') space factor)*
//! expr      := term (space ('+' | '-') space term)*
//! ```
//!
//! Spaces are only skipped around binary operators and inside parentheses.
//! Nothing requires the whole input to be consumed; whatever follows the
//! longest expression is handed back as the remainder.
//!
//! Every nesting level and every binary operator adds stack frames, so very
//! deeply nested input can overflow the stack.

mod expression;
mod literal;

pub use expression::{Fold, expr_cont_with, expr_with, factor_with, term_cont_with, term_with};
pub use literal::{digit, num, space};

use super::combinators::{BoxedParser, Forward};
use super::state::{Expectation, ParseOutcome};

/// The grammar's rules, built once and reusable for any number of parses.
///
/// `expr` and the rules below it refer to each other, so a `Grammar` is never
/// freed once built.
#[derive(Clone)]
pub struct Grammar {
    pub digit: BoxedParser<String>,
    pub space: BoxedParser<String>,
    pub num: BoxedParser<f64>,
    pub factor: BoxedParser<f64>,
    pub term_cont: BoxedParser<Fold>,
    pub term: BoxedParser<f64>,
    pub expr_cont: BoxedParser<Fold>,
    pub expr: BoxedParser<f64>,
}

impl Grammar {
    pub fn new() -> Self {
        let digit = digit();
        let space = space();
        let num = num();

        let expr_ref = Forward::new();
        let factor = factor_with(expr_ref.handle(), num.clone(), space.clone());
        let term_cont = term_cont_with(&factor, &space);
        let term = term_with(factor.clone(), term_cont.clone());
        let expr_cont = expr_cont_with(&term, &space);
        let expr = expr_with(term.clone(), expr_cont.clone());
        expr_ref.define(&expr);

        Self {
            digit,
            space,
            num,
            factor,
            term_cont,
            term,
            expr_cont,
            expr,
        }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

thread_local! {
    static GRAMMAR: Grammar = Grammar::new();
}

/// factor := "(" space expr space ")" | "-" factor | num
pub fn factor() -> BoxedParser<f64> {
    GRAMMAR.with(|grammar| grammar.factor.clone())
}

/// term := factor term_cont
pub fn term() -> BoxedParser<f64> {
    GRAMMAR.with(|grammar| grammar.term.clone())
}

/// term_cont := (space ('*' | '/') space factor)*, folded left to right
pub fn term_cont() -> BoxedParser<Fold> {
    GRAMMAR.with(|grammar| grammar.term_cont.clone())
}

/// expr := term expr_cont
pub fn expr() -> BoxedParser<f64> {
    GRAMMAR.with(|grammar| grammar.expr.clone())
}

/// expr_cont := (space ('+' | '-') space term)*, folded left to right
pub fn expr_cont() -> BoxedParser<Fold> {
    GRAMMAR.with(|grammar| grammar.expr_cont.clone())
}

/// Parse the longest arithmetic expression at the start of `input`.
pub fn parse_expression(input: &str) -> ParseOutcome<'_, f64> {
    GRAMMAR.with(|grammar| grammar.expr.run(input))
}

/// [`parse_expression`], plus what was expected where the parse got stuck.
pub fn parse_expression_traced(input: &str) -> (ParseOutcome<'_, f64>, Option<Expectation>) {
    GRAMMAR.with(|grammar| grammar.expr.run_traced(input))
}
