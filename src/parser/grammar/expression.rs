//! Arithmetic expressions with `+ - * /`, parentheses and unary minus
//!
//! Binary operators are left-associative without left recursion. After the
//! first operand, a continuation parser matches `op operand` and then itself
//! again. It yields a [`Fold`] that applies each operator to the running value
//! in the order the operands appeared. With no further operator it yields the
//! identity fold.
//!
//! Every rule here is built once from the parsers it depends on and reused;
//! nothing is constructed while parsing.

use std::rc::Rc;

use crate::parser::combinators::{BoxedParser, any, literal, pure, recursive};

/// Folds the operands a continuation matched into a running value.
pub type Fold = Rc<dyn Fn(f64) -> f64>;

type Operator = fn(f64, f64) -> f64;

/// binary := space op space operand
fn binary(
    op: &'static str,
    space: &BoxedParser<String>,
    operand: &BoxedParser<f64>,
) -> BoxedParser<f64> {
    space.clone() * literal(op) * space.clone() * operand.clone()
}

/// cont := binary(op, operand) cont | ... | ε
fn continuation(
    ops: &[(&'static str, Operator)],
    space: &BoxedParser<String>,
    operand: &BoxedParser<f64>,
) -> BoxedParser<Fold> {
    recursive(|rest| {
        let mut alternatives: Vec<BoxedParser<Fold>> = ops
            .iter()
            .map(|&(op, apply)| {
                binary(op, space, operand) + rest.clone()
                    >> move |(rhs, fold): (f64, Fold)| -> Fold {
                        Rc::new(move |acc| fold(apply(acc, rhs)))
                    }
            })
            .collect();
        alternatives.push(pure(Rc::new(|acc: f64| acc) as Fold));
        any(alternatives)
    })
}

/// factor := "(" space expr space ")" | "-" factor | num
pub fn factor_with(
    expr: BoxedParser<f64>,
    num: BoxedParser<f64>,
    space: BoxedParser<String>,
) -> BoxedParser<f64> {
    recursive(move |factor| {
        let parenthesized = literal("(") * space.clone() * expr - space - literal(")");
        let negated = literal("-") * factor >> |value: f64| -value;

        any(vec![parenthesized, negated, num]).label("factor")
    })
}

/// term_cont := binary("*", factor) term_cont
///            | binary("/", factor) term_cont
///            | ε
pub fn term_cont_with(
    factor: &BoxedParser<f64>,
    space: &BoxedParser<String>,
) -> BoxedParser<Fold> {
    let ops: [(&'static str, Operator); 2] = [
        ("*", |acc, rhs| acc * rhs),
        ("/", |acc, rhs| acc / rhs),
    ];
    continuation(&ops, space, factor)
}

/// term := factor term_cont
pub fn term_with(factor: BoxedParser<f64>, term_cont: BoxedParser<Fold>) -> BoxedParser<f64> {
    factor + term_cont >> |(first, fold): (f64, Fold)| fold(first)
}

/// expr_cont := binary("+", term) expr_cont
///            | binary("-", term) expr_cont
///            | ε
pub fn expr_cont_with(
    term: &BoxedParser<f64>,
    space: &BoxedParser<String>,
) -> BoxedParser<Fold> {
    let ops: [(&'static str, Operator); 2] = [
        ("+", |acc, rhs| acc + rhs),
        ("-", |acc, rhs| acc - rhs),
    ];
    continuation(&ops, space, term)
}

/// expr := term expr_cont
pub fn expr_with(term: BoxedParser<f64>, expr_cont: BoxedParser<Fold>) -> BoxedParser<f64> {
    (term + expr_cont >> |(first, fold): (f64, Fold)| fold(first)).label("expression")
}
