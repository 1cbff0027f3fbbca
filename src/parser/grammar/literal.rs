//! Lexical rules: digits, runs of spaces and unsigned numbers

use crate::parser::combinators::{BoxedParser, any, fail, literal, many0, many1, pure};

/// digit := '0'..'9'
pub fn digit() -> BoxedParser<String> {
    any(('0'..='9').map(literal).collect()).label("digit")
}

/// space := (' ')*
pub fn space() -> BoxedParser<String> {
    many0(literal(" ")) >> |spaces: Vec<String>| spaces.concat()
}

/// num := digit+
///
/// The digits are read as an ordinary decimal `f64`, so very long numbers
/// round to the nearest representable value.
pub fn num() -> BoxedParser<f64> {
    let digits = many1(digit()) >> |digits: Vec<String>| digits.concat();
    digits
        .chain(|digits| match digits.parse::<f64>() {
            Ok(value) => pure(value),
            Err(_) => fail(),
        })
        .label("number")
}
