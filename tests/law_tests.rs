//! Property checks for the combinator laws and the grammar's arithmetic

use combicalc::parser::{NoMatch, Parsed, literal, many0, parse_expression, pure};
use proptest::prelude::*;

proptest! {
    #[test]
    fn literal_consumes_its_own_text(s in "[a-z ]{1,8}", tail in "\\PC{0,8}") {
        let input = format!("{s}{tail}");
        prop_assert_eq!(
            literal(s.clone()).run(&input),
            Ok(Parsed { result: s, remaining: tail.as_str() })
        );
    }

    #[test]
    fn literal_fails_without_prefix(s in "[a-z]{1,8}", input in "\\PC{0,16}") {
        prop_assume!(!input.starts_with(&s));
        prop_assert_eq!(literal(s).run(&input), Err(NoMatch));
    }

    #[test]
    fn pure_is_identity(v in any::<i64>(), input in "\\PC{0,16}") {
        prop_assert_eq!(pure(v).run(&input), Ok(Parsed { result: v, remaining: input.as_str() }));
    }

    #[test]
    fn or_short_circuits(a in "[ab]{1,3}", b in "[ab]{1,3}", input in "[abc]{0,8}") {
        let combined = literal(a.clone()).or(literal(b.clone())).run(&input);
        let expected = match literal(a).run(&input) {
            Ok(parsed) => Ok(parsed),
            Err(NoMatch) => literal(b).run(&input),
        };
        prop_assert_eq!(combined, expected);
    }

    #[test]
    fn chain_runs_step_on_remainder(a in "[ab]{1,3}", b in "[ab]{1,3}", input in "[ab]{0,8}") {
        let step_input = b.clone();
        let chained = literal(a.clone()).chain(move |_| literal(step_input.clone())).run(&input);
        let expected = literal(a)
            .run(&input)
            .and_then(|first| literal(b).run(first.remaining));
        prop_assert_eq!(chained, expected);
    }

    #[test]
    fn remaining_is_suffix(input in "[ab]{0,12}") {
        let parsed = many0(literal("a")).run(&input).unwrap();
        prop_assert!(input.ends_with(parsed.remaining));
        prop_assert_eq!(parsed.result.len() + parsed.remaining.len(), input.len());
    }

    #[test]
    fn additive_chains_fold_left(xs in prop::collection::vec(0u32..1000, 1..8)) {
        let input = xs.iter().map(u32::to_string).collect::<Vec<_>>().join(" - ");
        let expected = xs[1..].iter().fold(f64::from(xs[0]), |acc, &x| acc - f64::from(x));
        let parsed = parse_expression(&input).unwrap();
        prop_assert_eq!(parsed.result, expected);
        prop_assert_eq!(parsed.remaining, "");
    }

    #[test]
    fn grammar_leaves_suffix(x in 0u32..1000, tail in "[a-z ]{0,10}") {
        let input = format!("{x} ?{tail}");
        let parsed = parse_expression(&input).unwrap();
        prop_assert_eq!(parsed.result, f64::from(x));
        prop_assert_eq!(parsed.remaining, &input[x.to_string().len()..]);
    }
}
