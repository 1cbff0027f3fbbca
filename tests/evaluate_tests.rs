use combicalc::evaluate::{Consumption, EvalError, Evaluation, evaluate};

#[test]
fn prefix_mode_accepts_trailing_text() {
    let evaluation = evaluate("2 * 21 and then some", Consumption::Prefix).unwrap();
    assert_eq!(
        evaluation,
        Evaluation {
            value: 42.0,
            remaining: " and then some"
        }
    );
}

#[test]
fn prefix_is_the_default() {
    assert_eq!(Consumption::default(), Consumption::Prefix);
}

#[test]
fn complete_mode_accepts_full_input() {
    let evaluation = evaluate("(1 + 2) * 3", Consumption::Complete).unwrap();
    assert_eq!(evaluation.value, 9.0);
    assert_eq!(evaluation.remaining, "");
}

#[test]
fn complete_mode_rejects_trailing_text() {
    let err = evaluate("1 + 2 // three", Consumption::Complete).unwrap_err();
    assert_eq!(
        err,
        EvalError::TrailingInput {
            offset: 5,
            remaining: " // three".to_string()
        }
    );
    assert_eq!(
        err.to_string(),
        "unexpected input at offset 5: \" // three\""
    );
}

#[test]
fn no_expression_reports_expected_rule() {
    let err = evaluate("abc", Consumption::Prefix).unwrap_err();
    assert_eq!(
        err,
        EvalError::NoMatch {
            offset: 0,
            expected: vec!["expression".to_string()]
        }
    );
    assert_eq!(
        err.to_string(),
        "no expression found; expected expression at offset 0"
    );
}

#[test]
fn no_expression_reports_furthest_point() {
    let err = evaluate("(1+", Consumption::Prefix).unwrap_err();
    assert_eq!(
        err,
        EvalError::NoMatch {
            offset: 3,
            expected: vec!["factor".to_string()]
        }
    );
}

#[test]
fn unclosed_parenthesis_lists_alternatives() {
    let err = evaluate("(1", Consumption::Prefix).unwrap_err();
    let EvalError::NoMatch { offset, expected } = err else {
        panic!("expected NoMatch");
    };
    assert_eq!(offset, 2);
    assert!(expected.contains(&"')'".to_string()));
    assert!(expected.contains(&"'+'".to_string()));
}

#[test]
fn division_by_zero_is_not_an_error() {
    let evaluation = evaluate("5 / (2 - 2)", Consumption::Complete).unwrap();
    assert!(evaluation.value.is_infinite());
}
