use calc::{evaluate, evaluate_with_steps, ErrorKind, EvaluationStep, Operator};
use pretty_assertions::assert_eq;

fn kind_of(expression: &str) -> ErrorKind {
    evaluate(expression)
        .expect_err("expression should fail")
        .kind()
}

#[test]
fn precedence() {
    assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
}

#[test]
fn left_associativity() {
    assert_eq!(evaluate("10 - 2 - 3").unwrap(), 5.0);
    assert_eq!(evaluate("64 / 4 / 2").unwrap(), 8.0);
}

#[test]
fn right_associativity() {
    assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(evaluate("(2 + 3) * 4").unwrap(), 20.0);
    assert_eq!(evaluate("(2 ^ 3) ^ 2").unwrap(), 64.0);
}

#[test]
fn whitespace_is_optional() {
    assert_eq!(evaluate("2+3*(4-1)^2").unwrap(), 29.0);
    assert_eq!(evaluate("\t 7 \n").unwrap(), 7.0);
}

#[test]
fn step_trace_order() {
    let result = evaluate_with_steps("2 + 3 * 4").unwrap();
    assert_eq!(result.value, 14.0);
    assert_eq!(
        result.steps,
        vec![
            EvaluationStep {
                operand1: 3.0,
                operator: Operator::Mul,
                operand2: 4.0,
                result: 12.0,
            },
            EvaluationStep {
                operand1: 2.0,
                operator: Operator::Add,
                operand2: 12.0,
                result: 14.0,
            },
        ]
    );
}

#[test]
fn mismatched_parentheses() {
    assert_eq!(kind_of("(2 + 3"), ErrorKind::MismatchedParentheses);
    assert_eq!(kind_of("2 + 3)"), ErrorKind::MismatchedParentheses);
    assert_eq!(kind_of(")"), ErrorKind::MismatchedParentheses);
}

#[test]
fn ieee_754_division() {
    assert_eq!(evaluate("1 / 0").unwrap(), f64::INFINITY);
    assert_eq!(evaluate("(0 - 1) / 0").unwrap(), f64::NEG_INFINITY);
    assert!(evaluate("0 / 0").unwrap().is_nan());
}

#[test]
fn power_never_fails() {
    assert!(evaluate("(0 - 8) ^ 0.5").unwrap().is_nan());
    assert_eq!(evaluate("2 ^ (0 - 1)").unwrap(), 0.5);
    assert_eq!(evaluate("0 ^ 0").unwrap(), 1.0);
}

#[test]
fn invalid_expressions() {
    assert_eq!(kind_of(""), ErrorKind::InvalidExpression);
    assert_eq!(kind_of("   "), ErrorKind::InvalidExpression);
    assert_eq!(kind_of("2 3"), ErrorKind::InvalidExpression);
    assert_eq!(kind_of("()"), ErrorKind::InvalidExpression);
    assert_eq!(kind_of("(1)(2)"), ErrorKind::InvalidExpression);
}

#[test]
fn stack_underflow() {
    assert_eq!(kind_of("2 +"), ErrorKind::StackUnderflow);
    assert_eq!(kind_of("+"), ErrorKind::StackUnderflow);
    assert_eq!(kind_of("-5"), ErrorKind::StackUnderflow);
    // Operators are only checked when applied, so "* 2 3" is "2 3 *"
    assert_eq!(evaluate("* 2 3").unwrap(), 6.0);
}

#[test]
fn unrecognised_characters_are_rejected() {
    assert_eq!(kind_of("2 x 3"), ErrorKind::Lex);
    assert_eq!(kind_of("sqrt(4)"), ErrorKind::Lex);
    assert_eq!(kind_of("1e3"), ErrorKind::Lex);
}
