use calc_eval::{evaluate, EvalError, EvaluationResult};
use calc_lexer::{Operator, STANDARD_OPERATORS};
use calc_parser::parser::test_utils::tokenize;
use calc_parser::to_postfix;
use pretty_assertions::assert_eq;

fn run(input: &str, record_steps: bool) -> Result<EvaluationResult, EvalError> {
    let postfix = to_postfix(tokenize(input), &STANDARD_OPERATORS).expect("conversion failed");
    evaluate(&postfix, record_steps)
}

#[test]
fn test_pipeline_values() {
    let cases = [
        ("2 + 3 * 4", 14.0),
        ("10 - 2 - 3", 5.0),
        ("2 ^ 3 ^ 2", 512.0),
        ("(2 + 3) * 4", 20.0),
        ("2 + 3 * (4 - 1) ^ 2", 29.0),
        ("100 / 10 / 5", 2.0),
        ("4 ^ 0.5", 2.0),
    ];
    for (input, expected) in cases {
        assert_eq!(run(input, false).unwrap().value, expected, "evaluating {input}");
    }
}

#[test]
fn test_step_trace_text() {
    let result = run("2 + 3 * (4 - 1) ^ 2", true).unwrap();
    let lines: Vec<String> = result.steps.iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec!["4 - 1 = 3", "3 ^ 2 = 9", "3 * 9 = 27", "2 + 27 = 29"]
    );
}

#[test]
fn test_trailing_operator_underflows() {
    assert_eq!(
        run("2 +", false),
        Err(EvalError::StackUnderflow {
            operator: Operator::Add,
            index: 1,
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_step_serializes_with_symbol() {
    let result = run("1 / 4", true).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "value": 0.25,
            "steps": [
                { "operand1": 1.0, "operator": "/", "operand2": 4.0, "result": 0.25 }
            ]
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_infinite_value_serializes_as_string() {
    let result = run("1 / 0", false).unwrap();
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({ "value": "Infinity", "steps": [] })
    );
}
