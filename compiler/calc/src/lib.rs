//! Arithmetic expression evaluation.
//!
//! Expression text runs through three stages: the tokenizer
//! ([`calc_lexer`]), the shunting-yard converter ([`calc_parser`]) and the
//! postfix evaluator ([`calc_eval`]). This crate wires them together behind
//! [`evaluate`] and [`evaluate_with_steps`], unifies their errors in
//! [`EvaluationError`], and renders errors for humans in [`diagnostics`].
//!
//! ```
//! assert_eq!(calc::evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
//!
//! let result = calc::evaluate_with_steps("2 + 3 * 4").unwrap();
//! let trace: Vec<String> = result.steps.iter().map(|s| s.to_string()).collect();
//! assert_eq!(trace, ["3 * 4 = 12", "2 + 12 = 14"]);
//! ```

pub mod calculator;
pub mod diagnostics;
pub mod error;

pub use calc_eval::{format_number, serialize_number, EvaluationResult, EvaluationStep};
pub use calc_lexer::{Associativity, LexPolicy, Location, Operator, OperatorTable};
pub use calc_parser::Postfix;
pub use calculator::Calculator;
pub use error::{ErrorKind, EvaluationError};

/// Evaluate `expression` with the standard operator table and strict lexing.
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    Calculator::default().evaluate(expression)
}

/// Evaluate `expression` and record every operator application.
pub fn evaluate_with_steps(expression: &str) -> Result<EvaluationResult, EvaluationError> {
    Calculator::default().evaluate_with_steps(expression)
}
