use calc_eval::EvalError;
use calc_lexer::{LexError, Location};
use calc_parser::ConvertError;
use serde::Serialize;
use thiserror::Error;

/// Any failure while evaluating an expression.
///
/// Each pipeline stage keeps its own error type; this wraps them so callers
/// can propagate with `?` and still branch on [`ErrorKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The tokenizer rejected the input
    #[error(transparent)]
    Lex(#[from] LexError),

    /// Infix-to-postfix conversion failed
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The postfix sequence could not be evaluated
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Flat classification of [`EvaluationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// Unrecognised character in strict mode
    Lex,
    /// Unbalanced `(` or `)`
    MismatchedParentheses,
    /// An operator lacked an operand
    StackUnderflow,
    /// Evaluation did not end with exactly one value
    InvalidExpression,
    /// An operator missing from the operator table
    UnknownOperator,
}

impl EvaluationError {
    /// The kind of failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            EvaluationError::Lex(_) => ErrorKind::Lex,
            EvaluationError::Convert(ConvertError::MismatchedParentheses { .. }) => {
                ErrorKind::MismatchedParentheses
            }
            EvaluationError::Convert(ConvertError::UnknownOperator { .. }) => {
                ErrorKind::UnknownOperator
            }
            EvaluationError::Eval(EvalError::StackUnderflow { .. }) => ErrorKind::StackUnderflow,
            EvaluationError::Eval(EvalError::InvalidExpression { .. }) => {
                ErrorKind::InvalidExpression
            }
        }
    }

    /// Source location of the failure, when it can be pinned to one.
    ///
    /// Evaluation errors happen after positions are gone and return `None`.
    pub fn location(&self) -> Option<Location> {
        match self {
            EvaluationError::Lex(e) => Some(e.location()),
            EvaluationError::Convert(e) => Some(e.location()),
            EvaluationError::Eval(_) => None,
        }
    }
}
