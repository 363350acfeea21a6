use calc_lexer::Operator;
use thiserror::Error;

/// Errors raised while running a postfix sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator found fewer than two operands on the stack
    #[error("stack underflow: '{operator}' at postfix position {index} needs two operands")]
    StackUnderflow {
        /// The operator being applied
        operator: Operator,
        /// Its index in the postfix sequence
        index: usize,
    },

    /// The stack did not end with exactly one value
    #[error("invalid expression: evaluation left {remaining} values on the stack, expected 1")]
    InvalidExpression {
        /// How many values were left
        remaining: usize,
    },
}
