use std::fmt;

use calc_lexer::{Location, Operator};
use thiserror::Error;

/// Which side of a parenthesis pair is missing its partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paren {
    /// A `(` that is never closed
    Open,
    /// A `)` with no `(` before it
    Close,
}

impl fmt::Display for Paren {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Paren::Open => f.write_str("'(' is never closed"),
            Paren::Close => f.write_str("')' has no matching '('"),
        }
    }
}

/// Errors that can occur while converting infix tokens to postfix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// Unbalanced parentheses
    #[error("mismatched parentheses: {paren} at {location}")]
    MismatchedParentheses {
        /// The unmatched parenthesis
        paren: Paren,
        /// Where it appears
        location: Location,
    },

    /// An operator with no entry in the operator table
    #[error("unknown operator '{operator}' at {location}")]
    UnknownOperator {
        /// The operator that could not be looked up
        operator: Operator,
        /// Where it appears
        location: Location,
    },
}

impl ConvertError {
    /// Where the error occurred
    pub fn location(&self) -> Location {
        match self {
            ConvertError::MismatchedParentheses { location, .. }
            | ConvertError::UnknownOperator { location, .. } => *location,
        }
    }
}
