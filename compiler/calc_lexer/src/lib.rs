//! Lexical analysis for the calc arithmetic evaluator
//!
//! This crate turns expression text into a lazy stream of [`Token`]s and owns
//! the [`OperatorTable`] that the converter and evaluator consult.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod lexer;
pub mod logos_token;
pub mod operators;
pub mod token;

// Re-export the main types for convenience
pub use lexer::{tokenize, LexError, LexPolicy, Lexer};
pub use logos_token::LogosToken;
pub use operators::{Associativity, OperatorInfo, OperatorTable, STANDARD_OPERATORS};
pub use token::{Location, Operator, Token, TokenType};
