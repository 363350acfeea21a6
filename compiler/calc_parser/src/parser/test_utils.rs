//! Test utilities for the converter

// This module is only used for testing purposes
#![allow(dead_code)]

use calc_lexer::{Lexer, Location, Operator, Token, TokenType, STANDARD_OPERATORS};

use super::{to_postfix, ConvertError};

/// Lex `input` strictly, panicking on a lex error
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input)
        .collect::<Result<_, _>>()
        .unwrap_or_else(|e| panic!("failed to tokenize {input:?}: {e}"))
}

/// Creates a token with default location for testing
pub fn create_token(token_type: TokenType) -> Token {
    Token::new(token_type, Location::START, 1)
}

/// Creates a number token for testing
pub fn create_number(value: f64) -> Token {
    create_token(TokenType::Number(value))
}

/// Creates an operator token for testing
pub fn create_operator(symbol: char) -> Token {
    let op = Operator::from_symbol(symbol)
        .unwrap_or_else(|| panic!("not an operator: {symbol:?}"));
    create_token(TokenType::Operator(op))
}

/// Convert `input` with the standard table and render the result as RPN text
pub fn rpn(input: &str) -> Result<String, ConvertError> {
    to_postfix(tokenize(input), &STANDARD_OPERATORS).map(|postfix| postfix.to_string())
}
