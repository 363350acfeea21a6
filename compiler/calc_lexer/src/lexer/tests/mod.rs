
use crate::lexer::Lexer;
use crate::token::TokenType;

/// Collect token types, panicking on the first lex error.
pub(super) fn types(input: &str) -> Vec<TokenType> {
    Lexer::new(input)
        .map(|token| token.expect("lex error").token_type)
        .collect()
}
