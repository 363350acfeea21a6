//! Raw token definitions recognised by the `logos` state machine.

use logos::Logos;

fn parse_number(lex: &mut logos::Lexer<'_, LogosToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Raw tokens before position tracking is attached.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum LogosToken {
    /// Decimal literal: digits with an optional fractional part.
    /// No exponent, no sign and no bare leading or trailing dot.
    #[regex(r"[0-9]+", parse_number)]
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    Number(f64),

    // Operators
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,

    // Delimiters
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,

    /// Whitespace (skipped)
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Whitespace,
}
