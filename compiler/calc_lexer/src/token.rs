//! Token, operator and source-location types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Represents a token's location in the source text.
///
/// Line and column are 1-based and count characters, not bytes; the offset
/// is the 0-based byte offset from the start of the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number
    pub column: usize,
    /// The 0-based byte offset from the start of the source
    pub offset: usize,
}

impl Location {
    /// Location of the first character of a source.
    pub const START: Location = Location {
        line: 1,
        column: 1,
        offset: 0,
    };
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The binary operators understood by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Operator {
    /// `+`
    #[cfg_attr(feature = "serde", serde(rename = "+"))]
    Add,
    /// `-`
    #[cfg_attr(feature = "serde", serde(rename = "-"))]
    Sub,
    /// `*`
    #[cfg_attr(feature = "serde", serde(rename = "*"))]
    Mul,
    /// `/`
    #[cfg_attr(feature = "serde", serde(rename = "/"))]
    Div,
    /// `^`
    #[cfg_attr(feature = "serde", serde(rename = "^"))]
    Pow,
}

impl Operator {
    /// Every operator, in symbol order `+ - * / ^`.
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Pow,
    ];

    /// The source symbol of this operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Pow => '^',
        }
    }

    /// Look up an operator by its source symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            '^' => Some(Operator::Pow),
            _ => None,
        }
    }

    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN, and `^` behaves exactly like
    /// [`f64::powf`], including NaN for a negative base with a fractional
    /// exponent. Nothing here fails.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
            Operator::Pow => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The kind of a token, with its payload.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TokenType {
    /// A numeric literal
    Number(f64),
    /// A binary operator
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenType::Number(n) => write!(f, "{n}"),
            TokenType::Operator(op) => write!(f, "{op}"),
            TokenType::LeftParen => f.write_str("("),
            TokenType::RightParen => f.write_str(")"),
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Token {
    /// What the token is
    pub token_type: TokenType,
    /// Where the token starts
    pub location: Location,
    /// Length of the lexeme in bytes
    pub len: usize,
}

impl Token {
    /// Create a new token
    pub fn new(token_type: TokenType, location: Location, len: usize) -> Self {
        Self {
            token_type,
            location,
            len,
        }
    }

    /// The operator carried by this token, if it is one.
    pub fn operator(&self) -> Option<Operator> {
        match self.token_type {
            TokenType::Operator(op) => Some(op),
            _ => None,
        }
    }

    /// The source text this token was read from.
    ///
    /// Returns `None` if `source` is not the text the token came from.
    pub fn lexeme<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.location.offset..self.location.offset + self.len)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.token_type, self.location)
    }
}
