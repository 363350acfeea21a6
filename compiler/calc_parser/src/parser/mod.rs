//! Infix-to-postfix conversion using the shunting-yard algorithm.
//!
//! Tokens are consumed left to right with two transient stacks: the output
//! accumulator and an operator stack holding operators and open parentheses.
//! Binding strength comes entirely from the supplied [`OperatorTable`], so the
//! same routine serves the standard arithmetic table and any custom one.

mod error;
pub mod test_utils;

use std::fmt;

use calc_lexer::{Location, Operator, OperatorInfo, OperatorTable, Token, TokenType};
use log::trace;

#[cfg(feature = "serde")]
use serde::Serialize;

pub use error::{ConvertError, Paren};

/// A token in postfix order. Parentheses cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum PostfixToken {
    /// Push a value
    Number(f64),
    /// Pop two values, push the result
    Operator(Operator),
}

impl fmt::Display for PostfixToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostfixToken::Number(n) => write!(f, "{n}"),
            PostfixToken::Operator(op) => write!(f, "{op}"),
        }
    }
}

/// An ordered postfix (Reverse Polish) sequence.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Postfix {
    tokens: Vec<PostfixToken>,
}

impl Postfix {
    /// The tokens in evaluation order
    pub fn tokens(&self) -> &[PostfixToken] {
        &self.tokens
    }

    /// Iterate the tokens in evaluation order
    pub fn iter(&self) -> std::slice::Iter<'_, PostfixToken> {
        self.tokens.iter()
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of operator tokens
    pub fn operator_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, PostfixToken::Operator(_)))
            .count()
    }

    fn push(&mut self, token: PostfixToken) {
        trace!("postfix <- {token}");
        self.tokens.push(token);
    }
}

impl From<Vec<PostfixToken>> for Postfix {
    fn from(tokens: Vec<PostfixToken>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<PostfixToken> for Postfix {
    fn from_iter<I: IntoIterator<Item = PostfixToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Postfix {
    type Item = &'a PostfixToken;
    type IntoIter = std::slice::Iter<'a, PostfixToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Entries on the operator stack
#[derive(Debug, Clone, Copy)]
enum StackEntry {
    Operator(Operator, OperatorInfo),
    LeftParen(Location),
}

/// Convert infix tokens to postfix order.
///
/// Operators on the stack are popped to the output while they bind tighter
/// than the incoming operator, or equally tight when the incoming operator is
/// left-associative. Right-associative operators therefore stack up, so
/// `2 ^ 3 ^ 2` becomes `2 3 2 ^ ^`.
pub fn to_postfix<I>(tokens: I, table: &OperatorTable) -> Result<Postfix, ConvertError>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = Postfix::default();
    let mut stack: Vec<StackEntry> = Vec::new();

    for token in tokens {
        match token.token_type {
            TokenType::Number(n) => output.push(PostfixToken::Number(n)),

            TokenType::Operator(op) => {
                let info = *table.get(op).ok_or(ConvertError::UnknownOperator {
                    operator: op,
                    location: token.location,
                })?;

                while let Some(&StackEntry::Operator(top, top_info)) = stack.last() {
                    if !top_info.yields_to(&info) {
                        break;
                    }
                    stack.pop();
                    output.push(PostfixToken::Operator(top));
                }
                stack.push(StackEntry::Operator(op, info));
            }

            TokenType::LeftParen => stack.push(StackEntry::LeftParen(token.location)),

            TokenType::RightParen => loop {
                match stack.pop() {
                    Some(StackEntry::Operator(op, _)) => output.push(PostfixToken::Operator(op)),
                    Some(StackEntry::LeftParen(_)) => break,
                    None => {
                        return Err(ConvertError::MismatchedParentheses {
                            paren: Paren::Close,
                            location: token.location,
                        })
                    }
                }
            },
        }
    }

    while let Some(entry) = stack.pop() {
        match entry {
            StackEntry::Operator(op, _) => output.push(PostfixToken::Operator(op)),
            StackEntry::LeftParen(location) => {
                return Err(ConvertError::MismatchedParentheses {
                    paren: Paren::Open,
                    location,
                })
            }
        }
    }

    Ok(output)
}
