//! Lexer implementation for arithmetic expressions
//! Converts source text into a lazy stream of positioned tokens

use logos::Logos;
use log::{debug, trace};
use thiserror::Error;

use crate::token::{Location, Operator, Token, TokenType};
use crate::LogosToken;

/// What the lexer does with characters it does not recognise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexPolicy {
    /// Report the first unrecognised character as a [`LexError`] and stop.
    #[default]
    Strict,
    /// Drop unrecognised characters and keep going.
    Lenient,
}

/// Errors produced while tokenizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token
    #[error("unexpected character '{character}' at {location}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Where it appears
        location: Location,
    },
}

impl LexError {
    /// Where the error occurred
    pub fn location(&self) -> Location {
        match self {
            LexError::UnexpectedCharacter { location, .. } => *location,
        }
    }
}

/// Tokenize `source` with the default (strict) policy.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

/// The main lexer struct that holds the state of the lexing process
pub struct Lexer<'a> {
    /// The source text being lexed
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The byte offset `line` and `column` refer to
    offset: usize,
    /// Unrecognised input handling
    policy: LexPolicy,
    /// Set once a strict error has been reported
    finished: bool,
    /// The inner Logos lexer
    inner: logos::Lexer<'a, LogosToken>,
}

impl<'a> Lexer<'a> {
    /// Create a new strict lexer for the given source
    pub fn new(source: &'a str) -> Self {
        Self::with_policy(source, LexPolicy::Strict)
    }

    /// Create a new lexer with an explicit policy
    pub fn with_policy(source: &'a str, policy: LexPolicy) -> Self {
        Self {
            source,
            line: 1,
            column: 1,
            offset: 0,
            policy,
            finished: false,
            inner: LogosToken::lexer(source),
        }
    }

    /// The policy this lexer was created with
    pub fn policy(&self) -> LexPolicy {
        self.policy
    }

    /// Advance line/column tracking to byte offset `target`.
    /// Counts characters, not bytes, so multi-byte input keeps columns right.
    fn sync_position_to(&mut self, target: usize) {
        let text = self.source.get(self.offset..target).unwrap_or("");

        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else if c == '\r' {
                // \r\n counts as a single line break
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.offset = target;
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }

    /// Convert a LogosToken to our semantic TokenType
    fn convert_token(logos_token: LogosToken) -> Option<TokenType> {
        let token_type = match logos_token {
            LogosToken::Number(n) => TokenType::Number(n),

            LogosToken::Plus => TokenType::Operator(Operator::Add),
            LogosToken::Minus => TokenType::Operator(Operator::Sub),
            LogosToken::Star => TokenType::Operator(Operator::Mul),
            LogosToken::Slash => TokenType::Operator(Operator::Div),
            LogosToken::Caret => TokenType::Operator(Operator::Pow),

            LogosToken::LeftParen => TokenType::LeftParen,
            LogosToken::RightParen => TokenType::RightParen,

            // Skipped by the logos callback; never actually emitted
            LogosToken::Whitespace => return None,
        };
        Some(token_type)
    }

    /// Get the next token from the source text
    pub fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        loop {
            if self.finished {
                return None;
            }

            let raw = self.inner.next()?;
            let span = self.inner.span();

            match raw {
                Ok(logos_token) => {
                    let Some(token_type) = Self::convert_token(logos_token) else {
                        continue;
                    };
                    self.sync_position_to(span.start);
                    let token = Token::new(token_type, self.location(), span.len());
                    trace!("token {token}");
                    return Some(Ok(token));
                }
                Err(()) => {
                    let Some(character) = self
                        .source
                        .get(span.start..)
                        .and_then(|rest| rest.chars().next())
                    else {
                        // Span fell inside a multi-byte character already reported
                        continue;
                    };

                    match self.policy {
                        LexPolicy::Lenient => {
                            debug!("skipping unrecognised character {character:?} at byte {}", span.start);
                        }
                        LexPolicy::Strict => {
                            self.sync_position_to(span.start);
                            self.finished = true;
                            return Some(Err(LexError::UnexpectedCharacter {
                                character,
                                location: self.location(),
                            }));
                        }
                    }
                }
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl std::iter::FusedIterator for Lexer<'_> {}

// Include the test module
#[cfg(test)]
mod tests;
