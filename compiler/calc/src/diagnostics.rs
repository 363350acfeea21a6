//! Human-readable error reports.
//!
//! The engine only produces typed errors; this module turns them into
//! messages with a help line and renders a caret under the offending source.

use calc_eval::EvalError;
use calc_lexer::{LexError, Location};
use calc_parser::{ConvertError, Paren};

use crate::error::{ErrorKind, EvaluationError};

/// A user-facing description of an evaluation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Which stage failed and how
    pub kind: ErrorKind,
    /// One-line summary shown after `error:`
    pub message: String,
    /// Where in the source the error points, if anywhere
    pub location: Option<Location>,
    /// A hint for fixing the expression
    pub help: Option<String>,
}

impl Diagnostic {
    /// Describe `error` for a person reading the expression
    pub fn from_error(error: &EvaluationError) -> Self {
        let (message, help) = message_for_error(error);
        Self {
            kind: error.kind(),
            message,
            location: error.location(),
            help,
        }
    }
}

impl From<&EvaluationError> for Diagnostic {
    fn from(error: &EvaluationError) -> Self {
        Self::from_error(error)
    }
}

fn message_for_error(error: &EvaluationError) -> (String, Option<String>) {
    match error {
        EvaluationError::Lex(LexError::UnexpectedCharacter { character, .. }) => (
            format!("unexpected character '{character}'"),
            Some("Expressions may only contain numbers, '+ - * / ^' and parentheses".to_string()),
        ),
        EvaluationError::Convert(ConvertError::MismatchedParentheses { paren, .. }) => {
            let help = match paren {
                Paren::Open => "Did you forget a matching ')' later?",
                Paren::Close => "Did you forget a matching '(' earlier?",
            };
            (
                format!("mismatched parentheses: {paren}"),
                Some(help.to_string()),
            )
        }
        EvaluationError::Convert(ConvertError::UnknownOperator { operator, .. }) => (
            format!("operator '{operator}' is not supported here"),
            None,
        ),
        EvaluationError::Eval(EvalError::StackUnderflow { operator, .. }) => (
            format!("operator '{operator}' is missing an operand"),
            Some("Every operator needs a number on each side; negative numbers are written as (0 - n)".to_string()),
        ),
        EvaluationError::Eval(EvalError::InvalidExpression { remaining: 0 }) => (
            "empty expression".to_string(),
            Some("Enter an expression such as '2 + 3 * 4'".to_string()),
        ),
        EvaluationError::Eval(EvalError::InvalidExpression { remaining }) => (
            format!("{remaining} values are not joined by operators"),
            Some("Put an operator between neighbouring numbers, e.g. '2 * 3' instead of '2 3'".to_string()),
        ),
    }
}

/// Render `diagnostic` against the `source` it came from.
///
/// ```text
/// error: mismatched parentheses: '(' is never closed
///  --> 1:1
///   |
/// 1 | (2 + 3
///   | ^
///   = help: Did you forget a matching ')' later?
/// ```
pub fn render_snippet(diagnostic: &Diagnostic, source: &str) -> String {
    let mut out = format!("error: {}", diagnostic.message);

    let snippet = diagnostic.location.and_then(|location| {
        let line = source_lines(source).nth(location.line.checked_sub(1)?)?;
        Some((location, line))
    });

    let gutter = match snippet {
        Some((location, line)) => {
            let number = location.line.to_string();
            let pad = " ".repeat(number.len());
            let caret_pad = " ".repeat(location.column.saturating_sub(1));
            out.push_str(&format!("\n{pad}--> {location}"));
            out.push_str(&format!("\n{pad} |"));
            out.push_str(&format!("\n{number} | {line}"));
            out.push_str(&format!("\n{pad} | {caret_pad}^"));
            pad
        }
        None => String::new(),
    };

    if let Some(help) = &diagnostic.help {
        out.push_str(&format!("\n{gutter} = help: {help}"));
    }
    out
}

/// Split on `\n`, `\r\n` and lone `\r`, the line breaks the lexer counts
fn source_lines(source: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(source);
    std::iter::from_fn(move || {
        let text = rest?;
        match text.find(['\n', '\r']) {
            Some(end) => {
                let skip = if text[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = Some(&text[end + skip..]);
                Some(&text[..end])
            }
            None => {
                rest = None;
                Some(text)
            }
        }
    })
}
