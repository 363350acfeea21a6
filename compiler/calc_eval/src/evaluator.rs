use calc_parser::{Postfix, PostfixToken};
use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::error::EvalError;
use crate::step::EvaluationStep;

/// The value of an expression plus, when requested, how it was reached.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EvaluationResult {
    /// Final value
    #[cfg_attr(
        feature = "serde",
        serde(serialize_with = "crate::step::serialize_number")
    )]
    pub value: f64,
    /// One entry per operator application, in postfix order.
    /// Empty unless steps were recorded.
    pub steps: Vec<EvaluationStep>,
}

/// Evaluate a postfix sequence on a value stack.
///
/// Each operator pops its right operand, then its left operand, and pushes
/// the result. With `record_steps` set, every application is appended to
/// [`EvaluationResult::steps`]; otherwise that list stays empty and nothing
/// is allocated for it.
pub fn evaluate(postfix: &Postfix, record_steps: bool) -> Result<EvaluationResult, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());
    let mut steps = Vec::new();
    if record_steps {
        steps.reserve_exact(postfix.operator_count());
    }

    for (index, token) in postfix.iter().enumerate() {
        match *token {
            PostfixToken::Number(n) => stack.push(n),
            PostfixToken::Operator(operator) => {
                let underflow = EvalError::StackUnderflow { operator, index };
                let operand2 = stack.pop().ok_or(underflow)?;
                let operand1 = stack.pop().ok_or(underflow)?;

                let step = EvaluationStep::apply(operand1, operator, operand2);
                trace!("{step}");
                stack.push(step.result);
                if record_steps {
                    steps.push(step);
                }
            }
        }
    }

    match stack.as_slice() {
        [value] => {
            debug!("evaluated {} tokens to {value}", postfix.len());
            Ok(EvaluationResult {
                value: *value,
                steps,
            })
        }
        rest => Err(EvalError::InvalidExpression {
            remaining: rest.len(),
        }),
    }
}
