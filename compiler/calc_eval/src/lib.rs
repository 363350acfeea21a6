//! Postfix evaluation for the calc arithmetic evaluator.
//!
//! A single stack machine evaluates a [`Postfix`](calc_parser::Postfix)
//! sequence and can optionally record one [`EvaluationStep`] per operator
//! application.

pub mod error;
pub mod evaluator;
pub mod step;

pub use error::EvalError;
pub use evaluator::{evaluate, EvaluationResult};
pub use step::{format_number, EvaluationStep};
#[cfg(feature = "serde")]
pub use step::serialize_number;
