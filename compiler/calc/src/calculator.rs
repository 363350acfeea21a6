use calc_eval::{evaluate, EvaluationResult};
use calc_lexer::{LexError, LexPolicy, Lexer, OperatorTable, STANDARD_OPERATORS};
use calc_parser::{to_postfix, Postfix};
use log::debug;

use crate::error::EvaluationError;

/// Evaluation configuration: which operators exist and how strictly to lex.
///
/// A `Calculator` only borrows its operator table, so one table can back any
/// number of calculators across threads.
#[derive(Debug, Clone, Copy)]
pub struct Calculator<'a> {
    table: &'a OperatorTable,
    policy: LexPolicy,
}

impl Default for Calculator<'static> {
    fn default() -> Self {
        Self::new(&STANDARD_OPERATORS)
    }
}

impl<'a> Calculator<'a> {
    /// A strict calculator over `table`
    pub fn new(table: &'a OperatorTable) -> Self {
        Self {
            table,
            policy: LexPolicy::Strict,
        }
    }

    /// Returns the calculator with a different lexing policy
    pub fn with_policy(mut self, policy: LexPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The operator table in use
    pub fn table(&self) -> &'a OperatorTable {
        self.table
    }

    /// The lexing policy in use
    pub fn policy(&self) -> LexPolicy {
        self.policy
    }

    /// Tokenize and convert `expression` to postfix order.
    ///
    /// Tokens stream straight from the lexer into the converter. A lex error
    /// ends the stream early and takes priority over whatever the converter
    /// made of the truncated input.
    pub fn postfix(&self, expression: &str) -> Result<Postfix, EvaluationError> {
        let mut lex_error: Option<LexError> = None;
        let tokens = Lexer::with_policy(expression, self.policy)
            .map_while(|token| token.map_err(|e| lex_error = Some(e)).ok());

        let converted = to_postfix(tokens, self.table);
        if let Some(e) = lex_error {
            return Err(e.into());
        }
        Ok(converted?)
    }

    /// Evaluate `expression` to a number
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvaluationError> {
        self.run(expression, false).map(|result| result.value)
    }

    /// Evaluate `expression`, recording one step per operator application
    pub fn evaluate_with_steps(&self, expression: &str) -> Result<EvaluationResult, EvaluationError> {
        self.run(expression, true)
    }

    fn run(&self, expression: &str, record_steps: bool) -> Result<EvaluationResult, EvaluationError> {
        let postfix = self.postfix(expression)?;
        debug!("{expression:?} -> [{postfix}]");
        Ok(evaluate(&postfix, record_steps)?)
    }
}
