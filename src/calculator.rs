use crate::config::EvaluatorConfig;
use crate::error::EvalError;
use crate::postfix::{evaluate_postfix, format_tokens, to_postfix, tokenize};
use log::debug;
use rayon::prelude::*;

/// Runs the tokenize → postfix → evaluate pipeline.
///
/// Holds only its configuration, so a single `Evaluator` can be shared across
/// threads and called concurrently without locking.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluates an infix expression such as `(2 + 3) * 4`.
    ///
    /// # Returns
    ///
    /// * `Ok(f64)` with the value of the expression.
    /// * `Err(EvalError)` with the first error encountered. No partial result
    ///   is ever returned.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        debug!("Evaluating expression: {:?}", expression);
        let result = self.run(expression);
        match &result {
            Ok(value) => debug!("Result: {}", value),
            Err(err) => debug!("Evaluation failed: {}", err),
        }
        result
    }

    fn run(&self, expression: &str) -> Result<f64, EvalError> {
        // raw character count, not token count
        if expression.trim().chars().count() < self.config.min_length {
            return Err(EvalError::Syntax);
        }

        let tokens = tokenize(expression, self.config.tokenization);
        let postfix = to_postfix(&tokens)?;
        debug!("Postfix: {}", format_tokens(&postfix));
        evaluate_postfix(&postfix)
    }

    /// Evaluates many expressions in parallel. Results are in input order.
    pub fn evaluate_batch<S>(&self, expressions: &[S]) -> Vec<Result<f64, EvalError>>
    where
        S: AsRef<str> + Sync,
    {
        expressions
            .par_iter()
            .map(|expression| self.evaluate(expression.as_ref()))
            .collect()
    }
}
