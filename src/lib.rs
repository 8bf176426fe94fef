pub mod calculator;
pub mod config;
pub mod error;
pub mod postfix;
pub mod service;

pub use calculator::Evaluator;
pub use config::{EvaluatorConfig, Tokenization};
pub use error::{ConfigError, EvalError};

/// Evaluates an arithmetic expression with the default configuration.
///
/// ```
/// assert_eq!(postfix_calc::evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(postfix_calc::evaluate("10 / 0"), Err(postfix_calc::EvalError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvalError> {
    Evaluator::default().evaluate(expression)
}
