use thiserror::Error;

/// Every way an evaluation can fail. All kinds are terminal: evaluation is
/// deterministic, so retrying the same input yields the same error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum EvalError {
    /// Unmatched parentheses, unparseable operand text, an operator without
    /// two operands, or input below the minimum length.
    #[error("expression is not correct")]
    Syntax,

    #[error("division by zero")]
    DivisionByZero,

    /// The postfix stream left zero or more than one value on the stack.
    #[error("invalid expression")]
    InvalidExpression,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse evaluator config: {0}")]
    Parse(#[from] serde_json::Error),
}
