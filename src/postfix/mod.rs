use crate::error::EvalError;
use std::fmt;

mod converter;
mod evaluator;
mod tokenizer;

pub use converter::to_postfix;
pub use evaluator::evaluate_postfix;
pub use tokenizer::{classify, tokenize};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Operand,
    Operator,
    LeftParen,
    RightParen,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Raw operand text, parsed as a number only at evaluation time.
    Operand(String),
    Operator(Operator),
    LeftParen,
    RightParen,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Operand(_) => TokenKind::Operand,
            Token::Operator(_) => TokenKind::Operator,
            Token::LeftParen => TokenKind::LeftParen,
            Token::RightParen => TokenKind::RightParen,
        }
    }

    /// Builds a token from a single symbol unit, using `classify` to pick the kind.
    pub fn from_symbol(symbol: &str) -> Token {
        match classify(symbol) {
            TokenKind::LeftParen => Token::LeftParen,
            TokenKind::RightParen => Token::RightParen,
            TokenKind::Operator => match Operator::try_from(symbol) {
                Ok(op) => Token::Operator(op),
                Err(_) => Token::Operand(symbol.to_string()),
            },
            TokenKind::Operand => Token::Operand(symbol.to_string()),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operand(text) => f.write_str(text),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LeftParen => f.write_str("("),
            Token::RightParen => f.write_str(")"),
        }
    }
}

/// Renders a token sequence space-separated, e.g. `2 3 + 4 *`.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The operator table. Symbols and precedences are fixed at compile time and
/// shared read-only by every evaluation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    pub const fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Higher binds tighter.
    pub const fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide => 2,
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Operator> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Fails with [`EvalError::DivisionByZero`] for any zero divisor, and with
    /// [`EvalError::InvalidExpression`] when the result overflows `f64`.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        let result = match self {
            Operator::Add => left + right,
            Operator::Subtract => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                left / right
            }
        };
        if result.is_finite() {
            Ok(result)
        } else {
            Err(EvalError::InvalidExpression)
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_symbol(c).ok_or_else(|| format!("Unknown operator: {}", value))
            }
            _ => Err(format!("Unknown operator: {}", value)),
        }
    }
}
