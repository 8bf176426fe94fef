use crate::error::EvalError;
use crate::postfix::Token;
use log::trace;

/// Converts an infix token sequence to postfix order (shunting-yard).
///
/// Operators of equal precedence are popped before the incoming one is
/// pushed, which makes all four operators left-associative.
///
/// Fails with [`EvalError::Syntax`] on an unmatched `(` or `)`.
pub fn to_postfix(tokens: &[Token]) -> Result<Vec<Token>, EvalError> {
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::LeftParen => stack.push(Token::LeftParen),

            Token::RightParen => loop {
                match stack.pop() {
                    Some(Token::LeftParen) => break,
                    Some(top) => output.push(top),
                    None => {
                        trace!("unmatched closing parenthesis");
                        return Err(EvalError::Syntax);
                    }
                }
            },

            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if op.precedence() > top.precedence() {
                        break;
                    }
                    trace!("pop {} before {}", top.symbol(), op.symbol());
                    output.push(Token::Operator(*top));
                    stack.pop();
                }
                stack.push(Token::Operator(*op));
            }

            Token::Operand(_) => output.push(token.clone()),
        }
    }

    while let Some(top) = stack.pop() {
        if top == Token::LeftParen {
            trace!("unmatched opening parenthesis");
            return Err(EvalError::Syntax);
        }
        output.push(top);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tokenization;
    use crate::postfix::{format_tokens, tokenize};

    fn postfix(expr: &str) -> Result<String, EvalError> {
        let tokens = tokenize(expr, Tokenization::Numbers);
        to_postfix(&tokens).map(|out| format_tokens(&out))
    }

    #[test]
    fn test_simple_addition() {
        assert_eq!(postfix("1+1"), Ok("1 1 +".to_string()));
    }

    #[test]
    fn test_precedence() {
        assert_eq!(postfix("2*3-4"), Ok("2 3 * 4 -".to_string()));
        assert_eq!(postfix("2-3*4"), Ok("2 3 4 * -".to_string()));
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(postfix("8-4-2"), Ok("8 4 - 2 -".to_string()));
        assert_eq!(postfix("8/4*2"), Ok("8 4 / 2 *".to_string()));
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(postfix("(2+3)*4"), Ok("2 3 + 4 *".to_string()));
        assert_eq!(postfix("8-(4-2)"), Ok("8 4 2 - -".to_string()));
    }

    #[test]
    fn test_deep_nesting() {
        let expr = format!("{}1+2{}", "(".repeat(64), ")".repeat(64));
        assert_eq!(postfix(&expr), Ok("1 2 +".to_string()));
    }

    #[test]
    fn test_unmatched_opening_parenthesis() {
        assert_eq!(postfix("(1+2"), Err(EvalError::Syntax));
        assert_eq!(postfix("((1)"), Err(EvalError::Syntax));
    }

    #[test]
    fn test_unmatched_closing_parenthesis() {
        assert_eq!(postfix("1+2)"), Err(EvalError::Syntax));
        assert_eq!(postfix(")("), Err(EvalError::Syntax));
    }

    #[test]
    fn test_structural_only() {
        // operand counts are checked by the evaluator, not here
        assert_eq!(postfix("1+"), Ok("1 +".to_string()));
        assert_eq!(postfix("1 2"), Ok("1 2".to_string()));
        assert_eq!(postfix("()"), Ok("".to_string()));
    }
}
