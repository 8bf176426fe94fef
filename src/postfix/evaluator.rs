use crate::error::EvalError;
use crate::postfix::{Operator, Token};
use log::trace;

/// Evaluates a postfix token sequence with a value stack.
pub fn evaluate_postfix(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        match token {
            Token::Operand(text) => {
                let value = parse_operand(text)?;
                trace!("push {value}");
                stack.push(value);
            }
            Token::Operator(op) => binary_op(&mut stack, *op)?,
            Token::LeftParen | Token::RightParen => {
                trace!("parenthesis in postfix input");
                return Err(EvalError::Syntax);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        values => {
            trace!("{} values left on the stack", values.len());
            Err(EvalError::InvalidExpression)
        }
    }
}

fn binary_op(stack: &mut Vec<f64>, op: Operator) -> Result<(), EvalError> {
    if stack.len() < 2 {
        trace!("{} needs two operands, stack has {}", op.symbol(), stack.len());
        return Err(EvalError::Syntax);
    }
    let b = stack.pop().ok_or(EvalError::Syntax)?;
    let a = stack.pop().ok_or(EvalError::Syntax)?;
    let result = op.apply(a, b)?;
    trace!("{a} {} {b} = {result}", op.symbol());
    stack.push(result);
    Ok(())
}

/// Accepts plain decimal literals only: digits with at most one `.`.
/// Exponents, signs, `inf` and `NaN` are rejected even though `f64::from_str`
/// would take them, and so is a digit run too large to be a finite `f64`.
fn parse_operand(text: &str) -> Result<f64, EvalError> {
    let mut digits = 0;
    let mut points = 0;
    for c in text.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => points += 1,
            _ => return Err(EvalError::Syntax),
        }
    }
    if digits == 0 || points > 1 {
        return Err(EvalError::Syntax);
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            trace!("operand {text:?} is out of range");
            Err(EvalError::Syntax)
        }
    }
}
