use crate::config::Tokenization;
use crate::postfix::{Operator, Token, TokenKind};
use log::trace;

/// Classifies a single symbol unit. Anything that is not an operator or a
/// parenthesis is operand text; whether it is numeric is decided later.
pub fn classify(symbol: &str) -> TokenKind {
    match symbol {
        "(" => TokenKind::LeftParen,
        ")" => TokenKind::RightParen,
        _ if Operator::try_from(symbol).is_ok() => TokenKind::Operator,
        _ => TokenKind::Operand,
    }
}

pub fn tokenize(expression: &str, mode: Tokenization) -> Vec<Token> {
    let tokens = match mode {
        Tokenization::Numbers => scan_runs(expression),
        Tokenization::Characters => split_characters(expression),
    };
    trace!("tokenized {expression:?} into {} tokens", tokens.len());
    tokens
}

fn split_characters(expression: &str) -> Vec<Token> {
    let mut buf = [0u8; 4];
    expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Token::from_symbol(c.encode_utf8(&mut buf)))
        .collect()
}

fn scan_runs(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut operand = String::new();
    let mut buf = [0u8; 4];

    for c in expression.chars() {
        let symbol = c.encode_utf8(&mut buf);
        let starts_new_token = c.is_whitespace() || classify(symbol) != TokenKind::Operand;

        if starts_new_token {
            if !operand.is_empty() {
                tokens.push(Token::Operand(std::mem::take(&mut operand)));
            }
            if !c.is_whitespace() {
                tokens.push(Token::from_symbol(symbol));
            }
        } else {
            operand.push(c);
        }
    }

    if !operand.is_empty() {
        tokens.push(Token::Operand(operand));
    }
    tokens
}
