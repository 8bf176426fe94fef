use postfix_calc::postfix::{format_tokens, to_postfix, tokenize};
use postfix_calc::{Evaluator, Tokenization};

fn main() {
    pretty_env_logger::init();

    let evaluator = Evaluator::default();

    let expression = "(10 + 20) * 3 / (4 - 1) + 5";
    let tokens = tokenize(expression, Tokenization::Numbers);
    match to_postfix(&tokens) {
        Ok(postfix) => println!("Postfix: {}", format_tokens(&postfix)),
        Err(err) => println!("Error: {}", err),
    }

    match evaluator.evaluate(expression) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}
