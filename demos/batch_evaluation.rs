use postfix_calc::Evaluator;

fn main() {
    pretty_env_logger::init();

    let expressions = vec!["1 + 1", "2 * 3 - 4", "(2 + 3) * 4", "10 / 0", "(1 + 2", "8 - 4 - 2"];

    let evaluator = Evaluator::default();
    let results = evaluator.evaluate_batch(&expressions);
    for (expression, result) in expressions.iter().zip(results) {
        match result {
            Ok(value) => println!("{} = {}", expression, value),
            Err(err) => println!("{} -> {}", expression, err),
        }
    }
}
