use postfix_calc::service::{CalculateService, CALCULATE_PATH, DEFAULT_PORT};
use postfix_calc::{Evaluator, EvaluatorConfig};
use std::io::Read;

/// Feeds a JSON body from stdin through the calculate contract, e.g.
/// `echo '{"expression": "2*3-4"}' | cargo run --example calculate_service`.
/// An optional first argument is a JSON evaluator config.
fn main() {
    pretty_env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(raw) => match EvaluatorConfig::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(2);
            }
        },
        None => EvaluatorConfig::default(),
    };

    let mut body = Vec::new();
    if let Err(err) = std::io::stdin().read_to_end(&mut body) {
        eprintln!("Failed to read request body: {}", err);
        std::process::exit(1);
    }

    let service = CalculateService::new(Evaluator::new(config));
    let response = service.handle("POST", &body);
    println!(
        "POST localhost:{}{} -> {}",
        DEFAULT_PORT, CALCULATE_PATH, response.status
    );
    println!("{}", response.body);
}
