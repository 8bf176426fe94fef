use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::{build_operator_tree, DefaultNumericTypes};
use postfix_calc::postfix::{evaluate_postfix, to_postfix, tokenize};
use postfix_calc::{Evaluator, Tokenization};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let evaluator = Evaluator::default();

    let expr = "2 + 3 * 4";
    let postfix = to_postfix(&tokenize(expr, Tokenization::Numbers)).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("postfix_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("preconverted_postfix_arithmetic", |b| {
        b.iter(|| evaluate_postfix(black_box(&postfix)))
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0 + 3.0 * 4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let evaluator = Evaluator::default();

    let expr = "(10 + 20) * 3 / (4 - 1) + 5";
    let postfix = to_postfix(&tokenize(expr, Tokenization::Numbers)).unwrap();
    let precompiled_evalexpr = build_operator_tree::<DefaultNumericTypes>(expr).unwrap();

    group.bench_function("postfix_complex_arithmetic", |b| {
        b.iter(|| evaluator.evaluate(black_box(expr)))
    });

    group.bench_function("preconverted_postfix_complex_arithmetic", |b| {
        b.iter(|| evaluate_postfix(black_box(&postfix)))
    });

    group.bench_function("native_rust_complex_arithmetic", |b| {
        b.iter(|| black_box((10.0 + 20.0) * 3.0 / (4.0 - 1.0) + 5.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });

    group.bench_function("precompiled_evalexpr_arithmetic", |b| {
        b.iter(|| precompiled_evalexpr.eval().unwrap())
    });
}

/// Benchmark deeply nested parentheses
fn benchmark_nested_parentheses(c: &mut Criterion) {
    let mut group = c.benchmark_group("Nested parentheses Evaluation");
    let evaluator = Evaluator::default();

    let expr = format!("{}1 + 2{}", "(".repeat(100), ")".repeat(100));

    group.bench_function("postfix_nested", |b| {
        b.iter(|| evaluator.evaluate(black_box(&expr)))
    });

    group.bench_function("meval_nested", |b| {
        b.iter(|| meval::eval_str(black_box(&expr)).unwrap())
    });
}

/// Benchmark batch evaluation
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");
    let evaluator = Evaluator::default();

    let expressions: Vec<String> = (0..10_000)
        .map(|i| format!("({} + 7) * 3 / (2 - 1) - {}", i, i % 13))
        .collect();

    group.bench_function("parallel_batch", |b| {
        b.iter(|| evaluator.evaluate_batch(black_box(&expressions)))
    });

    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            expressions
                .iter()
                .map(|expr| evaluator.evaluate(black_box(expr)))
                .collect::<Vec<_>>()
        })
    });
}

/// Grouping benchmarks
criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_nested_parentheses,
    benchmark_batch,
);
criterion_main!(benches);
