//! Benchmarks for the SimpleInt evaluator.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. tokenize: lexer throughput on its own
//! 2. evaluate: lexing and evaluation together
//! 3. functions: `sqrt` and the series-based logarithms

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use simpleint_core::{
    evaluator::{EvaluatorOptions, evaluate_with_options},
    lexer::tokenize,
    stdlib::math,
};

/// Generate an arithmetic expression like "1 + 1 + 1 + ... + 1" with `n` additions.
fn generate_arithmetic_chain(n: usize) -> String {
    let mut expr = String::from("1");
    for _ in 0..n {
        expr.push_str(" + 1");
    }
    expr
}

/// Generate `n` levels of parentheses around a multiplication.
fn generate_nested(n: usize) -> String {
    format!("{}2 * 3{}", "(".repeat(n), ")".repeat(n))
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for size in [100, 200, 400, 800] {
        group.throughput(Throughput::Elements(size as u64));
        let source = generate_arithmetic_chain(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, source| {
            b.iter(|| {
                let tokens = tokenize(black_box(source)).expect("Tokenize failed");
                black_box(tokens.len())
            });
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for size in [100, 200, 400, 800] {
        group.throughput(Throughput::Elements(size as u64));
        let source = generate_arithmetic_chain(size);

        group.bench_with_input(BenchmarkId::new("chain", size), &source, |b, source| {
            b.iter(|| {
                let value = evaluate_with_options(black_box(source), EvaluatorOptions::default())
                    .expect("Eval failed")
                    .as_int()
                    .expect("Expected int");
                black_box(value)
            });
        });
    }

    // Stay under the default depth limit.
    for depth in [16, 64, 120] {
        let source = generate_nested(depth);
        group.bench_with_input(BenchmarkId::new("nested", depth), &source, |b, source| {
            b.iter(|| {
                let value = evaluate_with_options(black_box(source), EvaluatorOptions::default())
                    .expect("Eval failed");
                black_box(value)
            });
        });
    }

    group.finish();
}

fn bench_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("functions");

    group.bench_function("sqrt", |b| b.iter(|| math::sqrt(black_box(12345.0))));
    group.bench_function("ln", |b| b.iter(|| math::ln(black_box(12345.0))));
    group.bench_function("log10", |b| b.iter(|| math::log(black_box(12345.0), 10.0)));
    group.bench_function("std_ln", |b| b.iter(|| black_box(12345.0f64).ln()));

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_evaluate, bench_functions);
criterion_main!(benches);
