//! Criterion benchmarks for the interestingness evaluator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ruleminer_core::types::FrequencyCombo;
use ruleminer_measures::InterestingnessEvaluator;

fn bench_evaluate_single(c: &mut Criterion) {
    let evaluator = InterestingnessEvaluator::new();
    let combo = FrequencyCombo::new(50, 20, 10);

    c.bench_function("evaluate_32_measures", |bench| {
        bench.iter(|| evaluator.evaluate(black_box(&combo), black_box(100)));
    });
}

fn bench_evaluate_and_format_10k(c: &mut Criterion) {
    let evaluator = InterestingnessEvaluator::new();
    let combos: Vec<FrequencyCombo> = (0..10_000u64)
        .map(|i| FrequencyCombo::new(100 + i % 400, 50 + i % 300, i % 50))
        .collect();

    c.bench_function("evaluate_and_format_10k_rules", |bench| {
        bench.iter(|| {
            let mut bytes = 0;
            for combo in &combos {
                let values = evaluator.evaluate(combo, 1_000);
                bytes += evaluator.format_line("a,b>c", &values).len();
            }
            black_box(bytes)
        });
    });
}

criterion_group!(benches, bench_evaluate_single, bench_evaluate_and_format_10k);
criterion_main!(benches);
