use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coherence_core::{Choice, CoherenceEngine};

fn bench_scoring(c: &mut Criterion) {
    let engine = CoherenceEngine::default();

    let choices: Vec<Choice> = (0..1000)
        .map(|i| if i % 3 == 0 { Choice::B } else { Choice::A })
        .collect();
    c.bench_function("generate_report_1k", |b| {
        b.iter(|| engine.generate_report(black_box(&choices)).unwrap())
    });

    let symbols: Vec<&str> = (0..1000)
        .map(|i| if i % 3 == 0 { "B" } else { "A" })
        .collect();
    c.bench_function("report_from_symbols_1k", |b| {
        b.iter(|| engine.report_from_symbols(black_box(&symbols), None).unwrap())
    });
}

criterion_group!(benches, bench_scoring);
criterion_main!(benches);
