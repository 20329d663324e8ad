//! Benchmarks for benchdiff realignment performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks realign synthetic benchstat reports of varying size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic benchstat report with `tables` tables of `rows` rows.
fn create_test_report(tables: usize, rows: usize) -> String {
    let mut content = String::from("goos: linux\ngoarch: amd64\npkg: example.com/bench\n\n");

    for (index, unit) in ["sec/op", "B/op", "allocs/op"].iter().cycle().take(tables).enumerate() {
        content.push_str("```\n");
        content.push_str("                 │ old.txt │ new.txt │\n");
        content.push_str(&format!(
            "                 │ {} │ {} vs base │\n",
            unit, unit
        ));
        for row in 0..rows {
            let base = 100 + row * 7 + index;
            let new = base + (row % 5) * 9;
            content.push_str(&format!(
                "Case{}_{}-8   {}.0n ± 2%   {}.0n ± 1%   +{:.2}% (p=0.002 n=6)\n",
                index,
                row,
                base,
                new,
                (new - base) as f64 / base as f64 * 100.0
            ));
        }
        content.push_str("geomean   1.234µ   1.300µ   +5.35%\n");
        content.push_str("```\n\n");
    }

    content
}

/// Benchmark realignment at various report sizes.
fn bench_realign(c: &mut Criterion) {
    let mut group = c.benchmark_group("realign");
    let options = benchdiff::RealignOptions::default();

    for (tables, rows) in [(1, 10), (3, 50), (6, 200)].iter() {
        let report = create_test_report(*tables, *rows);

        group.bench_function(format!("{}x{}", tables, rows), |b| {
            b.iter(|| benchdiff::realign_text(black_box(&report), &options));
        });
    }

    group.finish();
}

/// Benchmark realigning an already realigned report.
fn bench_realign_fixed_point(c: &mut Criterion) {
    let options = benchdiff::RealignOptions::default();
    let report = benchdiff::realign_text(&create_test_report(3, 50), &options);

    c.bench_function("realign_fixed_point", |b| {
        b.iter(|| benchdiff::realign_text(black_box(&report), &options));
    });
}

/// Benchmark realigner construction overhead.
fn bench_realigner_creation(c: &mut Criterion) {
    c.bench_function("realigner_creation", |b| {
        b.iter(|| benchdiff::Realigner::new(benchdiff::RealignOptions::default()));
    });
}

criterion_group!(
    benches,
    bench_realign,
    bench_realign_fixed_point,
    bench_realigner_creation,
);
criterion_main!(benches);
