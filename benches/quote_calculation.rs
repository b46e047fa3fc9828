//! Benchmarks for selection validation and quote pricing.

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use quote_leads::domain::entities::{Catalog, SelectionItem};
use quote_leads::domain::services::{QuoteCalculator, QuoteValidator};
use serde_json::json;
use std::hint::black_box;
use std::sync::Arc;

fn bench_validate(c: &mut Criterion) {
    let validator = QuoteValidator::new(Arc::new(Catalog::standard()));
    let selection = json!([
        { "id": "web_dev", "quantity": 1 },
        { "id": "seo", "quantity": 6 },
        { "id": "smm", "quantity": 3 }
    ]);

    c.bench_function("validate_full_catalog", |b| {
        b.iter(|| validator.validate(black_box(Some(&selection))).unwrap())
    });
}

fn bench_calculate(c: &mut Criterion) {
    let calculator = QuoteCalculator::new(Arc::new(Catalog::standard()));
    let mut group = c.benchmark_group("calculate");

    for quantity in [1u32, 12, 1_000_000] {
        let items = vec![
            SelectionItem::new("web_dev", quantity),
            SelectionItem::new("seo", quantity),
            SelectionItem::new("smm", quantity),
        ];
        group.bench_with_input(BenchmarkId::from_parameter(quantity), &items, |b, items| {
            b.iter(|| calculator.calculate(black_box(items)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate, bench_calculate);
criterion_main!(benches);
