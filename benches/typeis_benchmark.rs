use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use octofhir_typeis::{TypeRegistry, Value, classify, deep_equal};
use serde_json::json;

fn nested_document() -> Value {
    Value::from(json!({
        "id": "example",
        "name": [{"given": ["Jon"], "family": "Snow"}],
        "values": [1, 2.5, 3, 4, 5, 6, 7, 8, 9, 10],
        "meta": {"tags": ["north", "watch"], "active": true, "score": null}
    }))
}

fn benchmark_classify(c: &mut Criterion) {
    let values = [
        Value::from(5),
        Value::from("text"),
        Value::Null,
        Value::array([1, 2, 3]),
        nested_document(),
    ];

    c.bench_function("classify", |b| {
        b.iter(|| {
            for value in &values {
                black_box(classify(black_box(value)));
            }
        })
    });
}

fn benchmark_predicate_dispatch(c: &mut Criterion) {
    let registry = TypeRegistry::new();
    let value = Value::from(42.5);

    let mut group = c.benchmark_group("predicate_dispatch");
    group.bench_function("typed_accessor", |b| {
        b.iter(|| black_box(registry.integer(black_box(&value))))
    });
    group.bench_function("by_name", |b| {
        b.iter(|| black_box(registry.test(black_box("decimal"), &[&value])))
    });
    group.bench_function("negated", |b| {
        b.iter(|| black_box(registry.not().number(black_box(&value))))
    });
    group.finish();
}

fn benchmark_deep_equal(c: &mut Criterion) {
    let one = nested_document();
    let two = nested_document();

    c.bench_function("deep_equal_nested", |b| {
        b.iter(|| black_box(deep_equal(black_box(&one), black_box(&two))))
    });
}

criterion_group!(
    benches,
    benchmark_classify,
    benchmark_predicate_dispatch,
    benchmark_deep_equal
);
criterion_main!(benches);
