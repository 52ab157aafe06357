use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use sortable::prelude::*;

fn make_records(rows: usize) -> Vec<Value> {
    (0..rows)
        .map(|i| {
            json!({
                "group": format!("group-{}", i % 4),
                "score": (i * 7919) % 1000,
                "id": i,
            })
        })
        .collect()
}

fn bench_in_memory_sort(c: &mut Criterion) {
    let records = make_records(4096);
    let resolver = FieldSortResolver::new(Some(vec![
        FieldSpec::try_from(("leaderboard", ["group", "-score", "++id"])).unwrap(),
    ]))
    .unwrap();

    c.bench_function("sort_4096_records_three_keys", |b| {
        b.iter(|| {
            let objects = InMemory::from(records.clone());
            let _ = resolver.sorted(objects, "leaderboard", "desc").unwrap();
        })
    });
}

fn bench_resolve(c: &mut Criterion) {
    let resolver = FieldSortResolver::new(Some(vec![
        FieldSpec::try_from(("leaderboard", ["group", "-score", "++id"])).unwrap(),
    ]))
    .unwrap();

    c.bench_function("resolve_ordering_expression", |b| {
        b.iter(|| resolver.to_ordering_expression("leaderboard", "asc", None))
    });
}

criterion_group!(sorting, bench_in_memory_sort, bench_resolve);
criterion_main!(sorting);
