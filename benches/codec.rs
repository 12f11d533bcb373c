use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_hstore::{dumps, loads, HstoreMap, Pair};

fn generated_pairs(count: usize) -> Vec<Pair> {
    (0..count)
        .map(|i| {
            let value = if i % 7 == 0 {
                None
            } else {
                Some(format!("value \"{}\" with \\ backslash", i))
            };
            (format!("key_{}", i), value)
        })
        .collect()
}

fn benchmark_loads_small(c: &mut Criterion) {
    let text = r#""name"=>"Norge/Noreg", "name:ja"=>"ノルウェー", "capital"=>NULL, "k\"ey"=>"va\"lue""#;

    c.bench_function("loads_small_sequence", |b| {
        b.iter(|| loads::<Vec<Pair>>(black_box(text)).unwrap())
    });

    c.bench_function("loads_small_mapping", |b| {
        b.iter(|| loads::<HstoreMap>(black_box(text)).unwrap())
    });
}

fn benchmark_loads_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("loads_large");

    for size in [10, 100, 1000].iter() {
        let text = dumps(generated_pairs(*size));
        group.bench_with_input(BenchmarkId::new("sequence", size), &text, |b, text| {
            b.iter(|| loads::<Vec<Pair>>(black_box(text)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("mapping", size), &text, |b, text| {
            b.iter(|| loads::<HstoreMap>(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn benchmark_dumps(c: &mut Criterion) {
    let mut group = c.benchmark_group("dumps");

    for size in [10, 100, 1000].iter() {
        let map: HstoreMap = generated_pairs(*size).into_iter().collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &map, |b, map| {
            b.iter(|| dumps(black_box(map)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_loads_small,
    benchmark_loads_large,
    benchmark_dumps
);
criterion_main!(benches);
