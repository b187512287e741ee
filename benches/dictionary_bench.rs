use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dict::{repeat, Dictionary};
use rand::prelude::*;

fn add_bench(c: &mut Criterion) {
    c.bench_function("add", |b| {
        b.iter_batched(
            Dictionary::new,
            |mut dictionary| {
                for i in 0..100 {
                    dictionary
                        .add(format!("word{}", i), "definition")
                        .unwrap();
                }
                dictionary
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

fn search_bench(c: &mut Criterion) {
    let dictionary: Dictionary = (0..100)
        .map(|i| (format!("word{}", i), "definition"))
        .collect();

    c.bench_function("search", |b| {
        let mut rng = thread_rng();
        b.iter(|| {
            for _ in 0..100 {
                let word = format!("word{}", rng.gen_range(0..200));
                black_box(dictionary.search(&word).is_ok());
            }
        });
    });
}

fn repeat_bench(c: &mut Criterion) {
    c.bench_function("repeat", |b| b.iter(|| repeat("a", 5)));
}

criterion_group!(benches, add_bench, search_bench, repeat_bench);
criterion_main!(benches);
