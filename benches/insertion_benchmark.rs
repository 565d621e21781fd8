use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use sortseq::prelude::*;
use std::hint::black_box;

fn bench_random_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random Inserts");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("SortedSeq::add", |b| {
        b.iter_batched(
            || input.clone(),
            |data| {
                let mut seq = SortedSeq::with_capacity(NaturalOrder, data.len());
                data.into_iter().for_each(|v| {
                    seq.add(black_box(v));
                });
                seq
            },
            BatchSize::SmallInput,
        )
    });

    // Vec with binary-searched insertion point
    group.bench_function("Vec::insert (binary_search)", |b| {
        b.iter_batched(
            || input.clone(),
            |data| {
                let mut vec: Vec<u64> = Vec::with_capacity(data.len());
                data.into_iter().for_each(|v| {
                    let at = vec.partition_point(|probe| *probe <= v);
                    vec.insert(at, black_box(v));
                });
                vec
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_nearly_sorted_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("Ascending Inserts");
    group.sample_size(10);

    // Appends hit the back scan after a single comparison.
    let count = 10_000u64;
    let input: Vec<u64> = (0..count).collect();
    group.throughput(Throughput::Elements(count));

    group.bench_function("SortedSeq::add", |b| {
        b.iter_batched(
            || input.clone(),
            |data| SortedSeq::from_iter_with(NaturalOrder, black_box(data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("Vec::insert (binary_search)", |b| {
        b.iter_batched(
            || input.clone(),
            |data| {
                let mut vec: Vec<u64> = Vec::with_capacity(data.len());
                data.into_iter().for_each(|v| {
                    let at = vec.partition_point(|probe| *probe <= v);
                    vec.insert(at, black_box(v));
                });
                vec
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_random_inserts, bench_nearly_sorted_inserts);
criterion_main!(benches);
