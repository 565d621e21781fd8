use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;
use sortseq::prelude::*;
use std::hint::black_box;
use std::rc::Rc;

fn bench_find_with_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("Find Among Duplicates");
    group.sample_size(20);

    // Dataset generation: 100k elements over 1k distinct keys (runs of ~100).
    let mut rng = rand::rng();
    let count = 100_000;
    let items: Vec<Rc<u32>> = (0..count)
        .map(|_| Rc::new(rng.random_range(0..1_000)))
        .collect();

    let mut seq = SortedSeq::with_capacity(NaturalOrder, count);
    let mut sorted = items.clone();
    sorted.sort();
    // Already ordered input appends, keeping setup cheap.
    seq.extend(sorted);

    let probes: Vec<Rc<u32>> = (0..1_000)
        .map(|_| items[rng.random_range(0..count)].clone())
        .collect();

    group.bench_function("SortedSeq::find", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter_map(|p| seq.find(black_box(p)))
                .count()
        })
    });

    group.bench_function("SortedSeq::position (linear)", |b| {
        b.iter(|| {
            probes
                .iter()
                .filter_map(|p| seq.position(black_box(p)))
                .count()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_find_with_duplicates);
criterion_main!(benches);
