use chain_collections::SinglyLinkedList;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::Rng;
use std::hint::black_box;

const SAMPLE_SIZE: usize = 1_000;

fn build_list(len: usize) -> SinglyLinkedList<usize> {
    (0..len).collect()
}

// --- End insertion ---

fn end_insertion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_insertion");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("append", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = SinglyLinkedList::new();
            for i in 0..SAMPLE_SIZE {
                list.append(black_box(i));
            }
            list
        });
    });

    group.bench_function(BenchmarkId::new("prepend", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = SinglyLinkedList::new();
            for i in 0..SAMPLE_SIZE {
                list.prepend(black_box(i));
            }
            list
        });
    });

    group.finish();
}

// --- Positional insertion and removal at random indices ---

fn positional_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("insert_at_random", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                let mut rng = rand::rng();
                let indices: Vec<usize> = (0..SAMPLE_SIZE)
                    .map(|len| rng.random_range(0..=len))
                    .collect();
                (SinglyLinkedList::new(), indices)
            },
            |(mut list, indices)| {
                for (value, index) in indices.into_iter().enumerate() {
                    list.insert_at(value, index).unwrap();
                }
                list
            },
        );
    });

    group.bench_function(BenchmarkId::new("remove_at_random", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                let mut rng = rand::rng();
                let indices: Vec<usize> = (0..SAMPLE_SIZE)
                    .rev()
                    .map(|len| rng.random_range(0..len.max(1)))
                    .collect();
                (build_list(SAMPLE_SIZE), indices)
            },
            |(mut list, indices)| {
                for index in indices {
                    list.remove_at(index).unwrap();
                }
                list
            },
        );
    });

    group.finish();
}

// --- Traversal-driven lookups ---

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let list = build_list(SAMPLE_SIZE);
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    group.bench_function(BenchmarkId::new("contains_last", SAMPLE_SIZE), |b| {
        b.iter(|| black_box(list.contains(&(SAMPLE_SIZE - 1))));
    });

    group.bench_function(BenchmarkId::new("find_last", SAMPLE_SIZE), |b| {
        b.iter(|| black_box(list.find(&(SAMPLE_SIZE - 1))));
    });

    group.bench_function(BenchmarkId::new("iter_sum", SAMPLE_SIZE), |b| {
        b.iter(|| black_box(list.iter().sum::<usize>()));
    });

    group.bench_function(BenchmarkId::new("to_string", SAMPLE_SIZE), |b| {
        b.iter(|| black_box(list.to_string()));
    });

    group.finish();
}

criterion_group!(
    benches,
    end_insertion_benchmark,
    positional_benchmark,
    lookup_benchmark
);
criterion_main!(benches);
