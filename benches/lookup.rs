//! Benchmarks for registry lookup and chunk copies

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use progfs::{FileRegistry, FileType};

const PAYLOAD: [u8; 4096] = [0x5A; 4096];

fn build_names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("/assets/file{:03}.bin", i)).collect()
}

fn build_registry(names: &[String]) -> FileRegistry<'_> {
    let mut fs = FileRegistry::new(names.len() as u8);
    for name in names {
        fs.register_typed(name, &PAYLOAD, FileType::Unknown).unwrap();
    }
    fs
}

fn benchmark_find_by_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_name");

    for count in [8usize, 64, 255].iter() {
        let names = build_names(*count);
        let fs = build_registry(&names);
        let last = names.last().unwrap().clone();

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| fs.find_by_name(black_box(&last)));
        });
    }

    group.finish();
}

fn benchmark_find_by_id(c: &mut Criterion) {
    let names = build_names(255);
    let fs = build_registry(&names);

    c.bench_function("find_by_id", |b| {
        b.iter(|| fs.find_by_id(black_box(200)));
    });
}

fn benchmark_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_chunk");
    let names = build_names(16);
    let fs = build_registry(&names);

    for chunk in [64usize, 512, 4096].iter() {
        let mut buf = vec![0u8; *chunk];
        group.bench_with_input(BenchmarkId::from_parameter(chunk), chunk, |b, &chunk| {
            b.iter(|| fs.copy(black_box(7u8), &mut buf, black_box(0), chunk).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_find_by_name,
    benchmark_find_by_id,
    benchmark_copy
);
criterion_main!(benches);
