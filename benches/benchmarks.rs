//! Performance benchmarks for dirtree

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirtree::test_utils::TestDir;
use dirtree::{FileMode, file_exists, list_all, list_files, list_tree, read_file, to_json_string, write_file};

fn bench_listing(c: &mut Criterion) {
    let dir = TestDir::new();
    for i in 0..500 {
        dir.add_file(&format!("file{}.txt", i), "");
    }
    for i in 0..50 {
        dir.add_dir(&format!("dir{}", i));
    }

    let mut group = c.benchmark_group("listing");

    group.bench_function("list_all_550", |b| b.iter(|| list_all(black_box(dir.path()))));

    group.bench_function("list_files_550", |b| {
        b.iter(|| list_files(black_box(dir.path())))
    });

    group.bench_function("file_exists_last", |b| {
        b.iter(|| file_exists(black_box("file499.txt"), dir.path()))
    });

    group.finish();
}

fn bench_tree(c: &mut Criterion) {
    let small = TestDir::new();
    small.populate(5, 50);
    let large = TestDir::new();
    large.populate(50, 1000);

    let mut group = c.benchmark_group("list_tree");

    group.bench_function("small_50_files", |b| b.iter(|| list_tree(black_box(small.path()))));

    group.bench_function("large_1000_files", |b| {
        b.iter(|| list_tree(black_box(large.path())))
    });

    let tree = list_tree(large.path());
    group.bench_function("serialize_large", |b| {
        b.iter(|| to_json_string(black_box(&tree), false))
    });

    group.finish();
}

fn bench_file_io(c: &mut Criterion) {
    let dir = TestDir::new();
    let path = dir.path().join("blob.bin");
    let content = vec![0xA5u8; 1 << 20];

    let mut group = c.benchmark_group("file_io");

    group.bench_function("write_1mb", |b| {
        b.iter(|| write_file(black_box(&content), &path, FileMode::Binary))
    });

    group.bench_function("read_1mb", |b| b.iter(|| read_file(black_box(&path), FileMode::Binary)));

    group.finish();
}

criterion_group!(benches, bench_listing, bench_tree, bench_file_io);
criterion_main!(benches);
