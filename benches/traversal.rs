//! Benchmarks for directory traversal and rendering

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use dirtree::prefix::child_prefix;
use dirtree::{TraversalConfig, Walker};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use tempfile::TempDir;

/// Create a directory tree for benchmarking
fn create_benchmark_tree(depth: usize, files_per_dir: usize, dirs_per_dir: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    create_tree_recursive(temp_dir.path(), depth, files_per_dir, dirs_per_dir);
    temp_dir
}

fn create_tree_recursive(path: &Path, depth: usize, files_per_dir: usize, dirs_per_dir: usize) {
    if depth == 0 {
        return;
    }

    for i in 0..files_per_dir {
        let file_path = path.join(format!("file_{}.txt", i));
        let mut file = File::create(file_path).unwrap();
        writeln!(file, "This is test file {}", i).unwrap();
    }

    for i in 0..dirs_per_dir {
        let dir_path = path.join(format!("dir_{}", i));
        fs::create_dir(&dir_path).unwrap();
        create_tree_recursive(&dir_path, depth - 1, files_per_dir, dirs_per_dir);
    }
}

fn walk(path: &Path, bits: u32) {
    let config = TraversalConfig::from_bits(bits);
    let mut walker = Walker::new(&config, io::sink());
    let _ = walker.walk_root(black_box(path)).unwrap();
}

fn benchmark_small_tree(c: &mut Criterion) {
    let temp_dir = create_benchmark_tree(3, 10, 3);
    let path = temp_dir.path();

    c.bench_function("walk_small_tree", |b| {
        b.iter(|| walk(path, TraversalConfig::TREE));
    });
}

fn benchmark_large_tree(c: &mut Criterion) {
    let temp_dir = create_benchmark_tree(4, 20, 4);
    let path = temp_dir.path();

    c.bench_function("walk_large_tree", |b| {
        b.iter(|| walk(path, TraversalConfig::TREE));
    });
}

fn benchmark_verbose_tree(c: &mut Criterion) {
    let temp_dir = create_benchmark_tree(4, 20, 4);
    let path = temp_dir.path();

    c.bench_function("walk_verbose_tree", |b| {
        b.iter(|| walk(path, TraversalConfig::VERBOSE | TraversalConfig::SUMMARY));
    });
}

fn benchmark_prefix(c: &mut Criterion) {
    c.bench_function("child_prefix_deep", |b| {
        b.iter(|| {
            let mut prefix = String::new();
            for depth in 0..32 {
                prefix = child_prefix(true, depth % 3 == 0, black_box(&prefix));
            }
            prefix
        });
    });
}

criterion_group!(
    benches,
    benchmark_small_tree,
    benchmark_large_tree,
    benchmark_verbose_tree,
    benchmark_prefix
);
criterion_main!(benches);
