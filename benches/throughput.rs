//! Throughput Benchmark for SQLGate
//!
//! This benchmark measures the synchronous hot paths of the request
//! pipeline: frame extraction, classification, and result formatting.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rusqlite::types::Value;
use sqlgate::gateway::{format_rows, is_query};
use sqlgate::protocol::{extract_request, Reply};

/// Benchmark frame extraction
fn bench_framing(c: &mut Criterion) {
    let mut group = c.benchmark_group("framing");
    group.throughput(Throughput::Elements(1));

    let small = b"SELECT COUNT(*) FROM users\x00".to_vec();
    group.bench_function("extract_small", |b| {
        b.iter(|| extract_request(black_box(&small)));
    });

    let mut large = vec![b'x'; 64 * 1024];
    large.push(0);
    group.bench_function("extract_large", |b| {
        b.iter(|| extract_request(black_box(&large)));
    });

    let incomplete = vec![b'x'; 4096];
    group.bench_function("extract_incomplete", |b| {
        b.iter(|| extract_request(black_box(&incomplete)));
    });

    group.finish();
}

/// Benchmark request classification
fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");
    group.throughput(Throughput::Elements(1));

    group.bench_function("query", |b| {
        b.iter(|| is_query(black_box("SELECT username, filename FROM files")));
    });

    group.bench_function("mutation", |b| {
        b.iter(|| is_query(black_box("INSERT INTO users VALUES ('a', 'b')")));
    });

    group.finish();
}

/// Benchmark result formatting and reply serialization
fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");

    let scalar = vec![vec![Value::Integer(42)]];
    group.bench_function("single_scalar", |b| {
        b.iter(|| format_rows(black_box(&scalar)));
    });

    let table: Vec<Vec<Value>> = (0..100)
        .map(|i| {
            vec![
                Value::Text(format!("user:{}", i)),
                Value::Text(format!("file_{}.txt", i)),
                Value::Integer(i),
            ]
        })
        .collect();
    group.throughput(Throughput::Elements(100));
    group.bench_function("table_100x3", |b| {
        b.iter(|| format_rows(black_box(&table)));
    });

    group.bench_function("serialize_reply", |b| {
        let reply = Reply::body(format_rows(&table));
        b.iter(|| black_box(&reply).serialize());
    });

    group.finish();
}

criterion_group!(benches, bench_framing, bench_classification, bench_formatting);
criterion_main!(benches);
