//! Criterion benchmarks for rust_fanout_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_fanout_logger::core::encode;
use rust_fanout_logger::prelude::*;
use std::sync::Arc;

struct NullBackend;

impl Backend for NullBackend {
    fn write(&self, _level: Level, _message: &str) {}

    fn terminate(&self, _level: Level, _message: &str) {}
}

fn config() -> DispatchConfig {
    DispatchConfig::new(
        "https://chat.example/hook?",
        "orders",
        "https://ch.example/insert",
        "prod",
    )
}

// ============================================================================
// Encoder Benchmarks
// ============================================================================

fn bench_encoders(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoders");
    group.throughput(Throughput::Elements(1));

    let config = config();
    let caller = CallerContext::new(Some("orders::checkout"), "src/checkout.rs", 120, 9);
    let event = LogEvent::new(
        Level::Error,
        "payment declined for order 8812: card expired".to_string(),
        Some(&caller),
    );

    group.bench_function("columnar_row", |b| {
        b.iter(|| black_box(encode::columnar_row(black_box(&event), &config)));
    });

    group.bench_function("chat_url", |b| {
        b.iter(|| black_box(encode::chat_url(black_box(&event), &config)));
    });

    group.finish();
}

// ============================================================================
// Facade Benchmarks
// ============================================================================

fn bench_facade(c: &mut Criterion) {
    let mut group = c.benchmark_group("facade");
    group.throughput(Throughput::Elements(1));

    let local_only = FanoutLogger::new(Arc::new(NullBackend));

    group.bench_function("info_local_only", |b| {
        b.iter(|| local_only.info(&[&"Info message ", &black_box(42)]));
    });

    group.bench_function("infof_local_only", |b| {
        b.iter(|| local_only.infof(format_args!("Info message {}", black_box(42))));
    });

    let (columnar, rows) = ChannelSink::unbounded("columnar");
    let (chat, alerts) = ChannelSink::unbounded("chat");
    let fanout = FanoutLogger::builder()
        .backend(NullBackend)
        .config(config())
        .sinks(Arc::new(columnar), Arc::new(chat))
        .build()
        .expect("logger builds");

    group.bench_function("info_with_dispatch", |b| {
        b.iter(|| {
            fanout.info(&[&"Info message ", &black_box(42)]);
            while rows.try_recv().is_ok() {}
        });
    });

    group.finish();
    drop(alerts);
}

criterion_group!(benches, bench_encoders, bench_facade);
criterion_main!(benches);
