//! Event emission throughput.
//!
//! Measures an enabled event written to an in-memory sink and a suppressed
//! event that never reaches the engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ctxlog::{bind, from_context, Context, Logger, MemorySink, Severity};

fn bench_emit(c: &mut Criterion) {
    let sink = MemorySink::new();
    let (ctx, logger) = bind(&Context::background(), sink.clone(), Severity::Info);
    let scoped = logger.with().str("request_id", "req-1").logger();

    c.bench_function("emit_info_with_fields", |b| {
        b.iter(|| {
            scoped
                .info()
                .str("route", black_box("/v1/traces"))
                .int("status", black_box(200))
                .msg("request handled");
            sink.clear();
        })
    });

    c.bench_function("emit_suppressed_debug", |b| {
        b.iter(|| logger.debug().str("route", black_box("/v1/traces")).msg("ignored"))
    });

    c.bench_function("retrieve_bound_logger", |b| {
        b.iter(|| black_box(from_context(&ctx)))
    });
}

criterion_group!(benches, bench_emit);
criterion_main!(benches);
