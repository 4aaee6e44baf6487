//! Benchmarks for query state resolution.
//!
//! Tests `resolve_state` and `use_query_handler` across the four states and
//! the three precedence layers.

use criterion::{Criterion, criterion_group, criterion_main};
use query_handler_core::{
    DefaultVisuals, QueryError, QueryResult, VisualContext, VisualOverrides, resolve_state,
    use_query_handler,
};
use std::hint::black_box;

fn snapshots() -> Vec<(&'static str, QueryResult<Vec<u32>>)> {
    vec![
        ("loading", QueryResult::loading()),
        ("error", QueryResult::failed(QueryError::new("Test Error"))),
        ("empty", QueryResult::success(Vec::new())),
        ("content", QueryResult::success((0..100).collect())),
    ]
}

fn bench_resolve_state(c: &mut Criterion) {
    for (name, query) in snapshots() {
        c.bench_function(&format!("resolve_state_{}", name), |b| {
            b.iter(|| black_box(resolve_state(black_box(Some(&query)))))
        });
    }
}

fn bench_hook_builtin(c: &mut Criterion) {
    let ctx: VisualContext<String> = VisualContext::new();
    let query = QueryResult::<Vec<u32>>::failed(QueryError::new("Test Error"));
    c.bench_function("use_query_handler_builtin_error", |b| {
        b.iter(|| {
            let output = use_query_handler(&ctx, black_box(Some(&query)), None);
            black_box(output.is_content())
        })
    });
}

fn bench_hook_override(c: &mut Criterion) {
    let ctx =
        VisualContext::new().provide(DefaultVisuals::new().with_loading("registry".to_string()));
    let overrides = VisualOverrides::new().with_loading("override".to_string());
    let query = QueryResult::<Vec<u32>>::loading();
    c.bench_function("use_query_handler_override_loading", |b| {
        b.iter(|| {
            let output = use_query_handler(&ctx, black_box(Some(&query)), Some(&overrides));
            black_box(output.is_content())
        })
    });
}

criterion_group!(
    benches,
    bench_resolve_state,
    bench_hook_builtin,
    bench_hook_override
);
criterion_main!(benches);
