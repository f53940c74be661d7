//! Performance benchmarks for the tiered financial calculator.
//!
//! Covers the pure calculation path, summation over large batches and the
//! `/calculate` endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use logistics_toolkit::api::{AppState, CalculationRequest, create_router};
use logistics_toolkit::calculation::{calculate_full, sum_all};
use logistics_toolkit::config::{CalculatorConfig, ToolkitConfig};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// One amount per discount tier.
fn tier_amounts() -> [(&'static str, Decimal); 3] {
    [
        ("tier_1", Decimal::new(25000, 2)),
        ("tier_2", Decimal::new(250000, 2)),
        ("tier_3", Decimal::new(2500000, 2)),
    ]
}

fn bench_calculate_full(c: &mut Criterion) {
    let config = CalculatorConfig::default();
    let mut group = c.benchmark_group("calculate_full");

    for (tier, amount) in tier_amounts() {
        group.bench_with_input(BenchmarkId::from_parameter(tier), &amount, |b, amount| {
            b.iter(|| calculate_full(black_box(*amount), &config).unwrap())
        });
    }

    group.finish();
}

fn bench_sum_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_all");

    for size in [10usize, 1_000, 100_000] {
        let values: Vec<Option<Decimal>> = (0..size)
            .map(|i| (i % 7 != 0).then(|| Decimal::new(i as i64 * 101, 2)))
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &values, |b, values| {
            b.iter(|| sum_all(black_box(values)).unwrap())
        });
    }

    group.finish();
}

fn bench_calculate_endpoint(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to create runtime");
    let router = create_router(AppState::new(ToolkitConfig::default()));
    let body = serde_json::to_string(&CalculationRequest {
        amount: Some(Decimal::new(123456, 2)),
    })
    .expect("Failed to serialize request");

    c.bench_function("post_calculate", |b| {
        b.to_async(&runtime).iter(|| {
            let router = router.clone();
            let body = body.clone();
            async move {
                let response = router
                    .oneshot(
                        Request::builder()
                            .method("POST")
                            .uri("/calculate")
                            .header("Content-Type", "application/json")
                            .body(Body::from(body))
                            .unwrap(),
                    )
                    .await
                    .unwrap();
                black_box(response.status())
            }
        })
    });
}

criterion_group!(
    benches,
    bench_calculate_full,
    bench_sum_all,
    bench_calculate_endpoint
);
criterion_main!(benches);
