//! Performance benchmarks for the Payroll Calculation Engine.
//!
//! This benchmark suite verifies that the engine stays cheap enough to be
//! recomputed unconditionally on every input change:
//! - Single calculation: < 100μs mean
//! - Batch of 1000 calculations: < 10ms mean
//! - Full HTTP round trip through the router: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::compute;
use payroll_engine::config::{ConfigLoader, RateConfig};
use payroll_engine::models::AttendanceRecord;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn default_rates() -> RateConfig {
    RateConfig {
        salary_subtractor: dec("2200000"),
        working_days: dec("22"),
        meal_allowance_per_day: dec("100000"),
        insurance_rate: dec("0.105"),
        union_rate: dec("0.005"),
        night_shift_bonus_rate: dec("0.3"),
        ot_weekday_multiplier: dec("1.5"),
        ot_sunday_multiplier: dec("2"),
    }
}

fn busy_month() -> AttendanceRecord {
    AttendanceRecord {
        days_worked: dec("21.5"),
        leave_days: dec("0.5"),
        ot_weekday_hours: dec("12"),
        ot_sunday_hours: dec("8"),
        night_shift_hours: dec("16"),
    }
}

/// Benchmarks a single engine invocation.
fn bench_single_calculation(c: &mut Criterion) {
    let rates = default_rates();
    let attendance = busy_month();
    let base_salary = dec("8752485");

    c.bench_function("single_calculation", |b| {
        b.iter(|| {
            compute(
                black_box(base_salary),
                black_box(&attendance),
                black_box(&rates),
            )
        })
    });
}

/// Benchmarks repeated recomputation, the keystroke-driven usage pattern.
fn bench_batch_calculations(c: &mut Criterion) {
    let rates = default_rates();
    let attendance = busy_month();

    let mut group = c.benchmark_group("batch_calculations");
    for batch_size in [100u64, 1000] {
        group.throughput(Throughput::Elements(batch_size));
        group.bench_with_input(
            BenchmarkId::from_parameter(batch_size),
            &batch_size,
            |b, &batch_size| {
                b.iter(|| {
                    for offset in 0..batch_size {
                        let base_salary = dec("8752485") + Decimal::from(offset);
                        black_box(compute(base_salary, &attendance, &rates));
                    }
                })
            },
        );
    }
    group.finish();
}

/// Benchmarks the full HTTP round trip through the router.
fn bench_http_round_trip(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
    let state = AppState::new(config);

    let body = serde_json::json!({
        "employee_id": "manh",
        "attendance": {
            "days_worked": 21.5,
            "leave_days": 0.5,
            "ot_weekday_hours": 12,
            "ot_sunday_hours": 8,
            "night_shift_hours": 16
        }
    })
    .to_string();

    c.bench_function("http_calculate_round_trip", |b| {
        b.to_async(&runtime).iter(|| {
            let router = create_router(state.clone());
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
    bench_single_calculation,
    bench_batch_calculations,
    bench_http_round_trip
);
criterion_main!(benches);
