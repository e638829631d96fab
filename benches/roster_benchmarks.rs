//! Performance benchmarks for the shift roster engine.
//!
//! Covers the pure aggregations at realistic roster sizes and one round
//! trip through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use shift_roster::api::{create_router, AppState};
use shift_roster::calculation::{payroll_report, weekly_coverage};
use shift_roster::config::ConfigLoader;
use shift_roster::grid::TIME_SLOTS;
use shift_roster::models::{Compensation, PayPeriod, Shift, ShiftType, StaffMember};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_staff(count: usize) -> Vec<StaffMember> {
    (0..count)
        .map(|i| {
            let compensation = if i % 3 == 0 {
                Compensation::Monthly {
                    monthly_salary: Decimal::new(9_000_000, 0),
                }
            } else {
                Compensation::Hourly {
                    hourly_rate: Decimal::new(150_000, 0),
                }
            };
            StaffMember::new(format!("staff_{:03}", i), format!("Staff {}", i), compensation)
        })
        .collect()
}

/// One shift per staff member per day of January 2026, staggered across the
/// grid.
fn create_shifts(staff: &[StaffMember]) -> Vec<Shift> {
    let first = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    (0..31u64)
        .flat_map(|offset| {
            let day = first.checked_add_days(Days::new(offset)).unwrap();
            staff.iter().enumerate().map(move |(i, member)| {
                let start = (i + offset as usize) % 12;
                Shift::working(
                    format!("{}_{}", member.id, offset),
                    member.id.clone(),
                    day,
                    ShiftType::Regular,
                    TIME_SLOTS[start],
                    TIME_SLOTS[start + 12],
                )
            })
        })
        .collect()
}

/// Benchmark: weekly coverage grid at increasing roster sizes.
fn bench_weekly_coverage(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly_coverage");
    let week_of = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();

    for staff_count in [5, 20, 50].iter() {
        let staff = create_staff(*staff_count);
        let shifts = create_shifts(&staff);

        group.throughput(Throughput::Elements(shifts.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("staff", staff_count),
            &shifts,
            |b, shifts| b.iter(|| black_box(weekly_coverage(black_box(shifts), week_of))),
        );
    }

    group.finish();
}

/// Benchmark: monthly payroll at increasing roster sizes.
fn bench_payroll_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("payroll_report");
    let period = PayPeriod::month(2026, 1).unwrap();

    for staff_count in [5, 20, 50].iter() {
        let staff = create_staff(*staff_count);
        let shifts = create_shifts(&staff);

        group.throughput(Throughput::Elements(shifts.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("staff", staff_count),
            &(staff, shifts),
            |b, (staff, shifts)| {
                b.iter(|| black_box(payroll_report(black_box(staff), black_box(shifts), period)))
            },
        );
    }

    group.finish();
}

/// Benchmark: POST /coverage through the router.
fn bench_coverage_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    let router = create_router(AppState::new(config));

    let staff = create_staff(20);
    let shifts: Vec<serde_json::Value> = create_shifts(&staff)
        .iter()
        .map(|shift| {
            serde_json::json!({
                "id": shift.id,
                "staff_id": shift.staff_id,
                "day": shift.day,
                "shift_type": shift.shift_type,
                "start_time": shift.start_time,
                "end_time": shift.end_time,
            })
        })
        .collect();
    let body = serde_json::json!({ "week_start": "2026-01-12", "shifts": shifts }).to_string();

    c.bench_function("coverage_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/coverage")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_weekly_coverage,
    bench_payroll_report,
    bench_coverage_endpoint,
);
criterion_main!(benches);
