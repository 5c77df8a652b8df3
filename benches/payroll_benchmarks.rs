//! Performance benchmarks for the payroll ledger.
//!
//! Covers the hot paths of a pay run: computing a period for every
//! employee, rendering bank files and the workbook, and a full round trip
//! through the HTTP router.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::collections::HashMap;
use std::hint::black_box;
use std::sync::Arc;

use axum::{body::Body, http::Request};
use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;
use tower::ServiceExt;

use payroll_ledger::api::{AppState, create_router};
use payroll_ledger::auth::{PlaintextSecret, SecurityPolicy};
use payroll_ledger::calculation::HoursEntry;
use payroll_ledger::export::{BankFileFormat, WageSheet, render_bank_file};
use payroll_ledger::ledger::compute_period;
use payroll_ledger::models::{Branch, Employee, EmployeeDraft, PayPeriod, PaymentMethod};
use payroll_ledger::service::PayrollService;
use payroll_ledger::storage::MemoryStore;

/// Builds `count` employees, two thirds of them paid online.
fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let online = i % 3 != 0;
            Employee::with_id(
                format!("emp_{:04}", i),
                EmployeeDraft {
                    name: format!("Employee {:04}", i),
                    position: "Machine Operator".to_string(),
                    hourly_wage: format!("{}.{:02}", 4 + i % 6, i % 100),
                    fnpf_no: format!("FN{:06}", i),
                    bank_code: if online { "069".to_string() } else { String::new() },
                    bank_account_number: if online { format!("{:08}", i) } else { String::new() },
                    payment_method: if online { PaymentMethod::Online } else { PaymentMethod::Cash },
                    branch: if i % 2 == 0 { Branch::Suva } else { Branch::Labasa },
                },
            )
            .unwrap()
        })
        .collect()
}

fn create_hours(employees: &[Employee]) -> HashMap<String, HoursEntry> {
    employees
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let entry = HoursEntry::new(Decimal::new(300 + (i as i64 % 150), 1), Decimal::from(i as i64 % 7));
            (e.id.clone(), entry)
        })
        .collect()
}

fn week() -> PayPeriod {
    PayPeriod::from_dates(
        NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(),
        NaiveDate::from_ymd_opt(2026, 1, 18).unwrap(),
    )
    .unwrap()
}

/// Benchmark: computing one period for growing workforces.
fn bench_compute_period(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_period");
    for count in [30usize, 300, 3000] {
        let employees = create_employees(count);
        let hours = create_hours(&employees);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| compute_period(black_box(&employees), black_box(&hours), week()))
        });
    }
    group.finish();
}

/// Benchmark: rendering exports for 300 employees.
fn bench_exports(c: &mut Criterion) {
    let employees = create_employees(300);
    let records = compute_period(&employees, &create_hours(&employees), week());

    let mut group = c.benchmark_group("exports");
    group.throughput(Throughput::Elements(records.len() as u64));
    for format in [BankFileFormat::Bsp, BankFileFormat::Bred] {
        group.bench_function(format.to_string(), |b| {
            b.iter(|| render_bank_file(format, black_box(&records), &employees).unwrap())
        });
    }
    group.bench_function("xlsx", |b| {
        b.iter(|| {
            WageSheet::build(black_box(&records))
                .unwrap()
                .to_workbook()
                .unwrap()
        })
    });
    group.finish();
}

/// Benchmark: preview request through the router.
fn bench_preview_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let employees = create_employees(300);
    let hours = create_hours(&employees);
    let security = SecurityPolicy::new(
        "ADMIN",
        Arc::new(PlaintextSecret::new("admin")),
        Arc::new(PlaintextSecret::new("admin")),
    );
    let service = PayrollService::new(Arc::new(MemoryStore::with_data(employees, Vec::new())), security);
    let state = AppState::new(service);

    let body = serde_json::json!({
        "dateFrom": "2026-01-12",
        "dateTo": "2026-01-18",
        "hours": hours,
    })
    .to_string();

    c.bench_function("preview_300_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(state.clone());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/wages/preview")
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

criterion_group!(benches, bench_compute_period, bench_exports, bench_preview_request);
criterion_main!(benches);
