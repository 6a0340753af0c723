//! Performance benchmarks for index construction and queries
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use zearch::model::{FieldValue, Record};
use zearch::Index;

/// Synthetic collections: `orgs` organizations with ten users and ten tickets each
fn generate(orgs: usize) -> (Vec<Record>, Vec<Record>, Vec<Record>) {
    let organizations = (0..orgs)
        .map(|i| {
            Record::from_iter([
                ("_id", FieldValue::from(i as i64)),
                ("name", FieldValue::from(format!("Organization {i}"))),
                ("shared_tickets", FieldValue::from(i % 2 == 0)),
                (
                    "tags",
                    FieldValue::from(vec![format!("tag{}", i % 7), format!("region{}", i % 3)]),
                ),
            ])
        })
        .collect();

    let users = (0..orgs * 10)
        .map(|i| {
            Record::from_iter([
                ("_id", FieldValue::from(i as i64)),
                ("name", FieldValue::from(format!("User {i}"))),
                ("organization_id", FieldValue::from((i % orgs) as i64)),
                ("verified", FieldValue::from(i % 5 == 0)),
            ])
        })
        .collect();

    let tickets = (0..orgs * 10)
        .map(|i| {
            Record::from_iter([
                ("_id", FieldValue::from(format!("ticket-{i:08}"))),
                ("subject", FieldValue::from(format!("Subject {i}"))),
                ("organization_id", FieldValue::from((i % orgs) as i64)),
                ("priority", FieldValue::from(["low", "normal", "high"][i % 3])),
            ])
        })
        .collect();

    (organizations, users, tickets)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");

    for orgs in [100, 1_000, 10_000] {
        let (organizations, users, tickets) = generate(orgs);
        group.bench_with_input(BenchmarkId::from_parameter(orgs), &orgs, |b, _| {
            b.iter(|| {
                Index::build(
                    black_box(organizations.clone()),
                    black_box(users.clone()),
                    black_box(tickets.clone()),
                )
                .unwrap()
            })
        });
    }

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let (organizations, users, tickets) = generate(1_000);
    let index = Index::build(organizations, users, tickets).unwrap();

    let mut group = c.benchmark_group("query");

    group.bench_function("organization_by_id", |b| {
        b.iter(|| index.organizations(black_box("_id"), black_box("500")).unwrap())
    });

    group.bench_function("organization_tags_scan", |b| {
        b.iter(|| index.organizations(black_box("tags"), black_box("region1")).unwrap())
    });

    group.bench_function("user_bool_scan", |b| {
        b.iter(|| index.users(black_box("verified"), black_box("true")).unwrap())
    });

    group.bench_function("ticket_string_scan", |b| {
        b.iter(|| index.tickets(black_box("priority"), black_box("high")).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_build, bench_queries);
criterion_main!(benches);
