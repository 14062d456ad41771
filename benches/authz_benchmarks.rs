//! Performance benchmarks for clinic-authz
//!
//! The evaluator and scope resolver sit on every request path, so their
//! per-call cost is worth watching.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use clinic_authz::{
    ActorContext, ActorId, ClinicId, EntityOwnership, Permission, PermissionEvaluator, Role,
    ScopeConfig, TenantScope,
};

/// Benchmark permission evaluation
fn bench_permission_checks(c: &mut Criterion) {
    let evaluator = PermissionEvaluator::standard();
    let requirement = [
        Permission::PatientsRead,
        Permission::DocumentsCreate,
        Permission::PrescriptionsCreate,
    ];

    let mut group = c.benchmark_group("permission_evaluation");
    group.bench_function("has_permission", |b| {
        b.iter(|| {
            black_box(evaluator.has_permission(
                black_box(Role::Clinician),
                black_box(Permission::PrescriptionsCreate),
            ))
        });
    });
    group.bench_function("has_all", |b| {
        b.iter(|| black_box(evaluator.has_all(black_box(Role::Clinician), black_box(&requirement))));
    });
    group.finish();
}

/// Benchmark tenant scope resolution
fn bench_scope_resolution(c: &mut Criterion) {
    let scope = TenantScope::new(&ScopeConfig::default());
    let clinic = ClinicId::new();
    let actor = ActorContext::new(ActorId::new(), Role::Clinician, false, Some(clinic));
    let entity = EntityOwnership::new(Some(ActorId::new()), false, Some(clinic));

    let mut group = c.benchmark_group("tenant_scope");
    group.bench_function("can_access", |b| {
        b.iter(|| black_box(scope.can_access(black_box(&actor), black_box(&entity))));
    });
    group.bench_function("scope_filter_and_match", |b| {
        b.iter(|| {
            let filter = scope.scope_filter(black_box(&actor));
            black_box(filter.matches(black_box(&entity)))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_permission_checks, bench_scope_resolution);
criterion_main!(benches);
