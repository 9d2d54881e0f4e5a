use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pox_version::{Comparator, Operator, Stability};

fn bench_compare(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "1.2.4", Operator::LessThan),
        ("2.4.0-alpha", "2.4.0", Operator::LessThan),
        ("2.1.0.0-dev", "2.1.0.0", Operator::LessThan),
        ("1.0.0", "1", Operator::GreaterThanOrEqual),
        ("dev-master", "dev-feature", Operator::NotEqual),
        ("1.2.3-rc1", "1.2.3", Operator::LessThan),
        ("1.2.3-pl1", "1.2.3", Operator::GreaterThan),
    ];

    c.bench_function("comparator_compare", |b| {
        b.iter(|| {
            for (a, bver, op) in cases {
                black_box(Comparator::compare(black_box(a), op, black_box(bver)));
            }
        })
    });
}

fn bench_stability(c: &mut Criterion) {
    let versions = [
        "1.2.3.0",
        "1.2.3.0-beta1",
        "1.2.9999999.9999999-dev",
        "dev-master",
        "1.2.3.0-RC1",
        "1.2.3.0-patch1",
    ];

    c.bench_function("stability_from_version", |b| {
        b.iter(|| {
            for version in versions {
                black_box(Stability::from_version(black_box(version)));
            }
        })
    });
}

criterion_group!(benches, bench_compare, bench_stability);
criterion_main!(benches);
