use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlchain::{Expr, Select, SqlFragment};

/// SELECT col0, col1, ... FROM t WHERE col0 = 0 AND col1 = 1 ...
fn build_select(n: usize) -> Select {
    let mut stmt = Select::new();
    stmt.add_columns((0..n).map(|i| format!("col{i}")))
        .and_then(|s| s.add_source("t"))
        .expect("static columns are valid");
    for i in 0..n {
        stmt.where_and_cmp(&format!("col{i}"), "=", i as i64)
            .expect("static predicate is valid");
    }
    stmt
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/render");

    for n in [1, 5, 10, 50, 100] {
        let stmt = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &stmt, |b, stmt| {
            b.iter(|| black_box(stmt.render()));
        });
    }

    group.finish();
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("select/build_and_render");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).render()));
        });
    }

    group.finish();
}

fn bench_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("expr/fan_out");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut expr = Expr::new();
                expr.and_cmp("id", "=", values.as_slice())
                    .expect("non-empty list");
                black_box(expr.render())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_build_and_render, bench_fan_out);
criterion_main!(benches);
