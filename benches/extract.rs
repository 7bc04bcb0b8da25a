use configspace::{extract, ConditionPath, ExprGraph, ExprId};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

/// Build a chain of nested choices `depth` levels deep: each level picks
/// between a float leaf and the next level.
fn build_deep(depth: usize) -> (ExprGraph, ExprId) {
    let mut g = ExprGraph::new();
    let mut inner = g.uniform("leaf", 0.0, 1.0);
    for level in 0..depth {
        let other = g.uniform(format!("x{level}"), 0.0, 1.0);
        inner = g.choice(format!("c{level}"), vec![other, inner]);
    }
    (g, inner)
}

/// Build a single choice over `width` float options.
fn build_wide(width: usize) -> (ExprGraph, ExprId) {
    let mut g = ExprGraph::new();
    let options: Vec<ExprId> = (0..width)
        .map(|i| g.uniform(format!("x{i}"), 0.0, 1.0))
        .collect();
    let root = g.choice("pick", options);
    (g, root)
}

fn bench_deep_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_deep");
    for depth in [8, 64, 256] {
        let (g, root) = build_deep(depth);
        let seed = ConditionPath::root();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| extract(&g, root, &seed).unwrap());
        });
    }
    group.finish();
}

fn bench_wide_switch(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_wide");
    for width in [16, 256, 4096] {
        let (g, root) = build_wide(width);
        let seed = ConditionPath::root();
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| extract(&g, root, &seed).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_deep_nesting, bench_wide_switch);
criterion_main!(benches);
