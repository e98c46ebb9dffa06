use criterion::{criterion_group, criterion_main, Bencher, BenchmarkId, Criterion};
use ringclip::clip::internal::graph::candidate_pairs;
use ringclip::*;

/// Star shaped ring with `count` points alternating between two radii.
fn star(cx: f64, cy: f64, count: usize) -> Ring<f64> {
    let points = (0..count)
        .map(|i| {
            let angle = std::f64::consts::TAU * (i as f64) / (count as f64);
            let radius = if i % 2 == 0 { 10.0 } else { 8.0 };
            Point::new(cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect();
    Ring::new(points)
}

fn options(use_tree: bool) -> ClipOptions<f64> {
    ClipOptions {
        bvh_pair_threshold: if use_tree { 0 } else { usize::MAX },
        ..ClipOptions::new()
    }
}

fn bench_candidate_pairs(b: &mut Bencher, a: &Ring<f64>, other: &Ring<f64>, use_tree: bool) {
    let edges_a = a.edges();
    let edges_b = other.edges();
    let options = options(use_tree);
    b.iter(|| candidate_pairs(&edges_a, &edges_b, &options))
}

fn bench_clip_rings(b: &mut Bencher, a: &Ring<f64>, other: &Ring<f64>, use_tree: bool) {
    let options = options(use_tree);
    b.iter(|| clip_rings(a, other, ClipOp::Union, &options))
}

fn candidate_pairs_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_pairs");
    let vertex_counts = &[50, 500, 5000];
    for &i in vertex_counts {
        let a = star(0.0, 0.0, i);
        let b = star(5.0, 1.0, i);
        group.bench_with_input(BenchmarkId::new("brute_force", i), &i, |bench, _| {
            bench_candidate_pairs(bench, &a, &b, false)
        });
        group.bench_with_input(BenchmarkId::new("dual_tree", i), &i, |bench, _| {
            bench_candidate_pairs(bench, &a, &b, true)
        });
    }

    group.finish();
}

fn clip_rings_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("clip_rings_union");
    let vertex_counts = &[50, 500, 2000];
    for &i in vertex_counts {
        let a = star(0.0, 0.0, i);
        let b = star(5.0, 1.0, i);
        group.bench_with_input(BenchmarkId::new("brute_force", i), &i, |bench, _| {
            bench_clip_rings(bench, &a, &b, false)
        });
        group.bench_with_input(BenchmarkId::new("dual_tree", i), &i, |bench, _| {
            bench_clip_rings(bench, &a, &b, true)
        });
    }

    group.finish();
}

criterion_group!(candidates, candidate_pairs_group, clip_rings_group);
criterion_main!(candidates);
