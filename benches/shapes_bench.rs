use criterion::{black_box, criterion_group, criterion_main, Criterion};
use shapes::{Circle, Point, SharedPoint};

// --- Helper for summing a row of circles ---
fn run_circle_sum_bench(num_circles: usize) -> Circle {
    let mut total = Circle::with_radius(0.0).unwrap();
    for i in 0..num_circles {
        let c = Circle::from_tuple((i as f64, -(i as f64)), 0.5).unwrap();
        total += &c;
    }
    total
}

// Benchmark for in-place circle accumulation
fn bench_circle_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle_sum");

    for num_circles in [10, 100, 1000].iter() {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_circles),
            num_circles,
            |b, &n| {
                b.iter(|| run_circle_sum_bench(black_box(n)));
            },
        );
    }
    group.finish();
}

// Benchmark for moving many circles through one shared center
fn bench_shared_center(c: &mut Criterion) {
    let mut group = c.benchmark_group("shared_center");

    for num_circles in [10, 100, 1000].iter() {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(num_circles),
            num_circles,
            |b, &n| {
                let center = SharedPoint::at(0.0, 0.0);
                let circles: Vec<Circle> = (0..n)
                    .map(|i| Circle::new(&center, i as f64).unwrap())
                    .collect();
                b.iter(|| {
                    center.add_assign_point(black_box(Point::new(1.0, 1.0)));
                    circles.iter().map(Circle::area).sum::<f64>()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_circle_sum, bench_shared_center);
criterion_main!(benches);
