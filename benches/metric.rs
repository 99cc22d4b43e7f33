use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vorometric::generators;
use vorometric::{Canvas, MetricConfig, MetricKind, Point};

fn benchmark_distance(c: &mut Criterion) {
    let canvas = Canvas::default();
    let points = generators::random_seeded(10_000, canvas, 7);
    let origin = Point::new(400.0, 300.0);

    for kind in MetricKind::ALL {
        let metric = MetricConfig::new(kind).with_p_value(3.0).with_bounds(canvas);
        c.bench_function(&format!("distance_{}_10000", kind), |b| {
            b.iter(|| {
                let mut sum = 0.0;
                for p in &points {
                    sum += metric.distance(black_box(&origin), p);
                }
                black_box(sum)
            })
        });
    }
}

criterion_group!(benches, benchmark_distance);
criterion_main!(benches);
