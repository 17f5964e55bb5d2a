use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use line_collapse_editor::core::{detect, CollapseAnimator, CollapseConfig};
use line_collapse_editor::{Point, Segment};
use std::hint::black_box;

fn build_synthetic_segments(count: usize) -> Vec<Segment> {
    (0..count)
        .map(|i| {
            let x = (i % 40) as f64 * 25.0;
            let y = ((i * 7) % 30) as f64 * 25.0;
            let dx = ((i * 13) % 200) as f64 - 100.0;
            let dy = ((i * 31) % 200) as f64 - 100.0;
            Segment::new(Point::new(x, y), Point::new(x + dx, y + dy))
        })
        .collect()
}

fn bench_intersection_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("intersection_detection");

    for &segment_count in &[10usize, 100, 500] {
        let segments = build_synthetic_segments(segment_count);

        group.bench_with_input(
            BenchmarkId::new("detect", segment_count),
            &segments,
            |b, segments| {
                b.iter(|| {
                    let report = detect(black_box(segments), 1e-6);
                    black_box(report.points.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_collapse_run(c: &mut Criterion) {
    let segments = build_synthetic_segments(100);

    c.bench_function("collapse_full_run_100_segments", |b| {
        b.iter(|| {
            let mut animator = CollapseAnimator::new();
            animator
                .start(black_box(&segments), CollapseConfig::default())
                .expect("Start erwartet");
            let mut ticks = 0u32;
            while animator.is_collapsing() {
                let _ = animator.tick();
                ticks += 1;
            }
            black_box(ticks)
        })
    });
}

criterion_group!(core_benches, bench_intersection_detection, bench_collapse_run);
criterion_main!(core_benches);
