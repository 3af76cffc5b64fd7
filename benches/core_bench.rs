use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::DVec2;
use odm_shot_coverage::{fit, parse_reconstruction_json, SpatialIndex, Viewport};
use std::fmt::Write;
use std::hint::black_box;

fn bench_report_parsing(c: &mut Criterion) {
    let json = include_str!("../tests/fixtures/report/reconstruction_shot_points.json");

    c.bench_function("report_parse_fixture", |b| {
        b.iter(|| {
            let rec = parse_reconstruction_json(black_box(json)).expect("JSON parse failed");
            black_box(rec.shot_count())
        })
    });
}

/// Synthetisches Report-JSON mit Shots im Raster und nackter
/// Punktliste (Tupel-Form).
fn build_synthetic_report_json(shot_count: usize, point_count: usize) -> String {
    let mut shots = String::new();
    for i in 0..shot_count {
        if i > 0 {
            shots.push(',');
        }
        let x = (i % 100) as f64 * 3.0;
        let y = (i / 100) as f64 * 3.0;
        write!(
            shots,
            r#"{{"imageName":"IMG_{i:05}.JPG","translation":[{x:.1},{y:.1},12.0],"rotationEulerXYZ":[3.14,0.0,0.0]}}"#
        )
        .expect("write shot");
    }

    let mut points = String::new();
    for i in 0..point_count {
        if i > 0 {
            points.push(',');
        }
        let x = (i % 1000) as f64 * 0.3;
        let y = ((i * 7) % 1000) as f64 * 0.3;
        let z = (i % 17) as f64 * 0.1;
        write!(points, "[{x:.2},{y:.2},{z:.2}]").expect("write point");
    }

    format!(r#"{{"shots":[{shots}],"points":[{points}]}}"#)
}

fn bench_report_parsing_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("report_parse");

    for &point_count in &[10_000usize, 100_000usize] {
        let json = build_synthetic_report_json(500, point_count);

        group.bench_with_input(
            BenchmarkId::new("synthetic", point_count),
            &json,
            |b, json| {
                b.iter(|| {
                    let rec =
                        parse_reconstruction_json(black_box(json)).expect("JSON parse failed");
                    black_box(rec.point_count())
                })
            },
        );
    }

    group.finish();
}

fn build_synthetic_index(point_count: usize) -> SpatialIndex {
    SpatialIndex::from_entries((0..point_count).map(|i| {
        let x = (i % 1000) as f64 + (i as f64 * 0.0017).fract();
        let y = (i / 1000) as f64 + (i as f64 * 0.0031).fract();
        (i as u64, DVec2::new(x, y))
    }))
}

fn build_query_points(count: usize) -> Vec<DVec2> {
    (0..count)
        .map(|i| {
            let x = (i % 1000) as f64 + 0.37;
            let y = ((i * 7) % 1000) as f64 + 0.63;
            DVec2::new(x, y)
        })
        .collect()
}

fn bench_spatial_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("spatial_queries");

    for &point_count in &[10_000usize, 100_000usize] {
        let index = build_synthetic_index(point_count);
        let query_points = build_query_points(1024);

        group.bench_with_input(
            BenchmarkId::new("nearest_within_batch", point_count),
            &index,
            |b, index| {
                b.iter(|| {
                    let mut hits = 0usize;
                    for point in &query_points {
                        if index.nearest_within(black_box(*point), 0.75).is_some() {
                            hits += 1;
                        }
                    }
                    black_box(hits)
                })
            },
        );
    }

    group.finish();
}

fn bench_domain_fit(c: &mut Criterion) {
    let points: Vec<glam::DVec3> = (0..10_000)
        .map(|i| {
            glam::DVec3::new(
                (i % 1000) as f64 * 0.3,
                ((i * 7) % 1000) as f64 * 0.3,
                (i % 17) as f64 * 0.1,
            )
        })
        .collect();

    c.bench_function("domain_fit_10k_points", |b| {
        b.iter(|| {
            let domain = odm_shot_coverage::BoundingDomain::from_points(black_box(&points))
                .expect("Punktwolke ist nicht leer");
            let fitted = fit(&domain, Viewport::new(1280.0, 800.0), 10.0).expect("Fit failed");
            black_box(fitted)
        })
    });
}

criterion_group!(
    core_benches,
    bench_report_parsing,
    bench_report_parsing_scaling,
    bench_spatial_queries,
    bench_domain_fit
);
criterion_main!(core_benches);
