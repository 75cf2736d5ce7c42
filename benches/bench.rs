// Criterion benchmarks for cellmatch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use cellmatch::core::{
    geo::{haversine_distance, initial_bearing},
    match_all, Matcher,
};
use cellmatch::models::CellSite;

fn make_site(rnc: &str, id: usize, lat: f64, lon: f64, azimuth: f64) -> CellSite {
    CellSite {
        rnc: rnc.to_string(),
        cell: format!("Cell{}", id),
        latitude: lat,
        longitude: lon,
        azimuth_deg: azimuth,
        latitude_text: lat.to_string(),
        longitude_text: lon.to_string(),
    }
}

fn make_targets(count: usize) -> Vec<CellSite> {
    (0..count)
        .map(|i| {
            let lat = 40.0 + (i % 100) as f64 * 0.01;
            let lon = -74.0 + (i / 100) as f64 * 0.01;
            make_site("RNC2", i, lat, lon, ((i * 37) % 360) as f64)
        })
        .collect()
}

fn bench_haversine_distance(c: &mut Criterion) {
    c.bench_function("haversine_distance", |b| {
        b.iter(|| {
            haversine_distance(
                black_box(40.7128),
                black_box(-74.0060),
                black_box(40.72),
                black_box(-74.01),
            )
        });
    });
}

fn bench_initial_bearing(c: &mut Criterion) {
    c.bench_function("initial_bearing", |b| {
        b.iter(|| {
            initial_bearing(
                black_box(40.7128),
                black_box(-74.0060),
                black_box(40.72),
                black_box(-74.01),
            )
        });
    });
}

fn bench_find_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_neighbors");
    let source = make_site("RNC1", 0, 40.5, -73.9, 270.0);
    let matcher = Matcher::default();

    for target_count in [100, 1_000, 10_000] {
        let targets = make_targets(target_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(target_count),
            &targets,
            |b, targets| {
                b.iter(|| matcher.find_neighbors(black_box(&source), black_box(targets)));
            },
        );
    }
    group.finish();
}

fn bench_match_all(c: &mut Criterion) {
    let sources: Vec<CellSite> = (0..200)
        .map(|i| make_site("RNC1", i, 40.3 + (i % 20) as f64 * 0.01, -74.1, ((i * 53) % 360) as f64))
        .collect();
    let targets = make_targets(2_000);
    let matcher = Matcher::default();

    c.bench_function("match_all_200x2000", |b| {
        b.iter(|| match_all(black_box(&matcher), black_box(&sources), black_box(&targets)));
    });
}

criterion_group!(
    benches,
    bench_haversine_distance,
    bench_initial_bearing,
    bench_find_neighbors,
    bench_match_all
);
criterion_main!(benches);
