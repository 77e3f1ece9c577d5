use criterion::{black_box, criterion_group, criterion_main, Criterion};

use geomaps::encode::percent_encode;
use geomaps::{projection, Coordinate, PixelPoint};

/// Coordinates spread across the projectable world.
fn sample_coords() -> Vec<Coordinate> {
    (0..1000)
        .map(|i| {
            let frac = i as f64 / 1000.0;
            Coordinate::new(-85.0 + frac * 170.0, -180.0 + frac * 360.0)
        })
        .collect()
}

fn bench_to_pixel(c: &mut Criterion) {
    let coords = sample_coords();

    c.bench_function("to_pixel_1000", |b| {
        b.iter(|| {
            for &coord in &coords {
                black_box(projection::to_pixel(black_box(coord)));
            }
        });
    });
}

fn bench_to_coord(c: &mut Criterion) {
    let points: Vec<PixelPoint> = sample_coords()
        .into_iter()
        .map(projection::to_pixel)
        .collect();

    c.bench_function("to_coord_1000", |b| {
        b.iter(|| {
            for &point in &points {
                black_box(projection::to_coord(black_box(point)));
            }
        });
    });
}

fn bench_pan(c: &mut Criterion) {
    let center = Coordinate::new(-34.6037, -58.3816);

    c.bench_function("pan_zoom_12", |b| {
        b.iter(|| {
            black_box(
                projection::pan(black_box(center), black_box(240), black_box(-160), 12).unwrap(),
            );
        });
    });
}

fn bench_percent_encode(c: &mut Criterion) {
    let address = "Av. 9 de Julio 1000, Buenos Aires, Argentina";

    c.bench_function("percent_encode_address", |b| {
        b.iter(|| {
            black_box(percent_encode(black_box(address)));
        });
    });
}

criterion_group!(
    benches,
    bench_to_pixel,
    bench_to_coord,
    bench_pan,
    bench_percent_encode,
);
criterion_main!(benches);
