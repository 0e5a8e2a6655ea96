use criterion::{black_box, criterion_group, criterion_main, Criterion};

use footprints_tui::data::builtin;
use footprints_tui::map::{ImpactMap, Viewport};
use footprints_tui::theme;

fn rasterize_region(c: &mut Criterion) {
    let map = ImpactMap::new(builtin::southern_africa());
    let viewport = Viewport::southern_africa(200, 96);
    c.bench_function("rasterize_13_countries", |b| {
        b.iter(|| black_box(map.rasterize(black_box(&viewport), Some(0))));
    });
}

fn hit_test_grid(c: &mut Criterion) {
    let map = ImpactMap::new(builtin::southern_africa());
    c.bench_function("hit_test_64x32_grid", |b| {
        b.iter(|| {
            let mut inside = 0u32;
            for ix in 0..64 {
                for iy in 0..32 {
                    let lon = 10.0 + f64::from(ix) * 0.5;
                    let lat = -35.0 + f64::from(iy) * 0.5;
                    if map.hit_test(black_box(lon), black_box(lat)).is_some() {
                        inside += 1;
                    }
                }
            }
            black_box(inside)
        });
    });
}

fn projection_round_trip(c: &mut Criterion) {
    let viewport = Viewport::southern_africa(200, 96);
    c.bench_function("project_unproject", |b| {
        b.iter(|| {
            let (px, py) = viewport.project(black_box(24.0), black_box(-22.0));
            black_box(viewport.unproject(px, py))
        });
    });
}

fn choropleth_ramp(c: &mut Criterion) {
    c.bench_function("supply_color_ramp", |b| {
        b.iter(|| {
            for supplies in (0..20_000u32).step_by(250) {
                black_box(theme::supply_color(black_box(supplies)));
            }
        });
    });
}

criterion_group!(
    benches,
    rasterize_region,
    hit_test_grid,
    projection_round_trip,
    choropleth_ramp
);
criterion_main!(benches);
