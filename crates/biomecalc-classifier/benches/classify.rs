use biomecalc_classifier::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ndarray::Array2;

fn bench_classify_land(c: &mut Criterion) {
    c.bench_function("classify_land", |bencher| {
        bencher.iter(|| black_box(classify(black_box(356.0), 99.8, 136.0, -2.0, 21.7, 296.0)))
    });
}

fn bench_classify_on_planet_exoplanet(c: &mut Criterion) {
    let planet = Planet::EARTH
        .with_mass_kg(6.417e23)
        .with_mean_radius_km(3390.0)
        .with_mean_surface_pressure_kpa(0.6)
        .with_exoplanet(true);
    c.bench_function("classify_on_planet_exoplanet", |bencher| {
        bencher.iter(|| black_box(planet.classify(black_box(-3500.0), -71.9, 30.0, 0.0, 12.9, 87.0)))
    });
}

fn raster_fields(side: usize) -> [Array2<f64>; 5] {
    let flux = Array2::from_shape_fn((side, side), |(i, _)| 100.0 + 600.0 * i as f64 / side as f64);
    let altitude = Array2::from_shape_fn((side, side), |(i, j)| (i as f64 - j as f64) * 20.0);
    let temp = Array2::from_shape_fn((side, side), |(i, _)| 30.0 - 45.0 * i as f64 / side as f64);
    let var = Array2::from_elem((side, side), 8.0);
    let precip = Array2::from_shape_fn((side, side), |(_, j)| 3000.0 * j as f64 / side as f64);
    [flux, altitude, temp, var, precip]
}

fn bench_raster(c: &mut Criterion) {
    let [flux, altitude, temp, var, precip] = raster_fields(512);
    let rasters = SurfaceRasters::new(
        flux.view(),
        altitude.view(),
        temp.view(),
        var.view(),
        precip.view(),
    )
    .expect("fields share a shape");
    let params = SurfaceParams {
        gravity_m_per_s2: 9.82,
        mean_surface_pressure_kpa: 101.3,
        exoplanet: false,
    };
    c.bench_function("raster_512_parallel", |bencher| {
        bencher.iter(|| black_box(classify_planet_biomes(&params, &rasters)))
    });
    c.bench_function("raster_512_sequential", |bencher| {
        bencher.iter(|| black_box(classify_planet_biomes_sequential(&params, &rasters)))
    });
}

criterion_group!(
    benches,
    bench_classify_land,
    bench_classify_on_planet_exoplanet,
    bench_raster,
);
criterion_main!(benches);
