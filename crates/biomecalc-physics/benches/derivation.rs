use biomecalc_physics::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_boiling_point(c: &mut Criterion) {
    let pressure = black_box(87.5);
    c.bench_function("boiling_point", |bencher| {
        bencher.iter(|| black_box(boiling_point(pressure)))
    });
}

fn bench_pressure_at_altitude(c: &mut Criterion) {
    let gravity = black_box(9.81);
    let height = black_box(2_450.0);
    c.bench_function("pressure_at_altitude", |bencher| {
        bencher.iter(|| black_box(pressure_at_altitude(gravity, 101.3, 12.0, height)))
    });
}

fn bench_surface_solar_flux_rotating(c: &mut Criterion) {
    let latitude = black_box(47.3);
    c.bench_function("surface_solar_flux_rotating", |bencher| {
        bencher.iter(|| black_box(surface_solar_flux(1373.0, 101.3, latitude, 8.5, 23.0, false)))
    });
}

fn bench_surface_solar_flux_tidal_lock(c: &mut Criterion) {
    let longitude = black_box(-33.0);
    c.bench_function("surface_solar_flux_tidal_lock", |bencher| {
        bencher.iter(|| black_box(surface_solar_flux(900.0, 60.0, 12.0, longitude, 0.0, true)))
    });
}

criterion_group!(
    benches,
    bench_boiling_point,
    bench_pressure_at_altitude,
    bench_surface_solar_flux_rotating,
    bench_surface_solar_flux_tidal_lock,
);
criterion_main!(benches);
