use criterion::{Criterion, criterion_group, criterion_main};
use perron::prelude::*;
use perron::query;
use std::hint::black_box;

fn build_network(stop_count: usize, route_count: usize) -> Catalogue {
    let mut catalogue = Catalogue::new();
    for i in 0..stop_count {
        let coordinate = Coordinate::from((
            59.0 + (i % 100) as f64 * 0.002,
            18.0 + (i / 100) as f64 * 0.003,
        ));
        catalogue.add_stop(&format!("stop {i}"), coordinate);
    }
    for i in 0..stop_count {
        catalogue.set_distance(
            &format!("stop {i}"),
            &format!("stop {}", (i + 1) % stop_count),
            400 + (i as u32 % 7) * 50,
        );
    }
    for r in 0..route_count {
        let stops: Vec<String> = (0..20)
            .map(|k| format!("stop {}", (r * 37 + k) % stop_count))
            .collect();
        catalogue.add_route(&format!("route {r}"), &stops, r % 2 == 0);
    }
    catalogue
}

fn route_stats(c: &mut Criterion) {
    let catalogue = build_network(2000, 100);
    let names = catalogue.route_names();
    c.bench_function("route_stats", |b| {
        b.iter(|| {
            for name in &names {
                let route = catalogue.route(name).unwrap();
                black_box(catalogue.route_stats(route));
            }
        })
    });
}

fn render_map(c: &mut Criterion) {
    let catalogue = build_network(2000, 100);
    let settings = RenderSettings::default();
    c.bench_function("render_map", |b| {
        b.iter(|| black_box(query::render_network(&catalogue, &settings)))
    });
}

criterion_group!(benches, route_stats, render_map);
criterion_main!(benches);
