use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use opendrive_graph_builder::{CubicPolynomial, MapBuilder, NO_JUNCTION};
use std::hint::black_box;

/// Synthetisches Netz: `road_count` verkettete Segmente mit je zwei
/// Sektionen und vier Spuren, Verweise jeweils auf den Nachbarn.
fn build_synthetic_builder(road_count: u32) -> MapBuilder {
    let mut builder = MapBuilder::new();
    for id in 1..=road_count {
        let predecessor = if id > 1 { (id - 1) as i32 } else { -1 };
        let successor = if id < road_count { (id + 1) as i32 } else { -1 };
        builder.add_road(id, "segment", 100.0, NO_JUNCTION, predecessor, successor);
        builder.add_road_section(id, CubicPolynomial::new(0.0, 0.0, 0.0, 0.0, 0.0));
        builder.add_road_section(id, CubicPolynomial::new(50.0, 0.0, 0.0, 0.0, 0.0));
        for lane_id in [-2, -1, 1, 2] {
            builder.add_road_section_lane(id, 0, lane_id, "driving", false, lane_id, lane_id);
            builder.add_road_section_lane(id, 1, lane_id, "driving", false, lane_id, lane_id);
            builder.add_lane_width(id, 0, lane_id, 0.0, 3.5, 0.0, 0.0, 0.0);
        }
    }
    builder
}

fn bench_ingestion(c: &mut Criterion) {
    c.bench_function("ingest_1000_roads", |b| {
        b.iter(|| black_box(build_synthetic_builder(1000)))
    });
}

fn bench_finalize(c: &mut Criterion) {
    c.bench_function("finalize_1000_roads", |b| {
        b.iter_batched(
            || build_synthetic_builder(1000),
            |builder| black_box(builder.build().road_count()),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_ingestion, bench_finalize);
criterion_main!(benches);
