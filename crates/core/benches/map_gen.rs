use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hexplore::{
    Biome, Explorer, GenerationConfig, GridSize, HexPoint, MapState, Survey,
};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("map-generation");
    group.sample_size(10);

    let config = GenerationConfig {
        seed: "bench".into(),
        ..Default::default()
    };
    group.bench_function("map gen", |b| {
        b.iter(|| MapState::generate(black_box(&config)))
    });

    let large = GenerationConfig {
        cols: 200,
        rows: 200,
        ..config.clone()
    };
    group.bench_function("map gen 200x200", |b| {
        b.iter(|| MapState::generate(black_box(&large)))
    });

    group.bench_function("explore row", |b| {
        b.iter(|| {
            let mut map =
                MapState::blank("bench".into(), GridSize::new(100, 3));
            let mut explorer = Explorer::default();
            for col in 0..100 {
                explorer
                    .explore(
                        &mut map,
                        HexPoint::new(col, 1),
                        Survey::new(Biome::Plains),
                    )
                    .unwrap()
                    .unwrap();
            }
            map
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
