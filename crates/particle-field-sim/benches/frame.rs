//! Benchmarks for one simulated frame.
//!
//! Run with: `cargo bench -p particle-field-sim`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use particle_field_core::commands::PointerCommand;
use particle_field_core::config::FieldConfig;
use particle_field_core::types::Viewport;
use particle_field_sim::{FieldEngine, SimConfig};

fn engine(field: FieldConfig) -> FieldEngine {
    let viewport = Viewport::new(1920.0, 1080.0).expect("valid viewport");
    FieldEngine::new(SimConfig { seed: 42, field }, viewport).expect("valid config")
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group.bench_function("classic_idle", |b| {
        let mut engine = engine(FieldConfig::classic());
        b.iter(|| black_box(engine.tick()))
    });

    group.bench_function("classic_pointer", |b| {
        let mut engine = engine(FieldConfig::classic());
        engine.queue_input(PointerCommand::Moved { x: 960.0, y: 540.0 });
        b.iter(|| black_box(engine.tick()))
    });

    group.bench_function("toggle_attracting", |b| {
        let mut engine = engine(FieldConfig::toggle());
        engine.queue_inputs([
            PointerCommand::Moved { x: 960.0, y: 540.0 },
            PointerCommand::PrimaryPressed,
        ]);
        b.iter(|| black_box(engine.tick()))
    });

    group.finish();
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
