//! Particle spawn factories for setting up the simulation world.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use particle_field_core::components::*;
use particle_field_core::config::{ColorScheme, FieldConfig};
use particle_field_core::constants::PARTICLE_COLOR;
use particle_field_core::types::{Position, Rgba, Velocity, Viewport};

/// Populate the world with `config.particle_count` randomized particles.
pub fn spawn_field(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &FieldConfig,
    viewport: &Viewport,
) {
    for i in 0..config.particle_count {
        let state = random_particle(rng, ParticleId(i as u32), config, viewport);
        spawn_particle(world, &state);
    }
}

/// Roll one particle: uniform position in the viewport, velocity components
/// in `[-initial_speed, initial_speed)` copied as the baseline, uniform radius.
pub fn random_particle(
    rng: &mut ChaCha8Rng,
    id: ParticleId,
    config: &FieldConfig,
    viewport: &Viewport,
) -> ParticleState {
    let position = Position::new(
        rng.gen::<f64>() * viewport.width,
        rng.gen::<f64>() * viewport.height,
    );

    let speed = config.initial_speed;
    let velocity = Velocity::new(
        (rng.gen::<f64>() - 0.5) * 2.0 * speed,
        (rng.gen::<f64>() - 0.5) * 2.0 * speed,
    );

    let range = config.radius_range;
    let radius = range.min + rng.gen::<f64>() * (range.max - range.min);

    ParticleState {
        id,
        position,
        velocity,
        base_velocity: velocity,
        radius,
        color: pick_color(rng, &config.colors),
    }
}

/// Spawn a particle entity from its full state.
pub fn spawn_particle(world: &mut World, state: &ParticleState) -> hecs::Entity {
    world.spawn((
        state.id,
        state.position,
        state.velocity,
        BaseVelocity(state.base_velocity),
        Radius(state.radius),
        Tint(state.color),
    ))
}

fn pick_color(rng: &mut ChaCha8Rng, colors: &ColorScheme) -> Rgba {
    match colors {
        ColorScheme::Solid(color) => *color,
        // `FieldConfig::validate` rejects empty palettes; an unvalidated one
        // falls back to the default particle color.
        ColorScheme::Palette(palette) => palette.choose(rng).copied().unwrap_or(PARTICLE_COLOR),
    }
}
