//! Pointer influence and velocity relaxation.
//!
//! Inside the escape radius the force model adds an impulse; otherwise the
//! velocity eases back toward the particle's baseline. The toggleable policy
//! also applies friction every frame.

use hecs::World;

use particle_field_core::components::BaseVelocity;
use particle_field_core::config::FieldConfig;
use particle_field_core::enums::ForcePolicy;
use particle_field_core::state::PointerState;
use particle_field_core::types::{Position, Velocity};

use crate::force;

/// Update the velocity of every particle from the current pointer state.
pub fn run(world: &mut World, pointer: &PointerState, config: &FieldConfig) {
    for (_entity, (pos, vel, base)) in
        world.query_mut::<(&Position, &mut Velocity, &BaseVelocity)>()
    {
        match force::impulse(config, pointer, pos) {
            Some(dv) => {
                vel.x += dv.x;
                vel.y += dv.y;
            }
            None => ease(vel, &base.0, config.ease_rate),
        }

        if config.policy == ForcePolicy::Toggleable {
            vel.x *= config.toggle.friction;
            vel.y *= config.toggle.friction;
        }
    }
}

/// Exponential smoothing toward `base`: `v += (base - v) * rate`.
pub fn ease(vel: &mut Velocity, base: &Velocity, rate: f64) {
    vel.x += (base.x - vel.x) * rate;
    vel.y += (base.y - vel.y) * rate;
}
