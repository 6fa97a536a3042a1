//! Kinematic integration and wrap-around.
//!
//! Updates Position from Velocity each frame (`position += velocity`, unit
//! time step), then teleports particles that left the viewport to the
//! opposite edge.

use hecs::World;

use particle_field_core::types::{Position, Velocity, Viewport};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x;
        pos.y += vel.y;
    }
}

/// Wrap every position back into `[0, width] x [0, height]`.
pub fn wrap(world: &mut World, viewport: &Viewport) {
    for (_entity, pos) in world.query_mut::<&mut Position>() {
        wrap_position(pos, viewport);
    }
}

/// Hard teleport to the opposite edge, not a reflection.
pub fn wrap_position(pos: &mut Position, viewport: &Viewport) {
    if pos.x < 0.0 {
        pos.x = viewport.width;
    }
    if pos.x > viewport.width {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = viewport.height;
    }
    if pos.y > viewport.height {
        pos.y = 0.0;
    }
}
