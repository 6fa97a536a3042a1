//! Snapshot system: queries the ECS world and builds the frame's draw list.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use particle_field_core::components::{ParticleId, Radius, Tint};
use particle_field_core::config::FieldConfig;
use particle_field_core::state::{DiscView, FrameSnapshot, PointerState};
use particle_field_core::types::{Position, SimTime, Viewport};

/// Build a complete FrameSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    viewport: &Viewport,
    pointer: &PointerState,
    config: &FieldConfig,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        viewport: *viewport,
        pointer: *pointer,
        discs: build_discs(world, pointer, config),
    }
}

/// One disc per particle, ordered by particle id.
fn build_discs(world: &World, pointer: &PointerState, config: &FieldConfig) -> Vec<DiscView> {
    let mut discs: Vec<DiscView> = world
        .query::<(&ParticleId, &Position, &Radius, &Tint)>()
        .iter()
        .map(|(_, (id, pos, radius, tint))| DiscView {
            id: *id,
            center: *pos,
            radius: radius.0,
            color: tint.0,
            glow: is_glowing(pos, pointer, config.escape_radius).then_some(config.glow),
        })
        .collect();

    discs.sort_by_key(|d| d.id);
    discs
}

/// A disc glows while an engaged pointer is strictly within the escape radius.
pub fn is_glowing(pos: &Position, pointer: &PointerState, escape_radius: f64) -> bool {
    pointer
        .position
        .is_some_and(|p| pos.distance_to(&p) < escape_radius)
}
