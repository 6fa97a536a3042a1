//! Pointer force model.
//!
//! Both policies share the same linear falloff: 1 at the pointer, 0 at the
//! escape radius. Nothing is applied at or beyond the radius.

use glam::DVec2;

use particle_field_core::config::FieldConfig;
use particle_field_core::enums::ForcePolicy;
use particle_field_core::state::PointerState;
use particle_field_core::types::Position;

/// Linear falloff `(R - d) / R`.
pub fn falloff(distance: f64, escape_radius: f64) -> f64 {
    (escape_radius - distance) / escape_radius
}

/// Repel-only force magnitude, `None` outside the escape radius.
pub fn repel_magnitude(distance: f64, escape_radius: f64) -> Option<f64> {
    (distance < escape_radius).then(|| falloff(distance, escape_radius))
}

/// Toggleable force magnitude: clamped falloff scaled by `strength`.
pub fn toggle_magnitude(distance: f64, escape_radius: f64, strength: f64) -> Option<f64> {
    (distance < escape_radius).then(|| falloff(distance, escape_radius).clamp(0.0, 1.0) * strength)
}

/// Velocity delta the pointer applies to a particle at `position` this frame.
///
/// Returns `None` when no pointer is engaged or the particle is outside the
/// escape radius; the caller then eases the particle back to its baseline.
/// A particle exactly on the pointer is pushed along +x with full magnitude,
/// matching `atan2(0, 0) = 0`.
pub fn impulse(config: &FieldConfig, pointer: &PointerState, position: &Position) -> Option<DVec2> {
    let target = pointer.position?;
    let away = position.offset_from(&target);
    let distance = away.length();
    let direction = DVec2::from_angle(away.y.atan2(away.x));

    match config.policy {
        ForcePolicy::RepelOnly => {
            let force = repel_magnitude(distance, config.escape_radius)?;
            let speed = force * config.repel.speed_factor;
            Some(direction * speed * config.repel.damping)
        }
        ForcePolicy::Toggleable => {
            let effect =
                toggle_magnitude(distance, config.escape_radius, config.toggle.strength)?;
            let toward = -direction * effect;
            Some(if pointer.attracting { toward } else { -toward })
        }
    }
}
