//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Particle logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::types::{Position, Rgba, Velocity};

/// Stable ordinal assigned at spawn. Snapshot and export order follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ParticleId(pub u32);

/// Velocity the particle eases back toward when not influenced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseVelocity(pub Velocity);

/// Disc radius in pixels. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Radius(pub f64);

/// Fill color. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tint(pub Rgba);

/// Complete state of one particle, used for export and restore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleState {
    pub id: ParticleId,
    pub position: Position,
    pub velocity: Velocity,
    pub base_velocity: Velocity,
    pub radius: f64,
    pub color: Rgba,
}
