//! Simulation engine for the particle field.
//!
//! Owns the hecs ECS world, runs systems once per frame,
//! and produces FrameSnapshots for the host to draw.

pub mod engine;
pub mod error;
pub mod force;
pub mod systems;
pub mod world_setup;

pub use engine::{FieldEngine, SimConfig};
pub use error::SimError;
pub use particle_field_core as core;
