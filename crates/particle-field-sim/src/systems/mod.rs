//! ECS systems that operate on the particle world each frame.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: particle state lives in components, pointer state
//! and configuration are passed in by the engine.

pub mod influence;
pub mod movement;
pub mod snapshot;
