//! Pointer input commands sent from the host to the simulation.
//!
//! Commands are queued and applied at the next frame boundary.

use serde::{Deserialize, Serialize};

/// All pointer actions the field reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PointerCommand {
    /// Pointer moved to surface coordinates `(x, y)`.
    Moved { x: f64, y: f64 },
    /// Pointer left the surface.
    Left,
    /// Primary button pressed.
    PrimaryPressed,
    /// Primary button released.
    PrimaryReleased,
}
