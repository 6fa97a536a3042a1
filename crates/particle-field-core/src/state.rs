//! Frame snapshot: everything the host needs to draw one frame.

use serde::{Deserialize, Serialize};

use crate::components::ParticleId;
use crate::config::GlowStyle;
use crate::types::{Position, Rgba, SimTime, Viewport};

/// Pointer state owned by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    /// `None` when no pointer is engaged.
    pub position: Option<Position>,
    /// Pull toward the pointer instead of pushing. Toggleable policy only.
    pub attracting: bool,
}

impl PointerState {
    pub fn is_engaged(&self) -> bool {
        self.position.is_some()
    }
}

/// Draw list produced after each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub viewport: Viewport,
    pub pointer: PointerState,
    pub discs: Vec<DiscView>,
}

/// A single particle as it should be drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscView {
    pub id: ParticleId,
    pub center: Position,
    pub radius: f64,
    pub color: Rgba,
    /// Present only while the pointer is engaged and within the escape radius.
    pub glow: Option<GlowStyle>,
}

impl FrameSnapshot {
    /// Number of discs drawn with a glow this frame.
    pub fn glowing_count(&self) -> usize {
        self.discs.iter().filter(|d| d.glow.is_some()).count()
    }
}
