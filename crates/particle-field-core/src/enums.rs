//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// How the pointer influences particles inside the escape radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ForcePolicy {
    /// Always push away from the pointer, ease back to baseline outside the radius.
    #[default]
    RepelOnly,
    /// Pull while the primary button is held, push otherwise. Constant friction.
    Toggleable,
}

impl ForcePolicy {
    /// Whether the primary button drives the attraction flag.
    pub fn uses_attraction(&self) -> bool {
        matches!(self, ForcePolicy::Toggleable)
    }
}
