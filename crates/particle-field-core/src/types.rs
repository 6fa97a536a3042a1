//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 2D position in surface space (pixels, origin top-left, y down).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in pixels per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames simulated so far.
    pub frame: u64,
    /// Nominal elapsed seconds at the reference refresh rate.
    pub elapsed_secs: f64,
}

/// Size of the drawing surface, measured once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        (self.as_dvec2() - other.as_dvec2()).length()
    }

    /// Displacement vector from `origin` to `self`.
    pub fn offset_from(&self, origin: &Position) -> DVec2 {
        self.as_dvec2() - origin.as_dvec2()
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<DVec2> for Position {
    fn from(v: DVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Seconds per frame at the reference refresh rate.
    pub fn dt(&self) -> f64 {
        1.0 / crate::constants::REFERENCE_REFRESH_RATE as f64
    }

    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
        self.elapsed_secs += self.dt();
    }
}

impl Viewport {
    /// Both extents must be finite and strictly positive.
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Whether a position lies inside `[0, width] x [0, height]`.
    pub fn contains(&self, pos: &Position) -> bool {
        (0.0..=self.width).contains(&pos.x) && (0.0..=self.height).contains(&pos.y)
    }
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// CSS `lightblue`.
    pub const LIGHT_BLUE: Rgba = Rgba::opaque(173, 216, 230);

    /// Red glow at 80% opacity.
    pub const GLOW_RED: Rgba = Rgba::new(218, 22, 22, 204);

    /// Same color with alpha scaled by `factor` (clamped to `[0, 1]`).
    pub fn with_alpha_scaled(&self, factor: f32) -> Self {
        let a = (self.a as f32 * factor.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..*self }
    }
}
