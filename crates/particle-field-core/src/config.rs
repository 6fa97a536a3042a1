//! Field configuration: population, shape, colors and force tuning.
//!
//! Every field has a default, so partial JSON documents deserialize into
//! the classic (repel-only) field with overrides applied.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::ForcePolicy;
use crate::error::ConfigError;
use crate::types::Rgba;

/// Tunable description of a particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub escape_radius: f64,
    pub radius_range: RadiusRange,
    pub initial_speed: f64,
    pub ease_rate: f64,
    pub colors: ColorScheme,
    pub glow: GlowStyle,
    pub policy: ForcePolicy,
    pub repel: RepelTuning,
    pub toggle: ToggleTuning,
}

/// Half-open range `[min, max)` particle radii are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusRange {
    pub min: f64,
    pub max: f64,
}

/// How particle colors are assigned at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ColorScheme {
    /// Every particle shares one color.
    Solid(Rgba),
    /// Each particle picks uniformly from the palette.
    Palette(Vec<Rgba>),
}

/// Outer blur drawn around a disc near the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlowStyle {
    pub color: Rgba,
    pub blur: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepelTuning {
    pub speed_factor: f64,
    pub damping: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleTuning {
    pub strength: f64,
    pub friction: f64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl Default for RepelTuning {
    fn default() -> Self {
        Self {
            speed_factor: REPEL_SPEED_FACTOR,
            damping: REPEL_DAMPING,
        }
    }
}

impl Default for ToggleTuning {
    fn default() -> Self {
        Self {
            strength: TOGGLE_STRENGTH,
            friction: TOGGLE_FRICTION,
        }
    }
}

impl Default for RadiusRange {
    fn default() -> Self {
        Self {
            min: RADIUS_MIN,
            max: RADIUS_MAX,
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        ColorScheme::Solid(PARTICLE_COLOR)
    }
}

impl Default for GlowStyle {
    fn default() -> Self {
        Self {
            color: GLOW_COLOR,
            blur: GLOW_BLUR,
        }
    }
}

impl FieldConfig {
    /// Repel-only field: light blue particles pushed away from the pointer.
    pub fn classic() -> Self {
        Self {
            particle_count: CLASSIC_PARTICLE_COUNT,
            escape_radius: ESCAPE_RADIUS,
            radius_range: RadiusRange::default(),
            initial_speed: INITIAL_SPEED,
            ease_rate: EASE_RATE,
            colors: ColorScheme::default(),
            glow: GlowStyle::default(),
            policy: ForcePolicy::RepelOnly,
            repel: RepelTuning::default(),
            toggle: ToggleTuning::default(),
        }
    }

    /// Toggleable field: multicolored particles, attraction while the button is held.
    pub fn toggle() -> Self {
        Self {
            particle_count: TOGGLE_PARTICLE_COUNT,
            colors: ColorScheme::Palette(TOGGLE_PALETTE.to_vec()),
            policy: ForcePolicy::Toggleable,
            ..Self::classic()
        }
    }

    /// Look up a preset by name (`classic` or `toggle`).
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "classic" | "repel" => Some(Self::classic()),
            "toggle" | "attract" => Some(Self::toggle()),
            _ => None,
        }
    }

    /// Reject values the update step cannot handle.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count > MAX_PARTICLE_COUNT {
            return Err(ConfigError::TooManyParticles {
                count: self.particle_count,
                max: MAX_PARTICLE_COUNT,
            });
        }
        if !(self.escape_radius.is_finite() && self.escape_radius > 0.0) {
            return Err(ConfigError::InvalidEscapeRadius(self.escape_radius));
        }
        let RadiusRange { min, max } = self.radius_range;
        if !(min.is_finite() && max.is_finite() && min >= 0.0 && min <= max) {
            return Err(ConfigError::InvalidRadiusRange { min, max });
        }
        if !(self.initial_speed.is_finite() && self.initial_speed >= 0.0) {
            return Err(ConfigError::InvalidInitialSpeed(self.initial_speed));
        }
        if !(0.0..=1.0).contains(&self.ease_rate) {
            return Err(ConfigError::OutOfUnitRange {
                field: "ease_rate",
                value: self.ease_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.toggle.friction) {
            return Err(ConfigError::OutOfUnitRange {
                field: "toggle.friction",
                value: self.toggle.friction,
            });
        }
        for (field, value) in [
            ("repel.speed_factor", self.repel.speed_factor),
            ("repel.damping", self.repel.damping),
            ("toggle.strength", self.toggle.strength),
            ("glow.blur", self.glow.blur),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidTuning { field, value });
            }
        }
        if let ColorScheme::Palette(colors) = &self.colors {
            if colors.is_empty() {
                return Err(ConfigError::EmptyPalette);
            }
        }
        Ok(())
    }
}
