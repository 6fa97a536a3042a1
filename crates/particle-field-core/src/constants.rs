//! Simulation constants and tuning parameters.

use crate::types::Rgba;

/// Refresh rate used to convert frames into nominal seconds (Hz).
pub const REFERENCE_REFRESH_RATE: u32 = 60;

// --- Population ---

/// Particle count for the repel-only field.
pub const CLASSIC_PARTICLE_COUNT: usize = 1500;

/// Particle count for the toggleable field.
pub const TOGGLE_PARTICLE_COUNT: usize = 1000;

/// Upper bound on the population; particle ids are `u32`.
pub const MAX_PARTICLE_COUNT: usize = 1_000_000;

// --- Particle shape ---

/// Smallest particle radius (pixels).
pub const RADIUS_MIN: f64 = 1.0;

/// Largest particle radius (pixels, exclusive).
pub const RADIUS_MAX: f64 = 2.5;

/// Half-width of the initial velocity range; components are drawn from
/// `[-INITIAL_SPEED, INITIAL_SPEED)`.
pub const INITIAL_SPEED: f64 = 0.25;

// --- Pointer influence ---

/// Distance within which the pointer affects a particle (pixels).
pub const ESCAPE_RADIUS: f64 = 100.0;

/// Repel-only: falloff is scaled to a speed of at most this many pixels per frame.
pub const REPEL_SPEED_FACTOR: f64 = 2.0;

/// Repel-only: fraction of the speed added to velocity each frame.
pub const REPEL_DAMPING: f64 = 0.1;

/// Toggleable: impulse at zero distance.
pub const TOGGLE_STRENGTH: f64 = 0.5;

/// Toggleable: multiplicative velocity friction applied every frame.
pub const TOGGLE_FRICTION: f64 = 0.98;

/// Exponential smoothing rate toward the baseline velocity.
pub const EASE_RATE: f64 = 0.05;

// --- Colors ---

/// Default particle color.
pub const PARTICLE_COLOR: Rgba = Rgba::LIGHT_BLUE;

/// Palette for the toggleable field.
pub const TOGGLE_PALETTE: [Rgba; 4] = [
    Rgba::LIGHT_BLUE,
    Rgba::opaque(255, 182, 193),
    Rgba::opaque(144, 238, 144),
    Rgba::opaque(255, 255, 224),
];

/// Glow drawn around particles near the pointer.
pub const GLOW_COLOR: Rgba = Rgba::GLOW_RED;

/// Glow blur radius (pixels).
pub const GLOW_BLUR: f64 = 15.0;
