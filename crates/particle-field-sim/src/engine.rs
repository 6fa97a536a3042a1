//! Field engine: owns the particle world and advances it one frame per tick.
//!
//! `FieldEngine` owns the hecs ECS world, applies queued pointer commands,
//! runs all systems, and produces `FrameSnapshot`s. Completely headless
//! (no windowing dependency), enabling deterministic testing.

use std::collections::{HashSet, VecDeque};

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace, warn};

use particle_field_core::commands::PointerCommand;
use particle_field_core::components::{BaseVelocity, ParticleId, ParticleState, Radius, Tint};
use particle_field_core::config::FieldConfig;
use particle_field_core::state::{FrameSnapshot, PointerState};
use particle_field_core::types::{Position, SimTime, Velocity, Viewport};

use crate::error::SimError;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same initial field.
    pub seed: u64,
    pub field: FieldConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            field: FieldConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct FieldEngine {
    world: World,
    time: SimTime,
    viewport: Viewport,
    config: FieldConfig,
    pointer: PointerState,
    input_queue: VecDeque<PointerCommand>,
}

impl FieldEngine {
    /// Create a randomized field filling `viewport`.
    pub fn new(config: SimConfig, viewport: Viewport) -> Result<Self, SimError> {
        config.field.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut world = World::new();
        world_setup::spawn_field(&mut world, &mut rng, &config.field, &viewport);

        info!(
            particles = config.field.particle_count,
            seed = config.seed,
            policy = ?config.field.policy,
            width = viewport.width,
            height = viewport.height,
            "particle field initialized"
        );

        Ok(Self::with_world(world, config.field, viewport))
    }

    /// Rebuild an engine from previously exported particle states.
    pub fn restore(
        config: FieldConfig,
        viewport: Viewport,
        particles: &[ParticleState],
    ) -> Result<Self, SimError> {
        config.validate()?;
        if particles.len() != config.particle_count {
            return Err(SimError::CountMismatch {
                expected: config.particle_count,
                actual: particles.len(),
            });
        }

        let mut seen = HashSet::with_capacity(particles.len());
        let mut world = World::new();
        for state in particles {
            if !seen.insert(state.id) {
                return Err(SimError::DuplicateId(state.id.0));
            }
            if !viewport.contains(&state.position) {
                return Err(SimError::OutOfViewport {
                    id: state.id.0,
                    x: state.position.x,
                    y: state.position.y,
                });
            }
            if let Some(field) = invalid_field(state) {
                return Err(SimError::InvalidState {
                    id: state.id.0,
                    field,
                });
            }
            world_setup::spawn_particle(&mut world, state);
        }

        debug!(particles = particles.len(), "particle field restored");
        Ok(Self::with_world(world, config, viewport))
    }

    fn with_world(world: World, config: FieldConfig, viewport: Viewport) -> Self {
        Self {
            world,
            time: SimTime::default(),
            viewport,
            config,
            pointer: PointerState::default(),
            input_queue: VecDeque::new(),
        }
    }

    /// Queue a pointer command for processing at the next frame boundary.
    pub fn queue_input(&mut self, command: PointerCommand) {
        self.input_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_inputs(&mut self, commands: impl IntoIterator<Item = PointerCommand>) {
        self.input_queue.extend(commands);
    }

    /// Advance the field by one frame and return the resulting draw list.
    pub fn tick(&mut self) -> FrameSnapshot {
        self.process_inputs();
        self.run_systems();
        self.time.advance();

        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            &self.viewport,
            &self.pointer,
            &self.config,
        )
    }

    /// Full state of every particle, ordered by id.
    pub fn particles(&self) -> Vec<ParticleState> {
        let mut states: Vec<ParticleState> = self
            .world
            .query::<(&ParticleId, &Position, &Velocity, &BaseVelocity, &Radius, &Tint)>()
            .iter()
            .map(|(_, (id, pos, vel, base, radius, tint))| ParticleState {
                id: *id,
                position: *pos,
                velocity: *vel,
                base_velocity: base.0,
                radius: radius.0,
                color: tint.0,
            })
            .collect();
        states.sort_by_key(|s| s.id);
        states
    }

    /// Get the current pointer state.
    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the viewport the field wraps within.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Get the field configuration.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Number of particles. Fixed after initialization.
    pub fn particle_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Apply all queued commands.
    fn process_inputs(&mut self) {
        while let Some(command) = self.input_queue.pop_front() {
            self.handle_input(command);
        }
    }

    /// Apply a single pointer command to the pointer state.
    fn handle_input(&mut self, command: PointerCommand) {
        trace!(?command, "pointer input");
        match command {
            PointerCommand::Moved { x, y } => {
                if x.is_finite() && y.is_finite() {
                    self.pointer.position = Some(Position::new(x, y));
                } else {
                    warn!(x, y, "ignoring non-finite pointer position");
                }
            }
            PointerCommand::Left => {
                self.pointer.position = None;
                if self.config.policy.uses_attraction() {
                    self.pointer.attracting = false;
                }
            }
            PointerCommand::PrimaryPressed => {
                if self.config.policy.uses_attraction() {
                    self.pointer.attracting = true;
                }
            }
            PointerCommand::PrimaryReleased => {
                self.pointer.attracting = false;
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Pointer influence, easing and friction
        systems::influence::run(&mut self.world, &self.pointer, &self.config);
        // 2. Movement integration
        systems::movement::run(&mut self.world);
        // 3. Wrap-around at the viewport edges
        systems::movement::wrap(&mut self.world, &self.viewport);
    }
}

/// First field of a restored state that would corrupt the integration step.
fn invalid_field(state: &ParticleState) -> Option<&'static str> {
    let finite = |v: &Velocity| v.x.is_finite() && v.y.is_finite();
    if !finite(&state.velocity) {
        Some("velocity")
    } else if !finite(&state.base_velocity) {
        Some("base_velocity")
    } else if !(state.radius.is_finite() && state.radius >= 0.0) {
        Some("radius")
    } else {
        None
    }
}
