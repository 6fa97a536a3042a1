//! Particle field window.
//!
//! Wires the headless engine to an eframe window: pointer samples become
//! engine commands, each display refresh runs one frame, and the snapshot is
//! painted with egui.

pub mod app;
pub mod frame_loop;
pub mod input;
pub mod render;
pub mod settings;

pub use particle_field_core as core;
