//! Core types and definitions for the particle field.
//!
//! This crate defines the vocabulary shared across the other crates:
//! components, commands, configuration, frame snapshots, and constants.
//! It has no dependency on any windowing or runtime framework.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
