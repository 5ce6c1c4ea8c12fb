//! Simulation engine for SPACEBOX.
//!
//! Owns the hecs ECS world, advances it one tick per rendered frame,
//! and produces drawable `Scene` snapshots for the caller's rasterizer.

pub mod blast;
pub mod engine;
pub mod field;
pub mod models;
pub mod pilot;
pub mod rng;
pub mod systems;
pub mod world_setup;

pub use engine::GameBox;
pub use spacebox_core as core;
