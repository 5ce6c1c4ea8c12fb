//! Core types and definitions for the SPACEBOX arcade simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, control input, configuration, scene snapshots, and
//! constants. It has no dependency on any windowing or rendering stack.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod scene;
pub mod types;

#[cfg(test)]
mod tests;
