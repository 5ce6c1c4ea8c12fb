//! Construction-time configuration structs.
//!
//! Plain data handed to the spawn factories and trackers. Defaults match
//! the classic arcade tuning; zeroed ranges degrade to their lower bound
//! instead of faulting.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::Color;

/// Ship construction parameters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShipConfig {
    /// Hull collision radius; every handling parameter derives from it.
    pub size_radius: f32,
    /// Team accent color painted on the hull base.
    pub base_color: Color,
    /// Head-to-head games use the slower fire rate.
    pub head_to_head: bool,
}

/// Asteroid construction parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AsteroidConfig {
    /// Base size range the collision radius is drawn from.
    pub min_size: f32,
    pub max_size: f32,
    /// Fragmentation floor, inherited by children.
    pub min_child_size: f32,
    pub color: Color,
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            min_size: 0.0,
            max_size: 0.0,
            min_child_size: constants::ASTEROID_DEFAULT_MIN_CHILD_SIZE,
            color: constants::ASTEROID_DEFAULT_COLOR,
        }
    }
}

/// Random impulse parameter ranges for thrown or knocked objects.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Knock {
    pub min_speed: f32,
    pub max_speed: f32,
    /// Spin magnitude range; the sign is flipped half the time.
    pub min_spin: f32,
    pub max_spin: f32,
}

/// Asteroid field population parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Asteroid count range, inclusive.
    pub min_count: u32,
    pub max_count: u32,
    /// Size range per asteroid; `min_size` doubles as the fragmentation
    /// floor.
    pub min_size: f32,
    pub max_size: f32,
    /// Initial drift speed cap.
    pub max_linear_speed: f32,
    /// Initial spin cap (radians/sec).
    pub max_spin: f32,
    /// Per-asteroid color is a random blend between these two.
    pub min_color: Color,
    pub max_color: Color,
    /// Team assigned to every spawned asteroid.
    pub team: u32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            min_count: 0,
            max_count: 0,
            min_size: 0.0,
            max_size: 0.0,
            max_linear_speed: 0.0,
            max_spin: 0.0,
            min_color: constants::FIELD_DEFAULT_COLOR,
            max_color: constants::FIELD_DEFAULT_COLOR,
            team: constants::ASTEROID_TEAM,
        }
    }
}

/// Respawn tracking parameters for one pilot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PilotConfig {
    pub ship: ShipConfig,
    pub team: u32,
    /// Delay between losing a ship and receiving the next one.
    pub respawn_secs: f32,
    /// When set, hazards within this radius of the spawn point are
    /// disintegrated before the ship appears.
    pub clear_radius: Option<f32>,
}

impl Default for PilotConfig {
    fn default() -> Self {
        Self {
            ship: ShipConfig::default(),
            team: constants::PLAYER_TEAM,
            respawn_secs: constants::DEFAULT_RESPAWN_SECS,
            clear_radius: None,
        }
    }
}
