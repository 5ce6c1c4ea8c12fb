//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::commands::Controls;
use crate::enums::BlastStyle;
use crate::types::{Color, Shape};

/// Position and orientation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    /// Object center in field coordinates.
    pub pos: Vec2,
    /// Orientation in radians, kept within (-2π, 2π).
    pub angle: f32,
}

/// Linear and angular velocity.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Motion {
    /// Field units per second.
    pub vel: Vec2,
    /// Radians per second.
    pub spin: f32,
}

/// Collision envelope and allegiance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    /// Collision circle radius; zero means the object never collides.
    pub radius: f32,
    /// Objects on the same team never collide with each other.
    pub team: u32,
}

/// Lifecycle flag. Dead objects are skipped by every system except the
/// wreckage pass that explodes and removes them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Vitals {
    pub alive: bool,
}

/// Visual model: an ordered list of local-space polygons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Model {
    pub shapes: Vec<Shape>,
    /// Dominant color, inherited by body debris and asteroid children.
    pub color: Color,
}

/// Present on objects that explode into debris when they die.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Volatile {
    pub style: BlastStyle,
    /// Scales the debris count; asteroids grow it with their mass.
    pub ratio: f32,
}

/// Ship steering state and handling parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Helm {
    /// Latched control snapshot, replaced by the caller between ticks.
    pub controls: Controls,
    /// Thrust acceleration along the heading (units/s²).
    pub thrust_accel: f32,
    /// Speed cap; zero is a degenerate config that pins velocity to zero.
    pub max_speed: f32,
    /// Index of the exhaust plume in the model's shape list.
    pub exhaust_shape: usize,
}

/// Ship weapon state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Cannon {
    /// Muzzle position in model space.
    pub mount: Vec2,
    /// Bolt muzzle speed; absolute, not added to the ship's velocity.
    pub bolt_speed: f32,
    /// Bolt spike length, which is also its collision radius.
    pub bolt_size: f32,
    pub bolt_color: Color,
    /// Seconds until the cannon may fire again.
    pub cooldown: f32,
    /// Cooldown applied after each shot.
    pub period: f32,
}

/// Remaining burn time of a debris fragment.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifespan {
    pub remaining_secs: f32,
}

/// Asteroid fragmentation state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Asteroid {
    /// Children smaller than this are never spawned.
    pub min_child_size: f32,
    /// (radius / min_child_size)² for a positive floor, otherwise 1.
    pub mass: f32,
    /// Cleared by disintegration; without it an explosion yields only fire.
    pub children_allowed: bool,
}

/// Marks an entity as a player-controllable ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ship;

/// Marks an entity as a cannon bolt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bolt;

/// Marks an entity as decorative explosion debris.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fragment;
