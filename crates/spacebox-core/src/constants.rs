//! Simulation constants and tuning parameters.
//!
//! Ship handling scales with the configured hull radius; the
//! `*_PER_RADIUS` constants are multiplied by it at spawn time.

use crate::config::Knock;
use crate::types::Color;

// --- Teams ---

/// Team of the first (or only) player.
pub const PLAYER_TEAM: u32 = 0;

/// Team of the second player in head-to-head games.
pub const OPPONENT_TEAM: u32 = 1;

/// Team shared by every field asteroid.
pub const ASTEROID_TEAM: u32 = 2;

// --- Ship handling ---

/// Steering rate in revolutions per second.
pub const SHIP_TURN_RPS: f32 = 0.75;

/// Steering rate in radians per second.
pub const SHIP_TURN_RATE: f32 = SHIP_TURN_RPS * std::f32::consts::TAU;

/// Thrust acceleration per unit of hull radius (units/s²).
pub const SHIP_THRUST_PER_RADIUS: f32 = 4.0;

/// Speed cap per unit of hull radius.
pub const SHIP_MAX_SPEED_PER_RADIUS: f32 = 10.0;

// --- Weapons ---

/// Bolt muzzle speed per unit of hull radius.
pub const BOLT_SPEED_PER_RADIUS: f32 = 20.0;

/// Bolt spike length per unit of hull radius.
pub const BOLT_SIZE_PER_RADIUS: f32 = 0.33;

/// Shots per second in single-player games.
pub const FIRE_RATE: f32 = 3.0;

/// Shots per second in head-to-head games.
pub const FIRE_RATE_HEAD_TO_HEAD: f32 = 1.0;

/// Bolt tail color (the tip is always white).
pub const BOLT_COLOR: Color = Color::new(0x80, 0xFF, 0xFF);

// --- Explosions ---

/// Fewest debris fragments per explosion, before ratio scaling.
pub const BLAST_MIN_FRAGMENTS: u32 = 3;

/// Most debris fragments per explosion, before ratio scaling.
pub const BLAST_MAX_FRAGMENTS: u32 = 7;

/// Shortest debris lifespan in seconds.
pub const FRAGMENT_MIN_LIFE: f32 = 0.5;

/// Longest debris lifespan in seconds.
pub const FRAGMENT_MAX_LIFE: f32 = 2.0;

/// One in this many fragments is a body chunk (fire-and-debris style only).
pub const BODY_CHUNK_ODDS: u32 = 3;

/// Smallest body chunk.
pub const BODY_CHUNK_MIN_SIZE: f32 = 5.0;

/// Largest body chunk.
pub const BODY_CHUNK_MAX_SIZE: f32 = 50.0;

/// Smallest fire chunk.
pub const FIRE_CHUNK_MIN_SIZE: f32 = 5.0;

/// Largest fire chunk.
pub const FIRE_CHUNK_MAX_SIZE: f32 = 20.0;

/// Fire debris color.
pub const FIRE_COLOR: Color = Color::ORANGE;

/// Impulse preset for decorative debris.
pub const EXPLOSION_KNOCK: Knock = Knock {
    min_speed: 500.0,
    max_speed: 1000.0,
    min_spin: 0.0,
    max_spin: 12.0 * std::f32::consts::PI,
};

/// Impulse preset for structured children (asteroid rocks).
pub const BREAKUP_KNOCK: Knock = Knock {
    min_speed: 150.0,
    max_speed: 500.0,
    min_spin: 0.0,
    max_spin: 4.0 * std::f32::consts::PI,
};

// --- Asteroids ---

/// Fewest rim points on a generated polygon.
pub const ASTEROID_MIN_POINTS: u32 = 6;

/// Most rim points on a generated polygon.
pub const ASTEROID_MAX_POINTS: u32 = 12;

/// Shortest rim radius as a fraction of the base size.
pub const ASTEROID_MIN_RADIUS_RATIO: f32 = 0.80;

/// Longest rim radius as a fraction of the base size.
pub const ASTEROID_MAX_RADIUS_RATIO: f32 = 1.30;

/// Rim angle jitter as a fraction of the even angular step.
pub const ASTEROID_ANGLE_JITTER: f32 = 0.33;

/// Smallest child as a fraction of the parent radius.
pub const CHILD_MIN_SIZE_RATIO: f32 = 0.10;

/// Largest child as a fraction of the parent radius.
pub const CHILD_MAX_SIZE_RATIO: f32 = 0.75;

/// Child offset from the parent center as a fraction of the parent radius.
pub const CHILD_OFFSET_RATIO: f32 = 0.5;

/// Most child candidates generated per explosion.
pub const MAX_CHILD_TRIES: u32 = 15;

/// Default fragmentation floor.
pub const ASTEROID_DEFAULT_MIN_CHILD_SIZE: f32 = 25.0;

/// Default rock color.
pub const ASTEROID_DEFAULT_COLOR: Color = Color::new(165, 42, 42);

/// Default field gradient endpoint (dark brown).
pub const FIELD_DEFAULT_COLOR: Color = Color::new(128, 64, 0);

// --- Pilots ---

/// Default delay between ship loss and respawn, in seconds.
pub const DEFAULT_RESPAWN_SECS: f32 = 2.0;
