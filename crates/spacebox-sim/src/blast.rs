//! Knock impulses and the explosion protocol.
//!
//! A dead volatile object explodes exactly once, during the wreckage
//! pass. The explosion never touches the world directly: it returns
//! [`Ejecta`] seeds that the engine splices in after the scene is built,
//! so debris is collidable in its birth frame but visible only from the
//! next one.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use spacebox_core::components::{Asteroid, Body, Model, Motion, Transform, Vitals, Volatile};
use spacebox_core::config::{AsteroidConfig, Knock};
use spacebox_core::constants::{
    BLAST_MAX_FRAGMENTS, BLAST_MIN_FRAGMENTS, BODY_CHUNK_MAX_SIZE, BODY_CHUNK_MIN_SIZE,
    BODY_CHUNK_ODDS, BREAKUP_KNOCK, CHILD_MAX_SIZE_RATIO, CHILD_MIN_SIZE_RATIO,
    CHILD_OFFSET_RATIO, EXPLOSION_KNOCK, FIRE_CHUNK_MAX_SIZE, FIRE_CHUNK_MIN_SIZE, FIRE_COLOR,
    FRAGMENT_MAX_LIFE, FRAGMENT_MIN_LIFE, MAX_CHILD_TRIES,
};
use spacebox_core::enums::BlastStyle;
use spacebox_core::types::Color;

use crate::models;
use crate::rng::{uniform, uniform_int};

/// One rolled impulse: a fresh heading plus the velocities that go with it.
#[derive(Debug, Clone, Copy)]
pub struct Impulse {
    /// New orientation, in [0, 2π).
    pub angle: f32,
    /// Base velocity plus the thrown speed along the new heading.
    pub vel: Vec2,
    /// Signed spin; the magnitude comes from the preset, the sign from a
    /// coin flip.
    pub spin: f32,
}

/// A debris fragment waiting to be spawned.
#[derive(Debug, Clone)]
pub struct FragmentSeed {
    pub pos: Vec2,
    pub angle: f32,
    pub vel: Vec2,
    pub spin: f32,
    pub lifespan_secs: f32,
    pub model: Model,
}

/// A child rock waiting to be spawned. The polygon is generated during
/// the parent's explosion so the area budget can see the real size.
#[derive(Debug, Clone)]
pub struct RockSeed {
    pub pos: Vec2,
    pub angle: f32,
    pub vel: Vec2,
    pub spin: f32,
    pub radius: f32,
    pub min_child_size: f32,
    pub team: u32,
    pub model: Model,
}

/// Everything one wreckage pass threw off.
#[derive(Debug, Clone, Default)]
pub struct Ejecta {
    pub rocks: Vec<RockSeed>,
    pub fragments: Vec<FragmentSeed>,
}

impl Ejecta {
    pub fn is_empty(&self) -> bool {
        self.rocks.is_empty() && self.fragments.is_empty()
    }

    pub fn merge(&mut self, other: Ejecta) {
        self.rocks.extend(other.rocks);
        self.fragments.extend(other.fragments);
    }
}

/// Roll a random impulse from a [`Knock`] preset.
///
/// Speed and spin magnitude are uniform in the preset's ranges, the spin
/// sign flips half the time, and the heading is uniform in [0, 2π).
pub fn knock(rng: &mut ChaCha8Rng, preset: &Knock, base_vel: Vec2) -> Impulse {
    let speed = uniform(rng, preset.min_speed, preset.max_speed);
    let mut spin = uniform(rng, preset.min_spin, preset.max_spin);
    let angle = uniform(rng, 0.0, std::f32::consts::TAU);
    if uniform_int(rng, 0, 1) == 1 {
        spin = -spin;
    }
    Impulse {
        angle,
        vel: base_vel + Vec2::from_angle(angle) * speed,
        spin,
    }
}

/// Roll an impulse and apply it to an entity, keeping its current
/// velocity as the base. Stale handles are ignored.
pub fn knock_entity(world: &mut World, rng: &mut ChaCha8Rng, entity: Entity, preset: &Knock) {
    let base = match world.get::<&Motion>(entity) {
        Ok(motion) => motion.vel,
        Err(_) => return,
    };
    let impulse = knock(rng, preset, base);
    if let Ok(mut transform) = world.get::<&mut Transform>(entity) {
        transform.angle = impulse.angle;
    }
    if let Ok(mut motion) = world.get::<&mut Motion>(entity) {
        motion.vel = impulse.vel;
        motion.spin = impulse.spin;
    }
}

/// Run the explosion protocol for one dead entity.
///
/// Asteroids that still permit children break into rocks first; every
/// volatile object then burns off generic fire debris. A stale handle
/// yields nothing.
pub fn explode(world: &World, rng: &mut ChaCha8Rng, entity: Entity) -> Ejecta {
    let mut ejecta = Ejecta::default();

    let Ok(mut query) = world.query_one::<(
        &Vitals,
        &Transform,
        &Motion,
        &Model,
        &Volatile,
        &Body,
        Option<&Asteroid>,
    )>(entity) else {
        return ejecta;
    };
    let Some((vitals, transform, motion, model, volatile, body, asteroid)) = query.get() else {
        return ejecta;
    };
    debug_assert!(!vitals.alive, "explosion protocol ran on a living entity");

    if let Some(rock) = asteroid {
        if rock.children_allowed {
            ejecta.rocks = rock_burst(
                rng,
                transform.pos,
                motion.vel,
                body.radius,
                rock.min_child_size,
                model.color,
                body.team,
            );
        }
    }
    ejecta.fragments = fragment_burst(
        rng,
        transform.pos,
        motion.vel,
        model.color,
        volatile.style,
        volatile.ratio,
    );
    ejecta
}

/// Generic debris: [3, 7] fragments scaled by the explosion ratio, each
/// thrown with the Explosion preset on top of the parent's velocity.
fn fragment_burst(
    rng: &mut ChaCha8Rng,
    pos: Vec2,
    vel: Vec2,
    color: Color,
    style: BlastStyle,
    ratio: f32,
) -> Vec<FragmentSeed> {
    let count =
        (uniform_int(rng, BLAST_MIN_FRAGMENTS, BLAST_MAX_FRAGMENTS) as f32 * ratio).round() as usize;

    let mut seeds = Vec::with_capacity(count);
    for _ in 0..count {
        let lifespan_secs = uniform(rng, FRAGMENT_MIN_LIFE, FRAGMENT_MAX_LIFE);
        let body_chunk =
            style == BlastStyle::FireAndDebris && uniform_int(rng, 0, BODY_CHUNK_ODDS - 1) == 0;
        let model = if body_chunk {
            let size = uniform(rng, BODY_CHUNK_MIN_SIZE, BODY_CHUNK_MAX_SIZE);
            models::shard(rng, size, color)
        } else {
            let size = uniform(rng, FIRE_CHUNK_MIN_SIZE, FIRE_CHUNK_MAX_SIZE);
            models::spike(size, FIRE_COLOR)
        };
        let impulse = knock(rng, &EXPLOSION_KNOCK, vel);
        seeds.push(FragmentSeed {
            pos,
            angle: impulse.angle,
            vel: impulse.vel,
            spin: impulse.spin,
            lifespan_secs,
            model,
        });
    }
    seeds
}

/// Structured children: candidate rocks at 10–75% of the parent radius,
/// generated until one falls below the floor, the parent's area budget
/// runs out, or the try cap is hit. The candidate that exhausts the
/// budget is still accepted.
fn rock_burst(
    rng: &mut ChaCha8Rng,
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    floor: f32,
    color: Color,
    team: u32,
) -> Vec<RockSeed> {
    let child_config = AsteroidConfig {
        min_size: radius * CHILD_MIN_SIZE_RATIO,
        max_size: radius * CHILD_MAX_SIZE_RATIO,
        min_child_size: floor,
        color,
    };

    let mut seeds = Vec::new();
    let mut area_budget = radius * radius;
    for _ in 0..MAX_CHILD_TRIES {
        let (model, size) = models::asteroid_model(rng, &child_config);
        if size < floor {
            break;
        }
        area_budget -= size * size;

        let impulse = knock(rng, &BREAKUP_KNOCK, vel);
        seeds.push(RockSeed {
            // Space the children out along their own new headings.
            pos: pos + Vec2::from_angle(impulse.angle) * (radius * CHILD_OFFSET_RATIO),
            angle: impulse.angle,
            vel: impulse.vel,
            // Large children spin slower than small ones.
            spin: impulse.spin * (floor / size),
            radius: size,
            min_child_size: floor,
            team,
            model,
        });

        if area_budget < 0.0 {
            break;
        }
    }
    seeds
}
