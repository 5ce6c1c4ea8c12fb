//! Entity spawn factories.
//!
//! Builds the component bundles for ships, asteroids, bolts, and debris
//! fragments. Factories taking a seed consume the output of the cannon
//! system or the blast protocol; the others build from configs.

use glam::Vec2;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use spacebox_core::commands::Controls;
use spacebox_core::components::{
    Asteroid, Body, Bolt, Cannon, Fragment, Helm, Lifespan, Motion, Ship, Transform, Vitals,
    Volatile,
};
use spacebox_core::config::{AsteroidConfig, ShipConfig};
use spacebox_core::constants::{
    BOLT_COLOR, BOLT_SIZE_PER_RADIUS, BOLT_SPEED_PER_RADIUS, FIRE_RATE, FIRE_RATE_HEAD_TO_HEAD,
    SHIP_MAX_SPEED_PER_RADIUS, SHIP_THRUST_PER_RADIUS,
};
use spacebox_core::enums::{BlastStyle, EdgePolicy};

use crate::blast::{Ejecta, FragmentSeed, RockSeed};
use crate::models;
use crate::systems::cannon::BoltSeed;

/// Debris intensity grows with the squared size ratio, like area.
fn rock_mass(radius: f32, floor: f32) -> f32 {
    if floor > 0.0 {
        (radius / floor) * (radius / floor)
    } else {
        1.0
    }
}

/// Spawn a player ship. Handling and weapon parameters all derive from
/// the configured hull radius; head-to-head mode slows the fire rate.
pub fn spawn_ship(
    world: &mut World,
    config: &ShipConfig,
    pos: Vec2,
    angle: f32,
    team: u32,
) -> hecs::Entity {
    let frame = models::ship_frame(config.size_radius, config.base_color);
    let fire_rate = if config.head_to_head {
        FIRE_RATE_HEAD_TO_HEAD
    } else {
        FIRE_RATE
    };

    world.spawn((
        Ship,
        Transform { pos, angle },
        Motion::default(),
        Body {
            radius: config.size_radius,
            team,
        },
        Vitals { alive: true },
        frame.model,
        Helm {
            controls: Controls::default(),
            thrust_accel: SHIP_THRUST_PER_RADIUS * config.size_radius,
            max_speed: SHIP_MAX_SPEED_PER_RADIUS * config.size_radius,
            exhaust_shape: frame.exhaust_shape,
        },
        Cannon {
            mount: frame.cannon_mount,
            bolt_speed: BOLT_SPEED_PER_RADIUS * config.size_radius,
            bolt_size: BOLT_SIZE_PER_RADIUS * config.size_radius,
            bolt_color: BOLT_COLOR,
            cooldown: 0.0,
            period: 1.0 / fire_rate,
        },
        Volatile {
            style: BlastStyle::FireAndDebris,
            ratio: 1.0,
        },
        EdgePolicy::Wrap,
    ))
}

/// Spawn an asteroid with a freshly generated polygon, at rest.
pub fn spawn_asteroid(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &AsteroidConfig,
    pos: Vec2,
    team: u32,
) -> hecs::Entity {
    let (model, radius) = models::asteroid_model(rng, config);
    let mass = rock_mass(radius, config.min_child_size);

    world.spawn((
        Asteroid {
            min_child_size: config.min_child_size,
            mass,
            children_allowed: true,
        },
        Transform { pos, angle: 0.0 },
        Motion::default(),
        Body { radius, team },
        Vitals { alive: true },
        model,
        Volatile {
            style: BlastStyle::FireOnly,
            ratio: mass,
        },
        EdgePolicy::Wrap,
    ))
}

/// Spawn a child rock from an explosion seed. The polygon was generated
/// during the parent's explosion; only the bundle is assembled here.
pub fn spawn_rock(world: &mut World, seed: RockSeed) -> hecs::Entity {
    let mass = rock_mass(seed.radius, seed.min_child_size);

    world.spawn((
        Asteroid {
            min_child_size: seed.min_child_size,
            mass,
            children_allowed: true,
        },
        Transform {
            pos: seed.pos,
            angle: seed.angle,
        },
        Motion {
            vel: seed.vel,
            spin: seed.spin,
        },
        Body {
            radius: seed.radius,
            team: seed.team,
        },
        Vitals { alive: true },
        seed.model,
        Volatile {
            style: BlastStyle::FireOnly,
            ratio: mass,
        },
        EdgePolicy::Wrap,
    ))
}

/// Spawn a cannon bolt from the frame's spawn queue.
pub fn spawn_bolt(world: &mut World, seed: &BoltSeed) -> hecs::Entity {
    world.spawn((
        Bolt,
        Transform {
            pos: seed.pos,
            angle: seed.angle,
        },
        Motion {
            vel: seed.vel,
            spin: 0.0,
        },
        Body {
            radius: seed.size,
            team: seed.team,
        },
        Vitals { alive: true },
        models::spike(seed.size, seed.color),
        EdgePolicy::Expire,
    ))
}

/// Spawn one debris fragment. Fragments never collide and die when
/// their lifespan runs out or they drift off the field.
pub fn spawn_fragment(world: &mut World, seed: FragmentSeed) -> hecs::Entity {
    world.spawn((
        Fragment,
        Transform {
            pos: seed.pos,
            angle: seed.angle,
        },
        Motion {
            vel: seed.vel,
            spin: seed.spin,
        },
        Body {
            radius: 0.0,
            team: 0,
        },
        Vitals { alive: true },
        seed.model,
        Lifespan {
            remaining_secs: seed.lifespan_secs,
        },
        EdgePolicy::Expire,
    ))
}

/// Splice a wreckage pass's ejecta into the world.
pub fn spawn_ejecta(world: &mut World, ejecta: Ejecta) {
    for rock in ejecta.rocks {
        spawn_rock(world, rock);
    }
    for fragment in ejecta.fragments {
        spawn_fragment(world, fragment);
    }
}
