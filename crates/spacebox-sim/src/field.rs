//! Asteroid field population and hazard bookkeeping.
//!
//! The surrounding mode logic seeds a level with `populate`, clears a
//! safe circle before a respawn with `disintegrate_around`, and polls
//! `team_count` to detect a cleared level.

use glam::Vec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use spacebox_core::components::{Asteroid, Body, Transform, Vitals};
use spacebox_core::config::{AsteroidConfig, FieldConfig, Knock};
use spacebox_core::types::{Color, FieldExtent};

use crate::blast;
use crate::rng::{point_in, uniform, uniform_int};
use crate::world_setup;

/// Fill the field with drifting asteroids.
///
/// Spawns a uniform-random count at uniform-random positions. Each rock
/// gets a color blended between the config's endpoints, a knock capped
/// by the config's speed and spin limits, and the config's minimum size
/// as its fragmentation floor.
pub fn populate(world: &mut World, rng: &mut ChaCha8Rng, config: &FieldConfig, extent: FieldExtent) {
    let count = uniform_int(rng, config.min_count, config.max_count);
    let drift = Knock {
        min_speed: 0.0,
        max_speed: config.max_linear_speed,
        min_spin: 0.0,
        max_spin: config.max_spin,
    };

    for _ in 0..count {
        let asteroid_config = AsteroidConfig {
            min_size: config.min_size,
            max_size: config.max_size,
            min_child_size: config.min_size,
            color: Color::lerp(config.min_color, config.max_color, uniform(rng, 0.0, 1.0)),
        };
        let pos = point_in(rng, extent);
        let entity = world_setup::spawn_asteroid(world, rng, &asteroid_config, pos, config.team);
        blast::knock_entity(world, rng, entity, &drift);
    }

    log::debug!("populated field: {} asteroids on team {}", count, config.team);
}

/// Disintegrate every hazard-team entity within `radius` of `center`,
/// measured with the same one-sided wrapped delta as collision. The
/// victims still explode visually but spawn no rock children.
pub fn disintegrate_around(
    world: &mut World,
    center: Vec2,
    radius: f32,
    team: u32,
    extent: FieldExtent,
) {
    let radius_sq = radius * radius;

    let mut doomed: Vec<Entity> = Vec::new();
    for (entity, (transform, body)) in world.query_mut::<(&Transform, &Body)>() {
        if body.team != team {
            continue;
        }
        let delta = extent.wrapped_delta(transform.pos, center);
        if delta.length_squared() < radius_sq {
            doomed.push(entity);
        }
    }

    for entity in doomed {
        disintegrate(world, entity);
    }
}

/// Kill an entity without letting it break into children. Asteroids lose
/// their children-permitted flag for good; anything else just dies.
/// Stale handles are ignored.
pub fn disintegrate(world: &mut World, entity: Entity) {
    if let Ok(mut rock) = world.get::<&mut Asteroid>(entity) {
        rock.children_allowed = false;
    }
    if let Ok(mut vitals) = world.get::<&mut Vitals>(entity) {
        vitals.alive = false;
    }
}

/// Number of entities on the given team, dead or alive, still in the
/// world. The level is clear when the hazard team's count reaches zero.
pub fn team_count(world: &World, team: u32) -> usize {
    let mut query = world.query::<&Body>();
    query.iter().filter(|(_, body)| body.team == team).count()
}
