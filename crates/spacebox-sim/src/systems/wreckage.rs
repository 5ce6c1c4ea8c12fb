//! Wreckage pass: explode and remove everything that died last frame.
//!
//! Runs first in the tick, so an object killed by collision is rendered
//! one final frame before its explosion appears. Volatile entities
//! contribute ejecta seeds; everything dead is despawned. Uses a
//! pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use spacebox_core::components::{Vitals, Volatile};

use crate::blast::{self, Ejecta};

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, despawn_buffer: &mut Vec<Entity>) -> Ejecta {
    despawn_buffer.clear();

    let mut volatiles: Vec<Entity> = Vec::new();
    for (entity, (vitals, volatile)) in world.query_mut::<(&Vitals, Option<&Volatile>)>() {
        if vitals.alive {
            continue;
        }
        despawn_buffer.push(entity);
        if volatile.is_some() {
            volatiles.push(entity);
        }
    }

    let mut ejecta = Ejecta::default();
    for &entity in &volatiles {
        ejecta.merge(blast::explode(world, rng, entity));
    }

    if !despawn_buffer.is_empty() {
        log::debug!(
            "wreckage: removed {}, threw {} rocks and {} fragments",
            despawn_buffer.len(),
            ejecta.rocks.len(),
            ejecta.fragments.len()
        );
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    ejecta
}
