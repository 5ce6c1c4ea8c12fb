//! Debris burn-down.
//!
//! Decrements every fragment's remaining lifespan and kills it at zero.
//! The corpse stays in the world until the next tick's wreckage pass.

use hecs::World;

use spacebox_core::components::{Lifespan, Vitals};

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (lifespan, vitals)) in world.query_mut::<(&mut Lifespan, &mut Vitals)>() {
        if !vitals.alive {
            continue;
        }
        if lifespan.remaining_secs > 0.0 {
            lifespan.remaining_secs -= dt;
        }
        if lifespan.remaining_secs <= 0.0 {
            lifespan.remaining_secs = 0.0;
            vitals.alive = false;
        }
    }
}
