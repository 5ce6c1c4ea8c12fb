//! Motion integration and edge handling.
//!
//! position += velocity · dt, angle += spin · dt folded back into
//! (−2π, 2π). An entity that leaves the field either wraps to the
//! opposite edge or expires in place, per its edge policy.

use hecs::World;

use spacebox_core::components::{Motion, Transform, Vitals};
use spacebox_core::enums::EdgePolicy;
use spacebox_core::types::{wrap_angle, FieldExtent};

pub fn run(world: &mut World, dt: f32, extent: FieldExtent) {
    for (_entity, (transform, motion, vitals, edge)) in
        world.query_mut::<(&mut Transform, &Motion, &mut Vitals, &EdgePolicy)>()
    {
        if !vitals.alive {
            continue;
        }
        transform.pos += motion.vel * dt;
        transform.angle = wrap_angle(transform.angle + motion.spin * dt);

        if !extent.contains(transform.pos) {
            match edge {
                EdgePolicy::Wrap => transform.pos = extent.wrap(transform.pos),
                EdgePolicy::Expire => vitals.alive = false,
            }
        }
    }
}
