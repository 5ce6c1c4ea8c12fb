//! Ship steering and thrust.
//!
//! Reads each ship's latched control snapshot: sets the turn rate,
//! accumulates thrust along the heading with the speed clamped to the
//! ship's cap, and toggles the exhaust plume. Ships coast when thrust is
//! off; there is no drag.

use glam::Vec2;
use hecs::World;

use spacebox_core::components::{Helm, Model, Motion, Transform, Vitals};
use spacebox_core::constants::SHIP_TURN_RATE;

pub fn run(world: &mut World, dt: f32) {
    for (_entity, (helm, transform, motion, model, vitals)) in
        world.query_mut::<(&Helm, &Transform, &mut Motion, &mut Model, &Vitals)>()
    {
        if !vitals.alive {
            continue;
        }

        // Right wins when both rotation flags are held.
        motion.spin = if helm.controls.rotate_right {
            SHIP_TURN_RATE
        } else if helm.controls.rotate_left {
            -SHIP_TURN_RATE
        } else {
            0.0
        };

        if helm.max_speed == 0.0 {
            // Degenerate config: the ship cannot move at all.
            motion.vel = Vec2::ZERO;
            continue;
        }

        if helm.controls.thrust {
            motion.vel += Vec2::from_angle(transform.angle) * helm.thrust_accel * dt;
            // Clip the speed without changing the direction of travel.
            motion.vel = motion.vel.clamp_length_max(helm.max_speed);
        }
        if let Some(exhaust) = model.shapes.get_mut(helm.exhaust_shape) {
            exhaust.visible = helm.controls.thrust;
        }
    }
}
