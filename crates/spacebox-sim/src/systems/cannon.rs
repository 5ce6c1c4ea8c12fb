//! Cannon cooldown and firing.
//!
//! A ship with a cold cannon and the fire flag held spawns exactly one
//! bolt at its rotated cannon mount, moving along the current heading.
//! Bolts go onto the frame's spawn queue, never straight into the world:
//! they become visible and collidable the following frame.

use glam::Vec2;
use hecs::World;

use spacebox_core::components::{Body, Cannon, Helm, Transform, Vitals};
use spacebox_core::types::Color;

/// A bolt waiting on the spawn queue.
#[derive(Debug, Clone, Copy)]
pub struct BoltSeed {
    pub pos: Vec2,
    pub angle: f32,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    pub team: u32,
}

pub fn run(world: &mut World, dt: f32, spawn_queue: &mut Vec<BoltSeed>) {
    for (_entity, (helm, cannon, transform, body, vitals)) in
        world.query_mut::<(&Helm, &mut Cannon, &Transform, &Body, &Vitals)>()
    {
        if !vitals.alive {
            continue;
        }

        if cannon.cooldown > 0.0 {
            cannon.cooldown = (cannon.cooldown - dt).max(0.0);
        }

        if helm.controls.fire && cannon.cooldown <= 0.0 {
            let heading = Vec2::from_angle(transform.angle);
            spawn_queue.push(BoltSeed {
                pos: transform.pos + heading.rotate(cannon.mount),
                angle: transform.angle,
                vel: heading * cannon.bolt_speed,
                size: cannon.bolt_size,
                color: cannon.bolt_color,
                // Own fire never hits the ship that shot it.
                team: body.team,
            });
            cannon.cooldown = cannon.period;
        }
    }
}
