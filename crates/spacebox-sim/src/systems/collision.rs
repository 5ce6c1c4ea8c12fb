//! Pairwise collision detection.
//!
//! An O(n²) scan over live, collidable entities. Two circles on
//! different teams whose wrapped centers are closer than the sum of
//! their radii collide; both are killed and take part in no further
//! pairs this frame. The wrapped delta is one-sided (outer minus inner,
//! folded only past the positive half-span), which is part of the
//! contract.

use glam::Vec2;
use hecs::{Entity, World};

use spacebox_core::components::{Body, Transform, Vitals};
use spacebox_core::types::FieldExtent;

struct Candidate {
    entity: Entity,
    pos: Vec2,
    radius: f32,
    team: u32,
}

pub fn run(world: &mut World, extent: FieldExtent) {
    let mut candidates: Vec<Candidate> = Vec::new();
    for (entity, (transform, body, vitals)) in
        world.query_mut::<(&Transform, &Body, &Vitals)>()
    {
        if vitals.alive && body.radius > 0.0 {
            candidates.push(Candidate {
                entity,
                pos: transform.pos,
                radius: body.radius,
                team: body.team,
            });
        }
    }

    // At most one collision consequence per entity per frame.
    let mut hit = vec![false; candidates.len()];
    for i in 0..candidates.len() {
        if hit[i] {
            continue;
        }
        for j in 0..candidates.len() {
            if i == j || hit[j] {
                continue;
            }
            if circles_touch(&candidates[i], &candidates[j], extent) {
                hit[i] = true;
                hit[j] = true;
                break;
            }
        }
    }

    for (index, candidate) in candidates.iter().enumerate() {
        if hit[index] {
            if let Ok(mut vitals) = world.get::<&mut Vitals>(candidate.entity) {
                vitals.alive = false;
            }
        }
    }
}

fn circles_touch(a: &Candidate, b: &Candidate, extent: FieldExtent) -> bool {
    if a.team == b.team {
        return false;
    }
    let delta = extent.wrapped_delta(a.pos, b.pos);
    let min_distance = a.radius + b.radius;
    delta.length_squared() < min_distance * min_distance
}
