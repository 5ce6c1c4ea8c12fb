//! Scene builder: queries the world and produces the frame's drawable
//! polygons. Read-only, it never modifies the world.

use hecs::World;

use spacebox_core::components::{Model, Transform, Vitals};
use spacebox_core::scene::{Scene, ScenePoly, SceneVertex};

/// Transform every visible shape of every live entity into world space.
pub fn build_scene(world: &World) -> Scene {
    let mut polys = Vec::new();

    for (_entity, (transform, model, vitals)) in
        world.query::<(&Transform, &Model, &Vitals)>().iter()
    {
        if !vitals.alive {
            continue;
        }
        let rotation = glam::Vec2::from_angle(transform.angle);
        for shape in model.shapes.iter().filter(|shape| shape.visible) {
            polys.push(ScenePoly {
                primitive: shape.primitive,
                verts: shape
                    .verts
                    .iter()
                    .map(|vertex| SceneVertex {
                        pos: transform.pos + rotation.rotate(vertex.pos),
                        color: vertex.color,
                    })
                    .collect(),
            });
        }
    }

    Scene { polys }
}
