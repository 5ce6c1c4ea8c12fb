//! Procedural visual models.
//!
//! Builders return local-space [`Model`]s; world placement happens in the
//! scene builder. All geometry scales with the requested size so the same
//! construction reads correctly at any radius.

use glam::Vec2;
use rand_chacha::ChaCha8Rng;

use spacebox_core::components::Model;
use spacebox_core::config::AsteroidConfig;
use spacebox_core::constants::{
    ASTEROID_ANGLE_JITTER, ASTEROID_MAX_POINTS, ASTEROID_MAX_RADIUS_RATIO, ASTEROID_MIN_POINTS,
    ASTEROID_MIN_RADIUS_RATIO,
};
use spacebox_core::enums::Primitive;
use spacebox_core::types::{Color, Shape, ShapeVertex};

use crate::rng::{uniform, uniform_int};

/// Ship model output: the shape list plus the attachment points the helm
/// and cannon need.
pub struct ShipFrame {
    pub model: Model,
    /// Muzzle position in model space.
    pub cannon_mount: Vec2,
    /// Index of the exhaust plume shape.
    pub exhaust_shape: usize,
}

/// Build the five-shape ship hull: body, cockpit window, team-colored
/// base, nozzle, exhaust plume. The exhaust is toggled by the helm each
/// frame, so its initial visibility never reaches a scene.
pub fn ship_frame(radius: f32, base_color: Color) -> ShipFrame {
    let r = radius;
    let nose = Vec2::new(r, 0.0);
    let tail_x = -0.5 * r;
    let wing_y = 0.87 * r;

    let body = Shape::new(
        Primitive::Triangles,
        vec![
            ShapeVertex::new(nose, Color::MEDIUM_GRAY),
            ShapeVertex::new(Vec2::new(tail_x, -wing_y), Color::MEDIUM_GRAY),
            ShapeVertex::new(Vec2::new(tail_x, wing_y), Color::MEDIUM_GRAY),
        ],
    );

    let window = Shape::new(
        Primitive::Quads,
        vec![
            ShapeVertex::new(Vec2::new(0.5 * r, 0.167 * r), Color::BLUE),
            ShapeVertex::new(Vec2::new(0.5 * r, -0.167 * r), Color::BLUE),
            ShapeVertex::new(Vec2::new(0.167 * r, -0.333 * r), Color::LIGHT_BLUE),
            ShapeVertex::new(Vec2::new(0.167 * r, 0.333 * r), Color::LIGHT_BLUE),
        ],
    );

    let base = Shape::new(
        Primitive::Quads,
        vec![
            ShapeVertex::new(Vec2::new(-0.333 * r, 0.45 * r), base_color),
            ShapeVertex::new(Vec2::new(-0.333 * r, -0.45 * r), base_color),
            ShapeVertex::new(Vec2::new(tail_x, -0.45 * r), base_color),
            ShapeVertex::new(Vec2::new(tail_x, 0.45 * r), base_color),
        ],
    );

    let nozzle_x = -0.667 * r;
    let nozzle = Shape::new(
        Primitive::Quads,
        vec![
            ShapeVertex::new(Vec2::new(nozzle_x, 0.22 * r), Color::DARK_GRAY),
            ShapeVertex::new(Vec2::new(nozzle_x, -0.22 * r), Color::DARK_GRAY),
            ShapeVertex::new(Vec2::new(tail_x, -0.25 * r), Color::DARK_GRAY),
            ShapeVertex::new(Vec2::new(tail_x, 0.25 * r), Color::DARK_GRAY),
        ],
    );

    let exhaust = Shape::new(
        Primitive::Triangles,
        vec![
            ShapeVertex::new(Vec2::new(-1.067 * r, 0.0), Color::ORANGE),
            ShapeVertex::new(Vec2::new(nozzle_x, -0.2 * r), Color::RED),
            ShapeVertex::new(Vec2::new(nozzle_x, 0.2 * r), Color::RED),
        ],
    );

    let shapes = vec![body, window, base, nozzle, exhaust];
    let exhaust_shape = shapes.len() - 1;

    ShipFrame {
        model: Model {
            shapes,
            color: Color::MEDIUM_GRAY,
        },
        cannon_mount: nose,
        exhaust_shape,
    }
}

/// Generate an asteroid polygon: a closed triangle fan with jittered rim
/// points, a bright center, and a half-shade rim. Returns the model and
/// its base size, which doubles as the collision radius; rim jitter does
/// not affect it.
pub fn asteroid_model(rng: &mut ChaCha8Rng, config: &AsteroidConfig) -> (Model, f32) {
    let points = uniform_int(rng, ASTEROID_MIN_POINTS, ASTEROID_MAX_POINTS) as usize;
    let size = uniform(rng, config.min_size, config.max_size);
    let step = std::f32::consts::TAU / points as f32;
    let rim_color = config.color.darkened();

    let mut verts = Vec::with_capacity(points + 2);
    verts.push(ShapeVertex::new(Vec2::ZERO, config.color));
    for i in 0..points {
        let jitter = uniform(rng, -ASTEROID_ANGLE_JITTER, ASTEROID_ANGLE_JITTER);
        let angle = (i as f32 + jitter) * step;
        let reach = size * uniform(rng, ASTEROID_MIN_RADIUS_RATIO, ASTEROID_MAX_RADIUS_RATIO);
        verts.push(ShapeVertex::new(
            Vec2::new(angle.cos() * reach, angle.sin() * reach),
            rim_color,
        ));
    }
    // Close the fan on its first rim point.
    verts.push(verts[1]);

    let model = Model {
        shapes: vec![Shape::new(Primitive::TriangleFan, verts)],
        color: config.color,
    };
    (model, size)
}

/// Spike used for bolts and fire debris: a white-hot tip with a colored
/// tail.
pub fn spike(size: f32, color: Color) -> Model {
    let shape = Shape::new(
        Primitive::Triangles,
        vec![
            ShapeVertex::new(Vec2::new(size / 2.0, 0.0), Color::WHITE),
            ShapeVertex::new(Vec2::new(-size / 2.0, -size / 4.0), color),
            ShapeVertex::new(Vec2::new(-size / 2.0, size / 4.0), color),
        ],
    );
    Model {
        shapes: vec![shape],
        color,
    }
}

/// Irregular chunk of a destroyed hull. Every corner coordinate is drawn
/// independently, giving lopsided quads.
pub fn shard(rng: &mut ChaCha8Rng, size: f32, color: Color) -> Model {
    let lo = 0.25 * size;
    let hi = 0.75 * size;
    let x0 = uniform(rng, lo, hi);
    let y0 = uniform(rng, lo, hi);
    let x1 = uniform(rng, lo, hi);
    let y1 = uniform(rng, lo, hi);
    let x2 = uniform(rng, lo, hi);
    let y2 = uniform(rng, lo, hi);
    let x3 = uniform(rng, lo, hi);
    let y3 = uniform(rng, lo, hi);

    let shape = Shape::new(
        Primitive::Quads,
        vec![
            ShapeVertex::new(Vec2::new(x0, y0), color),
            ShapeVertex::new(Vec2::new(x1, -y1), color),
            ShapeVertex::new(Vec2::new(-x2, -y2), color),
            ShapeVertex::new(Vec2::new(-x3, y3), color),
        ],
    );
    Model {
        shapes: vec![shape],
        color,
    }
}
