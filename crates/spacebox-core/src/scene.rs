//! Drawable scene snapshot returned by each tick.
//!
//! The scene is the engine's only output: world-space polygons ready for
//! a rasterizer, with no entity identity attached. Objects contribute
//! their visible shapes in model order; dead objects contribute nothing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::Primitive;
use crate::types::Color;

/// One world-space vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneVertex {
    pub pos: Vec2,
    pub color: Color,
}

/// One polygon of a live object's model, transformed to world space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenePoly {
    pub primitive: Primitive,
    pub verts: Vec<SceneVertex>,
}

/// Everything visible this frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub polys: Vec<ScenePoly>,
}

impl Scene {
    /// True when nothing is visible.
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }
}
