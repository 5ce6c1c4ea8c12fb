//! Fundamental geometric and visual types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::enums::Primitive;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    /// Fire debris and exhaust tip.
    pub const ORANGE: Color = Color::new(255, 145, 0);
    pub const LIGHT_BLUE: Color = Color::new(0x80, 0x80, 0xFF);
    pub const LIGHT_GRAY: Color = Color::new(224, 224, 224);
    pub const MEDIUM_GRAY: Color = Color::new(0x80, 0x80, 0x80);
    pub const DARK_GRAY: Color = Color::new(0x60, 0x60, 0x60);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Half-intensity shade (each channel halved).
    pub fn darkened(self) -> Self {
        Self::new(self.r / 2, self.g / 2, self.b / 2)
    }

    /// Per-channel linear blend from `a` to `b`, truncating toward zero.
    /// `t` is clamped to [0, 1].
    pub fn lerp(a: Color, b: Color, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f32 + (y as f32 - x as f32) * t) as u8;
        Self::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

/// One vertex of a model polygon, in object-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeVertex {
    pub pos: Vec2,
    pub color: Color,
}

impl ShapeVertex {
    pub fn new(pos: Vec2, color: Color) -> Self {
        Self { pos, color }
    }
}

/// A polygon in an object's visual model.
///
/// Vertices are relative to the object center; the renderer applies the
/// object's orientation and position each frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub primitive: Primitive,
    pub verts: Vec<ShapeVertex>,
    /// Hidden shapes stay in the model but contribute nothing to the scene.
    pub visible: bool,
}

impl Shape {
    pub fn new(primitive: Primitive, verts: Vec<ShapeVertex>) -> Self {
        Self {
            primitive,
            verts,
            visible: true,
        }
    }
}

/// Rectangular play-field extent, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldExtent {
    pub width: f32,
    pub height: f32,
}

impl FieldExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether a point lies inside the field.
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }

    /// Folds an out-of-field position back in, one span per violated axis.
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        let mut p = pos;
        if p.x < 0.0 {
            p.x += self.width;
        } else if p.x > self.width {
            p.x -= self.width;
        }
        if p.y < 0.0 {
            p.y += self.height;
        } else if p.y > self.height {
            p.y -= self.height;
        }
        p
    }

    /// Center-to-center delta `a - b` with the toroidal seam fold.
    ///
    /// The fold is one-sided: an axis delta greater than half the span has
    /// the full span subtracted, while deltas below minus half the span
    /// are left untouched. Collision testing relies on exactly this
    /// behavior on both axes.
    pub fn wrapped_delta(&self, a: Vec2, b: Vec2) -> Vec2 {
        let mut d = a - b;
        if d.x > self.width / 2.0 {
            d.x -= self.width;
        }
        if d.y > self.height / 2.0 {
            d.y -= self.height;
        }
        d
    }
}

/// Folds an orientation angle back into (-2π, 2π).
///
/// A single fold per side; inputs are expected within one spin step of
/// the range, which integration guarantees.
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    if angle > TAU {
        angle - TAU
    } else if angle < -TAU {
        angle + TAU
    } else {
        angle
    }
}
