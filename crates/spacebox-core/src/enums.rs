//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// What a volatile object throws when it explodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlastStyle {
    /// Fire debris plus chunks of the object body.
    #[default]
    FireAndDebris,
    /// Fire debris only.
    FireOnly,
}

/// Primitive topology of a model polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Primitive {
    /// Independent triangles, three vertices each.
    Triangles,
    /// Independent quads, four perimeter-ordered vertices each.
    Quads,
    /// Fan around the first vertex, closed by repeating the second.
    TriangleFan,
}

/// What happens when an object's center leaves the play field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Teleport to the opposite edge (toroidal field).
    #[default]
    Wrap,
    /// Die in place (bolts, debris).
    Expire,
}
