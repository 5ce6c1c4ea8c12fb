//! ECS systems run by the engine each tick, one module per phase.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! read-only scene builder). They own no state; anything that must
//! survive a tick lives in components or on the engine.

pub mod cannon;
pub mod collision;
pub mod helm;
pub mod lifespan;
pub mod motion;
pub mod snapshot;
pub mod wreckage;
