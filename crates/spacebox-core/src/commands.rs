//! Control input sent from the caller to the simulation.
//!
//! The caller polls its input devices and hands each ship a latched
//! snapshot between ticks; the helm and cannon systems read it at the
//! next tick.

use serde::{Deserialize, Serialize};

/// Latched per-frame control state for one ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub rotate_left: bool,
    /// Wins over `rotate_left` when both are held.
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
}
