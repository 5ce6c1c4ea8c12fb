//! Pilot: per-player respawn bookkeeping.
//!
//! The mode loop owns one `Pilot` per player. Each frame the pilot
//! forwards that player's control snapshot to their ship and watches for
//! its death; once the ship is gone and the respawn delay has passed, a
//! fresh ship appears at a random pose, optionally after clearing the
//! hazards around the spawn point. The pilot only ever holds a weak
//! entity handle, the world owns the ship.

use hecs::Entity;

use spacebox_core::commands::Controls;
use spacebox_core::config::PilotConfig;
use spacebox_core::types::FieldExtent;

use crate::engine::GameBox;

pub struct Pilot {
    config: PilotConfig,
    ship: Option<Entity>,
    /// When the current wait began: first update, observed death, or
    /// restart. `None` while the ship is fine.
    wait_since: Option<f64>,
}

impl Pilot {
    pub fn new(config: PilotConfig) -> Self {
        Self {
            config,
            ship: None,
            wait_since: None,
        }
    }

    /// Handle of the current ship, if one has been spawned. It may
    /// already be dead or despawned; revalidate against the container.
    pub fn ship(&self) -> Option<Entity> {
        self.ship
    }

    /// Adopt a pre-placed ship (head-to-head starts position ships
    /// explicitly instead of spawning at random).
    pub fn assign_ship(&mut self, ship: Entity) {
        self.ship = Some(ship);
        self.wait_since = None;
    }

    /// Per-frame pilot duties: forward controls, track the ship's death,
    /// respawn once the delay has elapsed.
    pub fn update(
        &mut self,
        gamebox: &mut GameBox,
        now: f64,
        extent: FieldExtent,
        controls: Controls,
    ) {
        match self.ship {
            Some(ship) if gamebox.contains(ship) => {
                gamebox.set_controls(ship, controls);
                // The corpse lingers one frame before wreckage removes
                // it; arm the delay the moment death is visible.
                if !gamebox.is_alive(ship) && self.wait_since.is_none() {
                    self.wait_since = Some(now);
                }
            }
            _ => {
                let since = *self.wait_since.get_or_insert(now);
                if now - since >= f64::from(self.config.respawn_secs) {
                    let ship = gamebox.respawn_ship(
                        &self.config.ship,
                        self.config.team,
                        self.config.clear_radius,
                        extent,
                    );
                    self.ship = Some(ship);
                    self.wait_since = None;
                    log::debug!("pilot on team {} took a new ship", self.config.team);
                }
            }
        }
    }

    /// Pull the current ship out of the game immediately and rearm the
    /// respawn delay. Used on level transitions.
    pub fn restart(&mut self, gamebox: &mut GameBox, now: f64) {
        if let Some(ship) = self.ship.take() {
            gamebox.remove(ship);
        }
        self.wait_since = Some(now);
    }
}
