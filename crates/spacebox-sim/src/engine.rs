//! The game container.
//!
//! `GameBox` owns the hecs ECS world, the seeded RNG, and the per-frame
//! spawn queue, advances the simulation one tick per rendered frame, and
//! returns the frame's drawable `Scene`. Completely headless; the
//! caller owns the window, the input devices, and the rasterizer.

use glam::Vec2;
use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use spacebox_core::commands::Controls;
use spacebox_core::components::{Helm, Vitals};
use spacebox_core::config::{AsteroidConfig, FieldConfig, Knock, ShipConfig};
use spacebox_core::constants::ASTEROID_TEAM;
use spacebox_core::scene::Scene;
use spacebox_core::types::FieldExtent;

use crate::blast;
use crate::field;
use crate::rng::{point_in, uniform};
use crate::systems;
use crate::systems::cannon::BoltSeed;
use crate::world_setup;

/// Configuration for a new game container.
pub struct BoxConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The game container. Owns the ECS world and all simulation state.
pub struct GameBox {
    world: World,
    rng: ChaCha8Rng,
    /// Clock reading of the previous tick; `None` until the first call.
    last_update: Option<f64>,
    spawn_queue: Vec<BoltSeed>,
    despawn_buffer: Vec<Entity>,
    /// Team whose extinction means the level is clear.
    hazard_team: u32,
}

impl GameBox {
    /// Create a new game container with the given config.
    pub fn new(config: BoxConfig) -> Self {
        Self {
            world: World::new(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            last_update: None,
            spawn_queue: Vec::new(),
            despawn_buffer: Vec::new(),
            hazard_team: ASTEROID_TEAM,
        }
    }

    /// Advance the simulation one frame and return what it looks like.
    ///
    /// `now` is the caller's clock in seconds; the first call runs with
    /// a zero delta. Phase order is fixed: wreckage from last frame,
    /// behavior and motion, scene build, ejecta splice, collision, spawn
    /// queue absorption. Ejecta can collide in their birth frame; queued
    /// bolts cannot.
    pub fn tick(&mut self, now: f64, extent: FieldExtent) -> Scene {
        let dt = match self.last_update {
            Some(last) => (now - last) as f32,
            None => 0.0,
        };
        self.last_update = Some(now);

        // 1. Explode and remove everything that died last frame.
        let ejecta = systems::wreckage::run(&mut self.world, &mut self.rng, &mut self.despawn_buffer);
        // 2. Ship steering and thrust.
        systems::helm::run(&mut self.world, dt);
        // 3. Cannon cooldown and fire.
        systems::cannon::run(&mut self.world, dt, &mut self.spawn_queue);
        // 4. Debris burn-down.
        systems::lifespan::run(&mut self.world, dt);
        // 5. Motion integration, wrap or expire at the edges.
        systems::motion::run(&mut self.world, dt, extent);
        // 6. The frame's scene, before any new entities appear.
        let scene = systems::snapshot::build_scene(&self.world);
        // 7. Splice explosion ejecta: collidable now, visible next frame.
        world_setup::spawn_ejecta(&mut self.world, ejecta);
        // 8. Pairwise collision; both parties of a first hit die.
        systems::collision::run(&mut self.world, extent);
        // 9. Absorb queued bolts for the next frame.
        for seed in self.spawn_queue.drain(..) {
            world_setup::spawn_bolt(&mut self.world, &seed);
        }

        scene
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Whether the entity is still in the world (alive or not).
    pub fn contains(&self, entity: Entity) -> bool {
        self.world.contains(entity)
    }

    /// Whether the entity is in the world and not marked dead.
    pub fn is_alive(&self, entity: Entity) -> bool {
        match self.world.get::<&Vitals>(entity) {
            Ok(vitals) => vitals.alive,
            Err(_) => false,
        }
    }

    /// Remove an entity immediately, without an explosion.
    pub fn remove(&mut self, entity: Entity) {
        let _ = self.world.despawn(entity);
    }

    /// Replace a ship's latched control snapshot for the coming tick.
    /// Stale handles are ignored.
    pub fn set_controls(&mut self, entity: Entity, controls: Controls) {
        if let Ok(mut helm) = self.world.get::<&mut Helm>(entity) {
            helm.controls = controls;
        }
    }

    /// Spawn a ship at an explicit pose (initial placement, head-to-head
    /// starts).
    pub fn spawn_ship(
        &mut self,
        config: &ShipConfig,
        pos: Vec2,
        angle: f32,
        team: u32,
    ) -> Entity {
        world_setup::spawn_ship(&mut self.world, config, pos, angle, team)
    }

    /// Spawn a ship at a random pose with zero velocity, optionally
    /// clearing hazards around the spawn point first.
    pub fn respawn_ship(
        &mut self,
        config: &ShipConfig,
        team: u32,
        clear_radius: Option<f32>,
        extent: FieldExtent,
    ) -> Entity {
        let pos = point_in(&mut self.rng, extent);
        let angle = uniform(&mut self.rng, 0.0, std::f32::consts::TAU);
        if let Some(radius) = clear_radius {
            field::disintegrate_around(&mut self.world, pos, radius, self.hazard_team, extent);
        }
        world_setup::spawn_ship(&mut self.world, config, pos, angle, team)
    }

    /// Spawn a single asteroid at rest.
    pub fn spawn_asteroid(&mut self, config: &AsteroidConfig, pos: Vec2, team: u32) -> Entity {
        world_setup::spawn_asteroid(&mut self.world, &mut self.rng, config, pos, team)
    }

    /// Throw an entity with a random impulse on top of its current
    /// velocity. Stale handles are ignored.
    pub fn knock(&mut self, entity: Entity, preset: &Knock) {
        blast::knock_entity(&mut self.world, &mut self.rng, entity, preset);
    }

    /// Kill an entity without letting it break into children.
    pub fn disintegrate(&mut self, entity: Entity) {
        field::disintegrate(&mut self.world, entity);
    }

    /// Fill the field with asteroids and record their team as the
    /// hazard team.
    pub fn populate(&mut self, config: &FieldConfig, extent: FieldExtent) {
        field::populate(&mut self.world, &mut self.rng, config, extent);
        self.hazard_team = config.team;
    }

    /// Disintegrate every hazard within `radius` of `center`.
    pub fn disintegrate_around(&mut self, center: Vec2, radius: f32, extent: FieldExtent) {
        field::disintegrate_around(&mut self.world, center, radius, self.hazard_team, extent);
    }

    /// Number of hazard-team entities still in the world.
    pub fn team_count(&self) -> usize {
        field::team_count(&self.world, self.hazard_team)
    }
}
