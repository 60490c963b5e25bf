//! Battle engine: the fixed-order simulation step.
//!
//! `BattleEngine` owns the battle world, runs all systems once per tick,
//! and produces `BattleSnapshot`s. Completely headless, so battles are
//! deterministic and testable without a renderer.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use skirmish_core::config::RosterConfig;
use skirmish_core::error::ConfigError;
use skirmish_core::events::Notification;
use skirmish_core::state::BattleSnapshot;
use skirmish_core::types::{CameraOffset, SimTime, Viewport};

use crate::systems;
use crate::world::BattleWorld;
use crate::world_setup;

/// Configuration for starting a new battle.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for the opponent draw. Same seed = same battle.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The battle engine. Owns the world and all battle state.
#[derive(Debug)]
pub struct BattleEngine {
    world: BattleWorld,
    time: SimTime,
    notifications: Vec<Notification>,
}

impl BattleEngine {
    /// Start a battle between the configured player roster and a drawn
    /// opponent roster. Fails if the roster does not validate.
    pub fn new(config: SimConfig, roster: &RosterConfig) -> Result<Self, ConfigError> {
        roster.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let world = world_setup::setup_battle(roster, &mut rng);
        info!(
            seed = config.seed,
            players = world.player_units.len(),
            opponents = world.opponent_units.len(),
            "battle started"
        );
        Ok(Self::with_world(world))
    }

    /// Run a hand-built world.
    pub fn with_world(world: BattleWorld) -> Self {
        Self {
            world,
            time: SimTime::default(),
            notifications: Vec::new(),
        }
    }

    /// Advance the battle by one tick and return the resulting snapshot.
    ///
    /// Once the battle has a result the world is frozen; further ticks
    /// return the final state unchanged.
    pub fn tick(&mut self) -> BattleSnapshot {
        if self.world.running {
            self.step();
            self.time.advance();
        }

        let notifications = std::mem::take(&mut self.notifications);
        systems::snapshot::build_snapshot(&self.world, &self.time, notifications)
    }

    /// Whether the battle is still being fought.
    pub fn is_running(&self) -> bool {
        self.world.running
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the world.
    pub fn world(&self) -> &BattleWorld {
        &self.world
    }

    /// The viewport a renderer should draw this frame.
    pub fn viewport(&self, camera: CameraOffset) -> Viewport {
        systems::snapshot::viewport(&self.world, camera)
    }

    /// Run all systems in order.
    fn step(&mut self) {
        // 1. Unit orders (players, then opponents)
        systems::unit_orders::run(&mut self.world, &mut self.notifications);
        // 2. Projectiles (movement, expiry, traps, hits)
        systems::projectiles::run(&mut self.world, &mut self.notifications);
        // 3. Traps (ageing, contact damage)
        systems::traps::run(&mut self.world, &mut self.notifications);
        // 4. Outcome
        if let Some(result) = systems::outcome::run(&mut self.world, &mut self.notifications) {
            info!(?result, tick = self.time.tick + 1, "battle finished");
        }
    }
}
