//! Simulation constants and tuning parameters.

use std::f64::consts::PI;

/// Simulation tick rate (Hz). One tick per display refresh.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Stage ---

/// Viewport width in pixels. The stage is exactly one viewport wide.
pub const VIEWPORT_WIDTH: f64 = 360.0;

/// Viewport height in pixels.
pub const VIEWPORT_HEIGHT: f64 = 480.0;

/// Stage width in stage units.
pub const STAGE_WIDTH: f64 = VIEWPORT_WIDTH;

/// Stage height in stage units.
pub const STAGE_HEIGHT: f64 = VIEWPORT_HEIGHT;

/// Distance of each roster's spawn line from its stage edge.
pub const SPAWN_INSET: f64 = 50.0;

// --- Units ---

/// Unit footprint diameter.
pub const UNIT_SIZE: f64 = 30.0;

/// Displacement per move action.
pub const MOVE_SPEED: f64 = 25.0;

/// Starting (and maximum) health for every unit.
pub const INITIAL_HP: i32 = 100;

/// Maximum number of action symbols per unit.
pub const MAX_ACTIONS: usize = 10;

/// Maximum number of units per side.
pub const MAX_ROSTER: usize = 3;

// --- Generic action cooldowns (frames) ---

/// Cooldown after any move.
pub const MOVE_COOLDOWN_FRAMES: u32 = 5;

/// Cooldown after a search.
pub const SEARCH_COOLDOWN_FRAMES: u32 = 15;

/// Cooldown after a successful attack (all archetypes except the sniper).
pub const ATTACK_COOLDOWN_FRAMES: u32 = 10;

/// Self-stun after a sniper shot.
pub const SNIPER_STUN_FRAMES: u32 = 120;

// --- Projectiles ---

/// Number of projectiles in a scatter volley. Must be at least 2.
pub const SCATTER_COUNT: usize = 5;

/// Total spread of a scatter volley (radians, 45°).
pub const SCATTER_SPREAD: f64 = PI / 4.0;

/// Collision radius of a straight projectile.
pub const STRAIGHT_PROJECTILE_RADIUS: f64 = 5.0;

/// Collision radius of each scatter pellet.
pub const SCATTER_PROJECTILE_RADIUS: f64 = 3.0;

/// Collision radius of a trap shell in flight.
pub const TRAP_PROJECTILE_RADIUS: f64 = 5.0;

/// Collision radius of a sniper round.
pub const SNIPER_PROJECTILE_RADIUS: f64 = 4.0;

// --- Traps ---

/// Trap lifetime in seconds.
pub const TRAP_DURATION_SECONDS: u32 = 10;

/// Trap lifetime in frames.
pub const TRAP_DURATION_FRAMES: u32 = TRAP_DURATION_SECONDS * TICK_RATE;

/// Contact radius of a placed trap.
pub const TRAP_RADIUS: f64 = 10.0;

/// Frames a trap waits before it can damage again.
pub const TRAP_REARM_FRAMES: u32 = 30;

// --- Display ---

/// HP percentage above which a bar is drawn as healthy.
pub const HP_HEALTHY_PERCENT: f64 = 50.0;

/// HP percentage above which a bar is drawn as wounded (and below healthy).
pub const HP_WOUNDED_PERCENT: f64 = 20.0;
