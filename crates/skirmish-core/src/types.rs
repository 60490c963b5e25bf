//! Fundamental geometric and simulation types.

use serde::{Deserialize, Serialize};

use crate::constants::{STAGE_HEIGHT, STAGE_WIDTH, UNIT_SIZE};

/// 2D vector in stage coordinates. x grows rightward, y grows downward.
pub use glam::DVec2 as Vec2;

/// Stable identity of a unit: its side and its slot in that side's roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitId {
    pub side: crate::enums::Side,
    pub slot: u8,
}

impl std::fmt::Display for UnitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.side {
            crate::enums::Side::Player => 'p',
            crate::enums::Side::Opponent => 'o',
        };
        write!(f, "{prefix}{}", self.slot)
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}

/// Clamp a unit centre so its whole footprint stays on the stage.
pub fn clamp_to_stage(pos: Vec2) -> Vec2 {
    let half = UNIT_SIZE / 2.0;
    Vec2::new(
        pos.x.clamp(half, STAGE_WIDTH - half),
        pos.y.clamp(half, STAGE_HEIGHT - half),
    )
}

/// True if a point lies inside the closed stage rectangle.
pub fn on_stage(pos: Vec2) -> bool {
    (0.0..=STAGE_WIDTH).contains(&pos.x) && (0.0..=STAGE_HEIGHT).contains(&pos.y)
}

/// Camera pan applied on top of the automatic follow position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraOffset {
    pub x: f64,
    pub y: f64,
}

/// The stage-space rectangle a renderer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Top-left corner in stage coordinates.
    pub origin: Vec2,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Follow the midpoint of the given unit positions, shifted by the camera
    /// offset and kept inside the stage. With no positions the stage centre
    /// is followed.
    pub fn follow(
        positions: impl IntoIterator<Item = Vec2>,
        camera: CameraOffset,
        width: f64,
        height: f64,
    ) -> Viewport {
        let mut min = Vec2::splat(f64::INFINITY);
        let mut max = Vec2::splat(f64::NEG_INFINITY);
        let mut any = false;
        for pos in positions {
            min = min.min(pos);
            max = max.max(pos);
            any = true;
        }
        let center = if any {
            (min + max) / 2.0
        } else {
            Vec2::new(STAGE_WIDTH / 2.0, STAGE_HEIGHT / 2.0)
        };

        let x = center.x - width / 2.0 + camera.x;
        let y = center.y - height / 2.0 + camera.y;

        // max(0) after min() so a viewport larger than the stage pins to 0.
        Viewport {
            origin: Vec2::new(
                x.min(STAGE_WIDTH - width).max(0.0),
                y.min(STAGE_HEIGHT - height).max(0.0),
            ),
            width,
            height,
        }
    }
}
