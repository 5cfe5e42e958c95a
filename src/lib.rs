//! Tank Storm - a single-screen arcade tank shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tick pipeline, entities, collisions)
//! - `records`: Best-score / best-time session records
//! - `persistence`: Named scalar record storage port (LocalStorage on web)
//! - `platform`: Browser/native clock and logging abstraction
//! - `tuning`: Data-driven game balance
//!
//! The crate owns only the tick-by-tick state transition. Rendering, DOM
//! wiring, and asset loading are host concerns: the host samples input and
//! the clock, calls [`sim::tick()`] once per animation frame, and draws from
//! the read-only [`sim::Frame`] snapshot.

pub mod persistence;
pub mod platform;
pub mod records;
pub mod sim;
pub mod tuning;

pub use records::BestRecords;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Player tank footprint (square)
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Player bullet footprint
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 10.0;

    /// Enemy bullet footprint
    pub const ENEMY_BULLET_WIDTH: f32 = 4.0;
    pub const ENEMY_BULLET_HEIGHT: f32 = 8.0;

    /// Enemy tank footprint (square)
    pub const ENEMY_SIZE: f32 = 30.0;

    /// Default render surface dimensions (hosts may inject their own)
    pub const DEFAULT_SURFACE_WIDTH: f32 = 800.0;
    pub const DEFAULT_SURFACE_HEIGHT: f32 = 600.0;
}

/// Angle of the ray from `from` toward `to`, in radians.
///
/// Screen coordinates (y down), so straight up is -π/2.
#[inline]
pub fn aim_angle(from: Vec2, to: Vec2) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Unit direction vector for a heading angle
#[inline]
pub fn heading_vector(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}
