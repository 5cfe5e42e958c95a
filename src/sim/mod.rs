//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven externally, one tick per animation frame
//! - Seeded RNG only
//! - No rendering or platform dependencies
//! - Input and clock are snapshotted by the host and passed in

pub mod collision;
pub mod difficulty;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use difficulty::{spawn_interval, speed_factor};
pub use state::{
    Enemy, Frame, GameEvent, GamePhase, GameState, Player, Projectile, Surface,
};
pub use tick::{TickInput, tick};
