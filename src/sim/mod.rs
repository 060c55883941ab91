//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, paced by an external monotonic clock
//! - Seeded RNG only
//! - Stable iteration order (insertion order per entity kind)
//! - No rendering or platform dependencies

pub mod collision;
pub mod formation;
pub mod pursuit;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use snapshot::{EntityKind, SceneEntity, SceneSnapshot, capture};
pub use state::{Bullet, Enemy, GameMode, GameState, Pellet, Player, PowerPellet, Tint};
pub use tick::{TickInput, reset_game, tick};
