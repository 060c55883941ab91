//! Paku Invaders - a fixed-viewport arcade shooter simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, formation AI, collisions, game state)
//!
//! Rendering, window management, audio, and the raw input/timing sources
//! are external collaborators. Each frame the core consumes an input
//! snapshot plus a monotonic millisecond clock and emits a read-only
//! scene snapshot for the renderer.

pub mod sim;

pub use sim::{GameMode, GameState, SceneSnapshot, TickInput};

/// Game configuration constants
pub mod consts {
    /// Fixed viewport, no resize handling
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_SPAWN_X: f32 = VIEWPORT_WIDTH / 2.0;
    pub const PLAYER_SPAWN_Y: f32 = VIEWPORT_HEIGHT - 50.0;
    /// Lowest the player's center may travel; keeps the HUD strip clear
    pub const PLAYER_MAX_Y: f32 = VIEWPORT_HEIGHT - PLAYER_SIZE / 2.0 - 10.0;
    pub const START_LIVES: u8 = 3;

    /// Bullet defaults
    pub const BULLET_WIDTH: f32 = 5.0;
    pub const BULLET_HEIGHT: f32 = 10.0;
    pub const BULLET_SPEED: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 40.0;
    /// Horizontal distance covered per formation advance
    pub const ENEMY_STEP: f32 = 30.0;
    /// Vertical drop applied when the formation reverses at a wall
    pub const ENEMY_DROP: f32 = ENEMY_SIZE / 2.0;
    /// Milliseconds between lockstep formation advances
    pub const MOVE_DELAY_MS: u64 = 600;
    /// Per-tick odds that one bottom-row enemy breaks formation
    pub const CHASE_CHANCE: f64 = 0.002;
    pub const CHASE_SPEED: f32 = 2.0;

    /// Formation grid
    pub const FORMATION_ROWS: u32 = 3;
    pub const FORMATION_COLS: u32 = 8;
    pub const FORMATION_PADDING: f32 = 10.0;
    pub const FORMATION_ORIGIN_X: f32 = 100.0;
    pub const FORMATION_ORIGIN_Y: f32 = 50.0;

    /// Pellets
    pub const PELLET_SIZE: f32 = 10.0;
    pub const POWER_PELLET_SIZE: f32 = 20.0;
    pub const PELLETS_PER_WAVE: usize = 10;
    pub const PELLET_MARGIN_X: f32 = 20.0;
    /// Scare window opened by a power pellet
    pub const SCARE_DURATION_MS: u64 = 8000;

    /// Scoring
    pub const SCORE_SHOT_ENEMY: u64 = 100;
    pub const SCORE_PELLET: u64 = 10;
    pub const SCORE_SCARED_ENEMY: u64 = 200;
}
