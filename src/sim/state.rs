//! Game state and core entity types
//!
//! All entities use a center-position convention; sizes are full
//! width/height. Everything mutable in the simulation hangs off
//! `GameState`, so there are no ambient globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Title screen, waiting for confirm
    Start,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Cosmetic entity color, consumed only by the render collaborator.
/// Enemy tints are rolled at spawn and have no behavioral effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tint {
    Yellow,
    White,
    Red,
    Green,
    Blue,
    Orange,
}

/// The player ship
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub score: u64,
    pub lives: u8,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            score: 0,
            lives: START_LIVES,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::splat(PLAYER_SIZE)
    }

    /// Move by `delta`, then clamp the center so the sprite stays inside
    /// the viewport and above the HUD strip.
    pub fn translate_clamped(&mut self, delta: Vec2) {
        let half = PLAYER_SIZE / 2.0;
        self.pos += delta;
        self.pos.x = self.pos.x.clamp(half, VIEWPORT_WIDTH - half);
        self.pos.y = self.pos.y.clamp(half, PLAYER_MAX_Y);
    }

    /// Full recenter to the spawn point (used after losing a life)
    pub fn respawn(&mut self) {
        self.pos = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A player bullet with constant upward velocity
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
}

impl Bullet {
    /// Spawn at the player's top-center
    pub fn fired_from(player: &Player) -> Self {
        Self {
            pos: Vec2::new(player.pos.x, player.pos.y - PLAYER_SIZE / 2.0),
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(BULLET_WIDTH, BULLET_HEIGHT)
    }

    /// Advance one tick. Returns false once the bottom edge has passed
    /// the top of the viewport and the bullet should be culled.
    pub fn advance(&mut self) -> bool {
        self.pos.y -= BULLET_SPEED;
        self.pos.y + BULLET_HEIGHT / 2.0 >= 0.0
    }
}

/// A formation enemy
///
/// `chasing` is sticky: once an enemy breaks formation it homes toward
/// the player until destroyed. `is_scared` is derived from the scare
/// window and rewritten every tick by the collision resolver.
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub tint: Tint,
    pub is_scared: bool,
    pub chasing: bool,
}

impl Enemy {
    pub fn new(pos: Vec2, tint: Tint) -> Self {
        Self {
            pos,
            tint,
            is_scared: false,
            chasing: false,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::splat(ENEMY_SIZE)
    }

    pub fn left(&self) -> f32 {
        self.pos.x - ENEMY_SIZE / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + ENEMY_SIZE / 2.0
    }
}

/// A collectible pellet
#[derive(Debug, Clone)]
pub struct Pellet {
    pub pos: Vec2,
}

impl Pellet {
    pub fn size(&self) -> Vec2 {
        Vec2::splat(PELLET_SIZE)
    }
}

/// The once-per-wave power pellet that opens the scare window
#[derive(Debug, Clone)]
pub struct PowerPellet {
    pub pos: Vec2,
}

impl PowerPellet {
    pub fn size(&self) -> Vec2 {
        Vec2::splat(POWER_PELLET_SIZE)
    }
}

/// Complete simulation state for one run (deterministic for a fixed seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Every stochastic decision (tints, pellet placement, pursuit
    /// rolls) flows through this
    pub rng: Pcg32,
    pub mode: GameMode,
    /// 1-based, bumped each time the enemy set empties
    pub wave: u32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub pellets: Vec<Pellet>,
    pub power_pellets: Vec<PowerPellet>,
    /// Absolute ms; enemies are scared while `now < scared_until`
    pub scared_until: u64,
    /// Formation heading, +1 right / -1 left
    pub move_direction: f32,
    /// Timestamp of the last formation advance
    pub move_timer: u64,
}

impl GameState {
    /// Fresh state on the title screen; the board spawns on confirm
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            mode: GameMode::Start,
            wave: 1,
            player: Player::new(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            pellets: Vec::new(),
            power_pellets: Vec::new(),
            scared_until: 0,
            move_direction: 1.0,
            move_timer: 0,
        }
    }
}
