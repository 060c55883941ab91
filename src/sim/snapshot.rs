//! Read-only scene snapshot for the render collaborator
//!
//! The core never draws. Each frame the driver captures a flat list of
//! entity records plus the HUD values and hands it across the boundary.
//! The types serialize so the boundary can be logged, piped to another
//! process, or golden-tested.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameMode, GameState, Tint};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Bullet,
    Enemy,
    Pellet,
    PowerPellet,
}

/// One drawable entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SceneEntity {
    pub kind: EntityKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub tint: Tint,
}

/// Immutable per-frame view of the simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub entities: Vec<SceneEntity>,
    pub score: u64,
    pub lives: u8,
    pub wave: u32,
    pub mode: GameMode,
}

/// Capture the current frame
pub fn capture(state: &GameState) -> SceneSnapshot {
    let mut entities = Vec::with_capacity(
        1 + state.bullets.len()
            + state.enemies.len()
            + state.pellets.len()
            + state.power_pellets.len(),
    );
    entities.push(SceneEntity {
        kind: EntityKind::Player,
        pos: state.player.pos,
        size: state.player.size(),
        tint: Tint::Yellow,
    });
    for bullet in &state.bullets {
        entities.push(SceneEntity {
            kind: EntityKind::Bullet,
            pos: bullet.pos,
            size: bullet.size(),
            tint: Tint::White,
        });
    }
    for enemy in &state.enemies {
        entities.push(SceneEntity {
            kind: EntityKind::Enemy,
            pos: enemy.pos,
            size: enemy.size(),
            tint: enemy.tint,
        });
    }
    for pellet in &state.pellets {
        entities.push(SceneEntity {
            kind: EntityKind::Pellet,
            pos: pellet.pos,
            size: pellet.size(),
            tint: Tint::White,
        });
    }
    for pellet in &state.power_pellets {
        entities.push(SceneEntity {
            kind: EntityKind::PowerPellet,
            pos: pellet.pos,
            size: pellet.size(),
            tint: Tint::Orange,
        });
    }

    SceneSnapshot {
        entities,
        score: state.player.score,
        lives: state.player.lives,
        wave: state.wave,
        mode: state.mode,
    }
}
