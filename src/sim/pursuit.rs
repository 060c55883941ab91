//! Pursuit promotion and homing
//!
//! Once per tick there is a small chance that a single bottom-row enemy
//! breaks formation and homes toward the player for the rest of its
//! life. Promotion is permanent.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, GameState};
use crate::consts::*;

/// Roll for a new chaser. The roll happens once per tick (not per
/// enemy); on success one bottom-row enemy is picked uniformly.
pub fn roll_for_chaser(state: &mut GameState) {
    if state.rng.random::<f64>() >= CHASE_CHANCE {
        return;
    }
    let candidates = bottom_row(&state.enemies);
    if candidates.is_empty() {
        return;
    }
    let pick = candidates[state.rng.random_range(0..candidates.len())];
    state.enemies[pick].chasing = true;
    log::debug!("enemy {pick} broke formation to chase");
}

/// Indices of every enemy on the bottom row, ties included: those whose
/// center y is >= every other live enemy's center y.
pub fn bottom_row(enemies: &[Enemy]) -> Vec<usize> {
    enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| enemies.iter().all(|other| other.pos.y <= e.pos.y))
        .map(|(i, _)| i)
        .collect()
}

/// Home toward the target center at chase speed. A zero-length
/// direction vector is a no-op.
pub fn chase_step(enemy: &mut Enemy, target: Vec2) {
    enemy.pos += (target - enemy.pos).normalize_or_zero() * CHASE_SPEED;
}
