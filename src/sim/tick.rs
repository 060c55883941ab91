//! Frame-stepped simulation driver
//!
//! One tick per rendered frame. The caller supplies the per-frame input
//! snapshot and a monotonic millisecond clock; every timer in the core
//! compares against the absolute value, never an accumulated delta.

use glam::Vec2;
use rand::Rng;

use super::collision;
use super::formation;
use super::pursuit;
use super::state::{Bullet, Enemy, GameMode, GameState, Pellet, PowerPellet, Tint};
use crate::consts::*;

/// Input intents for a single tick. `Default` carries no intents, which
/// is also the recommended stand-in for a malformed input snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub move_up: bool,
    pub move_down: bool,
    pub fire: bool,
    /// Menu confirm; the reference binding maps it to the fire key
    pub confirm: bool,
    /// Honored by the driver loop before the tick body runs
    pub quit: bool,
}

/// Advance the simulation by one frame.
///
/// Outside `Playing` only the state-machine gate runs: fire/confirm
/// starts (or restarts) a game and everything else is inert.
pub fn tick(state: &mut GameState, input: &TickInput, now: u64) {
    match state.mode {
        GameMode::Start | GameMode::GameOver => {
            if input.confirm || input.fire {
                reset_game(state);
            }
            return;
        }
        GameMode::Playing => {}
    }

    // Firing happens before movement, so the bullet leaves from where
    // the player stood when the intent was captured.
    if input.fire {
        state.bullets.push(Bullet::fired_from(&state.player));
    }

    // Directional intents are independent axes; diagonals are allowed
    let mut delta = Vec2::ZERO;
    if input.move_left {
        delta.x -= PLAYER_SPEED;
    }
    if input.move_right {
        delta.x += PLAYER_SPEED;
    }
    if input.move_up {
        delta.y -= PLAYER_SPEED;
    }
    if input.move_down {
        delta.y += PLAYER_SPEED;
    }
    state.player.translate_clamped(delta);

    state.bullets.retain_mut(|b| b.advance());

    pursuit::roll_for_chaser(state);
    formation::update(state, now);

    collision::resolve(state, now);
    if state.mode != GameMode::Playing {
        return;
    }

    if state.enemies.is_empty() {
        state.wave += 1;
        spawn_wave(state);
        log::info!("wave {} begins", state.wave);
    }
}

/// Full game reset: fresh score/lives/wave and a fresh board. The
/// player keeps its current position; losing a life recenters it anyway.
pub fn reset_game(state: &mut GameState) {
    state.player.score = 0;
    state.player.lives = START_LIVES;
    state.wave = 1;
    state.scared_until = 0;
    state.bullets.clear();
    state.enemies.clear();
    spawn_wave(state);
    state.mode = GameMode::Playing;
    log::info!("new game (seed {})", state.seed);
}

/// Spawn the formation plus this wave's pellets. Leftover pellets from
/// the previous wave are replaced, not accumulated.
fn spawn_wave(state: &mut GameState) {
    state.pellets.clear();
    state.power_pellets.clear();
    spawn_formation(state);
    for _ in 0..PELLETS_PER_WAVE {
        let pos = random_pellet_pos(state);
        state.pellets.push(Pellet { pos });
    }
    let pos = random_pellet_pos(state);
    state.power_pellets.push(PowerPellet { pos });
}

/// 3x8 grid below the top of the viewport, tint rolled per enemy
fn spawn_formation(state: &mut GameState) {
    let pitch = ENEMY_SIZE + FORMATION_PADDING;
    for row in 0..FORMATION_ROWS {
        for col in 0..FORMATION_COLS {
            let pos = Vec2::new(
                FORMATION_ORIGIN_X + col as f32 * pitch + ENEMY_SIZE / 2.0,
                FORMATION_ORIGIN_Y + row as f32 * pitch + ENEMY_SIZE / 2.0,
            );
            let tint = match state.rng.random_range(0..3) {
                0 => Tint::Red,
                1 => Tint::Green,
                _ => Tint::Blue,
            };
            state.enemies.push(Enemy::new(pos, tint));
        }
    }
}

/// Uniform position in the pickup band: clear of the side walls,
/// between mid-viewport and just above the player's travel ceiling.
fn random_pellet_pos(state: &mut GameState) -> Vec2 {
    let x = state
        .rng
        .random_range(PELLET_MARGIN_X..=VIEWPORT_WIDTH - PELLET_MARGIN_X);
    let y = state
        .rng
        .random_range(VIEWPORT_HEIGHT / 2.0..=PLAYER_MAX_Y - 10.0);
    Vec2::new(x, y)
}
