//! Lockstep formation movement
//!
//! The grid advances as one unit on a millisecond cadence rather than
//! every frame. When an enemy reaches a side wall mid-pass the heading
//! flips and the advance becomes a drop; enemies later in that pass
//! keep their horizontal position for the tick.

use super::pursuit;
use super::state::GameState;
use crate::consts::*;

/// Run the per-tick enemy movement update. On cadence ticks the
/// formation advances first; chasers home toward the player every tick
/// and never take formation deltas.
pub fn update(state: &mut GameState, now: u64) {
    let mut dy = 0.0;
    if now - state.move_timer > MOVE_DELAY_MS {
        state.move_timer = now;
        let dx = ENEMY_STEP * state.move_direction;
        for enemy in &mut state.enemies {
            if !enemy.chasing {
                enemy.pos.x += dx;
            }
            if enemy.right() >= VIEWPORT_WIDTH || enemy.left() <= 0.0 {
                state.move_direction = -state.move_direction;
                dy = ENEMY_DROP;
                break;
            }
        }
    }

    let target = state.player.pos;
    for enemy in &mut state.enemies {
        if enemy.chasing {
            pursuit::chase_step(enemy, target);
        } else {
            enemy.pos.y += dy;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Enemy, GameMode, Tint};
    use glam::Vec2;

    fn state_with_enemies(positions: &[(f32, f32)]) -> GameState {
        let mut state = GameState::new(3);
        state.mode = GameMode::Playing;
        for &(x, y) in positions {
            state.enemies.push(Enemy::new(Vec2::new(x, y), Tint::Red));
        }
        state
    }

    #[test]
    fn test_holds_until_cadence_elapses() {
        let mut state = state_with_enemies(&[(200.0, 100.0)]);
        state.move_timer = 1000;
        update(&mut state, 1500);
        assert_eq!(state.enemies[0].pos, Vec2::new(200.0, 100.0));
        assert_eq!(state.move_timer, 1000);
    }

    #[test]
    fn test_advance_steps_the_whole_grid() {
        let mut state = state_with_enemies(&[(200.0, 100.0), (250.0, 100.0)]);
        update(&mut state, 700);
        assert_eq!(state.enemies[0].pos, Vec2::new(230.0, 100.0));
        assert_eq!(state.enemies[1].pos, Vec2::new(280.0, 100.0));
        assert_eq!(state.move_timer, 700);
    }

    #[test]
    fn test_wall_contact_flips_heading_and_drops() {
        // Right edge lands on the wall after the step: 760 + 30 + 20 = 810
        let mut state = state_with_enemies(&[(760.0, 100.0)]);
        update(&mut state, 700);
        assert_eq!(state.move_direction, -1.0);
        assert_eq!(state.enemies[0].pos, Vec2::new(790.0, 120.0));
    }

    #[test]
    fn test_bounce_cuts_the_pass_short() {
        // The first enemy triggers the bounce, so the second keeps its
        // horizontal position this tick but still drops.
        let mut state = state_with_enemies(&[(760.0, 100.0), (400.0, 100.0)]);
        update(&mut state, 700);
        assert_eq!(state.enemies[0].pos.x, 790.0);
        assert_eq!(state.enemies[1].pos.x, 400.0);
        assert_eq!(state.enemies[0].pos.y, 120.0);
        assert_eq!(state.enemies[1].pos.y, 120.0);
    }

    #[test]
    fn test_left_wall_also_bounces() {
        let mut state = state_with_enemies(&[(45.0, 100.0)]);
        state.move_direction = -1.0;
        update(&mut state, 700);
        assert_eq!(state.move_direction, 1.0);
        assert_eq!(state.enemies[0].pos, Vec2::new(15.0, 120.0));
    }

    #[test]
    fn test_chaser_skips_formation_and_homes() {
        let mut state = state_with_enemies(&[(400.0, 300.0)]);
        state.enemies[0].chasing = true;
        // Cadence has elapsed, yet the chaser takes no formation step
        update(&mut state, 700);
        // Player spawn is (400, 550), so homing moves straight down
        assert_eq!(state.enemies[0].pos, Vec2::new(400.0, 302.0));
    }

    #[test]
    fn test_chaser_homes_between_cadence_ticks() {
        let mut state = state_with_enemies(&[(400.0, 300.0)]);
        state.enemies[0].chasing = true;
        state.move_timer = 1000;
        update(&mut state, 1100);
        assert_eq!(state.enemies[0].pos, Vec2::new(400.0, 302.0));
    }
}
