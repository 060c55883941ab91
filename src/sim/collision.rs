//! AABB collision detection and the ordered collision/effects resolver
//!
//! Four entity-pair interactions resolve in a fixed order each tick:
//! bullets against enemies, then pellet and power-pellet pickups, then
//! the scare-window sweep, then player/enemy contact. The order is
//! load-bearing: an enemy shot in step 1 can no longer touch the player
//! in step 5.

use glam::Vec2;

use super::state::{GameMode, GameState};
use crate::consts::*;

/// Strict AABB overlap on center/size rectangles. Rectangles that only
/// touch along an edge do not collide.
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    let reach = (a_size + b_size) / 2.0;
    (a_pos.x - b_pos.x).abs() < reach.x && (a_pos.y - b_pos.y).abs() < reach.y
}

/// Resolve all collision interactions and their effects for this tick.
/// Only called while `Playing`; may transition the state to `GameOver`,
/// in which case it returns immediately and nothing further runs this
/// tick.
pub fn resolve(state: &mut GameState, now: u64) {
    // 1. Bullets against enemies: the first overlapping enemy in
    // insertion order is hit, and its removal is visible to the
    // remaining bullets.
    let mut b = 0;
    while b < state.bullets.len() {
        let bullet = &state.bullets[b];
        let hit = state
            .enemies
            .iter()
            .position(|e| aabb_overlap(bullet.pos, bullet.size(), e.pos, e.size()));
        match hit {
            Some(e) => {
                state.enemies.remove(e);
                state.bullets.remove(b);
                state.player.score += SCORE_SHOT_ENEMY;
            }
            None => b += 1,
        }
    }

    // 2. Pellet pickups, all overlaps honored in the same tick
    let player_pos = state.player.pos;
    let player_size = state.player.size();
    let before = state.pellets.len();
    state
        .pellets
        .retain(|p| !aabb_overlap(player_pos, player_size, p.pos, p.size()));
    state.player.score += SCORE_PELLET * (before - state.pellets.len()) as u64;

    // 3. Power pellets open the scare window; a re-trigger overwrites
    // the deadline rather than stacking.
    let before = state.power_pellets.len();
    state
        .power_pellets
        .retain(|p| !aabb_overlap(player_pos, player_size, p.pos, p.size()));
    if state.power_pellets.len() < before {
        state.scared_until = now + SCARE_DURATION_MS;
        log::debug!("power pellet eaten, enemies scared until {}ms", state.scared_until);
    }

    // 4. is_scared is derived from the window and rewritten every tick
    let scared = now < state.scared_until;
    for enemy in &mut state.enemies {
        enemy.is_scared = scared;
    }

    // 5. Player/enemy contact. The overlap set is collected up front so
    // a mid-step respawn does not change who counts this tick; that
    // also means stacked overlaps each cost a life.
    let overlapping: Vec<usize> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| aabb_overlap(state.player.pos, state.player.size(), e.pos, e.size()))
        .map(|(i, _)| i)
        .collect();
    let mut eaten: Vec<usize> = Vec::new();
    for i in overlapping {
        if state.enemies[i].is_scared {
            eaten.push(i);
            state.player.score += SCORE_SCARED_ENEMY;
        } else {
            state.player.lives = state.player.lives.saturating_sub(1);
            if state.player.lives == 0 {
                for e in eaten.into_iter().rev() {
                    state.enemies.remove(e);
                }
                state.mode = GameMode::GameOver;
                log::info!(
                    "game over on wave {} with score {}",
                    state.wave,
                    state.player.score
                );
                return;
            }
            state.player.respawn();
        }
    }
    for e in eaten.into_iter().rev() {
        state.enemies.remove(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy, Pellet, PowerPellet, Tint};

    fn playing_state() -> GameState {
        let mut state = GameState::new(7);
        state.mode = GameMode::Playing;
        state
    }

    #[test]
    fn test_aabb_overlap_is_strict() {
        let size = Vec2::splat(40.0);
        assert!(aabb_overlap(Vec2::new(0.0, 0.0), size, Vec2::new(39.0, 0.0), size));
        // Sharing an edge is not a collision
        assert!(!aabb_overlap(Vec2::new(0.0, 0.0), size, Vec2::new(40.0, 0.0), size));
        assert!(!aabb_overlap(Vec2::new(0.0, 0.0), size, Vec2::new(0.0, 41.0), size));
    }

    #[test]
    fn test_bullet_kill_awards_score() {
        let mut state = playing_state();
        state.enemies.push(Enemy::new(Vec2::new(200.0, 100.0), Tint::Red));
        state.bullets.push(Bullet {
            pos: Vec2::new(200.0, 100.0),
        });
        resolve(&mut state, 1000);
        assert!(state.bullets.is_empty());
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.score, 100);
    }

    #[test]
    fn test_dead_enemy_absorbs_only_one_bullet() {
        let mut state = playing_state();
        state.enemies.push(Enemy::new(Vec2::new(200.0, 100.0), Tint::Red));
        state.bullets.push(Bullet {
            pos: Vec2::new(200.0, 100.0),
        });
        state.bullets.push(Bullet {
            pos: Vec2::new(200.0, 102.0),
        });
        resolve(&mut state, 1000);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.player.score, 100);
    }

    #[test]
    fn test_simultaneous_pellet_pickups_all_honored() {
        let mut state = playing_state();
        let at = state.player.pos;
        state.pellets.push(Pellet { pos: at });
        state.pellets.push(Pellet {
            pos: at + Vec2::new(5.0, 0.0),
        });
        state.pellets.push(Pellet {
            pos: Vec2::new(50.0, 50.0),
        });
        resolve(&mut state, 1000);
        assert_eq!(state.pellets.len(), 1);
        assert_eq!(state.player.score, 20);
    }

    #[test]
    fn test_power_pellet_opens_scare_window() {
        let mut state = playing_state();
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), Tint::Blue));
        state.power_pellets.push(PowerPellet {
            pos: state.player.pos,
        });
        resolve(&mut state, 5000);
        assert!(state.power_pellets.is_empty());
        assert_eq!(state.scared_until, 5000 + SCARE_DURATION_MS);
        assert!(state.enemies[0].is_scared);
    }

    #[test]
    fn test_retrigger_overwrites_scare_deadline() {
        let mut state = playing_state();
        state.scared_until = 9000;
        state.power_pellets.push(PowerPellet {
            pos: state.player.pos,
        });
        resolve(&mut state, 5000);
        assert_eq!(state.scared_until, 13_000);
    }

    #[test]
    fn test_scare_flag_tracks_window_boundaries() {
        let mut state = playing_state();
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), Tint::Blue));
        state.scared_until = 8000;
        resolve(&mut state, 7999);
        assert!(state.enemies[0].is_scared);
        resolve(&mut state, 8001);
        assert!(!state.enemies[0].is_scared);
    }

    #[test]
    fn test_scared_enemy_is_eaten() {
        let mut state = playing_state();
        state.scared_until = 10_000;
        state.enemies.push(Enemy::new(state.player.pos, Tint::Green));
        resolve(&mut state, 1000);
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.score, 200);
        assert_eq!(state.player.lives, 3);
    }

    #[test]
    fn test_enemy_contact_costs_life_and_respawns_player() {
        let mut state = playing_state();
        state.player.pos = Vec2::new(100.0, 400.0);
        state.enemies.push(Enemy::new(Vec2::new(100.0, 400.0), Tint::Red));
        resolve(&mut state, 1000);
        assert_eq!(state.player.lives, 2);
        assert_eq!(state.player.pos, Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y));
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.mode, GameMode::Playing);
    }

    #[test]
    fn test_last_life_ends_the_run() {
        let mut state = playing_state();
        state.player.lives = 1;
        state.player.pos = Vec2::new(100.0, 400.0);
        state.enemies.push(Enemy::new(Vec2::new(100.0, 400.0), Tint::Red));
        resolve(&mut state, 1000);
        assert_eq!(state.player.lives, 0);
        assert_eq!(state.mode, GameMode::GameOver);
        // No respawn once the run is over
        assert_eq!(state.player.pos, Vec2::new(100.0, 400.0));
    }

    #[test]
    fn test_stacked_overlaps_each_cost_a_life() {
        let mut state = playing_state();
        state.player.pos = Vec2::new(100.0, 400.0);
        state.enemies.push(Enemy::new(Vec2::new(100.0, 400.0), Tint::Red));
        state.enemies.push(Enemy::new(Vec2::new(110.0, 400.0), Tint::Blue));
        resolve(&mut state, 1000);
        assert_eq!(state.player.lives, 1);
    }

    #[test]
    fn test_stacked_scared_overlaps_all_eaten() {
        let mut state = playing_state();
        state.player.lives = 1;
        state.player.pos = Vec2::new(100.0, 400.0);
        state.scared_until = u64::MAX;
        state.enemies.push(Enemy::new(Vec2::new(100.0, 400.0), Tint::Green));
        state.enemies.push(Enemy::new(Vec2::new(110.0, 400.0), Tint::Red));
        resolve(&mut state, 1000);
        assert!(state.enemies.is_empty());
        assert_eq!(state.player.score, 400);
        assert_eq!(state.player.lives, 1);
        assert_eq!(state.mode, GameMode::Playing);
    }
}
