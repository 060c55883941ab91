//! Paku Invaders headless demo driver
//!
//! The shipped game wires the simulation core to a window, renderer,
//! and input device. This binary stands in for those collaborators: it
//! scripts a short session at a fixed seed with 60 Hz timestamps, then
//! prints the final scene snapshot as JSON.

use paku_invaders::sim::{self, GameState, TickInput};

/// Frame period of the external 60 Hz clock
const FRAME_MS: u64 = 16;

fn main() {
    env_logger::init();

    let seed = 0xC0FFEE;
    let mut state = GameState::new(seed);
    log::info!("paku-invaders demo starting (seed {seed})");

    for frame in 0..1200u64 {
        let input = script(frame);
        // A real driver checks quit before running the tick body
        if input.quit {
            break;
        }
        sim::tick(&mut state, &input, frame * FRAME_MS);
    }

    let snapshot = sim::capture(&state);
    log::info!(
        "demo finished: score {} lives {} wave {}",
        snapshot.score,
        snapshot.lives,
        snapshot.wave
    );
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("snapshot serialization failed: {err}"),
    }
}

/// Canned input: confirm off the title screen, then sweep side to side
/// firing in bursts.
fn script(frame: u64) -> TickInput {
    TickInput {
        confirm: frame == 0,
        fire: frame > 0 && frame % 30 == 0,
        move_right: frame % 120 < 60,
        move_left: frame % 120 >= 60,
        ..Default::default()
    }
}
