//! Headless demo session
//!
//! Runs a scripted bot against the simulation at a synthetic 60 Hz clock,
//! plays two sessions, and logs the surviving best records. Useful as a
//! smoke test of the full tick surface without any render host.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use tank_storm::persistence::{MemoryStore, RecordStore};
    use tank_storm::records::BestRecords;
    use tank_storm::sim::{GameEvent, GameState, Surface, TickInput, tick};
    use tank_storm::{Tuning, platform};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u64 = 60 * 120; // two minutes of simulated time

    platform::init_logging();

    let mut store = MemoryStore::new();
    let records = BestRecords::fresh(&mut store);

    let seed = 0xC0FFEE;
    let mut state = GameState::new(seed, Surface::default(), Tuning::default(), records, 0.0);
    log::info!("demo session started (seed {seed:#x})");

    let mut sessions_left = 2u32;
    for frame in 0..MAX_FRAMES {
        let now = frame as f64 * FRAME_MS;

        // Bot: sit low, track the nearest enemy horizontally, keep firing
        let target = state
            .enemies
            .iter()
            .max_by(|a, b| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|e| e.center())
            .unwrap_or(Vec2::new(state.surface.width / 2.0, 0.0));
        let player_x = state.player.center().x;
        let input = TickInput {
            left: target.x < player_x - 4.0,
            right: target.x > player_x + 4.0,
            down: state.player.pos.y < state.surface.height - 80.0,
            fire: true,
            pointer: target,
            restart: true,
            ..Default::default()
        };

        tick(&mut state, &input, now);

        for event in state.drain_events() {
            if let GameEvent::SessionEnded { score, elapsed_secs } = event {
                log::info!("session over: score {score}, survived {elapsed_secs}s");
                state.records.save(&mut store);
                sessions_left -= 1;
                if sessions_left == 0 {
                    log::info!(
                        "best score {} / best time {}s (stored: {:?} / {:?})",
                        state.records.best_score,
                        state.records.best_time,
                        store.get(tank_storm::records::BEST_SCORE_KEY),
                        store.get(tank_storm::records::BEST_TIME_KEY),
                    );
                    return;
                }
            }
        }
    }

    log::info!(
        "demo ended after {MAX_FRAMES} frames: score {}, best {}",
        state.score,
        state.records.best_score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {}
