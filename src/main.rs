//! Terp Run entry point
//!
//! Native builds run a headless attract-mode session: an autopilot plays a
//! few runs at a fixed 60 Hz step, cues go to the log and placed scores are
//! written to the ladder file.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::time::{SystemTime, UNIX_EPOCH};

    use terp_run::audio::{AudioManager, LogSink};
    use terp_run::consts::*;
    use terp_run::highscores::LADDER_SIZE;
    use terp_run::persistence::JsonFileStore;
    use terp_run::sim::{GamePhase, GameState, Geometry, TickInput, tick};
    use terp_run::{HighScoreStore, Settings};

    /// Runs per session
    const RUNS: usize = 3;
    /// Give up on a run after this many ticks (ten minutes of play)
    const MAX_TICKS: u64 = 36_000;

    /// Height the autopilot tries to hold: the middle of the next gap
    fn target_y(state: &GameState) -> f32 {
        let actor_x = state.actor.pos.x;
        let next = state
            .field
            .obstacles()
            .iter()
            .filter(|o| o.right_extent() > actor_x)
            .min_by(|a, b| a.scroll.pos.x.total_cmp(&b.scroll.pos.x));

        let Some(obstacle) = next else {
            return state.mid_screen;
        };
        match obstacle.geometry() {
            Geometry::Vertical { top, bottom } => (top.y + top.height + bottom.y) / 2.0,
            Geometry::Horizontal { top, middle, .. } => {
                (top.y + top.height + middle.y) / 2.0
            }
            Geometry::Spinning { top, bottom } => {
                (top.center.y + top.radius + bottom.center.y - bottom.radius) / 2.0
            }
        }
    }

    fn autopilot(state: &GameState) -> TickInput {
        let center = state.actor.collision_area().center.y;
        TickInput {
            tap: state.actor.vel.y >= 0.0 && center > target_y(state) + 4.0,
            ..Default::default()
        }
    }

    pub fn run() {
        let settings = Settings::load_or_default(Settings::FILE_NAME);
        let seed = settings.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
        log::info!("Seed {}, world height {}", seed, settings.world_height);

        let mut ladder = JsonFileStore::open_or_default(&settings.high_score_path);
        let mut audio = AudioManager::from_settings(LogSink, &settings);
        let mut state = GameState::new(seed, settings.world_height);

        for run in 1..=RUNS {
            // Kick off the run
            let start = TickInput {
                tap: true,
                ..Default::default()
            };
            tick(&mut state, &start, SIM_DT, &mut ladder);

            while !state.phase.is_terminal() && state.time_ticks < MAX_TICKS {
                let input = autopilot(&state);
                tick(&mut state, &input, SIM_DT, &mut ladder);
                audio.handle_events(&state.drain_events());
            }
            log::info!(
                "Run {}: score {} in {:.1}s ({:?})",
                run,
                state.score(),
                state.time_ticks as f32 * SIM_DT,
                state.phase
            );

            if !state.phase.is_terminal() {
                log::warn!("Run {} hit the tick limit, stopping", run);
                break;
            }
            if state.phase == GamePhase::HighScore {
                if let Err(e) = ladder.save() {
                    log::warn!("Failed to save high scores: {}", e);
                }
            }
            state.restart();
        }

        let scores: Vec<u32> = (0..LADDER_SIZE).map(|rank| ladder.high_score(rank)).collect();
        log::info!("High scores: {:?}", scores);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Terp Run (native) starting...");
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web builds embed the library; there is no standalone entry point
}
