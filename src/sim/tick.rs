//! Per-frame simulation step
//!
//! Exactly one call per rendered frame. Commands are applied first, then the
//! physics step runs if (and only if) the phase is Running.

use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::MAX_DT;
use crate::highscores::{self, HighScoreStore};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Tap/click/space
    pub tap: bool,
    /// Restart after a finished run
    pub restart: bool,
    /// Pause toggle
    pub pause: bool,
}

/// Frame time actually integrated: never negative, never above MAX_DT
#[inline]
pub fn effective_dt(dt: f32) -> f32 {
    dt.clamp(0.0, MAX_DT)
}

/// Advance the game by one frame of `dt` seconds
pub fn tick<R: RandomSource>(
    state: &mut GameState<R>,
    input: &TickInput,
    dt: f32,
    ladder: &mut dyn HighScoreStore,
) {
    if input.restart {
        state.restart();
    }
    if input.pause {
        state.toggle_pause();
    }
    if input.tap {
        state.on_input();
    }

    if state.phase != GamePhase::Running {
        return;
    }

    let dt = effective_dt(dt);
    state.time_ticks += 1;

    state.actor.tick(dt);
    state
        .field
        .tick(dt, &mut state.actor, &state.board, &mut state.rng);

    let hit = state
        .field
        .resolve(&mut state.actor, &mut state.board, &mut state.events);
    if hit && state.actor.is_alive() {
        log::info!("Hit an obstacle at score {}", state.board.score);
        state.field.stop();
        state.actor.kill();
        state.events.push(GameEvent::Death);
    }

    if state.actor.collision_area().overlaps_rect(&state.ground) {
        state.field.stop();
        state.actor.kill();
        state.actor.decelerate();

        let rank = highscores::submit(ladder, state.board.score);
        state.phase = if rank.is_some() {
            GamePhase::HighScore
        } else {
            GamePhase::GameOver
        };
        log::info!(
            "Game over: score {} after {} ticks ({:?})",
            state.board.score,
            state.time_ticks,
            state.phase
        );
        state.events.push(GameEvent::GameOver { rank });
    }
}
