//! Game state and the top-level phase machine
//!
//! [`GameState`] owns the actor, the obstacle field, the score and the random
//! source. The rendering, input and audio layers only ever see it through
//! read accessors, the two commands (`on_input`, `restart`) and the event queue.

use crate::consts::*;
use crate::sim::collision::Rect;

use super::actor::Actor;
use super::field::ObstacleField;
use super::pickup::PickupKind;
use super::rng::{RandomSource, SeededRng};

use serde::{Deserialize, Serialize};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first tap; everything holds its starting pose
    #[default]
    Ready,
    /// Physics active
    Running,
    /// Frozen mid-run
    Paused,
    /// Actor hit the ground; score did not make the ladder
    GameOver,
    /// Actor hit the ground with a ladder-worthy score
    HighScore,
}

impl GamePhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::GameOver | GamePhase::HighScore)
    }
}

/// Fire-and-forget notifications for the audio/render layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jump,
    /// Actor hit an obstacle
    Death,
    /// An obstacle was passed
    Score,
    PickupCollected(PickupKind),
    /// Run ended; `rank` is the ladder slot reached, if any
    GameOver { rank: Option<usize> },
}

/// Score plus the bookkeeping for timing the Grow effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    pub score: u32,
    /// Score when the actor last grew
    pub enlarged_at: u32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SeededRng> {
    /// Injected random source
    pub rng: R,
    pub phase: GamePhase,
    pub board: ScoreBoard,
    pub actor: Actor,
    pub field: ObstacleField,
    /// Ground band; touching it ends the run
    pub ground: Rect,
    /// Game-space y of the screen middle
    pub mid_screen: f32,
    /// Simulation tick counter (running ticks only)
    pub time_ticks: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
}

impl GameState<SeededRng> {
    /// Create a new game with a seeded generator
    pub fn new(seed: u64, world_height: f32) -> Self {
        Self::with_rng(SeededRng::new(seed), world_height)
    }
}

impl<R: RandomSource> GameState<R> {
    /// Create a new game drawing from `rng`
    pub fn with_rng(mut rng: R, world_height: f32) -> Self {
        let mid_screen = (world_height / 2.0).floor();
        let field = ObstacleField::new(&mut rng);
        Self {
            rng,
            phase: GamePhase::Ready,
            board: ScoreBoard::default(),
            actor: Actor::new(ACTOR_X, mid_screen - ACTOR_SPAWN_OFFSET),
            field,
            ground: Rect::new(0.0, mid_screen + GROUND_OFFSET, GAME_WIDTH, GROUND_HEIGHT),
            mid_screen,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Tap/click: starts the run from Ready and makes the actor jump
    pub fn on_input(&mut self) {
        if self.phase == GamePhase::Ready {
            log::info!("Run started");
            self.phase = GamePhase::Running;
        }
        if self.phase == GamePhase::Running && self.actor.on_input() {
            self.events.push(GameEvent::Jump);
        }
    }

    /// Start over from a finished run. Returns false (and does nothing)
    /// unless the run has ended.
    pub fn restart(&mut self) -> bool {
        if !self.phase.is_terminal() {
            log::debug!("Ignoring restart in {:?}", self.phase);
            return false;
        }
        log::info!("Restarting after score {}", self.board.score);
        self.board = ScoreBoard::default();
        self.actor.restart();
        self.field.restart(&mut self.rng);
        self.time_ticks = 0;
        self.phase = GamePhase::Ready;
        true
    }

    /// Toggle between Running and Paused
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            other => other,
        };
    }

    pub fn score(&self) -> u32 {
        self.board.score
    }

    /// Hand pending events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
