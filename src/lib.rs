//! Terp Run - a side-scrolling reflex game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, obstacles, pickups, game state)
//! - `highscores`: Top-5 ladder
//! - `persistence`: JSON-backed ladder storage
//! - `settings`: Player/config preferences
//! - `audio`: Event-to-cue mapping for the sound layer

pub mod audio;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use error::{Error, Result};
pub use highscores::{HighScoreStore, HighScores};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Default frame step for headless runs (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Largest step a single tick will integrate (lag-spike guard)
    pub const MAX_DT: f32 = 0.15;

    /// Game-space width; height follows the device aspect ratio
    pub const GAME_WIDTH: f32 = 136.0;
    /// Default game-space height (480x800 portrait scaled to width 136)
    pub const DEFAULT_WORLD_HEIGHT: f32 = 226.0;
    /// Ground band sits this far below mid-screen
    pub const GROUND_OFFSET: f32 = 100.0;
    pub const GROUND_HEIGHT: f32 = 10.0;

    /// Actor defaults
    pub const ACTOR_X: f32 = 21.0;
    pub const ACTOR_SPAWN_OFFSET: f32 = 5.0;
    pub const ACTOR_SIZE: f32 = 15.0;
    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 460.0;
    pub const TERMINAL_VELOCITY: f32 = 200.0;
    pub const CEILING_Y: f32 = -8.0;
    pub const JUMP_VELOCITY: f32 = -140.0;
    pub const ENLARGE_FACTOR: f32 = 1.5;

    /// Obstacle pool
    pub const OBSTACLE_COUNT: usize = 4;
    pub const OBSTACLE_WIDTH: i32 = 22;
    pub const OBSTACLE_START_HEIGHTS: [i32; OBSTACLE_COUNT] = [60, 70, 80, 60];
    pub const FIRST_OBSTACLE_X: f32 = 210.0;
    /// Horizontal gap between consecutive obstacles
    pub const OBSTACLE_GAP: f32 = 45.0;
    /// Left edge an obstacle must be at (or right of) before a pickup can follow it
    pub const ENTRY_X: f32 = 210.0;

    /// Scroll speed (negative = leftward)
    pub const BASE_SCROLL_SPEED: f32 = -59.0;
    /// Speed magnitude cap
    pub const MAX_SCROLL_SPEED: f32 = 89.0;
    pub const MAX_SHIFT: f32 = 100.0;
    /// Per-tick decay of speed and shift boosts
    pub const BOOST_DECAY: f32 = 0.01;
    pub const SPEED_BOOST: f32 = 10.0;
    /// Drift boost per obstacle; the pickup gets PICKUP_DRIFT_BOOST
    pub const DRIFT_BOOSTS: [f32; OBSTACLE_COUNT] = [5.0, 10.0, 5.0, 10.0];
    pub const PICKUP_DRIFT_BOOST: f32 = 7.0;

    /// Pickups
    pub const PICKUP_SIZE: i32 = 10;
    pub const SCORE_BONUS: u32 = 5;
    /// Score must exceed this before modes change and pickups appear
    pub const UNLOCK_SCORE: u32 = 4;
    /// Points scored while enlarged before the actor shrinks back
    pub const GROW_DURATION: u32 = 5;
}
