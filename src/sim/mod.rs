//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame time, clamped before integration
//! - Injected random source only
//! - Fixed update order (actor, obstacles 1..4, pickup)
//! - No rendering, audio or platform dependencies

pub mod actor;
pub mod collision;
pub mod field;
pub mod obstacle;
pub mod pickup;
pub mod rng;
pub mod scroll;
pub mod state;
pub mod tick;

pub use actor::{Actor, SizeState};
pub use collision::{Circle, Rect, Shape};
pub use field::ObstacleField;
pub use obstacle::{Geometry, Obstacle, ObstacleMode};
pub use pickup::{Pickup, PickupKind};
pub use rng::{RandomSource, SeededRng, SequenceRng};
pub use scroll::Scroll;
pub use state::{GameEvent, GamePhase, GameState, ScoreBoard};
pub use tick::{TickInput, effective_dt, tick};
