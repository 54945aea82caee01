//! High score ladder
//!
//! Five ranked slots, rank 0 highest. A score enters the ladder only if it
//! strictly beats the rank-4 entry; it is inserted above any equal entries
//! and everything below slides down one slot.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of ladder slots
pub const LADDER_SIZE: usize = 5;

/// Ranked score storage the simulation reads and writes at game over
pub trait HighScoreStore {
    /// Score at `rank` (0 = best); 0 for an unknown rank
    fn high_score(&self, rank: usize) -> u32;
    fn set_high_score(&mut self, value: u32, rank: usize);
}

/// Whether `score` would enter the ladder
pub fn qualifies(store: &dyn HighScoreStore, score: u32) -> bool {
    score > store.high_score(LADDER_SIZE - 1)
}

/// Rank `score` would take (0-indexed), if it qualifies
pub fn potential_rank(store: &dyn HighScoreStore, score: u32) -> Option<usize> {
    if !qualifies(store, score) {
        return None;
    }
    (0..LADDER_SIZE).find(|&rank| score >= store.high_score(rank))
}

/// Insert `score` into the ladder, returning the rank it took
pub fn submit(store: &mut dyn HighScoreStore, score: u32) -> Option<usize> {
    let rank = potential_rank(store, score)?;
    for slot in (rank + 1..LADDER_SIZE).rev() {
        let above = store.high_score(slot - 1);
        store.set_high_score(above, slot);
    }
    store.set_high_score(score, rank);
    log::info!("Score {} placed at rank {}", score, rank);
    Some(rank)
}

/// In-memory ladder
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    pub scores: [u32; LADDER_SIZE],
}

impl HighScores {
    /// Create an empty (all-zero) ladder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scores(scores: [u32; LADDER_SIZE]) -> Self {
        Self { scores }
    }

    pub fn get(&self, rank: usize) -> Result<u32> {
        self.scores.get(rank).copied().ok_or(Error::InvalidRank(rank))
    }

    pub fn set(&mut self, value: u32, rank: usize) -> Result<()> {
        let slot = self.scores.get_mut(rank).ok_or(Error::InvalidRank(rank))?;
        *slot = value;
        Ok(())
    }

    /// Add a score; returns the rank achieved or None if it didn't qualify
    pub fn add_score(&mut self, score: u32) -> Option<usize> {
        submit(self, score)
    }

    /// Get the top score
    pub fn top_score(&self) -> u32 {
        self.scores[0]
    }

    /// True if nothing has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.scores.iter().all(|&s| s == 0)
    }
}

impl HighScoreStore for HighScores {
    fn high_score(&self, rank: usize) -> u32 {
        self.get(rank).unwrap_or(0)
    }

    fn set_high_score(&mut self, value: u32, rank: usize) {
        if let Err(e) = self.set(value, rank) {
            log::warn!("Dropping high score {}: {}", value, e);
        }
    }
}
