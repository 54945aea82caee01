//! File-backed high score storage
//!
//! The ladder is kept in memory while a score is being placed. Callers write
//! it out with [`JsonFileStore::save`] once the whole ladder has been updated,
//! so the file never holds a half-shifted ladder.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::highscores::{HighScoreStore, HighScores};

/// High score ladder persisted as JSON
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    scores: HighScores,
}

impl JsonFileStore {
    /// Open the ladder at `path`; a missing file yields an empty ladder
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let scores = if path.exists() {
            let json = fs::read_to_string(&path)?;
            let scores: HighScores = serde_json::from_str(&json)?;
            log::info!("Loaded high scores from {}", path.display());
            scores
        } else {
            HighScores::new()
        };
        Ok(Self { path, scores })
    }

    /// Open the ladder, starting empty if the file cannot be read
    pub fn open_or_default(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        match Self::open(path.clone()) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("Starting with empty high scores ({}: {})", path.display(), e);
                Self {
                    path,
                    scores: HighScores::new(),
                }
            }
        }
    }

    /// Write the ladder to disk
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.scores)?;
        fs::write(&self.path, json)?;
        log::debug!("High scores saved to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }
}

impl HighScoreStore for JsonFileStore {
    fn high_score(&self, rank: usize) -> u32 {
        self.scores.high_score(rank)
    }

    fn set_high_score(&mut self, value: u32, rank: usize) {
        self.scores.set_high_score(value, rank);
    }
}
