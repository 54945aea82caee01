//! Game settings and preferences
//!
//! Stored as a JSON file next to the high score ladder. Missing fields fall
//! back to their defaults so older files keep loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_WORLD_HEIGHT;
use crate::error::Result;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Game-space height; the width is always GAME_WIDTH
    pub world_height: f32,
    /// Fixed seed for reproducible runs; a fresh one is picked when absent
    pub seed: Option<u64>,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,

    /// Where the high score ladder lives
    pub high_score_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_height: DEFAULT_WORLD_HEIGHT,
            seed: None,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            high_score_path: PathBuf::from("terp_run_scores.json"),
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "terp_run_settings.json";

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!(
                    "Using default settings ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Game-space y of the screen middle
    pub fn mid_screen(&self) -> f32 {
        (self.world_height / 2.0).floor()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("terp_run_{}_{}", std::process::id(), name))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.world_height, 226.0);
        assert_eq!(settings.mid_screen(), 113.0);
        assert_eq!(settings.seed, None);
        assert!(!settings.muted);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("settings_roundtrip.json");
        let settings = Settings {
            world_height: 241.0,
            seed: Some(42),
            muted: true,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        assert_eq!(loaded, settings);
        assert_eq!(loaded.mid_screen(), 120.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "seed": 7 }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.world_height, DEFAULT_WORLD_HEIGHT);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_missing_file() {
        let path = temp_path("does_not_exist.json");
        assert!(matches!(Settings::load(&path), Err(Error::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }

    #[test]
    fn test_corrupt_file() {
        let path = temp_path("settings_corrupt.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Settings::load(&path), Err(Error::Json(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
        let _ = fs::remove_file(&path);
    }
}
