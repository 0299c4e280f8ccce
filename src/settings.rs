//! Demo settings
//!
//! Read once at startup from a JSON file. Every field has a default, so a
//! partial file (or no file at all) is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the settings file location
pub const SETTINGS_ENV: &str = "ARCADE_SETTINGS";
/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "arcade.json";

/// Pong match rules
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PongSettings {
    /// Points needed to win; 1 means the first goal ends the match
    pub points_to_win: u32,
    /// Seed for serve directions after a point
    pub seed: u64,
}

impl Default for PongSettings {
    fn default() -> Self {
        Self {
            points_to_win: 1,
            seed: 0x5eed,
        }
    }
}

/// Platformer asset paths (procedural placeholders when unset)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerSettings {
    /// 4x4 player walk-cycle sprite sheet
    pub player_sheet: Option<PathBuf>,
    /// Enemy sprite
    pub enemy_sprite: Option<PathBuf>,
    /// 4x1 tileset
    pub tileset: Option<PathBuf>,
    /// 16x16 ASCII font bank for the win/lose banner
    pub font: Option<PathBuf>,
}

/// Sprite scene asset paths
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneSettings {
    pub first_sprite: Option<PathBuf>,
    pub second_sprite: Option<PathBuf>,
}

/// All demo settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub pong: PongSettings,
    pub platformer: PlatformerSettings,
    pub scene: SceneSettings,
}

impl Settings {
    /// Load settings from `$ARCADE_SETTINGS` or `./arcade.json`
    ///
    /// A missing file silently yields defaults; an unreadable or malformed
    /// one is logged and also yields defaults.
    pub fn load() -> Self {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILE));

        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        Self::load_from(&path)
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Clamp values that would make a demo unplayable
    fn sanitize(&mut self) {
        if self.pong.points_to_win == 0 {
            log::warn!("pong.points_to_win must be at least 1, using 1");
            self.pong.points_to_win = 1;
        }
    }
}
