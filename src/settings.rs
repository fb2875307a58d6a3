//! Game settings and rules
//!
//! Loaded from an optional JSON file. Every field has a default, so a file
//! only needs the keys it wants to change.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Gameplay tunables copied into each `GameState`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Match length (seconds)
    pub total_time: u32,
    pub starting_lives: u32,
    /// Player speed without boost (px/s)
    pub base_speed: f32,
    /// Speed multiplier while the speed buff is active
    pub speed_boost: f32,
    /// Grace window after an obstacle hit (seconds)
    pub invulnerability_secs: f32,
    /// Distance the player is shoved out of an obstacle per overlapping frame
    pub pushback: f32,
    pub collectible_value: u32,
    pub speed_buff_secs: f32,
    pub double_buff_secs: f32,
    /// Target speed range (t-units per second)
    pub target_speed_min: f32,
    pub target_speed_max: f32,
    /// Added to the player radius to decide a catch
    pub capture_radius: f32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            total_time: 120,
            starting_lives: 5,
            base_speed: 200.0,
            speed_boost: 1.8,
            invulnerability_secs: 0.7,
            pushback: 6.0,
            collectible_value: 5,
            speed_buff_secs: 6.0,
            double_buff_secs: 8.0,
            target_speed_min: 0.12,
            target_speed_max: 0.45,
            capture_radius: 14.0,
        }
    }
}

/// Audio preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Ambient loop volume (0.0 - 1.0)
    pub music_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.3,
            muted: false,
        }
    }
}

impl AudioSettings {
    /// Effective one-shot volume (0 when muted)
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Effective ambient loop volume (0 when muted)
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.music_volume).clamp(0.0, 1.0)
        }
    }
}

/// Top-level settings document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub rules: Rules,
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("invalid settings JSON")?;
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::load(path) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("{:#}; using default settings", err);
                    Self::default()
                }
            },
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "rules": { "total_time": 30 }, "audio": { "muted": true } }"#)
                .unwrap();
        assert_eq!(settings.rules.total_time, 30);
        assert_eq!(settings.rules.starting_lives, 5);
        assert!(settings.audio.muted);
        assert_eq!(settings.audio.effective_sfx_volume(), 0.0);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ nope").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default(Some(Path::new("/nonexistent/settings.json")));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_volume_mix() {
        let audio = AudioSettings::default();
        assert!((audio.effective_sfx_volume() - 0.8).abs() < 1e-6);
        assert!((audio.effective_music_volume() - 0.24).abs() < 1e-6);
    }
}
