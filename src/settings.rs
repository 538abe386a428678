//! Game settings and tuning
//!
//! Loaded from JSON; every field falls back to the values in [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed settings JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid setting `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Tunable parameters for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Trails ===
    /// Stroke width; collision radius is `line_width * collision_factor`
    pub line_width: f32,
    pub collision_factor: f32,
    /// Decimation distance for trail points
    pub min_trail_dist: f32,
    pub player_trail_length: usize,
    pub bot_trail_length: usize,
    /// Newest points ignored by self-collision tests
    pub self_collision_ignore: usize,

    // === Speed ramp ===
    pub base_speed: f32,
    pub speed_step: f32,
    pub speed_interval_ms: f32,

    // === Bot ===
    pub bot_spawn_margin: f32,
    pub bot_min_spawn_dist: f32,
    pub respawn_max_attempts: u32,
    pub bot_out_of_bounds_bonus: u64,
    pub bot_trail_hit_bonus: u64,

    /// RNG seed for bot respawns (None = pick one at startup)
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            line_width: LINE_WIDTH,
            collision_factor: COLLISION_FACTOR,
            min_trail_dist: MIN_TRAIL_DIST,
            player_trail_length: MAX_TRAIL_LENGTH,
            bot_trail_length: MAX_TRAIL_LENGTH,
            self_collision_ignore: SELF_COLLISION_IGNORE,

            base_speed: BASE_SPEED,
            speed_step: SPEED_STEP,
            speed_interval_ms: SPEED_INTERVAL_MS,

            bot_spawn_margin: BOT_SPAWN_MARGIN,
            bot_min_spawn_dist: BOT_MIN_SPAWN_DIST,
            respawn_max_attempts: RESPAWN_MAX_ATTEMPTS,
            bot_out_of_bounds_bonus: BOT_OUT_OF_BOUNDS_BONUS,
            bot_trail_hit_bonus: BOT_TRAIL_HIT_BONUS,

            seed: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.as_ref().display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }

    /// Collision radius derived from the line width
    pub fn collision_threshold(&self) -> f32 {
        crate::sim::collision_threshold(self.line_width, self.collision_factor)
    }

    /// Player spawn point (arena centre)
    pub fn player_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.arena_width / 2.0, self.arena_height / 2.0)
    }

    /// Check that the values describe a playable arena
    pub fn validate(&self) -> Result<(), SettingsError> {
        fn invalid(field: &'static str, reason: &'static str) -> Result<(), SettingsError> {
            Err(SettingsError::Invalid { field, reason })
        }

        if !(self.arena_width > 0.0) {
            return invalid("arena_width", "must be positive");
        }
        if !(self.arena_height > 0.0) {
            return invalid("arena_height", "must be positive");
        }
        if !(self.line_width > 0.0) || !(self.collision_factor > 0.0) {
            return invalid("line_width", "collision radius must be positive");
        }
        if !(self.min_trail_dist >= 0.0) {
            return invalid("min_trail_dist", "must not be negative");
        }
        if self.player_trail_length == 0 {
            return invalid("player_trail_length", "must be at least 1");
        }
        if self.bot_trail_length == 0 {
            return invalid("bot_trail_length", "must be at least 1");
        }
        if !(self.base_speed >= 0.0) || !(self.speed_step >= 0.0) {
            return invalid("base_speed", "speeds must not be negative");
        }
        if !(self.speed_interval_ms > 0.0) {
            return invalid("speed_interval_ms", "must be positive");
        }
        if !(self.bot_spawn_margin >= 0.0)
            || self.bot_spawn_margin * 2.0 > self.arena_width
            || self.bot_spawn_margin * 2.0 > self.arena_height
        {
            return invalid("bot_spawn_margin", "spawn region does not fit the arena");
        }
        if self.respawn_max_attempts == 0 {
            return invalid("respawn_max_attempts", "must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.player_spawn(), glam::Vec2::new(400.0, 300.0));
        assert!((settings.collision_threshold() - 6.4).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "arena_width": 1024.0, "seed": 7 }"#).unwrap();
        assert_eq!(settings.arena_width, 1024.0);
        assert_eq!(settings.arena_height, ARENA_HEIGHT);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.bot_trail_hit_bonus, 1000);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = Settings::from_json(r#"{ "arena_width": 80.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "bot_spawn_margin",
                ..
            }
        ));

        let err = Settings::from_json(r#"{ "player_trail_length": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { .. }));

        assert!(matches!(
            Settings::from_json("{ not json"),
            Err(SettingsError::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("lightcycle-settings-{}.json", std::process::id()));
        let settings = Settings {
            base_speed: 250.0,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, settings);
    }
}
