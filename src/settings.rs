//! Runtime configuration for the scene.
//!
//! Defaults come from [`crate::constants`]. A JSON document may override any
//! subset of the fields; see [`SceneSettings::from_json_str`].
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bevy::prelude::Resource;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::region::{PlayableRegion, RegionError};
use crate::{
    ENEMY_PAUSE_SECONDS, ENEMY_SIZE, ENEMY_STEP_SECONDS, MAX_ASPECT_RATIO, SCENE_HEIGHT,
    SCENE_WIDTH, ZOMBIE_MOVE_POINTS_PER_SEC, ZOMBIE_ROTATE_RADIANS_PER_SEC, ZOMBIE_SIZE,
    ZOMBIE_START,
};

/// Errors raised while loading or validating [`SceneSettings`].
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings from {}: {source}", .path.display())]
    Read {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// The settings document is not valid JSON for [`SceneSettings`].
    #[error("invalid settings document: {0}")]
    Parse(#[from] serde_json::Error),
    /// A numeric field must be finite and strictly positive.
    #[error("{field} must be finite and positive, got {value}")]
    NotPositive {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was rejected.
        value: f32,
    },
    /// A numeric field must be finite and not negative.
    #[error("{field} must be finite and not negative, got {value}")]
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// Value that was rejected.
        value: f32,
    },
    /// The scene geometry does not yield a playable region.
    #[error(transparent)]
    Region(#[from] RegionError),
}

/// Tunable parameters of the scene.
///
/// # Examples
///
/// ```
/// use zombie_conga::SceneSettings;
/// let settings = SceneSettings::from_json_str(r#"{ "zombie_speed": 240.0 }"#).unwrap();
/// assert_eq!(settings.zombie_speed, 240.0);
/// assert_eq!(settings.scene_width, 2048.0);
/// ```
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneSettings {
    /// Scene width in scene units.
    pub scene_width: f32,
    /// Scene height in scene units.
    pub scene_height: f32,
    /// Widest display aspect ratio the playable region must stay visible on.
    pub max_aspect_ratio: f32,
    /// Zombie speed in scene units per second.
    pub zombie_speed: f32,
    /// Zombie turn rate in radians per second.
    pub zombie_turn_rate: f32,
    /// Zombie spawn point.
    pub zombie_start: [f32; 2],
    /// Zombie sprite size.
    pub zombie_size: [f32; 2],
    /// Enemy sprite size.
    pub enemy_size: [f32; 2],
    /// Seconds per leg of the enemy path.
    pub enemy_step_seconds: f32,
    /// Seconds the enemy waits at the bottom of its path.
    pub enemy_pause_seconds: f32,
    /// Outline the playable region.
    pub debug_draw: bool,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            scene_width: SCENE_WIDTH,
            scene_height: SCENE_HEIGHT,
            max_aspect_ratio: MAX_ASPECT_RATIO,
            zombie_speed: ZOMBIE_MOVE_POINTS_PER_SEC,
            zombie_turn_rate: ZOMBIE_ROTATE_RADIANS_PER_SEC,
            zombie_start: ZOMBIE_START,
            zombie_size: ZOMBIE_SIZE,
            enemy_size: ENEMY_SIZE,
            enemy_step_seconds: ENEMY_STEP_SECONDS,
            enemy_pause_seconds: ENEMY_PAUSE_SECONDS,
            debug_draw: true,
        }
    }
}

impl SceneSettings {
    /// Parses settings from JSON, filling absent fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Parse`] for malformed JSON or unknown fields.
    /// The result is not validated; call [`SceneSettings::validate`].
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and validates settings from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] when the file cannot be read, and any
    /// error from [`SceneSettings::from_json_str`] or
    /// [`SceneSettings::validate`].
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks every field and returns the playable region they describe.
    ///
    /// # Errors
    ///
    /// Returns the first field that is out of range, or a
    /// [`SettingsError::Region`] when the scene geometry is degenerate.
    pub fn validate(&self) -> Result<PlayableRegion, SettingsError> {
        positive("zombie_speed", self.zombie_speed)?;
        positive("zombie_turn_rate", self.zombie_turn_rate)?;
        positive("enemy_step_seconds", self.enemy_step_seconds)?;
        not_negative("enemy_pause_seconds", self.enemy_pause_seconds)?;
        for (field, [w, h]) in [
            ("zombie_size", self.zombie_size),
            ("enemy_size", self.enemy_size),
        ] {
            positive(field, w)?;
            positive(field, h)?;
        }
        let [x, y] = self.zombie_start;
        not_negative("zombie_start", x)?;
        not_negative("zombie_start", y)?;
        Ok(self.playable_region()?)
    }

    /// Scene width and height.
    #[must_use]
    pub const fn scene_size(&self) -> Vec2 {
        Vec2::new(self.scene_width, self.scene_height)
    }

    /// Zombie spawn point.
    #[must_use]
    pub const fn zombie_start(&self) -> Vec2 {
        Vec2::new(self.zombie_start[0], self.zombie_start[1])
    }

    /// Zombie sprite size.
    #[must_use]
    pub const fn zombie_size(&self) -> Vec2 {
        Vec2::new(self.zombie_size[0], self.zombie_size[1])
    }

    /// Enemy sprite size.
    #[must_use]
    pub const fn enemy_size(&self) -> Vec2 {
        Vec2::new(self.enemy_size[0], self.enemy_size[1])
    }

    /// Playable region derived from the scene size and aspect ratio.
    ///
    /// # Errors
    ///
    /// See [`PlayableRegion::for_scene`].
    pub fn playable_region(&self) -> Result<PlayableRegion, RegionError> {
        PlayableRegion::for_scene(self.scene_size(), self.max_aspect_ratio)
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NotPositive { field, value })
    }
}

fn not_negative(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(SettingsError::Negative { field, value })
    }
}
