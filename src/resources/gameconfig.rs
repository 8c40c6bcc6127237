//! Game configuration resource.
//!
//! Tuning constants for one session, loaded from an INI configuration file
//! with safe defaults matching the reference balance. Validated once at
//! session start; an invalid configuration aborts session creation.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! width = 10.0
//! height = 300.0
//! view_height = 15.0
//! gravity = -12.0
//!
//! [player]
//! jump_velocity = 11.0
//! move_velocity = 20.0
//! lives = 1
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;
use thiserror::Error;

/// Default safe values for startup
const DEFAULT_WORLD_WIDTH: f32 = 10.0;
const DEFAULT_WORLD_HEIGHT: f32 = 300.0;
const DEFAULT_VIEW_HEIGHT: f32 = 15.0;
const DEFAULT_GRAVITY: f32 = -12.0;
const DEFAULT_JUMP_VELOCITY: f32 = 11.0;
const DEFAULT_MOVE_VELOCITY: f32 = 20.0;
const DEFAULT_LIVES: u32 = 1;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Configuration faults detected before a session starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load config file: {0}")]
    Load(String),
    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f32 },
    #[error("gravity must point downwards (got {0})")]
    GravityNotDownward(f32),
    #[error("at least one life is required")]
    NoLives,
}

/// Per-session tuning constants.
///
/// World extents, gravity, and player velocities; everything the level
/// generator and the simulation systems need beyond per-kind body sizes
/// (which live on the kind tag components).
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Playable horizontal extent in world units.
    pub world_width: f32,
    /// Total level height in world units.
    pub world_height: f32,
    /// Vertical extent of one screen; also the collision neighborhood.
    pub view_height: f32,
    /// Downward acceleration in world units per second squared (negative).
    pub gravity: f32,
    /// Vertical velocity applied when the player bounces off a platform.
    pub jump_velocity: f32,
    /// Horizontal speed applied while a movement signal is active.
    pub move_velocity: f32,
    /// Hazard contacts the player survives before the session ends.
    pub lives: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with the default balance.
    pub fn new() -> Self {
        Self {
            world_width: DEFAULT_WORLD_WIDTH,
            world_height: DEFAULT_WORLD_HEIGHT,
            view_height: DEFAULT_VIEW_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            jump_velocity: DEFAULT_JUMP_VELOCITY,
            move_velocity: DEFAULT_MOVE_VELOCITY,
            lives: DEFAULT_LIVES,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), ConfigError> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(ConfigError::Load)?;

        // [world] section
        if let Some(width) = config.getfloat("world", "width").ok().flatten() {
            self.world_width = width as f32;
        }
        if let Some(height) = config.getfloat("world", "height").ok().flatten() {
            self.world_height = height as f32;
        }
        if let Some(view) = config.getfloat("world", "view_height").ok().flatten() {
            self.view_height = view as f32;
        }
        if let Some(gravity) = config.getfloat("world", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }

        // [player] section
        if let Some(jump) = config.getfloat("player", "jump_velocity").ok().flatten() {
            self.jump_velocity = jump as f32;
        }
        if let Some(speed) = config.getfloat("player", "move_velocity").ok().flatten() {
            self.move_velocity = speed as f32;
        }
        if let Some(lives) = config.getuint("player", "lives").ok().flatten() {
            self.lives = lives as u32;
        }

        info!(
            "Loaded config: {}x{} world, view {}, gravity {}, jump {}, move {}, lives {}",
            self.world_width,
            self.world_height,
            self.view_height,
            self.gravity,
            self.jump_velocity,
            self.move_velocity,
            self.lives
        );

        Ok(())
    }

    /// Check that the constants describe a playable world.
    ///
    /// Called once at session start; generation and the per-tick systems
    /// assume a validated configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positives = [
            ("world width", self.world_width),
            ("world height", self.world_height),
            ("view height", self.view_height),
            ("jump velocity", self.jump_velocity),
            ("move velocity", self.move_velocity),
        ];
        for (name, value) in positives {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if self.gravity >= 0.0 {
            return Err(ConfigError::GravityNotDownward(self.gravity));
        }
        if self.lives == 0 {
            return Err(ConfigError::NoLives);
        }
        Ok(())
    }

    /// Maximum height a single jump at full jump velocity can reach.
    ///
    /// `v^2 / (2 * |g|)`; the generator keeps every platform gap below this
    /// so each platform is reachable from the one beneath it.
    pub fn max_jump_height(&self) -> f32 {
        self.jump_velocity * self.jump_velocity / (2.0 * -self.gravity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GameConfig::new().validate().is_ok());
    }

    #[test]
    fn negative_jump_velocity_is_rejected() {
        let mut config = GameConfig::new();
        config.jump_velocity = -11.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { name: "jump velocity", .. })
        ));
    }

    #[test]
    fn upward_gravity_is_rejected() {
        let mut config = GameConfig::new();
        config.gravity = 12.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GravityNotDownward(_))
        ));
    }

    #[test]
    fn zero_lives_is_rejected() {
        let mut config = GameConfig::new();
        config.lives = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoLives)));
    }

    #[test]
    fn max_jump_height_matches_formula() {
        let config = GameConfig::new();
        let expected = 11.0_f32 * 11.0 / 24.0;
        assert!((config.max_jump_height() - expected).abs() < 1e-6);
    }
}
