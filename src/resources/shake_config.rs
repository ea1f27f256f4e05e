//! Tuning parameters for the trauma-driven camera shake.
//!
//! Every field has a default, and deserialization fills in whatever a JSON
//! document leaves out, so a partial document works as a set of overrides.

use std::path::Path;

use bevy::prelude::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::noise_field::{Axis, NoiseBasis};

/// Errors raised while reading or writing a shake config.
#[derive(Debug, Error)]
pub enum ShakeConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shake configuration.
///
/// As a resource it is the shared config that cameras tagged with
/// `SharedShakeConfig` follow; any `CameraShake` may also carry its own copy.
/// Values are not validated: degenerate settings give degenerate motion.
#[derive(Resource, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    /// Enables automatic trauma falloff each tick.
    pub decay: bool,
    /// Trauma lost per second while decaying.
    pub decay_rate: f32,
    /// Peak yaw offset in radians at trauma 1.
    pub max_yaw: f32,
    /// Peak pitch offset in radians at trauma 1.
    pub max_pitch: f32,
    /// Peak roll offset in radians at trauma 1.
    pub max_roll: f32,
    /// Time scale for yaw noise sampling.
    pub yaw_frequency: f32,
    /// Time scale for pitch noise sampling.
    pub pitch_frequency: f32,
    /// Time scale for roll noise sampling.
    pub roll_frequency: f32,
    pub yaw_noise_seed: u32,
    pub pitch_noise_seed: u32,
    pub roll_noise_seed: u32,
    /// Blend between the baseline (0.0) and fully shaken (1.0) orientation.
    pub lerp_value: f32,
    /// Noise family the axis samplers are built from.
    pub noise_basis: NoiseBasis,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            decay: false,
            decay_rate: 0.65,
            max_yaw: 0.1,
            max_pitch: 0.1,
            max_roll: 0.1,
            yaw_frequency: 1.0,
            pitch_frequency: 1.0,
            roll_frequency: 1.0,
            yaw_noise_seed: 10,
            pitch_noise_seed: 20,
            roll_noise_seed: 30,
            lerp_value: 0.8,
            noise_basis: NoiseBasis::OpenSimplex,
        }
    }
}

impl ShakeConfig {
    pub fn seed_for(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Pitch => self.pitch_noise_seed,
            Axis::Yaw => self.yaw_noise_seed,
            Axis::Roll => self.roll_noise_seed,
        }
    }

    pub fn max_angle_for(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Pitch => self.max_pitch,
            Axis::Yaw => self.max_yaw,
            Axis::Roll => self.max_roll,
        }
    }

    pub fn frequency_for(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Pitch => self.pitch_frequency,
            Axis::Yaw => self.yaw_frequency,
            Axis::Roll => self.roll_frequency,
        }
    }

    /// Returns a copy with all three seeds drawn from `rng`.
    /// Useful to give several cameras shakes that don't move in lockstep.
    pub fn with_random_seeds(&self, rng: &mut impl Rng) -> Self {
        Self {
            yaw_noise_seed: rng.gen(),
            pitch_noise_seed: rng.gen(),
            roll_noise_seed: rng.gen(),
            ..self.clone()
        }
    }

    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ShakeConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ShakeConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ShakeConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Loads the config at `path`, or returns the default config if the file
    /// is missing or unreadable.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No shake config at {:?}, using defaults", path);
            return Self::default();
        }

        match Self::load_from_file(path) {
            Ok(config) => {
                info!("Loaded shake config from {:?}", path);
                config
            }
            Err(e) => {
                error!("Failed to load shake config {:?}: {}", path, e);
                Self::default()
            }
        }
    }
}
