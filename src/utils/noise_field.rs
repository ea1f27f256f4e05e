//! Seeded smooth-noise samplers driving the per-axis shake.
//!
//! Each rotation axis owns an independent 2D generator from the `noise`
//! crate. Samples are taken along `(t, AUX_COORDINATE)`, i.e. a 1D curve
//! through 2D noise, which avoids the visible periodicity of plain 1D noise
//! at low frequencies.

use std::fmt;

use bevy::prelude::*;
use noise::{NoiseFn, OpenSimplex, Perlin, SuperSimplex};
use serde::{Deserialize, Serialize};

use crate::resources::ShakeConfig;

/// Fixed second coordinate for every sample.
pub const AUX_COORDINATE: f64 = 1.0;

/// Gradient noise family used to build the axis samplers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseBasis {
    #[default]
    OpenSimplex,
    SuperSimplex,
    Perlin,
}

/// One of the three rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Pitch,
    Yaw,
    Roll,
}

impl Axis {
    pub fn all() -> &'static [Axis] {
        &[Axis::Pitch, Axis::Yaw, Axis::Roll]
    }
}

/// A single seeded sampler.
///
/// The generator is stateless: the same basis, seed and input always
/// produce the same value, and rebuilding with the same seed reproduces
/// the sequence.
pub struct AxisNoise {
    basis: NoiseBasis,
    seed: u32,
    sampler: Box<dyn NoiseFn<f64, 2> + Send + Sync>,
}

impl AxisNoise {
    pub fn new(basis: NoiseBasis, seed: u32) -> Self {
        let sampler: Box<dyn NoiseFn<f64, 2> + Send + Sync> = match basis {
            NoiseBasis::OpenSimplex => Box::new(OpenSimplex::new(seed)),
            NoiseBasis::SuperSimplex => Box::new(SuperSimplex::new(seed)),
            NoiseBasis::Perlin => Box::new(Perlin::new(seed)),
        };
        Self { basis, seed, sampler }
    }

    pub fn basis(&self) -> NoiseBasis {
        self.basis
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Returns true if this sampler was built from the given identity.
    pub fn matches(&self, basis: NoiseBasis, seed: u32) -> bool {
        self.basis == basis && self.seed == seed
    }

    /// Samples the noise curve at time coordinate `t` (roughly -1.0 to 1.0).
    pub fn sample(&self, t: f64) -> f64 {
        self.sampler.get([t, AUX_COORDINATE])
    }
}

impl fmt::Debug for AxisNoise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisNoise")
            .field("basis", &self.basis)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// The three independently seeded samplers, one per axis.
#[derive(Debug)]
pub struct NoiseField {
    pub pitch: AxisNoise,
    pub yaw: AxisNoise,
    pub roll: AxisNoise,
}

impl NoiseField {
    pub fn from_config(config: &ShakeConfig) -> Self {
        Self {
            pitch: AxisNoise::new(config.noise_basis, config.pitch_noise_seed),
            yaw: AxisNoise::new(config.noise_basis, config.yaw_noise_seed),
            roll: AxisNoise::new(config.noise_basis, config.roll_noise_seed),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisNoise {
        match axis {
            Axis::Pitch => &self.pitch,
            Axis::Yaw => &self.yaw,
            Axis::Roll => &self.roll,
        }
    }

    /// Replaces the samplers whose seed or basis differ from `config`.
    /// Untouched axes keep their existing generator.
    ///
    /// Returns the axes that were rebuilt.
    pub fn reseed(&mut self, config: &ShakeConfig) -> Vec<Axis> {
        let mut rebuilt = Vec::new();
        for &axis in Axis::all() {
            let seed = config.seed_for(axis);
            let slot = match axis {
                Axis::Pitch => &mut self.pitch,
                Axis::Yaw => &mut self.yaw,
                Axis::Roll => &mut self.roll,
            };
            if !slot.matches(config.noise_basis, seed) {
                *slot = AxisNoise::new(config.noise_basis, seed);
                rebuilt.push(axis);
            }
        }
        rebuilt
    }
}
