// Camera-related components for the shake effect.

use bevy::prelude::*;

use crate::components::orientation::{EulerAngles, Orientation};
use crate::components::trauma::Trauma;
use crate::resources::ShakeConfig;
use crate::systems::camera::evaluate_shake;
use crate::utils::noise_field::NoiseField;

/// Component for camera shake effects.
///
/// Uses a "trauma" model: trauma is set or accumulated by gameplay, shake
/// intensity is trauma², and each tick rotates the camera away from its
/// current orientation by seeded smooth noise scaled by that intensity.
/// Attach it to an entity with a `Transform`; `CameraShakePlugin` ticks it
/// every frame. It can also be driven by hand through [`CameraShake::tick`].
#[derive(Component, Debug)]
pub struct CameraShake {
    pub(crate) config: ShakeConfig,
    pub(crate) trauma: Trauma,
    /// Camera orientation captured at the start of the last shaking tick.
    pub(crate) origin: EulerAngles,
    pub(crate) noise: NoiseField,
}

/// Marker for cameras whose `CameraShake` follows the `ShakeConfig` resource.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SharedShakeConfig;

impl Default for CameraShake {
    fn default() -> Self {
        Self::new(ShakeConfig::default(), 1.0)
    }
}

impl CameraShake {
    /// Creates a shake controller. `initial_trauma` is clamped to 0.0..=1.0.
    pub fn new(config: ShakeConfig, initial_trauma: f32) -> Self {
        let noise = NoiseField::from_config(&config);
        Self {
            config,
            trauma: Trauma::new(initial_trauma),
            origin: EulerAngles::ZERO,
            noise,
        }
    }

    pub fn config(&self) -> &ShakeConfig {
        &self.config
    }

    /// Current trauma, always in 0.0..=1.0.
    pub fn trauma(&self) -> f32 {
        self.trauma.get()
    }

    /// Sets trauma, clamping out-of-range values.
    pub fn set_trauma(&mut self, value: f32) {
        self.trauma.set(value);
    }

    /// Adds trauma, e.g. once per impact. Clamped like `set_trauma`.
    pub fn add_trauma(&mut self, amount: f32) {
        self.trauma.add(amount);
    }

    /// Returns the current shake intensity (trauma²).
    pub fn intensity(&self) -> f32 {
        self.trauma.intensity()
    }

    pub fn is_shaking(&self) -> bool {
        !self.trauma.is_zero()
    }

    /// Baseline orientation captured by the most recent shaking tick.
    pub fn origin(&self) -> EulerAngles {
        self.origin
    }

    /// Swaps in a new config. Only the axis samplers whose seed or noise
    /// basis changed are rebuilt, so the others keep their exact sequence.
    /// Trauma is left as is.
    pub fn reconfigure(&mut self, config: ShakeConfig) {
        let rebuilt = self.noise.reseed(&config);
        if !rebuilt.is_empty() {
            debug!("Camera shake re-seeded axes {:?}", rebuilt);
        }
        self.config = config;
    }

    /// Runs one frame of shake against `camera`.
    ///
    /// `elapsed_secs` is the monotonic time since start and `delta_secs` the
    /// time since the previous tick. With no camera bound, or no trauma,
    /// nothing happens.
    pub fn tick<O: Orientation + ?Sized>(
        &mut self,
        camera: Option<&mut O>,
        elapsed_secs: f64,
        delta_secs: f32,
    ) {
        let Some(camera) = camera else {
            return;
        };
        evaluate_shake(self, camera, elapsed_secs, delta_secs);
    }
}
