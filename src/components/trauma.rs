// Trauma scalar backing the camera shake.

use bevy::prelude::*;

/// Shake "trauma" in the range 0.0 to 1.0.
///
/// Every mutation clamps, so the value is always in range. Out-of-range
/// input is corrected, never rejected. NaN is treated as 0.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct Trauma(f32);

impl Trauma {
    pub fn new(value: f32) -> Self {
        let mut trauma = Self(0.0);
        trauma.set(value);
        trauma
    }

    pub fn get(&self) -> f32 {
        self.0
    }

    pub fn set(&mut self, value: f32) {
        self.0 = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
    }

    /// Adds `amount` (which may be negative) and clamps.
    pub fn add(&mut self, amount: f32) {
        self.set(self.0 + amount);
    }

    /// Removes `rate * delta_seconds` of trauma and clamps.
    pub fn decay(&mut self, delta_seconds: f32, rate: f32) {
        self.set(self.0 - rate * delta_seconds);
    }

    /// Shake intensity, trauma squared, so shakes settle instead of cutting off.
    pub fn intensity(&self) -> f32 {
        self.0 * self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 <= 0.0
    }
}
