// Euler-angle view of a camera's rotation.

use bevy::math::EulerRot;
use bevy::prelude::*;

/// Camera rotation as Euler angles in radians.
///
/// Quaternions decompose in YXZ order (yaw outermost), so yaw covers the full
/// circle and only pitch is limited to ±90°.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct EulerAngles {
    /// Rotation about X.
    pub pitch: f32,
    /// Rotation about Y.
    pub yaw: f32,
    /// Rotation about Z.
    pub roll: f32,
}

impl EulerAngles {
    pub const ZERO: Self = Self { pitch: 0.0, yaw: 0.0, roll: 0.0 };

    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn from_quat(rotation: Quat) -> Self {
        let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
        Self { pitch, yaw, roll }
    }

    pub fn to_quat(self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, self.roll)
    }
}

/// Anything the shake can read a baseline rotation from and write the
/// shaken rotation back into.
pub trait Orientation {
    fn euler(&self) -> EulerAngles;
    fn set_euler(&mut self, angles: EulerAngles);
}

impl Orientation for EulerAngles {
    fn euler(&self) -> EulerAngles {
        *self
    }

    fn set_euler(&mut self, angles: EulerAngles) {
        *self = angles;
    }
}

/// Only the rotation is touched; translation and scale are left alone.
impl Orientation for Transform {
    fn euler(&self) -> EulerAngles {
        EulerAngles::from_quat(self.rotation)
    }

    fn set_euler(&mut self, angles: EulerAngles) {
        self.rotation = angles.to_quat();
    }
}
