//! Trauma-driven procedural camera shake for Bevy.
//!
//! Gameplay sets or adds "trauma" (0.0 to 1.0) on a camera's [`CameraShake`].
//! Each frame the camera is rotated away from its current orientation by
//! seeded smooth noise on pitch, yaw and roll, scaled by trauma², and
//! optionally the trauma decays back to zero.
//!
//! ```ignore
//! app.add_plugins(CameraShakePlugin);
//! commands.spawn((Camera3d::default(), Transform::default(), CameraShake::new(ShakeConfig::default(), 0.0)));
//! // on impact:
//! trauma_events.send(CameraTraumaEvent::add(camera, 0.5));
//! ```
//!
//! Without Bevy scheduling, call [`CameraShake::tick`] with any
//! [`Orientation`] once per frame.

pub mod components;
pub mod events;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{CameraShake, EulerAngles, Orientation, SharedShakeConfig, Trauma};
pub use events::{CameraTraumaEvent, TraumaChange};
pub use plugins::{CameraShakePlugin, CameraShakeSet};
pub use resources::{ShakeConfig, ShakeConfigError};
pub use utils::noise_field::{Axis, AxisNoise, NoiseBasis, NoiseField};
