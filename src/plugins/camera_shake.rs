use bevy::prelude::*;

use crate::components::orientation::EulerAngles;
use crate::components::trauma::Trauma;
use crate::events::CameraTraumaEvent;
use crate::resources::ShakeConfig;
use crate::systems::camera::{apply_trauma_events, camera_shake_system, sync_shared_shake_config};
use crate::utils::noise_field::NoiseBasis;

/// System set containing the shake systems, for ordering against camera
/// movement (run your camera controller `.before(CameraShakeSet)`).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct CameraShakeSet;

/// Plugin that drives every `CameraShake` once per frame.
///
/// Order within a frame: shared config sync, trauma events, then the shake
/// itself, so trauma set this frame is visible in this frame's shake.
/// A `ShakeConfig` resource inserted before the plugin is kept.
pub struct CameraShakePlugin;

impl Plugin for CameraShakePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ShakeConfig>()
            .register_type::<ShakeConfig>()
            .register_type::<NoiseBasis>()
            .register_type::<Trauma>()
            .register_type::<EulerAngles>()
            .add_event::<CameraTraumaEvent>()
            .add_systems(
                Update,
                (sync_shared_shake_config, apply_trauma_events, camera_shake_system)
                    .chain()
                    .in_set(CameraShakeSet),
            );
    }
}
