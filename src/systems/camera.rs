// Camera-related systems for the shake effect.

use bevy::prelude::*;

use crate::components::camera::{CameraShake, SharedShakeConfig};
use crate::components::orientation::{EulerAngles, Orientation};
use crate::events::{CameraTraumaEvent, TraumaChange};
use crate::resources::ShakeConfig;
use crate::utils::math::lerp;
use crate::utils::noise_field::{Axis, NoiseField};

/// Computes one frame of shake and writes it into `camera`.
///
/// The order matters:
/// 1. The current camera orientation becomes the origin. It is re-captured
///    every tick, so the shake composes with whatever else moved the camera.
/// 2. Intensity is trauma², taken before any decay.
/// 3. Each axis targets `max * intensity * noise(elapsed * frequency, 1) + origin`.
/// 4. Trauma decays if enabled; the new value only affects the next tick.
/// 5. The camera gets `lerp(origin, target, lerp_value)` per axis.
///
/// No trauma means no work and no write. A blend that lands on the origin
/// (e.g. `lerp_value` 0) doesn't write either.
pub fn evaluate_shake<O: Orientation + ?Sized>(
    shake: &mut CameraShake,
    camera: &mut O,
    elapsed_secs: f64,
    delta_secs: f32,
) {
    if shake.trauma.is_zero() {
        return;
    }

    let origin = camera.euler();
    shake.origin = origin;

    let intensity = shake.trauma.intensity();
    let config = &shake.config;
    let noise = &shake.noise;
    let target = EulerAngles {
        pitch: axis_offset(config, noise, Axis::Pitch, intensity, elapsed_secs) + origin.pitch,
        yaw: axis_offset(config, noise, Axis::Yaw, intensity, elapsed_secs) + origin.yaw,
        roll: axis_offset(config, noise, Axis::Roll, intensity, elapsed_secs) + origin.roll,
    };

    if config.decay {
        shake.trauma.decay(delta_secs, config.decay_rate);
        if shake.trauma.is_zero() {
            debug!("Camera shake settled");
        }
    }

    let t = config.lerp_value;
    let blended = EulerAngles {
        pitch: lerp(origin.pitch, target.pitch, t),
        yaw: lerp(origin.yaw, target.yaw, t),
        roll: lerp(origin.roll, target.roll, t),
    };
    // Rewriting an unchanged rotation through a quaternion drifts it by ulps.
    if blended != origin {
        camera.set_euler(blended);
    }
}

/// Noise-driven angular offset for one axis, before the origin is added.
fn axis_offset(
    config: &ShakeConfig,
    noise: &NoiseField,
    axis: Axis,
    intensity: f32,
    elapsed_secs: f64,
) -> f32 {
    let t = elapsed_secs * config.frequency_for(axis) as f64;
    config.max_angle_for(axis) * intensity * noise.axis(axis).sample(t) as f32
}

/// System that applies camera shake to every shaking camera.
/// A `Transform` is only marked changed when its rotation actually moves.
pub fn camera_shake_system(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut CameraShake)>,
) {
    let elapsed = time.elapsed_secs_f64();
    let delta = time.delta_secs();

    for (mut transform, mut shake) in &mut query {
        if !shake.is_shaking() {
            continue;
        }
        let mut shaken = *transform;
        shake.tick(Some(&mut shaken), elapsed, delta);
        transform.set_if_neq(shaken);
    }
}

/// System that applies trauma events to their target camera, or to every
/// camera with a `CameraShake` when no target is given.
pub fn apply_trauma_events(
    mut events: EventReader<CameraTraumaEvent>,
    mut query: Query<&mut CameraShake>,
) {
    for event in events.read() {
        match event.target {
            Some(entity) => match query.get_mut(entity) {
                Ok(mut shake) => apply_change(&mut shake, event.change),
                Err(_) => warn!("Trauma event for {:?}, which has no CameraShake", entity),
            },
            None => {
                for mut shake in &mut query {
                    apply_change(&mut shake, event.change);
                }
            }
        }
    }
}

fn apply_change(shake: &mut CameraShake, change: TraumaChange) {
    match change {
        TraumaChange::Set(value) => shake.set_trauma(value),
        TraumaChange::Add(amount) => shake.add_trauma(amount),
    }
    debug!("Camera trauma now {:.2} after {:?}", shake.trauma(), change);
}

/// System that pushes the `ShakeConfig` resource into cameras tagged with
/// `SharedShakeConfig`, when the resource changes or the tag is new.
pub fn sync_shared_shake_config(
    config: Res<ShakeConfig>,
    mut query: Query<(&mut CameraShake, Ref<SharedShakeConfig>)>,
) {
    let resource_changed = config.is_changed();
    for (mut shake, marker) in &mut query {
        if !resource_changed && !marker.is_added() {
            continue;
        }
        if shake.config() != &*config {
            shake.reconfigure((*config).clone());
        }
    }
}
