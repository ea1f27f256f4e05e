use bevy::prelude::*;

/// How a trauma event modifies a camera's trauma. Results are clamped to 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraumaChange {
    /// Replace the trauma value.
    Set(f32),
    /// Add to the current trauma (negative values subtract).
    Add(f32),
}

/// Event requesting a trauma change on a shaking camera.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct CameraTraumaEvent {
    /// Camera entity to affect. `None` affects every `CameraShake`.
    pub target: Option<Entity>,
    pub change: TraumaChange,
}

impl CameraTraumaEvent {
    pub fn set(target: Entity, value: f32) -> Self {
        Self { target: Some(target), change: TraumaChange::Set(value) }
    }

    pub fn add(target: Entity, amount: f32) -> Self {
        Self { target: Some(target), change: TraumaChange::Add(amount) }
    }

    pub fn set_all(value: f32) -> Self {
        Self { target: None, change: TraumaChange::Set(value) }
    }

    pub fn add_all(amount: f32) -> Self {
        Self { target: None, change: TraumaChange::Add(amount) }
    }
}
