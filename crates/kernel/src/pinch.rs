//! Pinch math: separation velocity of two touches, applied as a scale step.

use glam::Vec3;
use touchform_input::{TouchPoint, TouchscreenState};

/// Change in distance between two touches over the last frame.
///
/// Positive when the touches moved apart. Previous positions are recovered
/// from each touch's per-frame delta.
pub fn separation_delta(a: &TouchPoint, b: &TouchPoint) -> f32 {
    let current = a.position.distance(b.position);
    let previous = a.previous_position().distance(b.previous_position());
    current - previous
}

/// Separation delta of the first two pressed touches, if there are two.
pub fn pinch_delta(screen: &TouchscreenState) -> Option<f32> {
    screen
        .pressed_pair()
        .map(|(a, b)| separation_delta(a, b))
}

/// Clamp each component to `[min, max]`.
pub fn clamp_scale(scale: Vec3, min: f32, max: f32) -> Vec3 {
    scale.clamp(Vec3::splat(min), Vec3::splat(max))
}

/// Add `amount` to every axis of `scale`, then clamp.
pub fn step_scale(scale: Vec3, amount: f32, min: f32, max: f32) -> Vec3 {
    clamp_scale(scale + Vec3::splat(amount), min, max)
}
