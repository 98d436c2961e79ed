use glam::Vec3;
use serde::{Deserialize, Serialize};
use touchform_common::{Space, TransformSink};

/// One change a frame of gesture handling made to its transform.
///
/// The interpreter applies actions as it produces them and returns them so
/// callers can log, replay, or assert on what happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Rotate about a single axis.
    Rotate {
        axis: Vec3,
        degrees: f32,
        space: Space,
    },
    /// Rotate by per-axis Euler degrees (z, then x, then y).
    RotateEuler { degrees: Vec3, space: Space },
    /// Replace the scale with an already clamped value.
    SetScale(Vec3),
    /// Auto-animation switched on or off.
    AnimationToggled(bool),
}

impl Action {
    /// Apply this action to a transform. `AnimationToggled` has no transform effect.
    pub fn apply_to<T: TransformSink + ?Sized>(&self, target: &mut T) {
        match *self {
            Self::Rotate {
                axis,
                degrees,
                space,
            } => target.rotate_degrees(axis, degrees, space),
            Self::RotateEuler { degrees, space } => target.rotate_euler_degrees(degrees, space),
            Self::SetScale(scale) => target.set_scale(scale),
            Self::AnimationToggled(_) => {}
        }
    }

    /// Degrees of a single-axis rotation, if this is one.
    pub fn rotation_degrees(&self) -> Option<f32> {
        match self {
            Self::Rotate { degrees, .. } => Some(*degrees),
            _ => None,
        }
    }
}
