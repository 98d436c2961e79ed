use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Reference frame for a rotation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Space {
    /// Rotate about a fixed world axis (pre-multiplied).
    #[default]
    World,
    /// Rotate about the object's own axis (post-multiplied).
    Local,
}

/// Spatial transform: position, rotation, scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// A transform at the origin with the given uniform scale.
    pub fn with_uniform_scale(scale: f32) -> Self {
        Self {
            scale: Vec3::splat(scale),
            ..Self::default()
        }
    }

    /// Orientation as Euler angles in degrees, `(x, y, z)`, using the same
    /// z-x-y convention as [`TransformSink::rotate_euler_degrees`].
    pub fn euler_degrees(&self) -> Vec3 {
        let (y, x, z) = self.rotation.to_euler(EulerRot::YXZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }

    fn compose(&mut self, q: Quat, space: Space) {
        self.rotation = match space {
            Space::World => q * self.rotation,
            Space::Local => self.rotation * q,
        }
        .normalize();
    }
}

/// The writable side of an object's transform, as seen by input handling.
///
/// Implementations must apply every call immediately: a `scale()` read after
/// `set_scale()` in the same frame returns the new value.
pub trait TransformSink {
    /// Rotate by `degrees` about `axis` in the given space.
    fn rotate_degrees(&mut self, axis: Vec3, degrees: f32, space: Space);

    /// Rotate by Euler angles in degrees: z first, then x, then y.
    fn rotate_euler_degrees(&mut self, euler: Vec3, space: Space);

    fn scale(&self) -> Vec3;

    fn set_scale(&mut self, scale: Vec3);
}

impl TransformSink for Transform {
    fn rotate_degrees(&mut self, axis: Vec3, degrees: f32, space: Space) {
        let Some(axis) = axis.try_normalize() else {
            return;
        };
        self.compose(Quat::from_axis_angle(axis, degrees.to_radians()), space);
    }

    fn rotate_euler_degrees(&mut self, euler: Vec3, space: Space) {
        let q = Quat::from_euler(
            EulerRot::YXZ,
            euler.y.to_radians(),
            euler.x.to_radians(),
            euler.z.to_radians(),
        );
        self.compose(q, space);
    }

    fn scale(&self) -> Vec3 {
        self.scale
    }

    fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}
