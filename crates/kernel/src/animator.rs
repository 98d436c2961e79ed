use glam::Vec3;
use touchform_common::TransformSink;
use touchform_input::Action;

use crate::config::AnimationConfig;
use crate::pinch::clamp_scale;
use crate::time::FrameTime;

/// Triangle wave: rises from 0 to `length` as `t` goes from 0 to `length`,
/// then falls back to 0 at `2 * length`, and repeats.
pub fn ping_pong(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let wrapped = t.rem_euclid(length * 2.0).clamp(0.0, length * 2.0);
    length - (wrapped - length).abs()
}

/// Auto-animation: spins at a fixed angular velocity and oscillates scale
/// around the scale captured when the animator was created.
///
/// Holds no state besides that initial scale; the result for a frame depends
/// only on its [`FrameTime`].
#[derive(Debug, Clone)]
pub struct Animator {
    config: AnimationConfig,
    initial_scale: Vec3,
}

impl Animator {
    pub fn new(config: AnimationConfig, initial_scale: Vec3) -> Self {
        Self {
            config,
            initial_scale,
        }
    }

    pub fn initial_scale(&self) -> Vec3 {
        self.initial_scale
    }

    /// Offset from the initial scale at `elapsed` seconds, in
    /// `[-scale_amount, scale_amount]`.
    pub fn scale_offset(&self, elapsed: f32) -> f32 {
        let amount = self.config.scale_amount;
        ping_pong(elapsed * self.config.scale_speed, amount * 2.0) - amount
    }

    /// Scale at `elapsed` seconds, before clamping.
    pub fn scale_at(&self, elapsed: f32) -> Vec3 {
        self.initial_scale + Vec3::splat(self.scale_offset(elapsed))
    }

    /// Run one frame of animation on `target`, returning what was applied.
    pub fn step<T: TransformSink + ?Sized>(
        &self,
        time: FrameTime,
        min_scale: f32,
        max_scale: f32,
        target: &mut T,
    ) -> [Action; 2] {
        let actions = [
            Action::RotateEuler {
                degrees: self.config.rotation_speed * time.delta,
                space: self.config.space,
            },
            Action::SetScale(clamp_scale(
                self.scale_at(time.elapsed),
                min_scale,
                max_scale,
            )),
        ];
        for action in &actions {
            action.apply_to(target);
        }
        actions
    }
}
