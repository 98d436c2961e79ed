use glam::Vec2;
use serde::{Deserialize, Serialize};
use touchform_common::TransformSink;
use touchform_input::{Action, InputSnapshot, PointerState, TouchPhase, TouchscreenState};

use crate::animator::Animator;
use crate::config::{AnimationTrigger, GestureConfig};
use crate::pinch::{pinch_delta, step_scale};
use crate::time::FrameTime;

/// Per-object gesture state carried between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GestureState {
    /// Last position seen during a single-touch drag.
    pub drag_origin: Vec2,
    pub is_dragging: bool,
    pub is_animating: bool,
}

/// Which behavior handled a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureMode {
    #[default]
    Idle,
    Dragging,
    Pinching,
    Animating,
    Pointer,
}

impl std::fmt::Display for GestureMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Dragging => "dragging",
            Self::Pinching => "pinching",
            Self::Animating => "animating",
            Self::Pointer => "pointer",
        };
        f.write_str(name)
    }
}

/// Outcome of one [`GestureInterpreter::advance`] call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameReport {
    pub mode: GestureMode,
    pub active_touches: usize,
    /// Every change applied to the transform, in order.
    pub actions: Vec<Action>,
}

impl FrameReport {
    /// Sum of single-axis rotation degrees applied this frame.
    pub fn rotation_degrees(&self) -> f32 {
        self.actions.iter().filter_map(Action::rotation_degrees).sum()
    }

    /// The last scale written this frame, if any.
    pub fn final_scale(&self) -> Option<glam::Vec3> {
        self.actions.iter().rev().find_map(|a| match a {
            Action::SetScale(s) => Some(*s),
            _ => None,
        })
    }
}

/// Turns per-frame input snapshots into rotation and scaling of one transform.
///
/// The interpreter owns the gesture state for a single object. Each call to
/// [`advance`](Self::advance) reads the snapshot, picks exactly one behavior
/// from the number of pressed touches, and writes through the
/// [`TransformSink`]. Missing devices and incomplete gestures are no-ops.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    config: GestureConfig,
    state: GestureState,
    animator: Animator,
}

impl GestureInterpreter {
    /// Create an interpreter for an object whose current scale becomes the
    /// animation's resting scale.
    pub fn new<T: TransformSink + ?Sized>(config: GestureConfig, target: &T) -> Self {
        Self {
            config,
            state: GestureState::default(),
            animator: Animator::new(config.animation, target.scale()),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Drop any in-progress drag and stop animation.
    pub fn reset(&mut self) {
        self.state = GestureState::default();
    }

    /// Advance one frame.
    pub fn advance<T: TransformSink + ?Sized>(
        &mut self,
        input: &InputSnapshot,
        time: FrameTime,
        target: &mut T,
    ) -> FrameReport {
        let _span = tracing::trace_span!("gesture_advance", elapsed = time.elapsed).entered();
        let previous = self.state;
        let mut report = FrameReport {
            active_touches: input.active_touches(),
            ..FrameReport::default()
        };

        if self.config.animation.trigger == AnimationTrigger::Tap && input.tapped_this_frame() {
            self.state.is_animating = !self.state.is_animating;
            self.state.is_dragging = false;
            tracing::info!(animating = self.state.is_animating, "animation toggled");
            report
                .actions
                .push(Action::AnimationToggled(self.state.is_animating));
        }

        match &input.touchscreen {
            Some(screen) => self.dispatch_touches(screen, input.pointer.as_ref(), target, &mut report),
            None => {
                if let Some(pointer) = &input.pointer {
                    self.pointer_fallback(pointer, target, &mut report);
                }
            }
        }

        if self.state.is_animating {
            report.mode = GestureMode::Animating;
            let actions = self.animator.step(
                time,
                self.config.min_scale,
                self.config.max_scale,
                target,
            );
            report.actions.extend(actions);
        }

        if previous.is_animating != self.state.is_animating
            || previous.is_dragging != self.state.is_dragging
        {
            tracing::debug!(
                mode = %report.mode,
                touches = report.active_touches,
                dragging = self.state.is_dragging,
                animating = self.state.is_animating,
                "gesture state changed"
            );
        }
        tracing::trace!(mode = %report.mode, actions = report.actions.len(), "frame done");
        report
    }

    fn dispatch_touches<T: TransformSink + ?Sized>(
        &mut self,
        screen: &TouchscreenState,
        pointer: Option<&PointerState>,
        target: &mut T,
        report: &mut FrameReport,
    ) {
        let count = report.active_touches;

        if let AnimationTrigger::MultiTouch { min_touches } = self.config.animation.trigger {
            if count >= min_touches {
                self.state.is_animating = true;
                self.state.is_dragging = false;
                return;
            }
            self.state.is_animating = false;
        }

        // Tap-triggered animation owns the transform until toggled off.
        if !self.config.manual_gestures || self.state.is_animating {
            return;
        }

        match count {
            0 => {
                // Every finger lifted; a later touch must begin a new drag.
                self.state.is_dragging = false;
                if let Some(pointer) = pointer {
                    self.pointer_fallback(pointer, target, report);
                }
            }
            1 => self.rotate_with_primary(screen, target, report),
            _ => {
                self.pinch(screen, target, report);
                // A finger lifting back to one must not resume from a stale origin.
                self.state.is_dragging = false;
            }
        }
    }

    fn rotate_with_primary<T: TransformSink + ?Sized>(
        &mut self,
        screen: &TouchscreenState,
        target: &mut T,
        report: &mut FrameReport,
    ) {
        let Some(touch) = screen.primary_touch() else {
            return;
        };

        match touch.phase {
            TouchPhase::Began => {
                self.state.drag_origin = touch.position;
                self.state.is_dragging = true;
            }
            TouchPhase::Moved if self.state.is_dragging => {
                let delta = touch.position - self.state.drag_origin;
                let amount = delta.x * self.config.rotation_speed;
                self.apply(
                    Action::Rotate {
                        axis: self.config.rotation_axis,
                        degrees: -amount,
                        space: self.config.rotation_space,
                    },
                    target,
                    report,
                );
                self.state.drag_origin = touch.position;
            }
            phase if phase.is_finished() => self.state.is_dragging = false,
            _ => {}
        }

        if self.state.is_dragging {
            report.mode = GestureMode::Dragging;
        }
    }

    fn pinch<T: TransformSink + ?Sized>(
        &mut self,
        screen: &TouchscreenState,
        target: &mut T,
        report: &mut FrameReport,
    ) {
        let Some(delta) = pinch_delta(screen) else {
            return;
        };
        report.mode = GestureMode::Pinching;
        let scale = step_scale(
            target.scale(),
            delta * self.config.scale_speed,
            self.config.min_scale,
            self.config.max_scale,
        );
        self.apply(Action::SetScale(scale), target, report);
    }

    fn pointer_fallback<T: TransformSink + ?Sized>(
        &mut self,
        pointer: &PointerState,
        target: &mut T,
        report: &mut FrameReport,
    ) {
        if !self.config.pointer_fallback
            || !self.config.manual_gestures
            || self.state.is_animating
        {
            return;
        }

        if pointer.left.pressed {
            report.mode = GestureMode::Pointer;
            let amount = pointer.delta.x * self.config.rotation_speed;
            self.apply(
                Action::Rotate {
                    axis: self.config.rotation_axis,
                    degrees: -amount,
                    space: self.config.rotation_space,
                },
                target,
                report,
            );
        }

        if pointer.right.pressed {
            report.mode = GestureMode::Pointer;
            let scale = step_scale(
                target.scale(),
                pointer.delta.y * self.config.scale_speed,
                self.config.min_scale,
                self.config.max_scale,
            );
            self.apply(Action::SetScale(scale), target, report);
        }
    }

    fn apply<T: TransformSink + ?Sized>(
        &self,
        action: Action,
        target: &mut T,
        report: &mut FrameReport,
    ) {
        action.apply_to(target);
        report.actions.push(action);
    }
}
