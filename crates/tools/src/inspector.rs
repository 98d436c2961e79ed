use glam::Vec3;
use touchform_common::Transform;
use touchform_kernel::{FrameReport, GestureInterpreter, GestureMode};

/// Read-only view of an interpreter and the transform it drives, for
/// debugging output and development UI.
pub struct GestureInspector;

impl GestureInspector {
    pub fn summary(
        interpreter: &GestureInterpreter,
        transform: &Transform,
        report: &FrameReport,
    ) -> GestureSummary {
        let state = interpreter.state();
        GestureSummary {
            mode: report.mode,
            active_touches: report.active_touches,
            dragging: state.is_dragging,
            animating: state.is_animating,
            euler_degrees: transform.euler_degrees(),
            scale: transform.scale,
        }
    }
}

/// Snapshot of gesture and transform state after a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSummary {
    pub mode: GestureMode,
    pub active_touches: usize,
    pub dragging: bool,
    pub animating: bool,
    pub euler_degrees: Vec3,
    pub scale: Vec3,
}

impl std::fmt::Display for GestureSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<9} touches={} rot=({:.2}, {:.2}, {:.2}) scale=({:.3}, {:.3}, {:.3})",
            self.mode.to_string(),
            self.active_touches,
            self.euler_degrees.x,
            self.euler_degrees.y,
            self.euler_degrees.z,
            self.scale.x,
            self.scale.y,
            self.scale.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use touchform_input::{InputSnapshot, TouchPoint};
    use touchform_kernel::{FrameTime, GestureConfig};

    #[test]
    fn summary_idle() {
        let transform = Transform::default();
        let interp = GestureInterpreter::new(GestureConfig::default(), &transform);
        let summary = GestureInspector::summary(&interp, &transform, &FrameReport::default());
        assert_eq!(summary.mode, GestureMode::Idle);
        assert!(!summary.dragging);
        assert_eq!(summary.scale, Vec3::ONE);
    }

    #[test]
    fn summary_tracks_drag() {
        let mut transform = Transform::default();
        let mut interp = GestureInterpreter::new(GestureConfig::default(), &transform);
        let report = interp.advance(
            &InputSnapshot::touches(vec![TouchPoint::began(1, Vec2::ZERO)]),
            FrameTime::new(0.016, 0.016),
            &mut transform,
        );
        let summary = GestureInspector::summary(&interp, &transform, &report);
        assert_eq!(summary.mode, GestureMode::Dragging);
        assert_eq!(summary.active_touches, 1);
        assert!(summary.dragging);
    }

    #[test]
    fn summary_display() {
        let transform = Transform::with_uniform_scale(2.0);
        let interp = GestureInterpreter::new(GestureConfig::default(), &transform);
        let s = GestureInspector::summary(&interp, &transform, &FrameReport::default()).to_string();
        assert!(s.starts_with("idle"));
        assert!(s.contains("scale=(2.000, 2.000, 2.000)"));
    }
}
