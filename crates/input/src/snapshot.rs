use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Identity of one finger contact, stable across the frames it is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TouchId(pub u32);

/// Lifecycle phase of a touch as reported for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TouchPhase {
    #[default]
    None,
    Began,
    Moved,
    Stationary,
    Ended,
    Canceled,
}

impl TouchPhase {
    /// True for `Ended` and `Canceled`.
    pub fn is_finished(self) -> bool {
        matches!(self, Self::Ended | Self::Canceled)
    }
}

/// One touch contact for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub id: TouchId,
    pub position: Vec2,
    /// Movement since the previous frame.
    #[serde(default)]
    pub delta: Vec2,
    pub pressed: bool,
    #[serde(default)]
    pub phase: TouchPhase,
}

impl TouchPoint {
    /// A pressed touch that has just made contact.
    pub fn began(id: u32, position: Vec2) -> Self {
        Self {
            id: TouchId(id),
            position,
            delta: Vec2::ZERO,
            pressed: true,
            phase: TouchPhase::Began,
        }
    }

    /// A pressed touch that moved by `delta` to reach `position`.
    pub fn moved(id: u32, position: Vec2, delta: Vec2) -> Self {
        Self {
            id: TouchId(id),
            position,
            delta,
            pressed: true,
            phase: TouchPhase::Moved,
        }
    }

    /// A pressed touch that did not move this frame.
    pub fn stationary(id: u32, position: Vec2) -> Self {
        Self {
            id: TouchId(id),
            position,
            delta: Vec2::ZERO,
            pressed: true,
            phase: TouchPhase::Stationary,
        }
    }

    /// A touch that lifted this frame.
    pub fn ended(id: u32, position: Vec2) -> Self {
        Self {
            id: TouchId(id),
            position,
            delta: Vec2::ZERO,
            pressed: false,
            phase: TouchPhase::Ended,
        }
    }

    /// Where this touch was on the previous frame.
    pub fn previous_position(&self) -> Vec2 {
        self.position - self.delta
    }
}

/// All touch contacts reported by a touchscreen this frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchscreenState {
    #[serde(default)]
    pub touches: Vec<TouchPoint>,
    /// The touch the device treats as primary. Falls back to the first
    /// touch with a phase when unset.
    #[serde(default)]
    pub primary: Option<TouchId>,
}

impl TouchscreenState {
    pub fn new(touches: Vec<TouchPoint>) -> Self {
        Self {
            touches,
            primary: None,
        }
    }

    /// Number of touches currently pressed.
    pub fn active_count(&self) -> usize {
        self.touches.iter().filter(|t| t.pressed).count()
    }

    /// The first two pressed touches in reported order.
    pub fn pressed_pair(&self) -> Option<(&TouchPoint, &TouchPoint)> {
        let mut pressed = self.touches.iter().filter(|t| t.pressed);
        let first = pressed.next()?;
        let second = pressed.next()?;
        Some((first, second))
    }

    pub fn primary_touch(&self) -> Option<&TouchPoint> {
        match self.primary {
            Some(id) => self.touches.iter().find(|t| t.id == id),
            None => self.touches.iter().find(|t| t.phase != TouchPhase::None),
        }
    }

    /// Whether the primary touch went down this frame.
    pub fn primary_pressed_this_frame(&self) -> bool {
        self.primary_touch()
            .is_some_and(|t| t.phase == TouchPhase::Began)
    }
}

/// A mouse-style button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    #[serde(default)]
    pub pressed: bool,
    #[serde(default)]
    pub pressed_this_frame: bool,
}

impl ButtonState {
    pub fn held() -> Self {
        Self {
            pressed: true,
            pressed_this_frame: false,
        }
    }

    pub fn just_pressed() -> Self {
        Self {
            pressed: true,
            pressed_this_frame: true,
        }
    }
}

/// Pointer device state for a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub delta: Vec2,
    #[serde(default)]
    pub left: ButtonState,
    #[serde(default)]
    pub right: ButtonState,
}

/// Everything the interpreter may read for one frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSnapshot {
    #[serde(default)]
    pub touchscreen: Option<TouchscreenState>,
    #[serde(default)]
    pub pointer: Option<PointerState>,
}

impl InputSnapshot {
    /// A frame with a touchscreen reporting the given touches.
    pub fn touches(touches: Vec<TouchPoint>) -> Self {
        Self {
            touchscreen: Some(TouchscreenState::new(touches)),
            pointer: None,
        }
    }

    /// A frame with only a pointer device.
    pub fn pointer(pointer: PointerState) -> Self {
        Self {
            touchscreen: None,
            pointer: Some(pointer),
        }
    }

    /// Pressed touch count; zero when no touchscreen is present.
    pub fn active_touches(&self) -> usize {
        self.touchscreen
            .as_ref()
            .map_or(0, TouchscreenState::active_count)
    }

    /// A discrete press this frame: the primary touch going down, or else the
    /// pointer's left button.
    pub fn tapped_this_frame(&self) -> bool {
        let touch = self
            .touchscreen
            .as_ref()
            .is_some_and(TouchscreenState::primary_pressed_this_frame);
        let click = self.pointer.is_some_and(|p| p.left.pressed_this_frame);
        touch || click
    }
}
