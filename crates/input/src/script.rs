//! Recorded input: a sequence of frames that can be replayed in place of a
//! live device.
//!
//! Scripts are YAML documents:
//! ```yaml
//! frames:
//!   - dt: 0.016
//!     snapshot:
//!       touchscreen:
//!         touches:
//!           - { id: 1, position: [0.0, 0.0], pressed: true, phase: began }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::collections::VecDeque;
use std::path::Path;

use crate::snapshot::InputSnapshot;

/// Errors from loading or validating an input script.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("frame {frame}: {reason}")]
    InvalidFrame { frame: usize, reason: String },
}

/// One polled frame: elapsed seconds since the last frame and the input state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub dt: f32,
    #[serde(default)]
    pub snapshot: InputSnapshot,
}

impl InputFrame {
    pub fn new(dt: f32, snapshot: InputSnapshot) -> Self {
        Self { dt, snapshot }
    }
}

/// Anything that can be polled once per frame for input.
pub trait InputSource {
    /// The next frame of input, or `None` once the source is exhausted.
    fn next_frame(&mut self) -> Option<InputFrame>;
}

/// An ordered list of recorded frames.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub frames: Vec<InputFrame>,
}

impl InputScript {
    pub fn new(frames: Vec<InputFrame>) -> Self {
        Self { frames }
    }

    /// Parse and validate a script from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_yaml::from_str(text)?;
        script.validate()?;
        Ok(script)
    }

    /// Load and validate a script from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let script = Self::from_yaml_str(&text)?;
        tracing::debug!(path = %path.display(), frames = script.frames.len(), "loaded input script");
        Ok(script)
    }

    pub fn to_yaml_string(&self) -> Result<String, ScriptError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Total recorded time in seconds.
    pub fn duration(&self) -> f32 {
        self.frames.iter().map(|f| f.dt).sum()
    }

    /// Check frame timing, touch identity, and primary references.
    pub fn validate(&self) -> Result<(), ScriptError> {
        for (frame, input) in self.frames.iter().enumerate() {
            let invalid = |reason: String| ScriptError::InvalidFrame { frame, reason };

            if !input.dt.is_finite() || input.dt < 0.0 {
                return Err(invalid(format!("dt must be finite and >= 0, got {}", input.dt)));
            }
            let Some(screen) = &input.snapshot.touchscreen else {
                continue;
            };
            let mut seen = HashSet::new();
            for touch in &screen.touches {
                if !seen.insert(touch.id) {
                    return Err(invalid(format!("duplicate touch id {}", touch.id.0)));
                }
                if !touch.position.is_finite() || !touch.delta.is_finite() {
                    return Err(invalid(format!("touch {} has non-finite data", touch.id.0)));
                }
            }
            if let Some(primary) = screen.primary {
                if !seen.contains(&primary) {
                    return Err(invalid(format!("primary touch {} not present", primary.0)));
                }
            }
        }
        Ok(())
    }
}

/// Replays an [`InputScript`] frame by frame.
pub struct ScriptedSource {
    frames: VecDeque<InputFrame>,
}

impl ScriptedSource {
    pub fn new(script: InputScript) -> Self {
        Self {
            frames: script.frames.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedSource {
    fn next_frame(&mut self) -> Option<InputFrame> {
        self.frames.pop_front()
    }
}
