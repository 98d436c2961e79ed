//! Gesture Kernel: turns per-frame touch and pointer snapshots into rotation
//! and scaling of one owned transform.
//!
//! # Invariants
//! - Exactly one gesture mode runs per frame, chosen from the current touch count.
//! - Scale never leaves `[min_scale, max_scale]` once the kernel has written it.
//! - `advance` is pure with respect to its inputs: same state, snapshot, and
//!   time produce the same transform.

pub mod animator;
pub mod config;
pub mod interpreter;
pub mod pinch;
pub mod time;

pub use animator::{Animator, ping_pong};
pub use config::{AnimationConfig, AnimationTrigger, ConfigError, GestureConfig, Profile};
pub use interpreter::{FrameReport, GestureInterpreter, GestureMode, GestureState};
pub use time::{FrameClock, FrameTime};

pub fn crate_info() -> &'static str {
    "touchform-kernel v0.1.0"
}
