//! Input snapshots: touch points and pointer state polled once per frame, plus
//! the transform actions a frame can produce.
//!
//! # Invariants
//! - A missing device is `None`, never an error; it reads as zero touches.
//! - Touch order is whatever the source reports and is preserved as-is.

pub mod action;
pub mod script;
pub mod snapshot;

pub use action::Action;
pub use script::{InputFrame, InputScript, InputSource, ScriptError, ScriptedSource};
pub use snapshot::{
    ButtonState, InputSnapshot, PointerState, TouchId, TouchPhase, TouchPoint, TouchscreenState,
};

pub fn crate_info() -> &'static str {
    "touchform-input v0.1.0"
}
