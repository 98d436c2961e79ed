//! Shared types: the transform a gesture drives and the sink it writes through.
//!
//! # Invariants
//! - Rotation is stored as a normalized quaternion.
//! - Every mutation through [`TransformSink`] is visible on the next read.

mod types;

pub use types::{Space, Transform, TransformSink};

pub fn crate_info() -> &'static str {
    "touchform-common v0.1.0"
}
