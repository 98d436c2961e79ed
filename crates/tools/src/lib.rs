//! Developer Tooling: capped on-screen log overlay, gesture inspector.
//!
//! # Invariants
//! - Tools only read gesture state; they never write to a transform.
//! - The overlay never holds more than its character capacity.

mod inspector;
mod overlay;

pub use inspector::{GestureInspector, GestureSummary};
pub use overlay::{DEFAULT_CAPACITY, LogOverlay, OverlayHandle, OverlayLayer};

pub fn crate_info() -> &'static str {
    "touchform-tools v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("tools"));
    }
}
