//! On-screen log overlay: the most recent log lines, newest first, capped so
//! a UI label can redraw it every frame.

use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Characters kept by [`LogOverlay::new`].
pub const DEFAULT_CAPACITY: usize = 1000;

/// Log text shown newest first, truncated at a character capacity.
#[derive(Debug, Clone)]
pub struct LogOverlay {
    text: String,
    capacity: usize,
}

impl Default for LogOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl LogOverlay {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
        }
    }

    /// Prepend a line, then drop whatever falls past the capacity.
    pub fn push(&mut self, line: &str) {
        let mut text = String::with_capacity(line.len() + 1 + self.text.len());
        text.push_str(line);
        text.push('\n');
        text.push_str(&self.text);
        self.text = text;

        if let Some((cut, _)) = self.text.char_indices().nth(self.capacity) {
            self.text.truncate(cut);
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Shared handle to an overlay, written by [`OverlayLayer`] and read by the UI.
#[derive(Debug, Clone, Default)]
pub struct OverlayHandle(Arc<Mutex<LogOverlay>>);

impl OverlayHandle {
    pub fn new(overlay: LogOverlay) -> Self {
        Self(Arc::new(Mutex::new(overlay)))
    }

    pub fn push(&self, line: &str) {
        if let Ok(mut overlay) = self.0.lock() {
            overlay.push(line);
        }
    }

    /// Current overlay text. Empty if the lock was poisoned.
    pub fn text(&self) -> String {
        self.0
            .lock()
            .map(|overlay| overlay.text().to_owned())
            .unwrap_or_default()
    }

    /// A `tracing` layer that feeds this overlay.
    pub fn layer(&self) -> OverlayLayer {
        OverlayLayer {
            handle: self.clone(),
        }
    }
}

/// Forwards each `tracing` event to an overlay as `message key=value ...`.
#[derive(Debug, Clone)]
pub struct OverlayLayer {
    handle: OverlayHandle,
}

impl<S: Subscriber> Layer<S> for OverlayLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);
        self.handle.push(&visitor.finish());
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.fields.trim_start().to_owned()
        } else {
            self.message + &self.fields
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.fields.push_str(&format!(" {}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message.push_str(&format!("{value:?}"));
        } else {
            self.fields.push_str(&format!(" {}={:?}", field.name(), value));
        }
    }
}
