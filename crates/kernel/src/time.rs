/// Timing for a single frame, in seconds.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameTime {
    /// Time since the previous frame.
    pub delta: f32,
    /// Time since the clock started, including this frame.
    pub elapsed: f32,
}

impl FrameTime {
    pub fn new(delta: f32, elapsed: f32) -> Self {
        Self { delta, elapsed }
    }
}

/// Accumulates frame deltas into [`FrameTime`] values.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    elapsed: f64,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds and return the timing for the new frame.
    /// Negative or non-finite deltas count as zero.
    pub fn tick(&mut self, dt: f32) -> FrameTime {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        // f64 keeps long sessions from drifting.
        self.elapsed += dt as f64;
        self.frames += 1;
        FrameTime {
            delta: dt,
            elapsed: self.elapsed as f32,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_accumulates() {
        let mut clock = FrameClock::new();
        clock.tick(0.5);
        let t = clock.tick(0.25);
        assert_eq!(t.delta, 0.25);
        assert_eq!(t.elapsed, 0.75);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn bad_deltas_are_zero() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(-1.0).delta, 0.0);
        assert_eq!(clock.tick(f32::NAN).delta, 0.0);
        assert_eq!(clock.elapsed(), 0.0);
    }
}
