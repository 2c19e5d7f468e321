//! Elapsed simulation time

/// Simulation clock feeding every motion.
///
/// Holds elapsed seconds only; all other animation state is derived.
#[derive(Clone, Debug)]
pub struct AnimationClock {
    elapsed: f32,
    /// Multiplier applied to incoming frame deltas
    time_scale: f32,
    paused: bool,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            time_scale: 1.0,
            paused: false,
        }
    }

    /// Advance by a frame delta in seconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt_seconds: f32) {
        if self.paused || dt_seconds <= 0.0 {
            return;
        }
        self.elapsed += dt_seconds * self.time_scale;
    }

    /// Jump to an absolute time, clamped at zero
    pub fn set(&mut self, seconds: f32) {
        self.elapsed = seconds.max(0.0);
    }

    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    #[inline]
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = AnimationClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.elapsed() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut clock = AnimationClock::new();
        clock.advance(1.0);
        clock.advance(-3.0);
        assert!((clock.elapsed() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_time_scale() {
        let mut clock = AnimationClock::new();
        clock.set_time_scale(2.0);
        clock.advance(1.5);
        assert!((clock.elapsed() - 3.0).abs() < 1e-6);
        clock.set_time_scale(-1.0);
        assert_eq!(clock.time_scale(), 0.0);
    }

    #[test]
    fn test_pause_holds_time() {
        let mut clock = AnimationClock::new();
        clock.advance(1.0);
        clock.pause();
        clock.advance(10.0);
        assert!(clock.is_paused());
        assert!((clock.elapsed() - 1.0).abs() < 1e-6);
        clock.resume();
        clock.advance(1.0);
        assert!((clock.elapsed() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_set_clamps() {
        let mut clock = AnimationClock::new();
        clock.set(-4.0);
        assert_eq!(clock.elapsed(), 0.0);
        clock.set(12.5);
        assert_eq!(clock.elapsed(), 12.5);
    }
}
