//! # Frame Clock
//!
//! Fixed-interval pacing for animation frames, independent of the display
//! refresh rate.

/// Decides when the next animation frame is due.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameClock {
    /// Milliseconds between frames
    pub interval: f64,
    /// Timestamp the last frame was credited to
    pub then: f64,
}

impl FrameClock {
    /// Creates a clock for `fps` frames per second starting at `now_ms`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dung::FrameClock;
    ///
    /// let mut clock = FrameClock::new(10, 0.0);
    /// assert!(!clock.tick(100.0));
    /// assert!(clock.tick(130.0));
    /// assert_eq!(clock.then, 100.0);
    /// ```
    pub fn new(fps: u32, now_ms: f64) -> Self {
        Self {
            interval: 1000.0 / f64::from(fps.max(1)),
            then: now_ms,
        }
    }

    /// Returns true when more than one interval has elapsed since the last
    /// frame. The remainder carries over so frames don't drift.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.then;
        if elapsed > self.interval {
            self.then = now_ms - (elapsed % self.interval);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_from_fps() {
        let clock = FrameClock::new(25, 0.0);
        assert_eq!(clock.interval, 40.0);
    }

    #[test]
    fn test_exact_interval_does_not_tick() {
        let mut clock = FrameClock::new(25, 0.0);
        assert!(!clock.tick(40.0));
        assert!(clock.tick(41.0));
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut clock = FrameClock::new(25, 0.0);
        assert!(clock.tick(95.0));
        assert_eq!(clock.then, 80.0);
        assert!(!clock.tick(110.0));
        assert!(clock.tick(121.0));
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let clock = FrameClock::new(0, 0.0);
        assert_eq!(clock.interval, 1000.0);
    }
}
