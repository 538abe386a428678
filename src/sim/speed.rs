//! Step-function speed ramp

use serde::{Deserialize, Serialize};

/// Speed that grows by `step` every `interval_ms` of run time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedRamp {
    base: f32,
    step: f32,
    interval_ms: f32,
    speed: f32,
    since_increase_ms: f32,
}

impl SpeedRamp {
    pub fn new(base: f32, step: f32, interval_ms: f32) -> Self {
        Self {
            base,
            step,
            interval_ms,
            speed: base,
            since_increase_ms: 0.0,
        }
    }

    /// Back to base speed with a fresh timer
    pub fn reset(&mut self) {
        self.speed = self.base;
        self.since_increase_ms = 0.0;
    }

    /// Accumulate run time; returns how many increases were applied
    ///
    /// Non-finite or negative elapsed times count as zero.
    pub fn advance(&mut self, elapsed_ms: f32) -> u32 {
        if !(self.interval_ms > 0.0) || !elapsed_ms.is_finite() {
            return 0;
        }
        self.since_increase_ms += elapsed_ms.max(0.0);
        if self.since_increase_ms < self.interval_ms {
            return 0;
        }

        let steps = (self.since_increase_ms / self.interval_ms).floor();
        self.speed += steps * self.step;
        self.since_increase_ms %= self.interval_ms;
        steps as u32
    }

    /// Current speed in units per second
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_steps() {
        let mut ramp = SpeedRamp::new(200.0, 30.0, 5000.0);
        assert_eq!(ramp.advance(4999.0), 0);
        assert_eq!(ramp.speed(), 200.0);
        assert_eq!(ramp.advance(1.0), 1);
        assert_eq!(ramp.speed(), 230.0);
        assert_eq!(ramp.advance(5000.0), 1);
        assert_eq!(ramp.speed(), 260.0);
    }

    #[test]
    fn test_many_small_frames() {
        let mut ramp = SpeedRamp::new(200.0, 30.0, 5000.0);
        for _ in 0..500 {
            ramp.advance(20.0);
        }
        assert_eq!(ramp.speed(), 260.0);
    }

    #[test]
    fn test_long_frame_applies_every_step() {
        let mut ramp = SpeedRamp::new(200.0, 30.0, 5000.0);
        assert_eq!(ramp.advance(15_000.0), 3);
        assert_eq!(ramp.speed(), 290.0);
        ramp.reset();
        assert_eq!(ramp.speed(), 200.0);
        assert_eq!(ramp.advance(4000.0), 0);
    }

    #[test]
    fn test_huge_frames_terminate() {
        let mut ramp = SpeedRamp::new(200.0, 30.0, 5000.0);
        let steps = ramp.advance(1.0e12);
        assert!((199_000_000..=201_000_000).contains(&steps));
        assert!(ramp.speed().is_finite());
        assert!(ramp.speed() > 200.0);

        let speed = ramp.speed();
        assert_eq!(ramp.advance(f32::INFINITY), 0);
        assert_eq!(ramp.advance(f32::NAN), 0);
        assert_eq!(ramp.speed(), speed);
    }
}
