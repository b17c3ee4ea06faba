//! Time-eased scroll position.
//!
//! Unlike the frame-stepped animations a game loop would use, a scroll
//! position is a pure function of wall-clock time: `get(now)` interpolates
//! linearly from where the scroll was when the last target was set to that
//! target, over a fixed ease window. Reading it never mutates it, so render and
//! dispatch passes sampled at the same `now` see the same offset.

use std::time::Duration;

/// Range a scroll position is known to be limited to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    /// Smallest offset.
    pub min: f64,
    /// Largest offset.
    pub max: f64,
    /// Screen coordinate of the scrolled content's origin when the bounds
    /// were taken (the viewport top).
    pub origin: f64,
}

/// Eased scroll offset for one scroll group.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollPosition {
    start: f64,
    target: f64,
    target_time: Duration,
    ease: Duration,
    bounds: Option<ScrollBounds>,
}

impl ScrollPosition {
    /// Default ease window.
    pub const DEFAULT_EASE: Duration = Duration::from_millis(100);

    /// A position resting at zero.
    #[must_use]
    pub fn new(ease: Duration) -> Self {
        Self::at(0.0, ease)
    }

    /// A position resting at `value`.
    #[must_use]
    pub fn at(value: f64, ease: Duration) -> Self {
        Self {
            start: value,
            target: value,
            target_time: Duration::ZERO,
            ease,
            bounds: None,
        }
    }

    /// The offset at time `now`.
    #[must_use]
    pub fn get(&self, now: Duration) -> f64 {
        let value = if now >= self.target_time || self.ease.is_zero() {
            self.target
        } else {
            let remaining = (self.target_time - now).as_secs_f64();
            self.target - remaining * (self.target - self.start) / self.ease.as_secs_f64()
        };
        self.clamp(value)
    }

    /// Starts easing from the current offset towards `value`.
    pub fn set(&mut self, value: f64, now: Duration) {
        self.start = self.get(now);
        self.target = self.clamp(value);
        self.target_time = now + self.ease;
    }

    /// Eases towards the current target plus `delta`.
    pub fn add(&mut self, delta: f64, now: Duration) {
        self.set(self.target + delta, now);
    }

    /// Jumps to `value` with no easing.
    pub fn reset(&mut self, value: f64) {
        self.start = self.clamp(value);
        self.target = self.start;
        self.target_time = Duration::ZERO;
    }

    /// Records the valid range and clamps the current motion into it.
    pub fn set_bounds(&mut self, min: f64, max: f64, origin: f64) {
        let max = max.max(min);
        self.bounds = Some(ScrollBounds { min, max, origin });
        self.start = self.start.clamp(min, max);
        self.target = self.target.clamp(min, max);
    }

    /// The range recorded by the last [`ScrollPosition::set_bounds`], if any.
    #[must_use]
    pub const fn bounds(&self) -> Option<ScrollBounds> {
        self.bounds
    }

    /// The offset at `now` as a fraction of the bounds, in `0..=1`.
    ///
    /// Returns 0 before bounds are known or when there is nothing to scroll.
    #[must_use]
    pub fn get_ratio(&self, now: Duration) -> f64 {
        match self.bounds {
            Some(b) if b.max > b.min => ((self.get(now) - b.min) / (b.max - b.min)).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    /// Eases to the offset at `ratio` of the bounds. Ignored before bounds
    /// are known.
    pub fn set_ratio(&mut self, ratio: f64, now: Duration) {
        if let Some(b) = self.bounds {
            self.set(b.min + ratio.clamp(0.0, 1.0) * (b.max - b.min), now);
        }
    }

    fn clamp(&self, value: f64) -> f64 {
        match self.bounds {
            Some(b) => value.clamp(b.min, b.max),
            None => value,
        }
    }
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_ease_reaches_target_exactly() {
        let mut pos = ScrollPosition::default();
        pos.set(500.0, ms(0));

        assert_eq!(pos.get(ms(100)), 500.0);
        let mid = pos.get(ms(50));
        assert!(mid > 0.0 && mid < 500.0, "mid-ease value {mid}");
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut pos = ScrollPosition::at(200.0, ScrollPosition::DEFAULT_EASE);
        pos.set(50.0, ms(1000));

        let mut previous = pos.get(ms(1000));
        for t in 1001..1100 {
            let value = pos.get(ms(t));
            assert!(value < previous, "not strictly decreasing at {t}");
            previous = value;
        }
        assert_eq!(pos.get(ms(1100)), 50.0);
    }

    #[test]
    fn test_get_is_idempotent() {
        let mut pos = ScrollPosition::default();
        pos.set(80.0, ms(10));
        assert_eq!(pos.get(ms(40)), pos.get(ms(40)));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut pos = ScrollPosition::default();
        pos.set(100.0, ms(0));
        let halfway = pos.get(ms(50));
        pos.add(100.0, ms(50));

        assert!((pos.get(ms(50)) - halfway).abs() < 1e-9);
        assert_eq!(pos.get(ms(150)), 200.0);
    }

    #[test]
    fn test_bounds_clamp() {
        let mut pos = ScrollPosition::default();
        pos.set(500.0, ms(0));
        pos.set_bounds(0.0, 300.0, 0.0);

        assert_eq!(pos.get(ms(1000)), 300.0);
        pos.add(-1000.0, ms(1000));
        assert_eq!(pos.get(ms(2000)), 0.0);
    }

    #[test]
    fn test_ratio_needs_bounds() {
        let mut pos = ScrollPosition::default();
        pos.reset(50.0);
        assert_eq!(pos.get_ratio(ms(0)), 0.0);
        pos.set_ratio(1.0, ms(0));
        assert_eq!(pos.get(ms(1000)), 50.0);

        pos.set_bounds(0.0, 200.0, 0.0);
        assert_eq!(pos.get_ratio(ms(0)), 0.25);
        pos.set_ratio(1.0, ms(0));
        assert_eq!(pos.get(ms(100)), 200.0);
    }
}
