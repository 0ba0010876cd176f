//! Time-based tweens
//!
//! A `Tween` animates one scalar toward a target; retargeting starts a new
//! leg from the current value, so rapid pointer moves blend smoothly.
//! A `Yoyo` is an endless back-and-forth oscillation.

use super::easing::Ease;
use crate::lerp;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    ease: Ease,
}

impl Tween {
    /// A tween already at rest on `value`
    pub fn settled(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            duration: 0.0,
            elapsed: 0.0,
            ease: Ease::Linear,
        }
    }

    pub fn new(from: f32, to: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            ease,
        }
    }

    /// Start a new leg from the current value toward `to`
    pub fn retarget(&mut self, to: f32, duration: f32, ease: Ease) {
        *self = Self::new(self.value(), to, duration, ease);
    }

    /// Jump to `value` immediately
    pub fn snap(&mut self, value: f32) {
        *self = Self::settled(value);
    }

    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current value; exactly `to` once finished
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        lerp(self.from, self.to, self.ease.apply(self.elapsed / self.duration))
    }

    pub fn target(&self) -> f32 {
        self.to
    }
}

/// Endless oscillation between `from` and `to`; each leg lasts `leg`
/// seconds and the reverse leg replays the ease backwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Yoyo {
    from: f32,
    to: f32,
    leg: f32,
    ease: Ease,
    time: f32,
}

impl Yoyo {
    pub fn new(from: f32, to: f32, leg: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            leg: leg.max(f32::EPSILON),
            ease,
            time: 0.0,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            // Wrap on full cycles to keep precision on long hovers
            self.time = (self.time + dt) % (2.0 * self.leg);
        }
    }

    pub fn value(&self) -> f32 {
        let cycle = self.time / self.leg;
        let local = cycle.fract();
        let progress = if cycle < 1.0 {
            self.ease.apply(local)
        } else {
            self.ease.apply(1.0 - local)
        };
        lerp(self.from, self.to, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_lands_exactly_on_target() {
        let mut t = Tween::new(3.0, 0.0, 0.5, Ease::Power2Out);
        for _ in 0..70 {
            t.advance(1.0 / 120.0);
        }
        assert!(t.is_finished());
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_tween_midway() {
        let mut t = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
        t.advance(0.25);
        assert!((t.value() - 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut t = Tween::new(0.0, 10.0, 1.0, Ease::Linear);
        t.advance(0.5);
        t.retarget(0.0, 1.0, Ease::Linear);
        assert!((t.value() - 5.0).abs() < 1e-5);
        assert_eq!(t.target(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let t = Tween::new(1.0, 4.0, 0.0, Ease::BackOut);
        assert_eq!(t.value(), 4.0);
    }

    #[test]
    fn test_ignores_bad_dt() {
        let mut t = Tween::new(0.0, 1.0, 1.0, Ease::Linear);
        t.advance(f32::NAN);
        t.advance(-1.0);
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_yoyo_goes_there_and_back() {
        let mut y = Yoyo::new(1.0, 0.3, 1.5, Ease::Linear);
        assert!((y.value() - 1.0).abs() < 1e-5);
        y.advance(1.5 - 1e-4);
        assert!((y.value() - 0.3).abs() < 1e-3);
        y.advance(1.5);
        assert!((y.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_yoyo_stays_in_range() {
        let mut y = Yoyo::new(0.0, 1.0, 0.7, Ease::Power2InOut);
        for _ in 0..500 {
            y.advance(0.013);
            let v = y.value();
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
