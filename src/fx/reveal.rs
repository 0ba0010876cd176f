//! Staggered entrance for the hero sections
//!
//! Items fade in and rise into place one after another. Each item follows
//! an underdamped spring (stiffness 100, damping 12, unit mass), so it
//! overshoots slightly before settling.

use crate::consts::{
    REVEAL_DELAY, REVEAL_OFFSET_PX, REVEAL_SETTLE, REVEAL_STAGGER, SPRING_DAMPING,
    SPRING_STIFFNESS,
};

/// Unit step response of the spring at `t` seconds: 0 at rest, 1 at target
pub fn spring_progress(t: f32) -> f32 {
    if !t.is_finite() || t <= 0.0 {
        return 0.0;
    }
    if t >= REVEAL_SETTLE {
        return 1.0;
    }
    let omega = SPRING_STIFFNESS.sqrt();
    let zeta = SPRING_DAMPING / (2.0 * omega);
    let omega_d = omega * (1.0 - zeta * zeta).sqrt();
    let decay = (-zeta * omega * t).exp();
    1.0 - decay * ((omega_d * t).cos() + zeta * omega / omega_d * (omega_d * t).sin())
}

/// Style of one item at a point in the entrance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealState {
    pub opacity: f32,
    /// Vertical offset in px; positive is below the resting place
    pub offset_y: f32,
}

impl RevealState {
    pub const HIDDEN: RevealState = RevealState {
        opacity: 0.0,
        offset_y: REVEAL_OFFSET_PX,
    };
    pub const SHOWN: RevealState = RevealState {
        opacity: 1.0,
        offset_y: 0.0,
    };

    pub fn transform_css(&self) -> String {
        format!("translateY({:.2}px)", self.offset_y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaggerReveal {
    count: usize,
    elapsed: f32,
}

impl StaggerReveal {
    pub fn new(count: usize) -> Self {
        Self { count, elapsed: 0.0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn restart(&mut self) {
        self.elapsed = 0.0;
    }

    /// Jump to the end (reduced motion)
    pub fn finish(&mut self) {
        self.elapsed = self.duration();
    }

    /// Seconds until the last item settles
    pub fn duration(&self) -> f32 {
        REVEAL_DELAY + self.count.saturating_sub(1) as f32 * REVEAL_STAGGER + REVEAL_SETTLE
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration()
    }

    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration());
        }
    }

    pub fn item(&self, index: usize) -> RevealState {
        if index >= self.count || self.is_finished() {
            return RevealState::SHOWN;
        }
        let start = REVEAL_DELAY + index as f32 * REVEAL_STAGGER;
        let p = spring_progress(self.elapsed - start);
        RevealState {
            opacity: crate::saturate(p),
            offset_y: REVEAL_OFFSET_PX * (1.0 - p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_endpoints() {
        assert_eq!(spring_progress(0.0), 0.0);
        assert_eq!(spring_progress(-1.0), 0.0);
        assert_eq!(spring_progress(REVEAL_SETTLE), 1.0);
        assert_eq!(spring_progress(f32::NAN), 0.0);
    }

    #[test]
    fn test_spring_overshoots_then_settles() {
        let peak = (1..100)
            .map(|i| spring_progress(i as f32 * 0.01))
            .fold(0.0_f32, f32::max);
        assert!(peak > 1.0 && peak < 1.15);
        assert!((spring_progress(REVEAL_SETTLE - 0.01) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_items_enter_in_order() {
        let mut r = StaggerReveal::new(4);
        assert_eq!(r.item(0), RevealState::HIDDEN);
        r.advance(REVEAL_DELAY + REVEAL_STAGGER);
        assert!(r.item(0).opacity > 0.0);
        assert_eq!(r.item(1).opacity, 0.0);
        assert_eq!(r.item(3), RevealState::HIDDEN);
        assert!(r.item(0).opacity >= r.item(1).opacity);

        r.advance(10.0);
        assert!(r.is_finished());
        for i in 0..4 {
            assert_eq!(r.item(i), RevealState::SHOWN);
        }
    }

    #[test]
    fn test_finish_and_restart() {
        let mut r = StaggerReveal::new(3);
        r.finish();
        assert_eq!(r.item(2), RevealState::SHOWN);
        r.restart();
        assert_eq!(r.item(0), RevealState::HIDDEN);
        assert_eq!(r.item(7), RevealState::SHOWN);
    }

    #[test]
    fn test_transform_css() {
        assert_eq!(RevealState::HIDDEN.transform_css(), "translateY(20.00px)");
    }
}
