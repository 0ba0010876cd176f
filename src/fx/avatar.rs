//! Hero avatar with a presence indicator
//!
//! The avatar scales in once, then loops forever while online: the border
//! breathes in opacity, the status dot swells, and a ring pulses outward
//! and fades. Every loop runs on the same period.

use serde::{Deserialize, Serialize};

use super::easing::Ease;
use super::tween::{Tween, Yoyo};
use crate::consts::{AVATAR_ENTRANCE, AVATAR_PULSE_PERIOD};
use crate::lerp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarStatus {
    #[default]
    Online,
    Away,
    Offline,
}

impl AvatarStatus {
    /// Background utility class for the status dot
    pub fn color_class(self) -> &'static str {
        match self {
            AvatarStatus::Online => "bg-emerald-500",
            AvatarStatus::Away => "bg-yellow-500",
            AvatarStatus::Offline => "bg-zinc-500",
        }
    }

    pub fn is_animated(self) -> bool {
        self == AvatarStatus::Online
    }
}

/// Snapshot written to the avatar nodes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarState {
    pub scale: f32,
    pub border_opacity: f32,
    pub dot_scale: f32,
    pub ring_scale: f32,
    pub ring_opacity: f32,
}

#[derive(Debug, Clone)]
pub struct Avatar {
    status: AvatarStatus,
    entrance: Tween,
    border: Yoyo,
    dot: Yoyo,
    /// Seconds into the current ring pulse
    ring_time: f32,
}

impl Avatar {
    pub fn new(status: AvatarStatus) -> Self {
        let leg = AVATAR_PULSE_PERIOD / 2.0;
        Self {
            status,
            entrance: Tween::new(0.0, 1.0, AVATAR_ENTRANCE, Ease::Power2Out),
            border: Yoyo::new(0.5, 1.0, leg, Ease::Power2InOut),
            dot: Yoyo::new(1.0, 1.2, leg, Ease::Power2InOut),
            ring_time: 0.0,
        }
    }

    pub fn status(&self) -> AvatarStatus {
        self.status
    }

    /// Replay the scale-in and restart the loops
    pub fn restart(&mut self) {
        *self = Self::new(self.status);
    }

    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.entrance.advance(dt);
        if self.status.is_animated() {
            self.border.advance(dt);
            self.dot.advance(dt);
            self.ring_time = (self.ring_time + dt) % AVATAR_PULSE_PERIOD;
        }
    }

    pub fn state(&self) -> AvatarState {
        let scale = self.entrance.value();
        if !self.status.is_animated() {
            return AvatarState {
                scale,
                border_opacity: 1.0,
                dot_scale: 1.0,
                ring_scale: 1.0,
                ring_opacity: 0.0,
            };
        }

        // Ring: out and fading over the first half, back in unseen
        let half = AVATAR_PULSE_PERIOD / 2.0;
        let (ring_scale, ring_opacity) = if self.ring_time < half {
            let t = self.ring_time / half;
            (lerp(1.0, 1.3, t), 1.0 - t)
        } else {
            let t = (self.ring_time - half) / half;
            (lerp(1.3, 1.0, t), 0.0)
        };

        AvatarState {
            scale,
            border_opacity: self.border.value(),
            dot_scale: self.dot.value(),
            ring_scale,
            ring_opacity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: &mut Avatar, seconds: f32) {
        let steps = (seconds * 100.0).round() as usize;
        for _ in 0..steps {
            a.advance(0.01);
        }
    }

    #[test]
    fn test_scales_in() {
        let mut a = Avatar::new(AvatarStatus::Online);
        assert_eq!(a.state().scale, 0.0);
        run(&mut a, 0.25);
        let mid = a.state().scale;
        assert!(mid > 0.5 && mid < 1.0);
        run(&mut a, 0.3);
        assert_eq!(a.state().scale, 1.0);
    }

    #[test]
    fn test_online_loops() {
        let mut a = Avatar::new(AvatarStatus::Online);
        let start = a.state();
        assert_eq!(start.border_opacity, 0.5);
        assert_eq!(start.dot_scale, 1.0);
        assert_eq!(start.ring_opacity, 1.0);

        run(&mut a, 1.0);
        let peak = a.state();
        assert!((peak.border_opacity - 1.0).abs() < 1e-3);
        assert!((peak.dot_scale - 1.2).abs() < 1e-3);
        assert!((peak.ring_scale - 1.3).abs() < 1e-3);
        assert!(peak.ring_opacity < 1e-3);

        // Still cycling long after the entrance finished
        run(&mut a, 8.0);
        let s = a.state();
        assert!((s.border_opacity - 1.0).abs() < 1e-2);
        assert!(s.ring_opacity < 1e-2);
    }

    #[test]
    fn test_ring_stays_hidden_on_return() {
        let mut a = Avatar::new(AvatarStatus::Online);
        run(&mut a, 1.5);
        let s = a.state();
        assert_eq!(s.ring_opacity, 0.0);
        assert!(s.ring_scale > 1.0 && s.ring_scale < 1.3);
    }

    #[test]
    fn test_offline_is_still() {
        let mut a = Avatar::new(AvatarStatus::Offline);
        run(&mut a, 1.3);
        let s = a.state();
        assert_eq!(s.scale, 1.0);
        assert_eq!(s.border_opacity, 1.0);
        assert_eq!(s.dot_scale, 1.0);
        assert_eq!(s.ring_opacity, 0.0);
        assert_eq!(AvatarStatus::Offline.color_class(), "bg-zinc-500");
    }

    #[test]
    fn test_restart_replays_entrance() {
        let mut a = Avatar::new(AvatarStatus::Away);
        run(&mut a, 1.0);
        a.restart();
        assert_eq!(a.state().scale, 0.0);
        assert_eq!(a.status(), AvatarStatus::Away);
    }
}
