//! Easing curves
//!
//! Map normalized time in [0, 1] to progress. `power2` is the cubic family
//! and `back` overshoots by 1.7, matching the names web animation code uses.

use serde::{Deserialize, Serialize};

/// Overshoot constant for the back curves
const BACK_OVERSHOOT: f32 = 1.7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    Power2Out,
    Power2InOut,
    BackOut,
    BackIn,
    SineOut,
}

impl Ease {
    /// Evaluate the curve. Input is clamped to [0, 1]; NaN is treated as 0.
    pub fn apply(self, t: f32) -> f32 {
        let t = crate::saturate(t);
        match self {
            Ease::Linear => t,
            Ease::Power2Out => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Ease::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Ease::BackOut => {
                let c3 = BACK_OVERSHOOT + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u * u * u + BACK_OVERSHOOT * u * u
            }
            Ease::BackIn => {
                let c3 = BACK_OVERSHOOT + 1.0;
                c3 * t * t * t - BACK_OVERSHOOT * t * t
            }
            Ease::SineOut => (t * std::f32::consts::FRAC_PI_2).sin(),
        }
    }
}
