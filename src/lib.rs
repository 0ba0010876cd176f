//! bento-fx - personal landing page with pointer-reactive effects
//!
//! Core modules:
//! - `fx`: Deterministic effects engine (card physics, particles, spotlight,
//!   typewriter, pixel trail, marquee, avatar, staggered entrance)
//! - `renderer`: WebGPU pixel-trail pipeline
//! - `platform`: Browser DOM wiring (wasm32 only)
//! - `settings`: Visual configuration surface
//! - `i18n`: Polish/English translation tables
//! - `router`: Hash routes for the home page and the two sub-pages
//! - `clipboard`: Copy-email button state

pub mod clipboard;
pub mod fx;
pub mod i18n;
#[cfg(target_arch = "wasm32")]
pub mod platform;
pub mod renderer;
pub mod router;
pub mod settings;

pub use i18n::{Language, LanguageContext, Translations};
pub use router::Route;
pub use settings::Settings;

/// Effect tuning constants
pub mod consts {
    /// Maximum card tilt in degrees (either axis)
    pub const MAX_TILT_DEG: f32 = 5.0;
    /// Magnetic pull: offset = displacement from center * strength
    pub const MAGNET_STRENGTH: f32 = 0.02;
    /// Tilt follows the pointer over this many seconds
    pub const TILT_DURATION: f32 = 0.1;
    /// Magnetic offset follows the pointer over this many seconds
    pub const MAGNET_DURATION: f32 = 0.3;
    /// Return-to-neutral duration after pointer-leave
    pub const CARD_RESET_DURATION: f32 = 0.5;
    /// CSS perspective applied to tilted cards (px)
    pub const CARD_PERSPECTIVE_PX: f32 = 1000.0;

    /// Particles per hover session
    pub const DEFAULT_PARTICLE_COUNT: usize = 12;
    /// Upper bound on particles per hover session
    pub const MAX_PARTICLE_COUNT: usize = 64;
    /// Delay between staggered particle emissions (seconds)
    pub const PARTICLE_STAGGER: f32 = 0.1;
    /// Particle square size (px)
    pub const PARTICLE_SIZE_PX: f32 = 4.0;
    /// Full drift range per axis (px), centered on the spawn point
    pub const PARTICLE_DRIFT_PX: f32 = 60.0;
    /// Entrance and exit transitions (seconds)
    pub const PARTICLE_ENTRANCE: f32 = 0.3;
    pub const PARTICLE_EXIT: f32 = 0.3;
    /// Float leg duration range (seconds)
    pub const PARTICLE_FLOAT_MIN: f32 = 2.0;
    pub const PARTICLE_FLOAT_MAX: f32 = 4.0;
    /// Pulse leg duration and low point
    pub const PARTICLE_PULSE: f32 = 1.5;
    pub const PARTICLE_PULSE_MIN_OPACITY: f32 = 0.3;

    /// Spotlight proximity radius (px)
    pub const SPOTLIGHT_RADIUS: f32 = 400.0;
    /// Spotlight follow smoothing (seconds)
    pub const SPOTLIGHT_FOLLOW: f32 = 0.3;
    /// Spotlight overlay opacity while tracking
    pub const SPOTLIGHT_OPACITY: f32 = 0.25;

    /// Trail decay buffer resolution (cells per side)
    pub const TRAIL_TEXTURE_SIZE: usize = 512;
    /// Rendered pixel grid (cells per side)
    pub const TRAIL_GRID_SIZE: usize = 100;
    /// Stamp radius as a fraction of the buffer size
    pub const TRAIL_RADIUS: f32 = 0.1;
    /// Seconds until a visited cell fades out completely
    pub const TRAIL_MAX_AGE: f32 = 0.45;
    /// Interpolated stamps per half radius of pointer travel
    pub const TRAIL_INTERPOLATE: f32 = 2.7;
    /// Goo blur strength (screen px)
    pub const GOO_STRENGTH: f32 = 5.0;
    /// Device pixel ratio clamp for the trail canvas
    pub const MIN_DPR: f64 = 1.0;
    pub const MAX_DPR: f64 = 2.0;

    /// Marquee: seconds for one group to scroll its full width
    pub const MARQUEE_PERIOD: f32 = 40.0;

    /// Avatar scale-in (seconds)
    pub const AVATAR_ENTRANCE: f32 = 0.5;
    /// One full border/dot/ring pulse (seconds)
    pub const AVATAR_PULSE_PERIOD: f32 = 2.0;

    /// Hero entrance: first item delay and gap between items (seconds)
    pub const REVEAL_DELAY: f32 = 0.1;
    pub const REVEAL_STAGGER: f32 = 0.15;
    /// Items rise into place from this far below (px)
    pub const REVEAL_OFFSET_PX: f32 = 20.0;
    /// Spring time after which an item is considered at rest (seconds)
    pub const REVEAL_SETTLE: f32 = 1.5;
    pub const SPRING_STIFFNESS: f32 = 100.0;
    pub const SPRING_DAMPING: f32 = 12.0;

    /// Copy-email "copied" label duration (seconds)
    pub const COPIED_LABEL_DURATION: f32 = 2.0;
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp to [0, 1], mapping NaN to 0
#[inline]
pub fn saturate(x: f32) -> f32 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}
