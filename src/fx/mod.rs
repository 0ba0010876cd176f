//! Pointer-reactive effects engine and hero animations
//!
//! Everything here is pure and deterministic so it runs headless in tests:
//! - Time advances only through explicit `advance(dt)` calls (seconds)
//! - Randomness comes from seeded PCG generators
//! - No DOM, canvas or GPU dependencies

pub mod avatar;
pub mod card;
pub mod color;
pub mod easing;
pub mod marquee;
pub mod particles;
pub mod reveal;
pub mod spotlight;
pub mod trail;
pub mod tween;
pub mod typewriter;

pub use avatar::{Avatar, AvatarState, AvatarStatus};
pub use card::{
    CardGlow, CardId, CardPhysicsConfig, CardRect, CardVisualState, GlowColor, HoverCard,
    resolve_glow,
};
pub use color::Rgb;
pub use easing::Ease;
pub use marquee::{Marquee, TECH_ITEMS, TechItem};
pub use particles::{EmitterConfig, Particle, ParticleEmitter, ParticleEvent, ParticleId};
pub use reveal::{RevealState, StaggerReveal, spring_progress};
pub use spotlight::{SpotlightConfig, SpotlightState, SpotlightTracker, proximity_intensity};
pub use trail::{TrailBuffer, TrailConfig, TrailGrid, cover_uv, goo_radius_cells};
pub use tween::{Tween, Yoyo};
pub use typewriter::{Typewriter, TypewriterPhase, TypewriterTiming};
