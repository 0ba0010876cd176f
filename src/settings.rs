//! Effect settings
//!
//! Read once at startup from an inline JSON block in the page:
//! `<script id="fx-settings" type="application/json">{ ... }</script>`.
//! Every field is optional; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::fx::{
    AvatarStatus, CardPhysicsConfig, Ease, EmitterConfig, GlowColor, Rgb, SpotlightConfig, TrailConfig,
    TypewriterTiming,
};
use crate::i18n::Language;

/// Id of the inline settings script
pub const SETTINGS_ELEMENT_ID: &str = "fx-settings";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Language ===
    /// Language shown on first load
    pub language: Language,

    // === Cards ===
    /// 3D tilt toward the pointer
    pub tilt: bool,
    /// Magnetic pull toward the pointer
    pub magnetism: bool,
    /// Hover particle bursts
    pub particles: bool,
    /// Particles per hover session
    pub particle_count: usize,

    // === Spotlight ===
    pub spotlight: bool,
    pub spotlight_radius: f32,
    pub spotlight_color: Rgb,

    // === Pixel trail ===
    pub pixel_trail: bool,
    /// Rendered cells per side
    pub grid_size: usize,
    /// Stamp radius as a fraction of the trail buffer
    pub trail_size: f32,
    pub max_age_ms: u32,
    pub interpolate: f32,
    pub trail_ease: Ease,
    pub trail_color: Rgb,
    pub goo_enabled: bool,
    /// Goo blur strength (screen px)
    pub goo_strength: f32,

    // === Typewriter (ms) ===
    pub typing_speed_ms: u32,
    pub deleting_speed_ms: u32,
    pub delay_between_words_ms: u32,

    // === Hero ===
    pub avatar_status: AvatarStatus,

    // === Accessibility ===
    /// Turns off tilt, magnetism, particles and the trail, and skips the
    /// hero entrance
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::Pl,

            tilt: true,
            magnetism: true,
            particles: true,
            particle_count: DEFAULT_PARTICLE_COUNT,

            spotlight: true,
            spotlight_radius: SPOTLIGHT_RADIUS,
            spotlight_color: Rgb::WHITE,

            pixel_trail: true,
            grid_size: TRAIL_GRID_SIZE,
            trail_size: TRAIL_RADIUS,
            max_age_ms: (TRAIL_MAX_AGE * 1000.0).round() as u32,
            interpolate: TRAIL_INTERPOLATE,
            trail_ease: Ease::Linear,
            trail_color: Rgb::TRAIL,
            goo_enabled: true,
            goo_strength: GOO_STRENGTH,

            // Hero roles line
            typing_speed_ms: 40,
            deleting_speed_ms: 20,
            delay_between_words_ms: 3000,

            avatar_status: AvatarStatus::Online,

            reduced_motion: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Parse, falling back to defaults on bad input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("invalid fx settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Effective tilt (respects reduced_motion)
    pub fn effective_tilt(&self) -> bool {
        self.tilt && !self.reduced_motion
    }

    /// Effective magnetism (respects reduced_motion)
    pub fn effective_magnetism(&self) -> bool {
        self.magnetism && !self.reduced_motion
    }

    /// Effective particle cap; zero when particles are off
    pub fn effective_particle_count(&self) -> usize {
        if !self.particles || self.reduced_motion {
            0
        } else {
            self.particle_count.min(MAX_PARTICLE_COUNT)
        }
    }

    /// Effective pixel trail (respects reduced_motion)
    pub fn effective_pixel_trail(&self) -> bool {
        self.pixel_trail && !self.reduced_motion && self.grid_size > 0
    }

    pub fn card_physics(&self) -> CardPhysicsConfig {
        CardPhysicsConfig {
            tilt: self.effective_tilt(),
            magnetism: self.effective_magnetism(),
            ..Default::default()
        }
    }

    /// Emitter for a card; particles take the card's accent color
    pub fn emitter_config(&self, glow: GlowColor) -> EmitterConfig {
        EmitterConfig {
            max_particles: self.effective_particle_count(),
            color: glow.rgb(),
            ..Default::default()
        }
    }

    pub fn spotlight_config(&self) -> SpotlightConfig {
        SpotlightConfig {
            enabled: self.spotlight,
            radius: self.spotlight_radius,
            color: self.spotlight_color,
            ..Default::default()
        }
    }

    pub fn trail_config(&self) -> TrailConfig {
        TrailConfig {
            radius: self.trail_size,
            max_age: self.max_age_ms as f32 / 1000.0,
            interpolate: self.interpolate,
            ease: self.trail_ease,
            ..Default::default()
        }
    }

    pub fn typewriter_timing(&self) -> TypewriterTiming {
        TypewriterTiming::from_millis(
            self.typing_speed_ms,
            self.deleting_speed_ms,
            self.delay_between_words_ms,
        )
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = web_sys::window();
        let json = window
            .as_ref()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(SETTINGS_ELEMENT_ID))
            .and_then(|el| el.text_content());

        let mut settings = match json {
            Some(json) => {
                let settings = Self::from_json_or_default(&json);
                log::info!("Loaded fx settings from page");
                settings
            }
            None => {
                log::info!("Using default fx settings");
                Self::default()
            }
        };

        // The OS-level preference can only turn reduced motion on
        let prefers_reduced = window
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        if prefers_reduced && !settings.reduced_motion {
            log::info!("prefers-reduced-motion is set");
            settings.reduced_motion = true;
        }
        settings
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let s = Settings::from_json(r##"{ "grid_size": 40, "trail_color": "#ff0000" }"##).unwrap();
        assert_eq!(s.grid_size, 40);
        assert_eq!(s.trail_color, Rgb::new(255, 0, 0));
        assert_eq!(s.particle_count, DEFAULT_PARTICLE_COUNT);
        assert!(s.goo_enabled);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let s = Settings::from_json(r#"{ "sparkles": true, "tilt": false }"#).unwrap();
        assert!(!s.tilt);
    }

    #[test]
    fn test_avatar_status() {
        assert_eq!(Settings::default().avatar_status, AvatarStatus::Online);
        let s = Settings::from_json(r#"{ "avatar_status": "away" }"#).unwrap();
        assert_eq!(s.avatar_status, AvatarStatus::Away);
        assert!(Settings::from_json(r#"{ "avatar_status": "busy" }"#).is_err());
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert_eq!(Settings::from_json_or_default("{ nope"), Settings::default());
        assert!(Settings::from_json(r#"{ "trail_color": "green" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let s = Settings {
            language: Language::En,
            trail_ease: Ease::SineOut,
            reduced_motion: true,
            ..Default::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_reduced_motion_disables_motion_effects() {
        let s = Settings {
            reduced_motion: true,
            ..Default::default()
        };
        assert!(!s.effective_tilt());
        assert!(!s.effective_magnetism());
        assert_eq!(s.effective_particle_count(), 0);
        assert!(!s.effective_pixel_trail());
        let card = s.card_physics();
        assert!(!card.tilt && !card.magnetism);
        assert_eq!(s.emitter_config(GlowColor::Blue).max_particles, 0);
        // spotlight is not motion-heavy and stays on
        assert!(s.spotlight_config().enabled);
    }

    #[test]
    fn test_particle_count_is_capped() {
        let s = Settings::from_json(r#"{ "particle_count": 4000000000 }"#).unwrap();
        assert_eq!(s.effective_particle_count(), MAX_PARTICLE_COUNT);
        assert_eq!(s.emitter_config(GlowColor::Green).max_particles, MAX_PARTICLE_COUNT);
        let s = Settings {
            particle_count: 20,
            ..Default::default()
        };
        assert_eq!(s.effective_particle_count(), 20);
    }

    #[test]
    fn test_derived_configs() {
        let s = Settings::default();
        let trail = s.trail_config();
        assert!((trail.max_age - TRAIL_MAX_AGE).abs() < 1e-6);
        assert_eq!(trail.size, TRAIL_TEXTURE_SIZE);
        assert_eq!(s.emitter_config(GlowColor::Blue).color, Rgb::BLUE);
        assert_eq!(s.typewriter_timing(), TypewriterTiming::HERO);
        assert_eq!(s.language, Language::Pl);
    }
}
