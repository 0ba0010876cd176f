//! Hover card physics
//!
//! Tilt, magnetic pull and border glow for a single bento card. The card
//! owns its visual state; pointer events retarget tweens and `advance`
//! moves them along.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::Rgb;
use super::easing::Ease;
use super::tween::Tween;
use crate::consts::*;

/// Stable handle for a registered card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

/// Card bounding box in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardRect {
    /// Top-left corner
    pub origin: Vec2,
    pub size: Vec2,
}

impl CardRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(left, top),
            size: Vec2::new(width, height),
        }
    }

    pub fn center(&self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    /// Zero-sized or non-finite rects carry no usable geometry
    pub fn is_empty(&self) -> bool {
        !(self.size.x > 0.0 && self.size.y > 0.0 && self.origin.is_finite() && self.size.is_finite())
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let local = p - self.origin;
        local.x >= 0.0 && local.y >= 0.0 && local.x <= self.size.x && local.y <= self.size.y
    }

    /// Pointer position relative to the top-left corner
    pub fn local(&self, p: Vec2) -> Vec2 {
        p - self.origin
    }

    /// Pointer position as a percentage of the card's width/height
    pub fn relative_percent(&self, p: Vec2) -> Vec2 {
        self.local(p) / self.size * 100.0
    }
}

/// Card accent color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlowColor {
    #[default]
    Green,
    Blue,
}

impl GlowColor {
    pub fn rgb(self) -> Rgb {
        match self {
            GlowColor::Green => Rgb::GREEN,
            GlowColor::Blue => Rgb::BLUE,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "green" => Some(GlowColor::Green),
            "blue" => Some(GlowColor::Blue),
            _ => None,
        }
    }
}

/// Border glow: intensity in [0, 1] and position in percent of the card
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardGlow {
    pub intensity: f32,
    pub x_pct: f32,
    pub y_pct: f32,
}

/// The spotlight's proximity glow, when active, overrides the card's own
/// hover glow.
pub fn resolve_glow(card: CardGlow, spotlight: Option<CardGlow>) -> CardGlow {
    spotlight.unwrap_or(card)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPhysicsConfig {
    pub tilt: bool,
    pub magnetism: bool,
    pub max_tilt_deg: f32,
    pub magnet_strength: f32,
}

impl Default for CardPhysicsConfig {
    fn default() -> Self {
        Self {
            tilt: true,
            magnetism: true,
            max_tilt_deg: MAX_TILT_DEG,
            magnet_strength: MAGNET_STRENGTH,
        }
    }
}

/// Snapshot applied to the visual layer
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CardVisualState {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub glow: CardGlow,
}

impl CardVisualState {
    pub fn is_neutral(&self) -> bool {
        self.rotate_x == 0.0
            && self.rotate_y == 0.0
            && self.offset_x == 0.0
            && self.offset_y == 0.0
            && self.glow.intensity == 0.0
    }

    /// CSS `transform` value
    pub fn transform_css(&self) -> String {
        format!(
            "perspective({}px) translate({:.2}px, {:.2}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            CARD_PERSPECTIVE_PX, self.offset_x, self.offset_y, self.rotate_x, self.rotate_y
        )
    }
}

/// Tilt angles (rotate_x, rotate_y) in degrees for a pointer at `local`
/// inside a card of `size`. Clamped to ±`max_tilt`.
pub fn tilt_angles(local: Vec2, size: Vec2, max_tilt: f32) -> (f32, f32) {
    let center = size * 0.5;
    if center.x <= 0.0 || center.y <= 0.0 {
        return (0.0, 0.0);
    }
    let rotate_x = ((local.y - center.y) / center.y) * -max_tilt;
    let rotate_y = ((local.x - center.x) / center.x) * max_tilt;
    (
        rotate_x.clamp(-max_tilt, max_tilt),
        rotate_y.clamp(-max_tilt, max_tilt),
    )
}

/// Magnetic offset in px toward the pointer
pub fn magnet_offset(local: Vec2, size: Vec2, strength: f32) -> Vec2 {
    (local - size * 0.5) * strength
}

/// One hover card
#[derive(Debug, Clone)]
pub struct HoverCard {
    pub id: CardId,
    config: CardPhysicsConfig,
    rect: CardRect,
    hovered: bool,
    rotate_x: Tween,
    rotate_y: Tween,
    offset_x: Tween,
    offset_y: Tween,
    glow: CardGlow,
}

impl HoverCard {
    pub fn new(id: CardId, config: CardPhysicsConfig, rect: CardRect) -> Self {
        Self {
            id,
            config,
            rect,
            hovered: false,
            rotate_x: Tween::settled(0.0),
            rotate_y: Tween::settled(0.0),
            offset_x: Tween::settled(0.0),
            offset_y: Tween::settled(0.0),
            glow: CardGlow::default(),
        }
    }

    pub fn rect(&self) -> CardRect {
        self.rect
    }

    /// Refresh geometry (layout, scroll or resize)
    pub fn set_rect(&mut self, rect: CardRect) {
        self.rect = rect;
    }

    pub fn config(&self) -> CardPhysicsConfig {
        self.config
    }

    pub fn set_config(&mut self, config: CardPhysicsConfig) {
        self.config = config;
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Returns true if this started a new hover session
    pub fn pointer_enter(&mut self) -> bool {
        if self.hovered {
            return false;
        }
        self.hovered = true;
        true
    }

    /// Pointer moved over the card (viewport coordinates)
    pub fn pointer_move(&mut self, pointer: Vec2) {
        if !self.hovered || self.rect.is_empty() || !pointer.is_finite() {
            return;
        }
        let local = self.rect.local(pointer);
        let pct = self.rect.relative_percent(pointer);
        self.glow = CardGlow {
            intensity: 1.0,
            x_pct: pct.x,
            y_pct: pct.y,
        };

        if self.config.tilt {
            let (rx, ry) = tilt_angles(local, self.rect.size, self.config.max_tilt_deg);
            self.rotate_x.retarget(rx, TILT_DURATION, Ease::Power2Out);
            self.rotate_y.retarget(ry, TILT_DURATION, Ease::Power2Out);
        }

        if self.config.magnetism {
            let offset = magnet_offset(local, self.rect.size, self.config.magnet_strength);
            self.offset_x.retarget(offset.x, MAGNET_DURATION, Ease::Power2Out);
            self.offset_y.retarget(offset.y, MAGNET_DURATION, Ease::Power2Out);
        }
    }

    /// Ends the hover session; returns true if the card was hovered
    pub fn pointer_leave(&mut self) -> bool {
        if !self.hovered {
            return false;
        }
        self.hovered = false;
        for tween in [
            &mut self.rotate_x,
            &mut self.rotate_y,
            &mut self.offset_x,
            &mut self.offset_y,
        ] {
            tween.retarget(0.0, CARD_RESET_DURATION, Ease::Power2Out);
        }
        self.glow.intensity = 0.0;
        true
    }

    pub fn advance(&mut self, dt: f32) {
        self.rotate_x.advance(dt);
        self.rotate_y.advance(dt);
        self.offset_x.advance(dt);
        self.offset_y.advance(dt);
    }

    /// True while any transform tween is still moving
    pub fn is_animating(&self) -> bool {
        !(self.rotate_x.is_finished()
            && self.rotate_y.is_finished()
            && self.offset_x.is_finished()
            && self.offset_y.is_finished())
    }

    pub fn glow(&self) -> CardGlow {
        self.glow
    }

    pub fn visual_state(&self) -> CardVisualState {
        CardVisualState {
            rotate_x: self.rotate_x.value(),
            rotate_y: self.rotate_y.value(),
            offset_x: self.offset_x.value(),
            offset_y: self.offset_y.value(),
            glow: self.glow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn card() -> HoverCard {
        HoverCard::new(
            CardId(1),
            CardPhysicsConfig::default(),
            CardRect::new(100.0, 50.0, 400.0, 300.0),
        )
    }

    #[test]
    fn test_tilt_at_corners() {
        let size = Vec2::new(400.0, 300.0);
        let (rx, ry) = tilt_angles(Vec2::ZERO, size, 5.0);
        assert!((rx - 5.0).abs() < 1e-5);
        assert!((ry + 5.0).abs() < 1e-5);
        let (rx, ry) = tilt_angles(size, size, 5.0);
        assert!((rx + 5.0).abs() < 1e-5);
        assert!((ry - 5.0).abs() < 1e-5);
        assert_eq!(tilt_angles(size * 0.5, size, 5.0), (0.0, 0.0));
    }

    #[test]
    fn test_tilt_clamped_outside_card() {
        let (rx, ry) = tilt_angles(Vec2::new(-1000.0, 5000.0), Vec2::new(100.0, 100.0), 5.0);
        assert_eq!(rx, -5.0);
        assert_eq!(ry, -5.0);
    }

    #[test]
    fn test_magnet_offset() {
        let o = magnet_offset(Vec2::new(300.0, 150.0), Vec2::new(400.0, 300.0), 0.02);
        assert!((o.x - 2.0).abs() < 1e-5);
        assert!(o.y.abs() < 1e-5);
    }

    #[test]
    fn test_move_sets_glow_and_tilt() {
        let mut c = card();
        c.pointer_enter();
        // 3/4 across, 1/4 down
        c.pointer_move(Vec2::new(400.0, 125.0));
        c.advance(1.0);
        let v = c.visual_state();
        assert_eq!(v.glow.intensity, 1.0);
        assert!((v.glow.x_pct - 75.0).abs() < 1e-4);
        assert!((v.glow.y_pct - 25.0).abs() < 1e-4);
        assert!((v.rotate_y - 2.5).abs() < 1e-4);
        assert!((v.rotate_x - 2.5).abs() < 1e-4);
        assert!((v.offset_x - 2.0).abs() < 1e-4);
        assert!((v.offset_y + 1.5).abs() < 1e-4);
    }

    #[test]
    fn test_move_without_enter_is_ignored() {
        let mut c = card();
        c.pointer_move(Vec2::new(400.0, 125.0));
        c.advance(1.0);
        assert!(c.visual_state().is_neutral());
    }

    #[test]
    fn test_leave_returns_to_neutral() {
        let mut c = card();
        c.pointer_enter();
        c.pointer_move(Vec2::new(110.0, 60.0));
        c.advance(0.05);
        assert!(c.pointer_leave());
        assert_eq!(c.visual_state().glow.intensity, 0.0);
        assert!(c.is_animating());
        c.advance(CARD_RESET_DURATION);
        let v = c.visual_state();
        assert!(v.is_neutral());
        assert_eq!((v.rotate_x, v.rotate_y, v.offset_x, v.offset_y), (0.0, 0.0, 0.0, 0.0));
        assert!(!c.is_animating());
    }

    #[test]
    fn test_disabled_tilt_and_magnetism_still_glow() {
        let mut c = HoverCard::new(
            CardId(2),
            CardPhysicsConfig {
                tilt: false,
                magnetism: false,
                ..Default::default()
            },
            CardRect::new(0.0, 0.0, 200.0, 200.0),
        );
        c.pointer_enter();
        c.pointer_move(Vec2::new(20.0, 180.0));
        c.advance(1.0);
        let v = c.visual_state();
        assert_eq!((v.rotate_x, v.rotate_y, v.offset_x, v.offset_y), (0.0, 0.0, 0.0, 0.0));
        assert_eq!(v.glow.intensity, 1.0);
        assert!((v.glow.x_pct - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_empty_rect_is_noop() {
        let mut c = HoverCard::new(CardId(3), CardPhysicsConfig::default(), CardRect::default());
        c.pointer_enter();
        c.pointer_move(Vec2::new(5.0, 5.0));
        c.advance(1.0);
        assert!(c.visual_state().is_neutral());
    }

    #[test]
    fn test_enter_leave_are_idempotent() {
        let mut c = card();
        assert!(c.pointer_enter());
        assert!(!c.pointer_enter());
        assert!(c.pointer_leave());
        assert!(!c.pointer_leave());
    }

    #[test]
    fn test_resolve_glow_prefers_spotlight() {
        let own = CardGlow {
            intensity: 1.0,
            x_pct: 10.0,
            y_pct: 10.0,
        };
        let spot = CardGlow {
            intensity: 0.4,
            x_pct: 50.0,
            y_pct: 60.0,
        };
        assert_eq!(resolve_glow(own, Some(spot)), spot);
        assert_eq!(resolve_glow(own, None), own);
    }

    #[test]
    fn test_transform_css() {
        let v = CardVisualState {
            rotate_x: 1.0,
            rotate_y: -2.0,
            offset_x: 3.0,
            offset_y: 0.5,
            glow: CardGlow::default(),
        };
        assert_eq!(
            v.transform_css(),
            "perspective(1000px) translate(3.00px, 0.50px) rotateX(1.000deg) rotateY(-2.000deg)"
        );
    }

    proptest! {
        #[test]
        fn prop_tilt_within_clamp(x in 0.0f32..400.0, y in 0.0f32..300.0) {
            let mut c = card();
            c.pointer_enter();
            c.pointer_move(Vec2::new(100.0 + x, 50.0 + y));
            for _ in 0..10 {
                c.advance(0.016);
                let v = c.visual_state();
                prop_assert!(v.rotate_x.abs() <= MAX_TILT_DEG + 1e-4);
                prop_assert!(v.rotate_y.abs() <= MAX_TILT_DEG + 1e-4);
            }
        }
    }
}
