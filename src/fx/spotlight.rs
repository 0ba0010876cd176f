//! Page-wide spotlight
//!
//! One tracker per page view. It owns the soft light that follows the
//! pointer and computes every registered card's glow from its distance to
//! the pointer. While attached it is the authoritative source of card glow.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::card::{CardGlow, CardId, CardRect};
use super::color::Rgb;
use super::easing::Ease;
use super::tween::Tween;
use crate::consts::{SPOTLIGHT_FOLLOW, SPOTLIGHT_OPACITY, SPOTLIGHT_RADIUS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpotlightConfig {
    pub enabled: bool,
    /// Falloff radius (px)
    pub radius: f32,
    pub color: Rgb,
    /// Seconds for the light to catch up with the pointer
    pub follow: f32,
    /// Opacity of the light while the pointer is on the page
    pub opacity: f32,
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: SPOTLIGHT_RADIUS,
            color: Rgb::WHITE,
            follow: SPOTLIGHT_FOLLOW,
            opacity: SPOTLIGHT_OPACITY,
        }
    }
}

/// Linear falloff: 1 at distance 0, 0 at and beyond `radius`
pub fn proximity_intensity(distance: f32, radius: f32) -> f32 {
    if !distance.is_finite() || radius.is_nan() || radius <= 0.0 {
        return 0.0;
    }
    if distance < radius {
        crate::saturate(1.0 - distance / radius)
    } else {
        0.0
    }
}

/// Where the light is drawn and how visible it is
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotlightState {
    pub position: Vec2,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
struct TrackedCard {
    id: CardId,
    rect: CardRect,
    glow: CardGlow,
}

#[derive(Debug, Clone)]
pub struct SpotlightTracker {
    config: SpotlightConfig,
    attached: bool,
    x: Tween,
    y: Tween,
    opacity: Tween,
    cards: Vec<TrackedCard>,
    /// Output of the latest pointer move
    glows: Vec<(CardId, CardGlow)>,
}

impl SpotlightTracker {
    pub fn new(config: SpotlightConfig) -> Self {
        Self {
            config,
            attached: false,
            x: Tween::settled(0.0),
            y: Tween::settled(0.0),
            opacity: Tween::settled(0.0),
            cards: Vec::new(),
            glows: Vec::new(),
        }
    }

    pub fn config(&self) -> &SpotlightConfig {
        &self.config
    }

    /// Begin tracking. Returns false when the tracker is disabled, in which
    /// case the caller should not register any listener.
    pub fn attach(&mut self) -> bool {
        if !self.config.enabled {
            log::debug!("spotlight disabled, not attaching");
            return false;
        }
        if !self.attached {
            self.attached = true;
            log::info!("spotlight attached ({} cards)", self.cards.len());
        }
        true
    }

    /// Stop tracking and hide the light. Card registrations are kept so a
    /// later `attach` resumes with the same cards.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            self.opacity.snap(0.0);
            self.glows.clear();
            for card in &mut self.cards {
                card.glow = CardGlow::default();
            }
            log::info!("spotlight detached");
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn register_card(&mut self, id: CardId, rect: CardRect) {
        match self.cards.iter_mut().find(|c| c.id == id) {
            Some(card) => card.rect = rect,
            None => self.cards.push(TrackedCard {
                id,
                rect,
                glow: CardGlow::default(),
            }),
        }
    }

    /// Refresh geometry after scroll/resize
    pub fn update_card_rect(&mut self, id: CardId, rect: CardRect) {
        if let Some(card) = self.cards.iter_mut().find(|c| c.id == id) {
            card.rect = rect;
        }
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// Handle a viewport pointer position. Returns the glow for every card
    /// with readable geometry; empty when detached.
    pub fn pointer_move(&mut self, p: Vec2) -> &[(CardId, CardGlow)] {
        self.glows.clear();
        if !self.attached || !p.is_finite() {
            return &self.glows;
        }

        let follow = self.config.follow;
        self.x.retarget(p.x, follow, Ease::Power2Out);
        self.y.retarget(p.y, follow, Ease::Power2Out);
        if self.opacity.target() != self.config.opacity {
            self.opacity
                .retarget(self.config.opacity, follow, Ease::Power2Out);
        }

        let radius = self.config.radius;
        for card in &mut self.cards {
            if card.rect.is_empty() {
                continue;
            }
            let distance = p.distance(card.rect.center());
            let pct = card.rect.relative_percent(p);
            card.glow = CardGlow {
                intensity: proximity_intensity(distance, radius),
                x_pct: pct.x,
                y_pct: pct.y,
            };
            self.glows.push((card.id, card.glow));
        }
        &self.glows
    }

    /// Pointer left the page: fade the light out, keep card glows
    pub fn pointer_leave(&mut self) {
        if self.attached {
            self.opacity.retarget(0.0, self.config.follow, Ease::Power2Out);
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.x.advance(dt);
        self.y.advance(dt);
        self.opacity.advance(dt);
    }

    pub fn state(&self) -> SpotlightState {
        SpotlightState {
            position: Vec2::new(self.x.value(), self.y.value()),
            opacity: if self.attached {
                crate::saturate(self.opacity.value())
            } else {
                0.0
            },
        }
    }

    /// Last glow computed for a card, if the tracker is driving it
    pub fn glow_for(&self, id: CardId) -> Option<CardGlow> {
        if !self.attached {
            return None;
        }
        self.cards.iter().find(|c| c.id == id).map(|c| c.glow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tracker() -> SpotlightTracker {
        let mut t = SpotlightTracker::new(SpotlightConfig::default());
        t.register_card(CardId(1), CardRect::new(0.0, 0.0, 200.0, 100.0));
        t.register_card(CardId(2), CardRect::new(1000.0, 0.0, 200.0, 100.0));
        t
    }

    #[test]
    fn test_intensity_endpoints() {
        assert_eq!(proximity_intensity(0.0, 400.0), 1.0);
        assert!((proximity_intensity(100.0, 400.0) - 0.75).abs() < 1e-6);
        assert_eq!(proximity_intensity(400.0, 400.0), 0.0);
        assert_eq!(proximity_intensity(900.0, 400.0), 0.0);
        assert_eq!(proximity_intensity(f32::NAN, 400.0), 0.0);
        assert_eq!(proximity_intensity(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_detached_produces_nothing() {
        let mut t = tracker();
        assert!(t.pointer_move(Vec2::new(100.0, 50.0)).is_empty());
        assert_eq!(t.glow_for(CardId(1)), None);
        assert_eq!(t.state().opacity, 0.0);
    }

    #[test]
    fn test_glow_per_card() {
        let mut t = tracker();
        assert!(t.attach());
        let glows = t.pointer_move(Vec2::new(100.0, 50.0)).to_vec();
        assert_eq!(glows.len(), 2);

        let (id, near) = glows[0];
        assert_eq!(id, CardId(1));
        assert_eq!(near.intensity, 1.0);
        assert_eq!((near.x_pct, near.y_pct), (50.0, 50.0));

        let (_, far) = glows[1];
        assert_eq!(far.intensity, 0.0);
    }

    #[test]
    fn test_light_follows_pointer() {
        let mut t = tracker();
        t.attach();
        t.pointer_move(Vec2::new(300.0, 200.0));
        t.advance(0.1);
        let mid = t.state();
        assert!(mid.position.x > 0.0 && mid.position.x < 300.0);
        t.advance(SPOTLIGHT_FOLLOW);
        let s = t.state();
        assert_eq!(s.position, Vec2::new(300.0, 200.0));
        assert_eq!(s.opacity, SPOTLIGHT_OPACITY);
    }

    #[test]
    fn test_empty_rect_skipped() {
        let mut t = tracker();
        t.register_card(CardId(3), CardRect::new(50.0, 50.0, 0.0, 0.0));
        t.attach();
        let ids: Vec<CardId> = t
            .pointer_move(Vec2::new(60.0, 60.0))
            .iter()
            .map(|(id, _)| *id)
            .collect();
        assert_eq!(ids, vec![CardId(1), CardId(2)]);
    }

    #[test]
    fn test_disabled_never_attaches() {
        let mut t = SpotlightTracker::new(SpotlightConfig {
            enabled: false,
            ..Default::default()
        });
        assert!(!t.attach());
        assert!(!t.is_attached());
    }

    #[test]
    fn test_detach_resets_glow() {
        let mut t = tracker();
        t.attach();
        t.pointer_move(Vec2::new(100.0, 50.0));
        t.advance(1.0);
        t.detach();
        assert_eq!(t.state().opacity, 0.0);
        assert_eq!(t.glow_for(CardId(1)), None);
        t.attach();
        assert_eq!(t.glow_for(CardId(1)), Some(CardGlow::default()));
    }

    proptest! {
        #[test]
        fn prop_intensity_monotonic(a in 0.0f32..1000.0, b in 0.0f32..1000.0, r in 1.0f32..800.0) {
            let (near, far) = if a <= b { (a, b) } else { (b, a) };
            let i_near = proximity_intensity(near, r);
            let i_far = proximity_intensity(far, r);
            prop_assert!(i_near >= i_far);
            prop_assert!((0.0..=1.0).contains(&i_near));
            if far >= r {
                prop_assert_eq!(i_far, 0.0);
            }
        }
    }
}
