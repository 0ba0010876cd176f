//! Bento card DOM binding
//!
//! Each `.bento-card` element gets a `HoverCard` and a `ParticleEmitter`.
//! Styles are written once per frame from their state.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use super::{PlatformError, client_rect, set_style};
use crate::fx::{
    CardGlow, CardId, GlowColor, HoverCard, ParticleEmitter, ParticleEvent, ParticleId,
    resolve_glow,
};
use crate::settings::Settings;

pub const CARD_SELECTOR: &str = ".bento-card";
const PARTICLE_LAYER_CLASS: &str = "particle-layer";

pub struct CardView {
    pub card: HoverCard,
    pub emitter: ParticleEmitter,
    pub element: HtmlElement,
    particle_layer: Option<HtmlElement>,
    particle_nodes: HashMap<ParticleId, HtmlElement>,
    /// Last glow written, to skip redundant style writes
    last_glow: Option<CardGlow>,
    /// Resting transform already written
    transform_settled: bool,
}

impl CardView {
    pub fn new(
        id: CardId,
        element: Element,
        settings: &Settings,
        seed: u64,
    ) -> Result<Self, PlatformError> {
        let name = format!("card #{}", id.0);
        let element: HtmlElement = element
            .dyn_into()
            .map_err(|_| PlatformError::WrongElementType(name, "HtmlElement"))?;

        let glow_color = element
            .get_attribute("data-glow")
            .and_then(|g| GlowColor::from_str(&g))
            .unwrap_or_default();
        set_style(&element, "--glow-rgb", &glow_color.rgb().css_triple());
        set_style(&element, "--glow-intensity", "0");

        let particle_layer = element
            .query_selector(&format!(".{}", PARTICLE_LAYER_CLASS))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if particle_layer.is_none() {
            log::warn!("{} has no particle layer, particles disabled", name);
        }

        let rect = client_rect(&element);
        Ok(Self {
            card: HoverCard::new(id, settings.card_physics(), rect),
            emitter: ParticleEmitter::new(settings.emitter_config(glow_color), seed),
            element,
            particle_layer,
            particle_nodes: HashMap::new(),
            last_glow: None,
            transform_settled: false,
        })
    }

    pub fn id(&self) -> CardId {
        self.card.id
    }

    pub fn refresh_rect(&mut self) {
        self.card.set_rect(client_rect(&self.element));
    }

    pub fn pointer_enter(&mut self) {
        self.refresh_rect();
        if self.card.pointer_enter() {
            self.emitter.begin_hover(self.card.rect().size);
        }
    }

    pub fn pointer_move(&mut self, client: Vec2) {
        self.refresh_rect();
        self.card.pointer_move(client);
    }

    pub fn pointer_leave(&mut self) {
        if self.card.pointer_leave() {
            self.emitter.end_hover();
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.card.advance(dt);
        self.emitter.advance(dt);
    }

    /// Write transform, glow and particles. `spotlight` is the tracker's
    /// glow for this card while it is attached.
    pub fn apply(&mut self, document: &Document, spotlight: Option<CardGlow>) {
        // One last write once the tweens land, then nothing until they move
        if self.card.is_animating() || !self.transform_settled {
            let state = self.card.visual_state();
            set_style(&self.element, "transform", &state.transform_css());
            self.transform_settled = !self.card.is_animating();
        }

        let glow = resolve_glow(self.card.glow(), spotlight);
        if self.last_glow != Some(glow) {
            set_style(&self.element, "--glow-intensity", &format!("{:.2}", glow.intensity));
            set_style(&self.element, "--glow-x", &format!("{}%", glow.x_pct));
            set_style(&self.element, "--glow-y", &format!("{}%", glow.y_pct));
            self.last_glow = Some(glow);
        }

        self.sync_particles(document);
    }

    fn sync_particles(&mut self, document: &Document) {
        for event in self.emitter.drain_events() {
            match event {
                ParticleEvent::Spawned(id) => {
                    if let Some(node) = self.create_particle(document) {
                        self.particle_nodes.insert(id, node);
                    }
                }
                ParticleEvent::Removed(id) => {
                    if let Some(node) = self.particle_nodes.remove(&id) {
                        node.remove();
                    }
                }
            }
        }

        for particle in self.emitter.visible() {
            let Some(node) = self.particle_nodes.get(&particle.id) else {
                continue;
            };
            let offset = particle.position() - particle.origin;
            set_style(node, "left", &format!("{:.1}px", particle.origin.x));
            set_style(node, "top", &format!("{:.1}px", particle.origin.y));
            set_style(
                node,
                "transform",
                &format!(
                    "translate({:.2}px, {:.2}px) rotate({:.1}deg) scale({:.3})",
                    offset.x,
                    offset.y,
                    particle.rotation(),
                    particle.scale()
                ),
            );
            set_style(node, "opacity", &format!("{:.3}", particle.opacity()));
        }
    }

    fn create_particle(&self, document: &Document) -> Option<HtmlElement> {
        let layer = self.particle_layer.as_ref()?;
        let node = document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        node.set_class_name("particle");
        let config = self.emitter.config();
        let rgb = config.color;
        let size = format!("{}px", config.size);
        set_style(&node, "width", &size);
        set_style(&node, "height", &size);
        set_style(&node, "background", &rgb.css_rgba(1.0));
        set_style(&node, "box-shadow", &format!("0 0 6px {}", rgb.css_rgba(0.6)));
        set_style(&node, "opacity", "0");
        layer.append_child(&node).ok()?;
        Some(node)
    }

    /// Remove every particle node (leaving the home view)
    pub fn clear(&mut self) {
        self.card.pointer_leave();
        self.emitter.clear();
        self.emitter.drain_events();
        for (_, node) in self.particle_nodes.drain() {
            node.remove();
        }
    }
}
