//! Hover particle emitter
//!
//! While a card is hovered, particles appear one by one at staggered
//! intervals, float and pulse until the hover ends, then shrink out.
//!
//! Pending emissions live in an explicit schedule tagged with the hover
//! session's generation. Each `begin_hover` starts a new generation and
//! ending a session clears the schedule. `advance` only emits entries whose
//! generation matches the live session, so a stale emission can never spawn
//! onto an unhovered card.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::color::Rgb;
use super::easing::Ease;
use super::tween::{Tween, Yoyo};
use crate::consts::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterConfig {
    /// Upper bound on live particles for one hover session
    pub max_particles: usize,
    /// Seconds between staggered emissions
    pub stagger: f32,
    pub color: Rgb,
    pub size: f32,
    /// Full drift range per axis (px)
    pub drift_range: f32,
    pub float_min: f32,
    pub float_max: f32,
    pub pulse: f32,
    pub pulse_min_opacity: f32,
    pub entrance: f32,
    pub exit: f32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            max_particles: DEFAULT_PARTICLE_COUNT,
            stagger: PARTICLE_STAGGER,
            color: Rgb::GREEN,
            size: PARTICLE_SIZE_PX,
            drift_range: PARTICLE_DRIFT_PX,
            float_min: PARTICLE_FLOAT_MIN,
            float_max: PARTICLE_FLOAT_MAX,
            pulse: PARTICLE_PULSE,
            pulse_min_opacity: PARTICLE_PULSE_MIN_OPACITY,
            entrance: PARTICLE_ENTRANCE,
            exit: PARTICLE_EXIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

/// Lifecycle notifications for whoever mirrors particles into the DOM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleEvent {
    Spawned(ParticleId),
    Removed(ParticleId),
}

/// A single floating particle (card-local px)
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: ParticleId,
    /// Spawn point relative to the card's top-left corner
    pub origin: Vec2,
    /// Drift at the far end of the float leg
    pub drift: Vec2,
    /// Rotation (deg) at the far end of the float leg
    pub spin: f32,
    pub age: f32,
    entrance: Tween,
    float: Yoyo,
    pulse: Yoyo,
    exit: Option<Tween>,
}

impl Particle {
    fn advance(&mut self, dt: f32) {
        self.age += dt;
        self.entrance.advance(dt);
        self.float.advance(dt);
        self.pulse.advance(dt);
        if let Some(exit) = &mut self.exit {
            exit.advance(dt);
        }
    }

    fn begin_exit(&mut self, duration: f32) {
        if self.exit.is_none() {
            self.exit = Some(Tween::new(1.0, 0.0, duration, Ease::BackIn));
        }
    }

    fn exit_factor(&self) -> f32 {
        self.exit.map_or(1.0, |e| e.value())
    }

    pub fn position(&self) -> Vec2 {
        self.origin + self.drift * self.float.value()
    }

    pub fn rotation(&self) -> f32 {
        self.spin * self.float.value()
    }

    pub fn scale(&self) -> f32 {
        (self.entrance.value() * self.exit_factor()).max(0.0)
    }

    pub fn opacity(&self) -> f32 {
        crate::saturate(self.entrance.value() * self.pulse.value() * self.exit_factor())
    }

    pub fn is_exiting(&self) -> bool {
        self.exit.is_some()
    }

    fn is_gone(&self) -> bool {
        self.exit.is_some_and(|e| e.is_finished())
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingEmission {
    due: f32,
    generation: u64,
}

/// Per-card particle emitter
#[derive(Debug, Clone)]
pub struct ParticleEmitter {
    config: EmitterConfig,
    rng: Pcg32,
    clock: f32,
    generation: u64,
    hovering: bool,
    bounds: Vec2,
    pending: Vec<PendingEmission>,
    /// Particles of the live session
    active: Vec<Particle>,
    /// Particles playing their exit transition
    retiring: Vec<Particle>,
    next_id: u32,
    events: Vec<ParticleEvent>,
}

impl ParticleEmitter {
    pub fn new(config: EmitterConfig, seed: u64) -> Self {
        Self {
            config,
            rng: Pcg32::seed_from_u64(seed),
            clock: 0.0,
            generation: 0,
            hovering: false,
            bounds: Vec2::ZERO,
            pending: Vec::new(),
            active: Vec::new(),
            retiring: Vec::new(),
            next_id: 1,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Start a hover session over a card of `bounds` (width, height) and
    /// schedule the staggered burst.
    pub fn begin_hover(&mut self, bounds: Vec2) {
        if self.hovering {
            return;
        }
        self.hovering = true;
        self.generation += 1;
        self.bounds = bounds.max(Vec2::ZERO);
        let generation = self.generation;
        let start = self.clock;
        let stagger = self.config.stagger.max(0.0);
        self.pending.extend((0..self.config.max_particles).map(|i| PendingEmission {
            due: start + i as f32 * stagger,
            generation,
        }));
        log::debug!(
            "particle session {} scheduled {} emissions",
            generation,
            self.pending.len()
        );
    }

    /// End the hover session: cancel pending emissions and retire every
    /// live particle through its exit transition.
    pub fn end_hover(&mut self) {
        if !self.hovering {
            return;
        }
        self.hovering = false;
        self.pending.clear();
        let exit = self.config.exit;
        for mut particle in self.active.drain(..) {
            particle.begin_exit(exit);
            self.retiring.push(particle);
        }
    }

    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        self.clock += dt;

        if self.hovering {
            let clock = self.clock;
            let generation = self.generation;
            let due = self
                .pending
                .iter()
                .filter(|p| p.due <= clock && p.generation == generation)
                .count();
            self.pending
                .retain(|p| p.due > clock && p.generation == generation);
            for _ in 0..due {
                self.spawn();
            }
        } else {
            self.pending.clear();
        }

        for particle in self.active.iter_mut().chain(self.retiring.iter_mut()) {
            particle.advance(dt);
        }

        let events = &mut self.events;
        self.retiring.retain(|p| {
            if p.is_gone() {
                events.push(ParticleEvent::Removed(p.id));
                false
            } else {
                true
            }
        });
    }

    fn spawn(&mut self) {
        if !self.hovering || self.active.len() >= self.config.max_particles {
            return;
        }
        let c = self.config;
        let origin = Vec2::new(
            self.rng.random::<f32>() * self.bounds.x,
            self.rng.random::<f32>() * self.bounds.y,
        );
        let drift = Vec2::new(
            (self.rng.random::<f32>() - 0.5) * c.drift_range,
            (self.rng.random::<f32>() - 0.5) * c.drift_range,
        );
        let spin = self.rng.random::<f32>() * 360.0;
        let float_leg = c.float_min + self.rng.random::<f32>() * (c.float_max - c.float_min).max(0.0);

        let id = ParticleId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.active.push(Particle {
            id,
            origin,
            drift,
            spin,
            age: 0.0,
            entrance: Tween::new(0.0, 1.0, c.entrance, Ease::BackOut),
            float: Yoyo::new(0.0, 1.0, float_leg, Ease::Linear),
            pulse: Yoyo::new(1.0, c.pulse_min_opacity, c.pulse, Ease::Power2InOut),
            exit: None,
        });
        self.events.push(ParticleEvent::Spawned(id));
    }

    /// Live particles of the current session
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Everything currently on screen, exiting particles included
    pub fn visible(&self) -> impl Iterator<Item = &Particle> {
        self.active.iter().chain(self.retiring.iter())
    }

    pub fn visible_count(&self) -> usize {
        self.active.len() + self.retiring.len()
    }

    pub fn drain_events(&mut self) -> Vec<ParticleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Drop everything immediately (card unmounted)
    pub fn clear(&mut self) {
        self.hovering = false;
        self.pending.clear();
        for p in self.active.drain(..).chain(self.retiring.drain(..)) {
            self.events.push(ParticleEvent::Removed(p.id));
        }
    }
}
