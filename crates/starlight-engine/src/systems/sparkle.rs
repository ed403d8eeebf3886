//! Short-lived sparkles shed by flights.

use glam::Vec2;

use crate::api::config::SparkleConfig;
use crate::core::rng::RandomSource;
use crate::renderer::color::Color;
use crate::renderer::surface::{BlendMode, Surface};

/// A single sparkle particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sparkle {
    pub pos: Vec2,
    /// Displacement applied once per frame.
    pub vel: Vec2,
    pub radius: f32,
    pub born_at: f64,
    pub life: f64,
    pub hue: f32,
}

impl Sparkle {
    /// Fraction of life used up at `now`; 1.0 or more means expired.
    pub fn progress(&self, now: f64) -> f32 {
        if self.life <= 0.0 {
            return 1.0;
        }
        ((now - self.born_at) / self.life) as f32
    }

    /// `1 - progress`, floored at zero.
    pub fn alpha(&self, now: f64) -> f32 {
        (1.0 - self.progress(now)).max(0.0)
    }

    pub fn is_expired(&self, now: f64) -> bool {
        now - self.born_at >= self.life
    }
}

/// Owns all live sparkles. Reads flight positions only through the
/// arguments to [`SparkleSystem::try_emit`].
#[derive(Debug, Clone)]
pub struct SparkleSystem {
    config: SparkleConfig,
    sparkles: Vec<Sparkle>,
}

impl SparkleSystem {
    pub fn new(config: SparkleConfig) -> Self {
        Self {
            config,
            sparkles: Vec::with_capacity(256),
        }
    }

    /// Append one sparkle at `pos` with randomised velocity, radius and life.
    pub fn emit(&mut self, pos: Vec2, hue: f32, now: f64, rng: &mut dyn RandomSource) {
        let c = &self.config;
        let vel = Vec2::new(rng.symmetric(c.velocity_x), rng.symmetric(c.velocity_y));
        let radius = rng.range(c.radius.0, c.radius.1);
        let life = rng.range(c.life_ms.0, c.life_ms.1) as f64;
        self.sparkles.push(Sparkle {
            pos,
            vel,
            radius,
            born_at: now,
            life,
            hue,
        });
    }

    /// One emission attempt near `pos`: with probability `rate`, emit a sparkle
    /// jittered by up to `jitter` on each axis. Returns whether one was emitted.
    pub fn try_emit(&mut self, pos: Vec2, hue: f32, now: f64, rng: &mut dyn RandomSource) -> bool {
        if !rng.chance(self.config.rate) {
            return false;
        }
        let jitter = self.config.jitter;
        let at = pos + Vec2::new(rng.symmetric(jitter), rng.symmetric(jitter));
        self.emit(at, hue, now, rng);
        true
    }

    /// Drop sparkles whose life has run out at `now`.
    pub fn prune(&mut self, now: f64) {
        self.sparkles.retain(|s| !s.is_expired(now));
    }

    /// Prune, then move and draw every survivor under additive blending.
    /// Alpha falls linearly with age and the radius shrinks by up to `shrink`.
    pub fn step(&mut self, surface: &mut dyn Surface, now: f64) {
        self.prune(now);
        if self.sparkles.is_empty() {
            return;
        }

        let c = &self.config;
        surface.set_blend(BlendMode::Additive);
        for s in &mut self.sparkles {
            let tt = s.progress(now);
            s.pos += s.vel;
            let color = Color::hsla(s.hue, c.saturation, c.lightness, s.alpha(now) * c.alpha);
            surface.fill_circle(s.pos, s.radius * (1.0 - tt * c.shrink), color);
        }
        surface.set_blend(BlendMode::Alpha);
    }

    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn len(&self) -> usize {
        self.sparkles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sparkles.is_empty()
    }

    pub fn clear(&mut self) {
        self.sparkles.clear();
    }
}
