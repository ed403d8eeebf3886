//! Twinkling ambient star field.

use glam::Vec2;

use crate::api::config::StarFieldConfig;
use crate::api::layer::Layer;
use crate::api::types::Viewport;
use crate::core::rng::{clamp, RandomSource};
use crate::renderer::color::Color;
use crate::renderer::surface::Surface;

/// A single background star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub radius: f32,
    pub opacity: f32,
    /// Scales the per-frame opacity random walk.
    pub twinkle: f32,
}

/// Owns the star batch for one viewport. The batch is regenerated wholesale
/// on resize rather than adjusted.
#[derive(Debug, Clone)]
pub struct StarField {
    config: StarFieldConfig,
    viewport: Viewport,
    stars: Vec<Star>,
}

impl StarField {
    pub fn new(config: StarFieldConfig) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            stars: Vec::new(),
        }
    }

    /// `min(max_stars, floor(width·height / area_per_star))`, or 0 for an
    /// empty viewport.
    pub fn star_count(config: &StarFieldConfig, viewport: Viewport) -> usize {
        if viewport.is_empty() || config.area_per_star <= 0.0 {
            return 0;
        }
        let area = viewport.width as f64 * viewport.height as f64;
        let count = (area / config.area_per_star as f64).floor() as usize;
        count.min(config.max_stars)
    }

    /// Replace the whole batch with fresh stars scattered over `viewport`.
    pub fn init_stars(&mut self, viewport: Viewport, rng: &mut dyn RandomSource) {
        let count = Self::star_count(&self.config, viewport);
        let c = &self.config;
        self.viewport = viewport;
        self.stars.clear();
        self.stars.extend((0..count).map(|_| Star {
            pos: Vec2::new(rng.next_unit() * viewport.width, rng.next_unit() * viewport.height),
            radius: rng.range(c.radius.0, c.radius.1),
            opacity: rng.range(c.initial_opacity.0, c.initial_opacity.1),
            twinkle: rng.range(c.twinkle.0, c.twinkle.1),
        }));
        log::debug!(
            "star field regenerated: {} stars for {}x{}",
            count,
            viewport.width,
            viewport.height
        );
    }

    /// Random-walk each star's opacity, clamp it, then draw it as a white disc.
    pub fn tick(&mut self, surface: &mut dyn Surface, rng: &mut dyn RandomSource) {
        let (lo, hi) = self.config.opacity_bounds;
        let step = self.config.twinkle_step;
        for star in &mut self.stars {
            star.opacity += (rng.next_unit() - 0.5) * step * star.twinkle;
            star.opacity = clamp(star.opacity, lo, hi);
            surface.fill_circle(star.pos, star.radius, Color::WHITE.with_alpha(star.opacity));
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Layer for StarField {
    fn resize(&mut self, viewport: Viewport, rng: &mut dyn RandomSource) {
        self.init_stars(viewport, rng);
    }

    fn frame(&mut self, surface: &mut dyn Surface, _now: f64, rng: &mut dyn RandomSource) {
        surface.clear(self.viewport.size());
        self.tick(surface, rng);
    }
}
