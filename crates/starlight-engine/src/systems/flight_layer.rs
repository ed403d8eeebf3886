//! The flight canvas: wizard flights, their trails and their sparkles.

use crate::api::config::SkyConfig;
use crate::api::layer::Layer;
use crate::api::types::Viewport;
use crate::core::rng::RandomSource;
use crate::renderer::glyph::draw_wizard;
use crate::renderer::surface::Surface;
use crate::systems::flight::{Flight, FlightSystem};
use crate::systems::sparkle::SparkleSystem;
use crate::systems::spawner::Direction;

/// Composes [`FlightSystem`] and [`SparkleSystem`] onto one surface.
///
/// Per frame: clear, retire expired flights, then for each flight (oldest
/// first) advance it, attempt one sparkle at its position, draw its trail and,
/// while it is still moving, its body. Sparkles are pruned, moved and drawn
/// last so they sit on top.
///
/// A flight keeps shedding sparkles during its trailing phase, from the end
/// of its path, until it is retired.
#[derive(Debug, Clone)]
pub struct FlightLayer {
    flights: FlightSystem,
    sparkles: SparkleSystem,
    viewport: Viewport,
}

impl FlightLayer {
    pub fn new(config: &SkyConfig) -> Self {
        Self {
            flights: FlightSystem::new(config.flights.clone(), config.spawn.clone()),
            sparkles: SparkleSystem::new(config.sparkles.clone()),
            viewport: Viewport::default(),
        }
    }

    /// Spawn a flight at `now` using the current viewport.
    pub fn spawn(&mut self, now: f64, rng: &mut dyn RandomSource) -> Option<&Flight> {
        self.flights.spawn(self.viewport, now, rng)
    }

    pub fn spawn_towards(
        &mut self,
        direction: Direction,
        now: f64,
        rng: &mut dyn RandomSource,
    ) -> Option<&Flight> {
        self.flights.spawn_towards(direction, self.viewport, now, rng)
    }

    pub fn flights(&self) -> &FlightSystem {
        &self.flights
    }

    pub fn sparkles(&self) -> &SparkleSystem {
        &self.sparkles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

impl Layer for FlightLayer {
    fn resize(&mut self, viewport: Viewport, _rng: &mut dyn RandomSource) {
        self.viewport = viewport;
    }

    fn frame(&mut self, surface: &mut dyn Surface, now: f64, rng: &mut dyn RandomSource) {
        surface.clear(self.viewport.size());
        self.flights.retire(now);

        let height = self.viewport.height;
        let (config, flights) = self.flights.split_mut();
        for flight in flights {
            let sample = flight.advance(now, height, config);
            self.sparkles.try_emit(sample.position, flight.hue, now, rng);
            flight.trail.draw(surface, flight.hue);
            if sample.body_visible() {
                draw_wizard(surface, sample.position, sample.heading, sample.body_scale);
            }
        }

        self.sparkles.step(surface, now);
    }
}
