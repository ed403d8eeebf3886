use crate::api::config::SkyConfig;
use crate::api::layer::Layer;
use crate::api::types::Viewport;
use crate::core::rng::RandomSource;
use crate::core::time::{Clock, ManualClock};
use crate::renderer::surface::Surface;
use crate::systems::flight_layer::FlightLayer;
use crate::systems::spawner::{Direction, SpawnSchedule};
use crate::systems::starfield::StarField;

/// Headless driver for both layers.
///
/// Owns the star field, the flight layer, the spawn timetable, the clock and
/// the random source. Each call to [`Sky::frame`] reads the clock once, spawns
/// whatever fell due, then runs the star layer followed by the flight layer.
/// The browser bridge runs the two layers on separate loops instead; this
/// type is what tests and native hosts drive.
pub struct Sky<C: Clock, R: RandomSource> {
    clock: C,
    rng: R,
    stars: StarField,
    flights: FlightLayer,
    schedule: SpawnSchedule,
    viewport: Viewport,
    frames: u64,
}

impl<C: Clock, R: RandomSource> Sky<C, R> {
    pub fn new(config: SkyConfig, clock: C, rng: R) -> Self {
        let schedule = SpawnSchedule::new(clock.now(), &config.spawn);
        Self {
            stars: StarField::new(config.stars.clone()),
            flights: FlightLayer::new(&config),
            schedule,
            clock,
            rng,
            viewport: Viewport::default(),
            frames: 0,
        }
    }

    /// Resize both layers. The star batch is regenerated.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.stars.resize(viewport, &mut self.rng);
        self.flights.resize(viewport, &mut self.rng);
    }

    /// Run one display refresh. Returns how many flights were spawned.
    pub fn frame(&mut self, stars_surface: &mut dyn Surface, flights_surface: &mut dyn Surface) -> u32 {
        let now = self.clock.now();
        let mut spawned = 0;
        for _ in 0..self.schedule.poll(now) {
            if self.flights.spawn(now, &mut self.rng).is_some() {
                spawned += 1;
            }
        }

        self.stars.frame(stars_surface, now, &mut self.rng);
        self.flights.frame(flights_surface, now, &mut self.rng);
        self.frames += 1;
        spawned
    }

    /// Spawn a flight immediately, outside the timetable.
    pub fn spawn_now(&mut self) -> bool {
        let now = self.clock.now();
        self.flights.spawn(now, &mut self.rng).is_some()
    }

    pub fn spawn_towards(&mut self, direction: Direction) -> bool {
        let now = self.clock.now();
        self.flights.spawn_towards(direction, now, &mut self.rng).is_some()
    }

    /// Replace the repeating spawn cadence, counting from now.
    pub fn set_spawn_interval(&mut self, interval_ms: f64) {
        let now = self.clock.now();
        self.schedule.reschedule(now, interval_ms);
        log::info!("spawn interval set to {}ms", interval_ms);
    }

    pub fn stars(&self) -> &StarField {
        &self.stars
    }

    pub fn flights(&self) -> &FlightLayer {
        &self.flights
    }

    pub fn schedule(&self) -> &SpawnSchedule {
        &self.schedule
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl<R: RandomSource> Sky<ManualClock, R> {
    /// Advance the manual clock by `dt` milliseconds, then run one frame.
    pub fn tick(&mut self, dt: f64, stars_surface: &mut dyn Surface, flights_surface: &mut dyn Surface) -> u32 {
        self.clock.advance(dt);
        self.frame(stars_surface, flights_surface)
    }
}
