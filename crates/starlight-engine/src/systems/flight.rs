//! Flight simulation: eased motion along a quadratic curve, wobble,
//! heading, trail capture and lifetime-based retirement.

use std::f32::consts::TAU;

use glam::Vec2;

use crate::api::config::{FlightConfig, SpawnConfig};
use crate::api::types::Viewport;
use crate::core::curve::QuadCurve;
use crate::core::rng::RandomSource;
use crate::systems::spawner::{Direction, FlightPlan};
use crate::systems::trail::{Trail, TrailPoint};

/// Lifecycle of a flight relative to a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    /// Moving along the curve (`age ≤ duration`). The body is visible.
    Active,
    /// Parked at the end of the curve while the trail lingers.
    Trailing,
    /// Past `duration + trail_life`; due for removal.
    Expired,
}

/// Where a flight is at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightSample {
    /// Curve position with wobble applied.
    pub position: Vec2,
    /// Direction of travel in radians.
    pub heading: f32,
    pub age: f64,
    /// Eased progress in [0, 1].
    pub progress: f32,
    /// Glyph scale including flutter.
    pub body_scale: f32,
    pub phase: FlightPhase,
}

impl FlightSample {
    /// The body glyph is drawn only during the motion phase.
    pub fn body_visible(&self) -> bool {
        self.phase == FlightPhase::Active
    }
}

/// One wizard crossing the sky.
#[derive(Debug, Clone)]
pub struct Flight {
    pub born_at: f64,
    pub curve: QuadCurve,
    pub hue: f32,
    pub trail: Trail,
}

impl Flight {
    pub fn new(born_at: f64, curve: QuadCurve, hue: f32, max_trail: usize) -> Self {
        Self {
            born_at,
            curve,
            hue,
            trail: Trail::new(max_trail),
        }
    }

    pub fn age(&self, now: f64) -> f64 {
        now - self.born_at
    }

    pub fn phase(&self, now: f64, config: &FlightConfig) -> FlightPhase {
        let age = self.age(now);
        if age >= config.lifetime_ms() {
            FlightPhase::Expired
        } else if age <= config.duration_ms {
            FlightPhase::Active
        } else {
            FlightPhase::Trailing
        }
    }

    /// Evaluate the flight at `now` without mutating it.
    pub fn sample(&self, now: f64, viewport_height: f32, config: &FlightConfig) -> FlightSample {
        let age = self.age(now);
        let raw = if config.duration_ms > 0.0 {
            (age / config.duration_ms).clamp(0.0, 1.0) as f32
        } else {
            1.0
        };
        let t = config.easing.apply(raw);

        let age_ms = age as f32;
        let wobble = if config.wobble_period_ms > 0.0 {
            (age_ms / config.wobble_period_ms * TAU).sin() * viewport_height * config.wobble_amplitude
        } else {
            0.0
        };
        let flutter = if config.flutter_time_ms > 0.0 {
            (age_ms / config.flutter_time_ms).sin() * config.flutter_amplitude
        } else {
            0.0
        };

        FlightSample {
            position: self.curve.at(t) + Vec2::new(0.0, wobble),
            heading: self.curve.heading(t),
            age,
            progress: t,
            body_scale: config.glyph_scale * (1.0 + flutter),
            phase: self.phase(now, config),
        }
    }

    /// Sample at `now` and prepend the wobbled position to the trail.
    pub fn advance(&mut self, now: f64, viewport_height: f32, config: &FlightConfig) -> FlightSample {
        let sample = self.sample(now, viewport_height, config);
        self.trail.push(TrailPoint {
            pos: sample.position,
            captured_at: now,
        });
        sample
    }
}

/// Owns every live flight.
#[derive(Debug, Clone)]
pub struct FlightSystem {
    config: FlightConfig,
    spawn: SpawnConfig,
    flights: Vec<Flight>,
}

impl FlightSystem {
    pub fn new(config: FlightConfig, spawn: SpawnConfig) -> Self {
        Self {
            config,
            spawn,
            flights: Vec::with_capacity(4),
        }
    }

    /// Spawn a flight with a random direction. Returns `None` (and spawns
    /// nothing) while the viewport is empty.
    pub fn spawn(&mut self, viewport: Viewport, now: f64, rng: &mut dyn RandomSource) -> Option<&Flight> {
        let plan = FlightPlan::random(&self.spawn, viewport, rng);
        self.launch(plan, now)
    }

    /// Spawn a flight crossing in a fixed direction.
    pub fn spawn_towards(
        &mut self,
        direction: Direction,
        viewport: Viewport,
        now: f64,
        rng: &mut dyn RandomSource,
    ) -> Option<&Flight> {
        let plan = FlightPlan::towards(direction, &self.spawn, viewport, rng);
        self.launch(plan, now)
    }

    fn launch(&mut self, plan: Option<FlightPlan>, now: f64) -> Option<&Flight> {
        let Some(plan) = plan else {
            log::debug!("flight spawn skipped: empty viewport");
            return None;
        };
        log::info!(
            "wizard spawned: {:?}, hue {:.0}, {} in flight",
            plan.direction,
            plan.hue,
            self.flights.len() + 1
        );
        self.flights
            .push(Flight::new(now, plan.curve, plan.hue, self.config.max_trail));
        self.flights.last()
    }

    /// Drop every flight whose age has reached `duration + trail_life`.
    /// Returns how many were removed.
    pub fn retire(&mut self, now: f64) -> usize {
        let before = self.flights.len();
        let lifetime = self.config.lifetime_ms();
        self.flights.retain(|f| f.age(now) < lifetime);
        before - self.flights.len()
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    /// Config and flights together, so callers can advance flights in place.
    pub fn split_mut(&mut self) -> (&FlightConfig, &mut [Flight]) {
        (&self.config, &mut self.flights)
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::Rng;

    fn straight_flight(born_at: f64) -> Flight {
        Flight::new(
            born_at,
            QuadCurve::new(Vec2::new(1140.0, 300.0), Vec2::new(-160.0, 300.0), Vec2::new(490.0, 300.0)),
            250.0,
            90,
        )
    }

    fn still_config() -> FlightConfig {
        FlightConfig {
            wobble_amplitude: 0.0,
            ..FlightConfig::default()
        }
    }

    #[test]
    fn phases_follow_age() {
        let f = straight_flight(1000.0);
        let c = FlightConfig::default();
        assert_eq!(f.phase(1000.0, &c), FlightPhase::Active);
        assert_eq!(f.phase(6200.0, &c), FlightPhase::Active);
        assert_eq!(f.phase(6201.0, &c), FlightPhase::Trailing);
        assert_eq!(f.phase(7999.0, &c), FlightPhase::Trailing);
        assert_eq!(f.phase(8000.0, &c), FlightPhase::Expired);
    }

    #[test]
    fn starts_and_ends_on_the_curve_endpoints() {
        let f = straight_flight(0.0);
        let c = still_config();
        assert_eq!(f.sample(0.0, 800.0, &c).position, f.curve.start);
        assert_eq!(f.sample(5200.0, 800.0, &c).position, f.curve.end);
        // Trailing phase stays parked at the end
        assert_eq!(f.sample(6000.0, 800.0, &c).position, f.curve.end);
    }

    #[test]
    fn progress_is_eased() {
        let f = straight_flight(0.0);
        let c = FlightConfig::default();
        assert_eq!(f.sample(2600.0, 800.0, &c).progress, 0.5);
        // Quarter of the time covers only an eighth of the progress
        assert!((f.sample(1300.0, 800.0, &c).progress - 0.125).abs() < 1e-6);
    }

    #[test]
    fn wobble_is_vertical_and_bounded() {
        let f = straight_flight(0.0);
        let c = FlightConfig::default();
        let still = still_config();
        for ms in (0..5200).step_by(37) {
            let now = ms as f64;
            let wobbly = f.sample(now, 1000.0, &c).position;
            let flat = f.sample(now, 1000.0, &still).position;
            assert_eq!(wobbly.x, flat.x);
            assert!((wobbly.y - flat.y).abs() <= 20.0 + 1e-3);
        }
        // Quarter period: full amplitude of 2% of the height
        let peak = f.sample(90.0, 1000.0, &c).position.y - f.sample(90.0, 1000.0, &still).position.y;
        assert!((peak - 20.0).abs() < 1e-2, "peak was {}", peak);
    }

    #[test]
    fn heading_points_left_for_a_right_to_left_crossing() {
        let f = straight_flight(0.0);
        let h = f.sample(1000.0, 800.0, &still_config()).heading;
        assert!((h.abs() - std::f32::consts::PI).abs() < 1e-3, "heading {}", h);
    }

    #[test]
    fn flutter_stays_within_three_percent() {
        let f = straight_flight(0.0);
        let c = FlightConfig::default();
        for ms in (0..5200).step_by(13) {
            let s = f.sample(ms as f64, 800.0, &c).body_scale;
            assert!(s >= 0.97 - 1e-6 && s <= 1.03 + 1e-6, "scale {}", s);
        }
    }

    #[test]
    fn body_visible_only_while_moving() {
        let f = straight_flight(0.0);
        let c = FlightConfig::default();
        assert!(f.sample(5200.0, 800.0, &c).body_visible());
        assert!(!f.sample(5200.5, 800.0, &c).body_visible());
    }

    #[test]
    fn advance_prepends_to_a_bounded_trail() {
        let mut f = straight_flight(0.0);
        let c = FlightConfig::default();
        for frame in 0..400 {
            let now = frame as f64 * 16.0;
            let s = f.advance(now, 800.0, &c);
            assert_eq!(f.trail.newest().unwrap().pos, s.position);
            assert_eq!(f.trail.newest().unwrap().captured_at, now);
            assert!(f.trail.len() <= 90);
        }
        assert_eq!(f.trail.len(), 90);
    }

    #[test]
    fn retire_removes_exactly_at_lifetime() {
        let mut system = FlightSystem::new(FlightConfig::default(), SpawnConfig::default());
        let mut rng = Rng::new(9);
        system.spawn(Viewport::new(1280.0, 720.0), 1000.0, &mut rng);
        assert_eq!(system.retire(7999.999), 0);
        assert_eq!(system.len(), 1);
        assert_eq!(system.retire(8000.0), 1);
        assert!(system.is_empty());
    }

    #[test]
    fn spawn_skips_empty_viewport() {
        let mut system = FlightSystem::new(FlightConfig::default(), SpawnConfig::default());
        let mut rng = Rng::new(9);
        assert!(system.spawn(Viewport::new(0.0, 0.0), 0.0, &mut rng).is_none());
        assert!(system.is_empty());
    }

    #[test]
    fn spawn_towards_places_endpoints_off_screen() {
        let mut system = FlightSystem::new(FlightConfig::default(), SpawnConfig::default());
        let mut rng = Rng::new(9);
        let f = system
            .spawn_towards(Direction::RightToLeft, Viewport::new(1000.0, 700.0), 50.0, &mut rng)
            .unwrap();
        assert_eq!(f.curve.start.x, 1140.0);
        assert_eq!(f.curve.end.x, -160.0);
        assert_eq!(f.born_at, 50.0);
        assert!(f.hue >= 235.0 && f.hue <= 275.0);
        assert!(f.trail.is_empty());
    }
}
