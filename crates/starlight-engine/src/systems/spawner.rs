//! Flight spawning: path randomisation and the spawn timetable.

use glam::Vec2;

use crate::api::config::SpawnConfig;
use crate::api::types::Viewport;
use crate::core::curve::QuadCurve;
use crate::core::rng::RandomSource;

/// Which screen edge a flight enters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    RightToLeft,
    LeftToRight,
}

impl Direction {
    /// Right-to-left with probability `config.right_to_left_chance`.
    pub fn random(config: &SpawnConfig, rng: &mut dyn RandomSource) -> Self {
        if rng.chance(config.right_to_left_chance) {
            Direction::RightToLeft
        } else {
            Direction::LeftToRight
        }
    }
}

/// Randomised geometry for one flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightPlan {
    pub direction: Direction,
    pub curve: QuadCurve,
    pub hue: f32,
}

impl FlightPlan {
    /// Plan a flight with a random direction. `None` for an empty viewport.
    pub fn random(config: &SpawnConfig, viewport: Viewport, rng: &mut dyn RandomSource) -> Option<Self> {
        if viewport.is_empty() {
            return None;
        }
        let direction = Direction::random(config, rng);
        Self::towards(direction, config, viewport, rng)
    }

    /// Plan a flight crossing in `direction`.
    ///
    /// Endpoints sit just off-screen; their heights are drawn independently from
    /// the start/end bands, and the control point lands high in the middle band
    /// so arcs bow upwards. `None` for an empty viewport.
    pub fn towards(
        direction: Direction,
        config: &SpawnConfig,
        viewport: Viewport,
        rng: &mut dyn RandomSource,
    ) -> Option<Self> {
        if viewport.is_empty() {
            return None;
        }
        let (w, h) = (viewport.width, viewport.height);
        let (start_x, end_x) = match direction {
            Direction::RightToLeft => (w + config.start_margin, -config.end_margin),
            Direction::LeftToRight => (-config.start_margin, w + config.end_margin),
        };

        let start = Vec2::new(start_x, rng.range(h * config.start_band.0, h * config.start_band.1));
        let end = Vec2::new(end_x, rng.range(h * config.end_band.0, h * config.end_band.1));
        let ctrl = Vec2::new(
            rng.range(w * config.ctrl_x_band.0, w * config.ctrl_x_band.1),
            rng.range(h * config.ctrl_y_band.0, h * config.ctrl_y_band.1),
        );
        let hue = rng.range(config.hue.0, config.hue.1);

        Some(Self {
            direction,
            curve: QuadCurve::new(start, end, ctrl),
            hue,
        })
    }
}

/// Spawn timetable: one delayed spawn, plus a repeating spawn every
/// `interval` counted from the schedule start. The two run independently,
/// so with the defaults spawns fall at 2.5s, 14s, 28s, 42s, ...
///
/// Missed repeats are dropped rather than replayed: after a long gap the
/// repeating spawn fires once and resumes on the next slot after `now`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSchedule {
    initial_due: Option<f64>,
    next_due: f64,
    interval: f64,
}

impl SpawnSchedule {
    pub fn new(start: f64, config: &SpawnConfig) -> Self {
        Self {
            initial_due: Some(start + config.initial_delay_ms),
            next_due: start + config.interval_ms,
            interval: config.interval_ms,
        }
    }

    /// Number of spawns due at `now`: at most one for the initial spawn and
    /// one for the repeating cadence. Due spawns are consumed, so a second
    /// poll at the same time returns 0.
    pub fn poll(&mut self, now: f64) -> u32 {
        let mut due = 0;
        if matches!(self.initial_due, Some(at) if now >= at) {
            self.initial_due = None;
            due += 1;
        }
        if self.interval > 0.0 && now >= self.next_due {
            let missed = ((now - self.next_due) / self.interval).floor();
            self.next_due += self.interval * (missed + 1.0);
            if self.next_due <= now {
                // Interval below the clock's resolution
                self.next_due = now + self.interval;
            }
            due += 1;
        }
        due
    }

    /// Replace the repeating cadence. The previous cadence is dropped before the
    /// new one starts, so no stale spawn fires; the next spawn falls at
    /// `now + interval`. A non-positive interval stops repeating spawns.
    pub fn reschedule(&mut self, now: f64, interval: f64) {
        self.interval = interval;
        self.next_due = now + interval;
    }

    /// Time of the next repeating spawn, if any.
    pub fn next_due(&self) -> Option<f64> {
        (self.interval > 0.0).then_some(self.next_due)
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }
}
