/// Monotonic millisecond time source.
///
/// The browser bridge reads `performance.now()`; headless runs and tests use
/// [`ManualClock`] so frames can be driven deterministically.
pub trait Clock {
    /// Current time in milliseconds.
    fn now(&self) -> f64;
}

/// A clock that only moves when told to.
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self { now: start }
    }

    /// Advance by `dt` milliseconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f64) {
        if dt > 0.0 {
            self.now += dt;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_where_told() {
        let clock = ManualClock::new(1500.0);
        assert_eq!(clock.now(), 1500.0);
    }

    #[test]
    fn advance_accumulates() {
        let mut clock = ManualClock::default();
        clock.advance(16.0);
        clock.advance(16.5);
        assert_eq!(clock.now(), 32.5);
    }

    #[test]
    fn never_runs_backwards() {
        let mut clock = ManualClock::new(100.0);
        clock.advance(-50.0);
        assert_eq!(clock.now(), 100.0);
    }
}
