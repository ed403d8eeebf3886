use wasm_bindgen::JsValue;
use web_sys::{Performance, Window};

use starlight_engine::{Clock, RandomSource};

/// Largest f32 below 1.0. `Math.random()` can round up to 1.0 when narrowed.
const BELOW_ONE: f32 = 0.999_999_94;

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

/// Millisecond clock backed by `performance.now()`.
#[derive(Clone)]
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    pub fn new(window: &Window) -> Result<Self, JsValue> {
        let performance = window
            .performance()
            .ok_or_else(|| JsValue::from_str("performance API unavailable"))?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        self.performance.now()
    }
}

/// Uniform source backed by `Math.random()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_unit(&mut self) -> f32 {
        (js_sys::Math::random() as f32).min(BELOW_ONE)
    }
}
