use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Handle {
    Timeout(i32),
    Interval(i32),
}

/// One `setTimeout` or `setInterval` registration plus the closure it calls.
///
/// Arming a slot clears whatever it held first, so a replaced cadence can
/// never fire again. Dropping the slot clears it too.
pub struct TimerSlot {
    window: Window,
    handle: Option<Handle>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl TimerSlot {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            handle: None,
            callback: None,
        }
    }

    /// Run `f` once after `delay_ms`.
    pub fn set_timeout(&mut self, delay_ms: f64, f: impl FnMut() + 'static) -> Result<(), JsValue> {
        self.clear();
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            to_millis(delay_ms),
        )?;
        self.handle = Some(Handle::Timeout(id));
        self.callback = Some(callback);
        Ok(())
    }

    /// Run `f` every `period_ms`.
    pub fn set_interval(&mut self, period_ms: f64, f: impl FnMut() + 'static) -> Result<(), JsValue> {
        self.clear();
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = self.window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            to_millis(period_ms),
        )?;
        self.handle = Some(Handle::Interval(id));
        self.callback = Some(callback);
        Ok(())
    }

    pub fn clear(&mut self) {
        match self.handle.take() {
            Some(Handle::Timeout(id)) => self.window.clear_timeout_with_handle(id),
            Some(Handle::Interval(id)) => self.window.clear_interval_with_handle(id),
            None => {}
        }
        self.callback = None;
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

impl Drop for TimerSlot {
    fn drop(&mut self) {
        self.clear();
    }
}

fn to_millis(ms: f64) -> i32 {
    if ms.is_nan() {
        return 0;
    }
    ms.clamp(0.0, i32::MAX as f64) as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millis_are_clamped() {
        assert_eq!(to_millis(2500.0), 2500);
        assert_eq!(to_millis(-5.0), 0);
        assert_eq!(to_millis(f64::NAN), 0);
        assert_eq!(to_millis(1e12), i32::MAX);
    }
}
