use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

use starlight_engine::{Clock, Layer, RandomSource};

use crate::canvas::Canvas2dSurface;
use crate::platform::{JsRandom, PerformanceClock};

/// Runs one [`Layer`] on one canvas.
///
/// Each concrete layer gets its own loop, so the star field and the flights
/// refresh independently, as two separate animation-frame chains.
pub struct CanvasLoop<L: Layer> {
    layer: L,
    surface: Canvas2dSurface,
    clock: PerformanceClock,
    rng: JsRandom,
    frames: u64,
    stopped: bool,
}

impl<L: Layer> CanvasLoop<L> {
    pub fn new(layer: L, surface: Canvas2dSurface, clock: PerformanceClock) -> Self {
        Self {
            layer,
            surface,
            clock,
            rng: JsRandom,
            frames: 0,
            stopped: false,
        }
    }

    /// Resync the canvas to the window, then let the layer rebuild.
    pub fn resize(&mut self, window: &Window) -> Result<(), JsValue> {
        let viewport = self.surface.sync_to_window(window)?;
        self.layer.resize(viewport, &mut self.rng);
        Ok(())
    }

    /// Clear, advance and draw one frame.
    pub fn frame(&mut self) {
        let now = self.clock.now();
        self.layer.frame(&mut self.surface, now, &mut self.rng);
        self.frames += 1;
    }

    /// Borrow the layer together with the current time and random source.
    pub fn with_layer<T>(&mut self, f: impl FnOnce(&mut L, f64, &mut dyn RandomSource) -> T) -> T {
        let now = self.clock.now();
        f(&mut self.layer, now, &mut self.rng)
    }

    /// The next animation-frame callback will not reschedule itself.
    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// A self-rescheduling callback and the id of its pending frame request.
///
/// The callback refers back to its own slot in order to reschedule, which is
/// a reference cycle; [`FrameSlot::release`] breaks it.
struct FrameSlot<T> {
    callback: Rc<RefCell<Option<T>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl<T> FrameSlot<T> {
    fn new() -> Self {
        Self {
            callback: Rc::new(RefCell::new(None)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    fn share(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            pending: self.pending.clone(),
        }
    }

    /// Drop the callback and hand back the pending request id, if any.
    fn release(&self) -> Option<i32> {
        self.callback.borrow_mut().take();
        self.pending.take()
    }
}

/// A running `requestAnimationFrame` chain. Dropping it cancels the pending
/// frame and frees the callback together with the loop it drives.
pub struct AnimationLoop {
    window: Window,
    slot: FrameSlot<Closure<dyn FnMut()>>,
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        if let Some(id) = self.slot.release() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::error!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }
}

/// Start a self-rescheduling `requestAnimationFrame` chain for `lp`. The
/// chain runs until the returned handle is dropped or the loop is stopped.
pub fn start_loop<L: Layer + 'static>(
    window: &Window,
    lp: Rc<RefCell<CanvasLoop<L>>>,
) -> Result<AnimationLoop, JsValue> {
    let slot: FrameSlot<Closure<dyn FnMut()>> = FrameSlot::new();
    let inner = slot.share();
    let win = window.clone();

    let callback = Closure::wrap(Box::new(move || {
        inner.pending.set(None);
        if lp.borrow().is_stopped() {
            return;
        }
        lp.borrow_mut().frame();

        let requested = match inner.callback.borrow().as_ref() {
            Some(cb) => win.request_animation_frame(cb.as_ref().unchecked_ref()),
            None => return,
        };
        match requested {
            Ok(id) => inner.pending.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed, loop stopped: {:?}", e),
        }
    }) as Box<dyn FnMut()>);

    let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    slot.pending.set(Some(id));
    *slot.callback.borrow_mut() = Some(callback);

    Ok(AnimationLoop {
        window: window.clone(),
        slot,
    })
}

/// A window `resize` listener that is removed again on drop.
pub struct ResizeListener {
    window: Window,
    callback: Closure<dyn FnMut()>,
}

impl ResizeListener {
    /// Resize `lp` now and on every window resize.
    pub fn attach<L: Layer + 'static>(window: &Window, lp: Rc<RefCell<CanvasLoop<L>>>) -> Result<Self, JsValue> {
        lp.borrow_mut().resize(window)?;

        let win = window.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Err(e) = lp.borrow_mut().resize(&win) {
                log::error!("canvas resize failed: {:?}", e);
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;

        Ok(Self {
            window: window.clone(),
            callback,
        })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.callback.as_ref().unchecked_ref());
    }
}
