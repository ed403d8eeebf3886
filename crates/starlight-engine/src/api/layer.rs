use crate::api::types::Viewport;
use crate::core::rng::RandomSource;
use crate::renderer::surface::Surface;

/// The contract every independently looped canvas layer fulfils.
///
/// A render loop calls [`Layer::frame`] once per display refresh and
/// [`Layer::resize`] whenever the surface is resynced to new dimensions.
pub trait Layer {
    /// The surface was resized. Layers rebuild whatever depends on its size.
    fn resize(&mut self, viewport: Viewport, rng: &mut dyn RandomSource);

    /// Clear, advance and draw one frame at time `now` (milliseconds).
    fn frame(&mut self, surface: &mut dyn Surface, now: f64, rng: &mut dyn RandomSource);
}
