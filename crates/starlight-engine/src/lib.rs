pub mod api;
pub mod core;
pub mod extensions;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::{FlightConfig, SkyConfig, SparkleConfig, SpawnConfig, StarFieldConfig};
pub use api::layer::Layer;
pub use api::sky::Sky;
pub use api::types::Viewport;
pub use crate::core::curve::{quad_bezier, QuadCurve};
pub use crate::core::rng::{RandomSource, Rng};
pub use crate::core::time::{Clock, ManualClock};
pub use renderer::{
    draw_wizard, BlendMode, Color, DrawCommand, DrawList, LineCap, PathOp, Stroke, Surface,
};
pub use systems::{
    Direction, Flight, FlightLayer, FlightPhase, FlightSystem, Sparkle, SparkleSystem,
    SpawnSchedule, Star, StarField, Trail, TrailPoint,
};

pub use extensions::{ease_in_out, Easing};
