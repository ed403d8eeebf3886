pub mod flight;
pub mod flight_layer;
pub mod sparkle;
pub mod spawner;
pub mod starfield;
pub mod trail;

pub use flight::{Flight, FlightPhase, FlightSample, FlightSystem};
pub use flight_layer::FlightLayer;
pub use sparkle::{Sparkle, SparkleSystem};
pub use spawner::{Direction, FlightPlan, SpawnSchedule};
pub use starfield::{Star, StarField};
pub use trail::{Trail, TrailPoint};
