pub mod curve;
pub mod rng;
pub mod time;
