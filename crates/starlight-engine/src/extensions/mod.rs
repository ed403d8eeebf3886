// extensions/mod.rs
//
// Optional helpers decoupled from the layers themselves.

pub mod easing;

pub use easing::{ease_in_out, Easing};
