pub mod config;
pub mod layer;
pub mod sky;
pub mod types;
