use serde::{Deserialize, Serialize};

use crate::extensions::easing::Easing;

/// Top-level engine configuration.
///
/// Every field has a default, so a JSON document only needs to name the
/// values it overrides:
///
/// ```ignore
/// let config = SkyConfig::from_json(r#"{ "spawn": { "interval_ms": 8000 } }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    pub stars: StarFieldConfig,
    pub flights: FlightConfig,
    pub sparkles: SparkleConfig,
    pub spawn: SpawnConfig,
}

impl SkyConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Ambient star field parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarFieldConfig {
    /// Upper bound on the star count.
    pub max_stars: usize,
    /// Canvas area (square pixels) per star.
    pub area_per_star: f32,
    /// Radius range.
    pub radius: (f32, f32),
    /// Opacity range for freshly generated stars.
    pub initial_opacity: (f32, f32),
    /// Opacity is clamped into this range after every twinkle step.
    pub opacity_bounds: (f32, f32),
    /// Twinkle coefficient range.
    pub twinkle: (f32, f32),
    /// Per-frame opacity step, scaled by the star's twinkle coefficient.
    pub twinkle_step: f32,
}

impl Default for StarFieldConfig {
    fn default() -> Self {
        Self {
            max_stars: 160,
            area_per_star: 17000.0,
            radius: (0.4, 2.2),
            initial_opacity: (0.2, 1.0),
            opacity_bounds: (0.1, 1.0),
            twinkle: (0.2, 0.8),
            twinkle_step: 0.02,
        }
    }
}

/// Flight motion and trail parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Motion phase length in milliseconds.
    pub duration_ms: f64,
    /// How long the trail lingers after the motion phase ends.
    pub trail_life_ms: f64,
    /// Maximum trail points kept per flight.
    pub max_trail: usize,
    pub easing: Easing,
    /// Vertical wobble amplitude as a fraction of viewport height.
    pub wobble_amplitude: f32,
    pub wobble_period_ms: f32,
    /// Glyph scale oscillation amplitude (0.03 = ±3%).
    pub flutter_amplitude: f32,
    /// Milliseconds per radian of flutter phase.
    pub flutter_time_ms: f32,
    /// Baseline glyph scale.
    pub glyph_scale: f32,
}

impl FlightConfig {
    /// Total time a flight stays alive.
    pub fn lifetime_ms(&self) -> f64 {
        self.duration_ms + self.trail_life_ms
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            duration_ms: 5200.0,
            trail_life_ms: 1800.0,
            max_trail: 90,
            easing: Easing::QuadInOut,
            wobble_amplitude: 0.02,
            wobble_period_ms: 360.0,
            flutter_amplitude: 0.03,
            flutter_time_ms: 220.0,
            glyph_scale: 1.0,
        }
    }
}

/// Sparkle emission and appearance parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SparkleConfig {
    /// Emission probability per flight per frame.
    pub rate: f32,
    /// Positional jitter around the emission point.
    pub jitter: f32,
    /// Horizontal velocity spread (units per frame).
    pub velocity_x: f32,
    /// Vertical velocity spread (units per frame).
    pub velocity_y: f32,
    pub radius: (f32, f32),
    pub life_ms: (f32, f32),
    /// Fraction of the radius lost by the end of life.
    pub shrink: f32,
    /// Peak alpha.
    pub alpha: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for SparkleConfig {
    fn default() -> Self {
        Self {
            rate: 0.65,
            jitter: 6.0,
            velocity_x: 0.18,
            velocity_y: 0.22,
            radius: (0.9, 2.3),
            life_ms: (900.0, 1400.0),
            shrink: 0.35,
            alpha: 0.9,
            saturation: 95.0,
            lightness: 85.0,
        }
    }
}

/// Spawn cadence and flight-path randomisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    /// Delay before the one-off first spawn.
    pub initial_delay_ms: f64,
    /// Fixed interval between regular spawns.
    pub interval_ms: f64,
    /// Probability that a flight crosses right-to-left.
    pub right_to_left_chance: f32,
    /// Off-screen distance of the start point.
    pub start_margin: f32,
    /// Off-screen distance of the end point.
    pub end_margin: f32,
    /// Start height band, as fractions of viewport height.
    pub start_band: (f32, f32),
    /// End height band, as fractions of viewport height.
    pub end_band: (f32, f32),
    /// Control point horizontal band, as fractions of viewport width.
    pub ctrl_x_band: (f32, f32),
    /// Control point vertical band, as fractions of viewport height.
    pub ctrl_y_band: (f32, f32),
    /// Hue range in degrees.
    pub hue: (f32, f32),
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: 2500.0,
            interval_ms: 14000.0,
            right_to_left_chance: 0.55,
            start_margin: 140.0,
            end_margin: 160.0,
            start_band: (0.10, 0.45),
            end_band: (0.25, 0.78),
            ctrl_x_band: (0.35, 0.65),
            ctrl_y_band: (0.05, 0.33),
            hue: (235.0, 275.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let c = SkyConfig::default();
        assert_eq!(c.stars.max_stars, 160);
        assert_eq!(c.flights.duration_ms, 5200.0);
        assert_eq!(c.flights.trail_life_ms, 1800.0);
        assert_eq!(c.flights.max_trail, 90);
        assert_eq!(c.sparkles.rate, 0.65);
        assert_eq!(c.spawn.interval_ms, 14000.0);
        assert_eq!(c.spawn.initial_delay_ms, 2500.0);
    }

    #[test]
    fn lifetime_is_duration_plus_trail() {
        assert_eq!(FlightConfig::default().lifetime_ms(), 7000.0);
    }

    #[test]
    fn empty_json_gives_defaults() {
        let c = SkyConfig::from_json("{}").unwrap();
        assert_eq!(c, SkyConfig::default());
    }

    #[test]
    fn partial_json_overrides_named_fields() {
        let json = r#"{
            "spawn": { "interval_ms": 8000 },
            "flights": { "max_trail": 40, "easing": "linear" },
            "stars": { "radius": [1.0, 3.0] }
        }"#;
        let c = SkyConfig::from_json(json).unwrap();
        assert_eq!(c.spawn.interval_ms, 8000.0);
        assert_eq!(c.spawn.initial_delay_ms, 2500.0);
        assert_eq!(c.flights.max_trail, 40);
        assert_eq!(c.flights.easing, Easing::Linear);
        assert_eq!(c.flights.duration_ms, 5200.0);
        assert_eq!(c.stars.radius, (1.0, 3.0));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SkyConfig::from_json("{ \"spawn\": 3 }").is_err());
    }
}
