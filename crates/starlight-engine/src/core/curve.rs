//! Quadratic Bezier evaluation for flight paths.

use glam::Vec2;

/// Parameter step used for the forward-difference heading.
pub const TANGENT_STEP: f32 = 0.01;

/// Evaluate `(1-t)²·p0 + 2(1-t)t·ctrl + t²·p1`.
#[inline]
pub fn quad_bezier(p0: Vec2, p1: Vec2, ctrl: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + ctrl * (2.0 * u * t) + p1 * (t * t)
}

/// A quadratic curve from `start` to `end`, pulled towards `ctrl`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadCurve {
    pub start: Vec2,
    pub end: Vec2,
    pub ctrl: Vec2,
}

impl QuadCurve {
    pub fn new(start: Vec2, end: Vec2, ctrl: Vec2) -> Self {
        Self { start, end, ctrl }
    }

    /// Position at `t` in [0, 1].
    #[inline]
    pub fn at(&self, t: f32) -> Vec2 {
        quad_bezier(self.start, self.end, self.ctrl, t)
    }

    /// Heading angle (radians) at `t`, from the point at `t` towards the
    /// point at `min(t + TANGENT_STEP, 1)`.
    ///
    /// At `t = 1` both samples coincide and the heading is 0.
    pub fn heading(&self, t: f32) -> f32 {
        let here = self.at(t);
        let ahead = self.at((t + TANGENT_STEP).min(1.0));
        let d = ahead - here;
        d.y.atan2(d.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curve() -> QuadCurve {
        QuadCurve::new(
            Vec2::new(1140.0, 200.0),
            Vec2::new(-160.0, 500.0),
            Vec2::new(500.0, 60.0),
        )
    }

    #[test]
    fn endpoints_are_exact() {
        let c = sample_curve();
        assert_eq!(c.at(0.0), c.start);
        assert_eq!(c.at(1.0), c.end);
    }

    #[test]
    fn midpoint_matches_formula() {
        let p = quad_bezier(Vec2::ZERO, Vec2::new(100.0, 0.0), Vec2::new(50.0, 100.0), 0.5);
        // 0.25·p0 + 0.5·ctrl + 0.25·p1
        assert!((p - Vec2::new(50.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn heading_follows_direction_of_travel() {
        // Straight line to the left: heading ≈ π
        let c = QuadCurve::new(Vec2::new(100.0, 0.0), Vec2::new(-100.0, 0.0), Vec2::ZERO);
        let h = c.heading(0.3);
        assert!((h.abs() - std::f32::consts::PI).abs() < 1e-4, "heading was {}", h);
    }

    #[test]
    fn heading_at_end_is_zero() {
        assert_eq!(sample_curve().heading(1.0), 0.0);
    }
}
