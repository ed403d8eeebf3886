//! Drawing-surface contract shared by all layers.
//!
//! Layers never talk to a backend directly. The browser bridge implements
//! [`Surface`] over `CanvasRenderingContext2d`; [`DrawList`](super::draw_list::DrawList)
//! records commands for tests and headless runs.

use glam::Vec2;

use super::color::Color;

/// How new pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Standard source-over alpha blending.
    #[default]
    Alpha,
    /// Additive ("lighter") blending: overlaps brighten instead of occluding.
    Additive,
}

/// End-cap style for stroked segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Stroke parameters for a line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl Stroke {
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color, cap: LineCap::Butt }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// One step of a closed fill path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    Close,
}

impl PathOp {
    /// Apply `f` to every point carried by this op.
    pub fn map_points(self, f: impl Fn(Vec2) -> Vec2) -> Self {
        match self {
            PathOp::MoveTo(p) => PathOp::MoveTo(f(p)),
            PathOp::LineTo(p) => PathOp::LineTo(f(p)),
            PathOp::QuadTo { ctrl, to } => PathOp::QuadTo { ctrl: f(ctrl), to: f(to) },
            PathOp::Close => PathOp::Close,
        }
    }
}

/// A 2D drawing target.
pub trait Surface {
    /// Clear the region `[0, size.x] × [0, size.y]`.
    fn clear(&mut self, size: Vec2);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke);

    /// Fill a closed path. `ops` should start with `MoveTo`.
    fn fill_path(&mut self, ops: &[PathOp], color: Color);

    /// Blend mode for subsequent draw calls.
    fn set_blend(&mut self, mode: BlendMode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_builder() {
        let s = Stroke::new(2.0, Color::WHITE).with_cap(LineCap::Round);
        assert_eq!(s.cap, LineCap::Round);
        assert_eq!(s.width, 2.0);
    }

    #[test]
    fn map_points_moves_quad_control() {
        let op = PathOp::QuadTo { ctrl: Vec2::new(1.0, 2.0), to: Vec2::new(3.0, 4.0) };
        let moved = op.map_points(|p| p + Vec2::splat(10.0));
        assert_eq!(
            moved,
            PathOp::QuadTo { ctrl: Vec2::new(11.0, 12.0), to: Vec2::new(13.0, 14.0) }
        );
        assert_eq!(PathOp::Close.map_points(|p| p * 2.0), PathOp::Close);
    }
}
