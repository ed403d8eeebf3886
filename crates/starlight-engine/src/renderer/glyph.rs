//! The wizard-on-a-broom body glyph.
//!
//! Geometry is authored in local space facing +x and transformed on the CPU
//! (translate → rotate → scale), so backends only ever see world coordinates.

use glam::{Affine2, Vec2};

use super::color::Color;
use super::surface::{PathOp, Stroke, Surface};

const HANDLE_COLOR: Color = Color::rgba(240, 230, 255, 0.85);
const HANDLE_WIDTH: f32 = 2.0;
const BRISTLE_COLOR: Color = Color::rgba(220, 210, 255, 0.8);
const HAT_COLOR: Color = Color::rgba(190, 175, 255, 0.85);
const HEAD_COLOR: Color = Color::rgba(245, 240, 255, 0.9);
const HEAD_CENTER: Vec2 = Vec2::new(-6.0, -3.0);
const HEAD_RADIUS: f32 = 4.0;
const CAPE_COLOR: Color = Color::rgba(140, 120, 255, 0.35);

const HANDLE: [Vec2; 2] = [Vec2::new(-18.0, 4.0), Vec2::new(18.0, -4.0)];

const BRISTLES: [PathOp; 5] = [
    PathOp::MoveTo(Vec2::new(18.0, -4.0)),
    PathOp::LineTo(Vec2::new(26.0, -10.0)),
    PathOp::LineTo(Vec2::new(28.0, -3.0)),
    PathOp::LineTo(Vec2::new(26.0, 4.0)),
    PathOp::Close,
];

const HAT: [PathOp; 4] = [
    PathOp::MoveTo(Vec2::new(-2.0, -14.0)),
    PathOp::LineTo(Vec2::new(-10.0, -2.0)),
    PathOp::LineTo(Vec2::new(4.0, -4.0)),
    PathOp::Close,
];

const CAPE: [PathOp; 4] = [
    PathOp::MoveTo(Vec2::new(-10.0, -2.0)),
    PathOp::QuadTo { ctrl: Vec2::new(-22.0, 10.0), to: Vec2::new(-6.0, 14.0) },
    PathOp::QuadTo { ctrl: Vec2::new(-2.0, 10.0), to: Vec2::new(0.0, 4.0) },
    PathOp::Close,
];

/// Draw the glyph at `position`, rotated to `heading` (radians) and
/// uniformly scaled by `scale`.
///
/// Draw order is handle, bristles, hat, head, cape.
pub fn draw_wizard(surface: &mut dyn Surface, position: Vec2, heading: f32, scale: f32) {
    let xf = Affine2::from_scale_angle_translation(Vec2::splat(scale), heading, position);
    let to_world = |p: Vec2| xf.transform_point2(p);

    let handle = Stroke::new(HANDLE_WIDTH * scale, HANDLE_COLOR);
    surface.stroke_line(to_world(HANDLE[0]), to_world(HANDLE[1]), &handle);

    fill_local(surface, &BRISTLES, BRISTLE_COLOR, &to_world);
    fill_local(surface, &HAT, HAT_COLOR, &to_world);
    surface.fill_circle(to_world(HEAD_CENTER), HEAD_RADIUS * scale, HEAD_COLOR);
    fill_local(surface, &CAPE, CAPE_COLOR, &to_world);
}

fn fill_local(
    surface: &mut dyn Surface,
    ops: &[PathOp],
    color: Color,
    to_world: &impl Fn(Vec2) -> Vec2,
) {
    let world: Vec<PathOp> = ops.iter().map(|op| op.map_points(to_world)).collect();
    surface.fill_path(&world, color);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::{DrawCommand, DrawList};

    #[test]
    fn draws_five_parts() {
        let mut list = DrawList::new();
        draw_wizard(&mut list, Vec2::new(100.0, 100.0), 0.0, 1.0);
        assert_eq!(list.lines().count(), 1);
        assert_eq!(list.path_count(), 3);
        assert_eq!(list.circles().count(), 1);
    }

    #[test]
    fn identity_transform_translates_only() {
        let mut list = DrawList::new();
        draw_wizard(&mut list, Vec2::new(100.0, 50.0), 0.0, 1.0);
        let (from, to, stroke) = list.lines().next().unwrap();
        assert!((from - Vec2::new(82.0, 54.0)).length() < 1e-4);
        assert!((to - Vec2::new(118.0, 46.0)).length() < 1e-4);
        assert_eq!(stroke.width, 2.0);
    }

    #[test]
    fn rotation_turns_the_handle() {
        let mut list = DrawList::new();
        // Half a turn flips the handle end-to-end around the origin
        draw_wizard(&mut list, Vec2::ZERO, std::f32::consts::PI, 1.0);
        let (from, _, _) = list.lines().next().unwrap();
        assert!((from - Vec2::new(18.0, -4.0)).length() < 1e-3, "from = {:?}", from);
    }

    #[test]
    fn scale_grows_head_and_stroke() {
        let mut list = DrawList::new();
        draw_wizard(&mut list, Vec2::ZERO, 0.0, 1.03);
        let (_, radius, _) = list.circles().next().unwrap();
        assert!((radius - 4.12).abs() < 1e-4);
        let (_, _, stroke) = list.lines().next().unwrap();
        assert!((stroke.width - 2.06).abs() < 1e-4);
    }

    #[test]
    fn cape_keeps_its_curves() {
        let mut list = DrawList::new();
        draw_wizard(&mut list, Vec2::ZERO, 0.0, 1.0);
        let cape = list.commands().iter().rev().find_map(|c| match c {
            DrawCommand::Path { ops, .. } => Some(ops.clone()),
            _ => None,
        });
        let cape = cape.unwrap();
        assert_eq!(cape.len(), 4);
        assert!(matches!(cape[1], PathOp::QuadTo { .. }));
        assert_eq!(cape[3], PathOp::Close);
    }
}
