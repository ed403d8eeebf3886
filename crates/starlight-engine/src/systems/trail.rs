//! Bounded position history behind a flight, drawn as a tapering ribbon.

use std::collections::VecDeque;

use glam::Vec2;

use crate::renderer::color::Color;
use crate::renderer::surface::{BlendMode, LineCap, Stroke, Surface};

const SEGMENT_ALPHA: f32 = 0.55;
const SEGMENT_TAPER: f32 = 5.0;
const SEGMENT_MIN_WIDTH: f32 = 1.2;
const SEGMENT_SATURATION: f32 = 90.0;
const SEGMENT_LIGHTNESS: f32 = 75.0;

const DOT_EVERY: usize = 6;
const DOT_RADIUS: f32 = 1.6;
const DOT_ALPHA: f32 = 0.6;
const DOT_LIGHTNESS: f32 = 85.0;

/// A captured trail position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub pos: Vec2,
    pub captured_at: f64,
}

/// Newest-first ring of trail points. Never holds more than `capacity`.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend `point`, dropping the oldest points beyond capacity.
    pub fn push(&mut self, point: TrailPoint) {
        self.points.push_front(point);
        self.points.truncate(self.capacity);
    }

    pub fn newest(&self) -> Option<&TrailPoint> {
        self.points.front()
    }

    /// Points from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Draw the ribbon and its sparkle dots in `hue`.
    ///
    /// Segment `i` joins points `i-1` and `i`; with `s = i / (len-1)` its alpha is
    /// `(1-s)·0.55` and its width `5(1-s) + 1.2`, so the ribbon fades and thins
    /// towards the oldest point. Dots go on every 6th point under additive
    /// blending. Nothing is drawn for fewer than two points.
    pub fn draw(&self, surface: &mut dyn Surface, hue: f32) {
        let len = self.points.len();
        if len < 2 {
            return;
        }

        let last = (len - 1) as f32;
        for i in 1..len {
            let s = i as f32 / last;
            let color = Color::hsla(hue, SEGMENT_SATURATION, SEGMENT_LIGHTNESS, (1.0 - s) * SEGMENT_ALPHA);
            let stroke = Stroke::new(SEGMENT_TAPER * (1.0 - s) + SEGMENT_MIN_WIDTH, color)
                .with_cap(LineCap::Round);
            surface.stroke_line(self.points[i - 1].pos, self.points[i].pos, &stroke);
        }

        surface.set_blend(BlendMode::Additive);
        let dot = Color::hsla(hue, SEGMENT_SATURATION, DOT_LIGHTNESS, DOT_ALPHA);
        for p in self.points.iter().step_by(DOT_EVERY) {
            surface.fill_circle(p.pos, DOT_RADIUS, dot);
        }
        surface.set_blend(BlendMode::Alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::draw_list::{DrawCommand, DrawList};

    fn point(x: f32, at: f64) -> TrailPoint {
        TrailPoint { pos: Vec2::new(x, 0.0), captured_at: at }
    }

    #[test]
    fn push_is_newest_first() {
        let mut trail = Trail::new(4);
        trail.push(point(1.0, 1.0));
        trail.push(point(2.0, 2.0));
        assert_eq!(trail.newest().unwrap().pos.x, 2.0);
        let xs: Vec<f32> = trail.iter().map(|p| p.pos.x).collect();
        assert_eq!(xs, vec![2.0, 1.0]);
    }

    #[test]
    fn length_never_exceeds_capacity() {
        let mut trail = Trail::new(90);
        for i in 0..500 {
            trail.push(point(i as f32, i as f64));
            assert!(trail.len() <= 90);
        }
        assert_eq!(trail.len(), 90);
        // Oldest dropped first
        assert_eq!(trail.iter().last().unwrap().pos.x, 410.0);
    }

    #[test]
    fn single_point_draws_nothing() {
        let mut trail = Trail::new(10);
        trail.push(point(0.0, 0.0));
        let mut list = DrawList::new();
        trail.draw(&mut list, 250.0);
        assert!(list.is_empty());
    }

    #[test]
    fn segments_fade_and_taper_towards_the_oldest_point() {
        let mut trail = Trail::new(90);
        for i in 0..13 {
            trail.push(point(i as f32, i as f64));
        }
        let mut list = DrawList::new();
        trail.draw(&mut list, 250.0);

        let lines: Vec<_> = list.lines().collect();
        assert_eq!(lines.len(), 12);

        let (_, _, first) = lines[0];
        let (_, _, last) = lines[11];
        assert!(first.color.alpha() > last.color.alpha());
        assert!(first.width > last.width);
        assert_eq!(first.cap, LineCap::Round);
        // Oldest segment: s = 1
        assert!(last.color.alpha().abs() < 1e-6);
        assert!((last.width - 1.2).abs() < 1e-6);
        // Newest segment: s = 1/12
        assert!((first.color.alpha() - (11.0 / 12.0) * 0.55).abs() < 1e-6);
    }

    #[test]
    fn dots_every_sixth_point_with_additive_blend() {
        let mut trail = Trail::new(90);
        for i in 0..13 {
            trail.push(point(i as f32, i as f64));
        }
        let mut list = DrawList::new();
        trail.draw(&mut list, 240.0);

        // Indices 0, 6, 12
        let dots: Vec<_> = list.circles().collect();
        assert_eq!(dots.len(), 3);
        assert_eq!(dots[0].0.x, 12.0);
        assert_eq!(dots[1].0.x, 6.0);
        assert_eq!(dots[2].0.x, 0.0);
        assert_eq!(dots[0].2, Color::hsla(240.0, 90.0, 85.0, 0.6));

        let blends: Vec<_> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Blend(b) => Some(*b),
                _ => None,
            })
            .collect();
        assert_eq!(blends, vec![BlendMode::Additive, BlendMode::Alpha]);
    }
}
