use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, Window};

use starlight_engine::{BlendMode, Color, LineCap, PathOp, Stroke, Surface, Viewport};

/// [`Surface`] over a 2D canvas context.
///
/// Canvas calls that can throw are logged and skipped; a bad frame never
/// stops the loop.
pub struct Canvas2dSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    /// Look up `<canvas id=...>` and take its 2D context.
    pub fn from_element_id(document: &Document, id: &str) -> Result<Self, JsValue> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("element '{}' is not a canvas", id)))?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context not supported"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// Size the canvas backing store to the window's inner size.
    pub fn sync_to_window(&self, window: &Window) -> Result<Viewport, JsValue> {
        let width = window.inner_width()?.as_f64().unwrap_or(0.0).max(0.0);
        let height = window.inner_height()?.as_f64().unwrap_or(0.0).max(0.0);
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        Ok(Viewport::new(width as f32, height as f32))
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

fn cap_name(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
    }
}

fn composite_name(mode: BlendMode) -> &'static str {
    match mode {
        BlendMode::Alpha => "source-over",
        BlendMode::Additive => "lighter",
    }
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ctx.begin_path();
        let r = radius.max(0.0) as f64;
        if let Err(e) = self.ctx.arc(center.x as f64, center.y as f64, r, 0.0, TAU) {
            log::error!("arc failed: {:?}", e);
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, stroke: &Stroke) {
        self.ctx.set_line_width(stroke.width as f64);
        self.ctx.set_line_cap(cap_name(stroke.cap));
        self.ctx.set_stroke_style_str(&stroke.color.css());
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn fill_path(&mut self, ops: &[PathOp], color: Color) {
        self.ctx.begin_path();
        for op in ops {
            match *op {
                PathOp::MoveTo(p) => self.ctx.move_to(p.x as f64, p.y as f64),
                PathOp::LineTo(p) => self.ctx.line_to(p.x as f64, p.y as f64),
                PathOp::QuadTo { ctrl, to } => {
                    self.ctx
                        .quadratic_curve_to(ctrl.x as f64, ctrl.y as f64, to.x as f64, to.y as f64)
                }
                PathOp::Close => self.ctx.close_path(),
            }
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }

    fn set_blend(&mut self, mode: BlendMode) {
        if let Err(e) = self.ctx.set_global_composite_operation(composite_name(mode)) {
            log::error!("composite operation {:?} rejected: {:?}", mode, e);
        }
    }
}
