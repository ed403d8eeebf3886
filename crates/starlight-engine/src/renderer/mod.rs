pub mod color;
pub mod draw_list;
pub mod glyph;
pub mod surface;

pub use color::Color;
pub use draw_list::{DrawCommand, DrawList};
pub use glyph::draw_wizard;
pub use surface::{BlendMode, LineCap, PathOp, Stroke, Surface};
