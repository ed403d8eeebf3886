/// Paint colour as data. Canvas backends serialise it with [`Color::css`].
///
/// Flight and sparkle colours stay in HSL so their hue can be inspected
/// and varied; fixed glyph and star colours are plain RGBA.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// 8-bit RGB with a 0.0-1.0 alpha.
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent, 0.0-1.0 alpha.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

impl Color {
    pub const WHITE: Self = Self::rgba(255, 255, 255, 1.0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self::Hsla { h, s, l, a }
    }

    pub fn alpha(self) -> f32 {
        match self {
            Self::Rgba { a, .. } | Self::Hsla { a, .. } => a,
        }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, alpha: f32) -> Self {
        match self {
            Self::Rgba { r, g, b, .. } => Self::Rgba { r, g, b, a: alpha },
            Self::Hsla { h, s, l, .. } => Self::Hsla { h, s, l, a: alpha },
        }
    }

    /// CSS colour string (`rgba(...)` / `hsla(...)`).
    pub fn css(&self) -> String {
        match *self {
            Self::Rgba { r, g, b, a } => format!("rgba({},{},{},{})", r, g, b, a),
            Self::Hsla { h, s, l, a } => format!("hsla({}, {}%, {}%, {})", h, s, l, a),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
