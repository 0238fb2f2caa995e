use crossterm::style::Color;
use palette::{IntoColor, Oklch, Srgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert an OKLCH color to 8-bit sRGB.
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        let srgb: Srgb = Oklch::new(l, c, h).into_color();
        let (r, g, b) = srgb.into_format::<u8>().into_components();
        Self::new(r, g, b)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Colors used to paint the page.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Rgb,
    pub surface: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub thumb: Rgb,
    pub thumb_dragging: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: Rgb::oklch(0.16, 0.01, 260.0),
            surface: Rgb::oklch(0.22, 0.02, 260.0),
            text: Rgb::oklch(0.88, 0.02, 260.0),
            muted: Rgb::oklch(0.6, 0.03, 260.0),
            thumb: Rgb::oklch(0.62, 0.04, 260.0),
            thumb_dragging: Rgb::oklch(0.78, 0.12, 250.0),
        }
    }
}
