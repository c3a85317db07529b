//! CSS color values for the drawing surface. The canvas context consumes
//! color strings, so both types render themselves with `to_css`.

/// HSL with alpha. Hue is kept as a free-running `f32` and wrapped into
/// [0, 360) only at render time.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    pub fn to_css(&self) -> String {
        format!(
            "hsla({:.1}, {:.0}%, {:.0}%, {:.3})",
            self.h.rem_euclid(360.0),
            self.s,
            self.l,
            self.a
        )
    }
}

/// 8-bit RGB with fractional alpha.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}
