use std::fmt;

/// Straight-alpha colour used by the 2D drawing seam.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn black(a: f64) -> Self {
        Self { r: 0, g: 0, b: 0, a }
    }

    pub const fn white(a: f64) -> Self {
        Self {
            r: 255,
            g: 255,
            b: 255,
            a,
        }
    }
}

/// CSS colour string, alpha clamped to [0, 1].
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = if self.a.is_nan() {
            0.0
        } else {
            self.a.clamp(0.0, 1.0)
        };
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, a)
    }
}

/// Backing-store geometry computed on resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceSize {
    /// CSS size of the element.
    pub css_width: f64,
    pub css_height: f64,
    /// Backing store size in device pixels.
    pub width: u32,
    pub height: u32,
    /// Uniform scale applied to the drawing transform.
    pub scale: f64,
}

/// The subset of a 2D drawing context the starfield needs.
pub trait Surface {
    fn resize(&mut self, size: SurfaceSize);
    fn clear(&mut self, width: f64, height: f64);
    /// Fill `[0, width] x [0, height]` with a top-to-bottom gradient.
    fn fill_vertical_gradient(&mut self, width: f64, height: f64, top: Rgba, bottom: Rgba);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba);
}
