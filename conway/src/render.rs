// render.rs - Drawing primitives the grid emits, independent of any windowing library

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GRID_LINE: Rgb = Rgb::new(100, 100, 100);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Axis-aligned rectangle in canvas pixels, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn square(x: u32, y: u32, size: u32) -> Self {
        Self {
            x,
            y,
            width: size,
            height: size,
        }
    }
}

/// A surface that can be cleared and have rectangles drawn onto it.
pub trait RenderTarget {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Rgb);

    /// Draw the outline of `rect`, `width` pixels thick
    fn stroke_rect(&mut self, rect: PixelRect, color: Rgb, width: f32);

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);
}
