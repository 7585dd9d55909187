// File: crates/emberplot/src/types.rs
// Summary: Shared pixel-space types and the default accent color.

use skia_safe as skia;

/// A position in pixel space. Origin is the top-left corner of the image.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointPx {
    pub x: f32,
    pub y: f32,
}

impl PointPx {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of a render target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SizePx {
    pub width: f32,
    pub height: f32,
}

impl SizePx {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Hit-test result: a data value and the pixel position where it is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub value: f64,
    pub position: PointPx,
}

/// Default accent color used for first-series strokes and as the base of the
/// default analogous scheme.
pub fn accent() -> skia::Color {
    skia::Color::from_argb(255, 0x21, 0x96, 0xf3)
}
