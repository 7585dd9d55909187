// File: crates/emberplot/src/overlay.rs
// Summary: Annotation surface layered above the chart raster (crosshairs, markers).

use parking_lot::Mutex;
use skia_safe as skia;

use crate::types::{PointPx, SizePx};

/// One interactive annotation drawn above the chart image.
#[derive(Clone, Copy, Debug)]
pub enum Annotation {
    /// Full-width and full-height hairlines crossing at `at`.
    Crosshair {
        at: PointPx,
        color: skia::Color,
        width: f32,
    },
    /// Filled dot, typically placed on a hit-test result position.
    Marker {
        at: PointPx,
        radius: f32,
        color: skia::Color,
    },
    Segment {
        from: PointPx,
        to: PointPx,
        color: skia::Color,
        width: f32,
    },
}

/// Secondary drawing surface owned by a renderer and populated by the host,
/// usually in response to hit-test results. It is rasterized independently
/// of the data image, so annotating does not trigger a chart redraw.
#[derive(Debug, Default)]
pub struct Overlay {
    shapes: Mutex<Vec<Annotation>>,
}

impl Overlay {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, shape: Annotation) {
        self.shapes.lock().push(shape);
    }

    pub fn crosshair(&self, at: PointPx, color: skia::Color, width: f32) {
        self.push(Annotation::Crosshair { at, color, width });
    }

    pub fn marker(&self, at: PointPx, radius: f32, color: skia::Color) {
        self.push(Annotation::Marker { at, radius, color });
    }

    pub fn clear(&self) {
        self.shapes.lock().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.lock().is_empty()
    }

    /// Draw all annotations onto `canvas`, sized to `size`.
    pub fn draw(&self, canvas: &skia::Canvas, size: SizePx) {
        let shapes = self.shapes.lock();
        for shape in shapes.iter() {
            match *shape {
                Annotation::Crosshair { at, color, width } => {
                    let paint = stroke_paint(color, width);
                    canvas.draw_line((0.0, at.y), (size.width, at.y), &paint);
                    canvas.draw_line((at.x, 0.0), (at.x, size.height), &paint);
                }
                Annotation::Marker { at, radius, color } => {
                    let mut paint = skia::Paint::default();
                    paint.set_anti_alias(true);
                    paint.set_style(skia::paint::Style::Fill);
                    paint.set_color(color);
                    canvas.draw_circle((at.x, at.y), radius, &paint);
                }
                Annotation::Segment {
                    from,
                    to,
                    color,
                    width,
                } => {
                    let paint = stroke_paint(color, width);
                    canvas.draw_line((from.x, from.y), (to.x, to.y), &paint);
                }
            }
        }
    }
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}
