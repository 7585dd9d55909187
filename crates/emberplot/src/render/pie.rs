// File: crates/emberplot/src/render/pie.rs
// Summary: Pie chart sector rasterization and angular hit-testing.

use skia_safe as skia;
use tracing::trace;

use crate::chart::ChartState;
use crate::error::ChartError;
use crate::overlay::Overlay;
use crate::types::{DataPoint, PointPx};

use super::{blank_image, dataset_is_blank, fill_paint, new_surface, pt, stroke_paint};

#[derive(Debug, Default)]
pub struct PieRenderer {
    pub(crate) overlay: Overlay,
}

impl PieRenderer {
    pub(crate) fn new() -> Self {
        Self {
            overlay: Overlay::new(),
        }
    }

    pub(crate) fn rasterize(
        &self,
        state: &ChartState,
        width: i32,
        height: i32,
    ) -> Result<skia::Image, ChartError> {
        if dataset_is_blank(state) {
            return blank_image(width, height);
        }
        if width <= 0 || height <= 0 {
            return blank_image(0, 0);
        }

        // a pie consumes exactly the first series; later ones are ignored
        let data = &state.data[0];
        let total: f64 = data.iter().sum();

        let mut surface = new_surface(width, height)?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);

        // zero (or non-finite) total degenerates every sweep to nothing;
        // the image stays valid and blank
        if total > 0.0 && total.is_finite() {
            let lw = f64::from(state.options.stroke_width);
            let cx = f64::from(width) / 2.0;
            let cy = f64::from(height) / 2.0;
            let r = f64::from(width.min(height)) / 2.0 - lw * 2.0;
            let oval = skia::Rect::new(
                (cx - r) as f32,
                (cy - r) as f32,
                (cx + r) as f32,
                (cy + r) as f32,
            );
            trace!(total, r, "pie raster pass");

            // skia measures arc angles from 3 o'clock, clockwise in screen
            // coordinates; the first sector starts at 12 o'clock
            let mut start = -90.0f64;
            for (i, &v) in data.iter().enumerate() {
                let sweep = sector_sweep(total, v);
                let path = sector_path(oval, cx, cy, start, sweep);
                canvas.draw_path(&path, &fill_paint(state.options.scheme.color_at(i)));
                start += sweep;
            }

            if lw > 0.0 {
                let mut start = -90.0f64;
                for &v in data.iter() {
                    let sweep = sector_sweep(total, v);
                    let path = sector_path(oval, cx, cy, start, sweep);
                    canvas.draw_path(
                        &path,
                        &stroke_paint(state.options.stroke_color, state.options.stroke_width),
                    );
                    start += sweep;
                }
            }
        }

        Ok(surface.image_snapshot())
    }

    /// A pie has no per-index notion of position; always the no-result case.
    pub(crate) fn at_index(
        &self,
        _state: &ChartState,
        _series: usize,
        _index: usize,
    ) -> Option<DataPoint> {
        None
    }

    pub(crate) fn at_pointer(&self, state: &ChartState, pos: PointPx) -> Vec<DataPoint> {
        if dataset_is_blank(state) {
            return Vec::new();
        }
        let data = &state.data[0];
        let total: f64 = data.iter().sum();
        if !(total > 0.0) || !total.is_finite() {
            return Vec::new();
        }

        let w = f64::from(state.view.width);
        let h = f64::from(state.view.height);
        let lw = f64::from(state.options.stroke_width);
        let cx = w / 2.0;
        let cy = h / 2.0;
        let r = w.min(h) / 2.0 - lw * 2.0;

        let dx = f64::from(pos.x) - cx;
        let dy = f64::from(pos.y) - cy;
        if (dx * dx + dy * dy).sqrt() >= r {
            return Vec::new();
        }

        let angle = pointer_angle(dx, dy);
        let mut start = 0.0f64;
        for &v in data.iter() {
            let sweep = sector_sweep(total, v);
            if angle >= start && angle <= start + sweep {
                // report the point on the sector's angular bisector at half
                // the radius, visually inside the slice
                let bisector = (start + sweep / 2.0 - 90.0).to_radians();
                let half = r / 2.0;
                return vec![DataPoint {
                    value: v,
                    position: PointPx::new(
                        (cx + half * bisector.cos()) as f32,
                        (cy + half * bisector.sin()) as f32,
                    ),
                }];
            }
            start += sweep;
        }
        Vec::new()
    }
}

/// Sweep angle in degrees for one value of a series summing to `total`.
pub fn sector_sweep(total: f64, value: f64) -> f64 {
    360.0 * value / total
}

/// Pointer angle in degrees, measured clockwise from 12 o'clock, in [0,360).
///
/// `dy` is negated to move from screen coordinates into the math convention
/// before `atan2`; the result is then rotated so 0 sits at 12 o'clock.
pub fn pointer_angle(dx: f64, dy: f64) -> f64 {
    let mut angle = -((-dy).atan2(dx).to_degrees() - 90.0);
    if angle < 0.0 {
        angle += 360.0;
    }
    angle
}

fn sector_path(oval: skia::Rect, cx: f64, cy: f64, start: f64, sweep: f64) -> skia::Path {
    let mut path = skia::Path::new();
    path.move_to(pt(cx, cy));
    path.arc_to(oval, start as f32, sweep as f32, false);
    path.close();
    path
}
