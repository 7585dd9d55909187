// File: crates/emberplot/src/render/line.rs
// Summary: Line chart rasterization and knot hit-testing.

use skia_safe as skia;
use tracing::trace;

use crate::chart::ChartState;
use crate::error::ChartError;
use crate::overlay::Overlay;
use crate::scale::global_zero;
use crate::types::{DataPoint, PointPx};

use super::{
    blank_image, dataset_is_blank, fill_paint, new_surface, pt, series_fill_color, stroke_paint,
    with_alpha, STACKED_STROKE_ALPHA,
};

#[derive(Debug, Default)]
pub struct LineRenderer {
    pub(crate) overlay: Overlay,
}

impl LineRenderer {
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

        let mut surface = new_surface(width, height)?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);

        let lw = f64::from(state.options.stroke_width);
        let w = f64::from(width);
        let (zero_y, scale) = global_zero(&state.data, f64::from(height));
        trace!(zero_y, scale, "line raster pass");

        for (index, data) in state.data.iter().enumerate() {
            if data.is_empty() {
                continue;
            }
            let step = x_step(w - lw * 2.0, data.len());

            // the whole fill is gated on a configured fill color; the
            // scheme only decides which color a multi-series fill takes
            if let Some(fill) = state.options.fill_color.and(series_fill_color(state, index)) {
                let mut path = skia::Path::new();
                path.move_to(pt(-lw * 4.0, zero_y));
                path.line_to(pt(-lw * 4.0, knot_y(data[0], zero_y, scale, lw)));
                for (i, &v) in data.iter().enumerate() {
                    path.line_to(pt(i as f64 * step + lw, knot_y(v, zero_y, scale, lw)));
                }
                // close back along the zero baseline
                path.line_to(pt(w - lw * 2.0, zero_y));
                path.close();
                canvas.draw_path(&path, &fill_paint(fill));
            }

            let stroke = if index > 0 {
                with_alpha(state.options.scheme.color_at(index), STACKED_STROKE_ALPHA)
            } else {
                state.options.stroke_color
            };
            let mut path = skia::Path::new();
            let mut last_y = zero_y;
            path.move_to(pt(-lw * 4.0, zero_y));
            path.line_to(pt(-lw * 4.0, knot_y(data[0], zero_y, scale, lw)));
            for (i, &v) in data.iter().enumerate() {
                last_y = knot_y(v, zero_y, scale, lw);
                path.line_to(pt(i as f64 * step + lw, last_y));
            }
            // run the stroke off-canvas so the cap is not visible
            path.line_to(pt(w + lw * 2.0, last_y));
            canvas.draw_path(&path, &stroke_paint(stroke, state.options.stroke_width));
        }

        Ok(surface.image_snapshot())
    }

    pub(crate) fn at_index(
        &self,
        state: &ChartState,
        series: usize,
        index: usize,
    ) -> Option<DataPoint> {
        let data = state.data.get(series)?;
        if index >= data.len() {
            return None;
        }

        let (zero_y, scale) = global_zero(&state.data, f64::from(state.view.height));
        let step = x_step(f64::from(state.view.width), data.len());
        let value = data[index];
        let x = (index as f64 * step) as i32;
        let y = zero_y - value * scale;
        Some(DataPoint {
            value,
            position: PointPx::new(x as f32, y as f32),
        })
    }

    pub(crate) fn at_pointer(&self, state: &ChartState, pos: PointPx) -> Vec<DataPoint> {
        let mut points = Vec::with_capacity(state.data.len());
        for (series, data) in state.data.iter().enumerate() {
            if data.is_empty() {
                continue;
            }
            let step = x_step(f64::from(state.view.width), data.len());
            if step <= 0.0 {
                continue;
            }
            let index = (f64::from(pos.x) / step) as i64;
            if index < 0 {
                continue;
            }
            if let Some(p) = self.at_index(state, series, index as usize) {
                points.push(p);
            }
        }
        points
    }
}

/// X distance between two consecutive knots. A single-point series
/// degenerates to the full drawable width.
fn x_step(drawable_width: f64, len: usize) -> f64 {
    if len > 1 {
        drawable_width / (len - 1) as f64
    } else {
        drawable_width
    }
}

/// Pixel row for a value, pulled toward the zero row by the stroke width so
/// extreme knots are not clipped by the image edge.
fn knot_y(value: f64, zero_y: f64, scale: f64, lw: f64) -> f64 {
    let y = zero_y - value * scale;
    if y > zero_y {
        y - lw
    } else if y < zero_y {
        y + lw
    } else {
        y
    }
}
