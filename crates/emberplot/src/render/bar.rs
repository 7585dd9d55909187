// File: crates/emberplot/src/render/bar.rs
// Summary: Grouped bar chart rasterization and mid-top hit-testing.

use skia_safe as skia;
use tracing::trace;

use crate::chart::ChartState;
use crate::error::ChartError;
use crate::overlay::Overlay;
use crate::scale::{global_zero, longest_series_len};
use crate::types::{DataPoint, PointPx};

use super::{
    blank_image, dataset_is_blank, fill_paint, new_surface, series_fill_color, stroke_paint,
    with_alpha, STACKED_FILL_ALPHA,
};

#[derive(Debug, Default)]
pub struct BarRenderer {
    pub(crate) overlay: Overlay,
}

impl BarRenderer {
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
        let longest = longest_series_len(&state.data) as f64;
        // one X step per index of the longest series; every series gets an
        // equal sub-slot inside a step so grouped bars sit side by side
        let step = (f64::from(width) - lw * 2.0) / longest;
        let bar_width = step / state.data.len() as f64 - 2.0 * lw;
        let (zero_y, scale) = global_zero(&state.data, f64::from(height));
        trace!(zero_y, scale, step, "bar raster pass");

        for (index, data) in state.data.iter().enumerate() {
            let fill = series_fill_color(state, index);
            let stroke = if index > 0 {
                with_alpha(state.options.scheme.color_at(index), STACKED_FILL_ALPHA)
            } else {
                state.options.stroke_color
            };

            let mut x = index as f64 * bar_width;
            for &v in data {
                let top = bar_top(v, zero_y, scale, lw);
                let rect = skia::Rect::new(
                    x as f32,
                    top.min(zero_y) as f32,
                    (x + bar_width + lw) as f32,
                    top.max(zero_y) as f32,
                );
                if let Some(fill) = fill {
                    canvas.draw_rect(rect, &fill_paint(fill));
                }
                if lw > 0.0 {
                    canvas.draw_rect(rect, &stroke_paint(stroke, state.options.stroke_width));
                }
                x += step;
            }
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

        let longest = longest_series_len(&state.data) as f64;
        let w = f64::from(state.view.width);
        let h = f64::from(state.view.height);
        let lw = f64::from(state.options.stroke_width);
        let step = w / longest;
        let bar_width = step / state.data.len() as f64 - lw;
        let (zero_y, scale) = global_zero(&state.data, h);

        let value = data[index];
        // mid-top point of the bar
        let x = series as f64 * bar_width + index as f64 * step + bar_width / 2.0;
        let y = zero_y - value * scale;
        Some(DataPoint {
            value,
            position: PointPx::new(x as f32, y as f32),
        })
    }

    pub(crate) fn at_pointer(&self, state: &ChartState, pos: PointPx) -> Vec<DataPoint> {
        let longest = longest_series_len(&state.data);
        if longest == 0 {
            return Vec::new();
        }
        let step = f64::from(state.view.width) / longest as f64;
        if step <= 0.0 {
            return Vec::new();
        }
        let index = (f64::from(pos.x) / step) as i64;
        if index < 0 {
            return Vec::new();
        }

        let mut points = Vec::with_capacity(state.data.len());
        for series in 0..state.data.len() {
            if let Some(p) = self.at_index(state, series, index as usize) {
                points.push(p);
            }
        }
        points
    }
}

/// Bar top row, clamped inward by half the stroke width to avoid seams at
/// the baseline and the image edges.
fn bar_top(value: f64, zero_y: f64, scale: f64, lw: f64) -> f64 {
    let y = zero_y - value * scale;
    let half = lw / 2.0;
    if y > zero_y {
        y - half
    } else if y < zero_y {
        y + half
    } else {
        y
    }
}
