// File: crates/emberplot/src/render/histogram.rs
// Summary: Histogram (line-variant) rendering through the SVG polygon intermediate.

use skia_safe as skia;
use tracing::trace;

use crate::chart::ChartState;
use crate::error::ChartError;
use crate::overlay::Overlay;
use crate::svg::PolygonSvg;
use crate::types::{DataPoint, PointPx};

use super::{blank_image, dataset_is_blank, new_surface};

#[derive(Debug, Default)]
pub struct HistogramRenderer {
    pub(crate) overlay: Overlay,
}

impl HistogramRenderer {
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

        let data = &state.data[0];
        let w = f64::from(width);
        let h = f64::from(height);
        let step = w / data.len() as f64;
        let (min_y, reduce) = value_mapping(data, h);
        let sw = f64::from(state.options.stroke_width);

        // four polygon corners per value, plus the closing baseline point
        let mut points = Vec::with_capacity(data.len() * 4 + 1);
        let mut x = 0.0f64;
        for &v in data.iter() {
            let top = h - (v - min_y) * reduce + sw;
            points.push((x as f32, (h + sw) as f32));
            points.push((x as f32, top as f32));
            points.push(((x + step) as f32, top as f32));
            points.push(((x + step) as f32, (h + sw) as f32));
            x += step;
        }
        points.push((x as f32, h as f32));

        let doc = PolygonSvg {
            width,
            height,
            points,
            fill: state.options.fill_color,
            stroke: state.options.stroke_color,
            stroke_width: state.options.stroke_width,
        }
        .document();
        trace!(len = doc.len(), "histogram svg rebuilt");

        let font_mgr = skia::FontMgr::new();
        let dom = skia::svg::Dom::from_bytes(doc.as_bytes(), font_mgr)
            .map_err(|e| ChartError::Svg(format!("{e:?}")))?;
        dom.set_container_size((width as f32, height as f32));

        let mut surface = new_surface(width, height)?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        dom.render(canvas);
        Ok(surface.image_snapshot())
    }

    /// Histogram hit-testing follows the bar convention: the returned
    /// position is the mid-top point of the bar at `index`. Only the first
    /// series is drawn, so any other series index is a miss.
    pub(crate) fn at_index(
        &self,
        state: &ChartState,
        series: usize,
        index: usize,
    ) -> Option<DataPoint> {
        if series != 0 {
            return None;
        }
        let data = state.data.first()?;
        if index >= data.len() {
            return None;
        }

        let w = f64::from(state.view.width);
        let h = f64::from(state.view.height);
        let step = w / data.len() as f64;
        let (min_y, reduce) = value_mapping(data, h);
        let value = data[index];
        Some(DataPoint {
            value,
            position: PointPx::new(
                (index as f64 * step + step / 2.0) as f32,
                (h - (value - min_y) * reduce) as f32,
            ),
        })
    }

    pub(crate) fn at_pointer(&self, state: &ChartState, pos: PointPx) -> Vec<DataPoint> {
        let Some(data) = state.data.first() else {
            return Vec::new();
        };
        if data.is_empty() {
            return Vec::new();
        }
        let step = f64::from(state.view.width) / data.len() as f64;
        if step <= 0.0 {
            return Vec::new();
        }
        let index = (f64::from(pos.x) / step) as i64;
        if index < 0 {
            return Vec::new();
        }
        self.at_index(state, 0, index as usize)
            .into_iter()
            .collect()
    }
}

/// Vertical mapping for the histogram: the drawn range always includes zero,
/// and a flat all-zero series keeps the factor finite.
fn value_mapping(data: &[f64], height: f64) -> (f64, f64) {
    let mut min_y = 0.0f64;
    let mut max_y = 0.0f64;
    for &v in data {
        if v > max_y {
            max_y = v;
        }
        if v < min_y {
            min_y = v;
        }
    }
    let span = max_y - min_y;
    let reduce = if span == 0.0 { height } else { height / span };
    (min_y, reduce)
}
