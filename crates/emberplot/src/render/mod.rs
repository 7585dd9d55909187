// File: crates/emberplot/src/render/mod.rs
// Summary: Renderer dispatch and shared raster helpers.

pub mod bar;
pub mod histogram;
pub mod line;
pub mod pie;

use skia_safe as skia;

use crate::chart::ChartState;
use crate::error::ChartError;
use crate::overlay::Overlay;
use crate::types::{DataPoint, PointPx};

pub use bar::BarRenderer;
pub use histogram::HistogramRenderer;
pub use line::LineRenderer;
pub use pie::PieRenderer;

/// Fill alpha applied to scheme colors when several series are stacked, so
/// lower series stay visible through upper fills.
pub(crate) const STACKED_FILL_ALPHA: u8 = 0x99;
/// Stroke alpha for series after the first.
pub(crate) const STACKED_STROKE_ALPHA: u8 = 245;

/// Every chart kind implements the full capability set; kinds without a
/// meaningful notion of a capability (per-index hit-testing on a pie)
/// answer with the "no result" case instead of omitting the method.
#[derive(Debug)]
pub enum Renderer {
    Line(LineRenderer),
    Bar(BarRenderer),
    Pie(PieRenderer),
    Histogram(HistogramRenderer),
}

impl Renderer {
    pub(crate) fn rasterize(
        &self,
        state: &ChartState,
        width: i32,
        height: i32,
    ) -> Result<skia::Image, ChartError> {
        match self {
            Renderer::Line(r) => r.rasterize(state, width, height),
            Renderer::Bar(r) => r.rasterize(state, width, height),
            Renderer::Pie(r) => r.rasterize(state, width, height),
            Renderer::Histogram(r) => r.rasterize(state, width, height),
        }
    }

    pub(crate) fn at_index(
        &self,
        state: &ChartState,
        series: usize,
        index: usize,
    ) -> Option<DataPoint> {
        match self {
            Renderer::Line(r) => r.at_index(state, series, index),
            Renderer::Bar(r) => r.at_index(state, series, index),
            Renderer::Pie(r) => r.at_index(state, series, index),
            Renderer::Histogram(r) => r.at_index(state, series, index),
        }
    }

    pub(crate) fn at_pointer(&self, state: &ChartState, pos: PointPx) -> Vec<DataPoint> {
        match self {
            Renderer::Line(r) => r.at_pointer(state, pos),
            Renderer::Bar(r) => r.at_pointer(state, pos),
            Renderer::Pie(r) => r.at_pointer(state, pos),
            Renderer::Histogram(r) => r.at_pointer(state, pos),
        }
    }

    pub fn overlay(&self) -> &Overlay {
        match self {
            Renderer::Line(r) => &r.overlay,
            Renderer::Bar(r) => &r.overlay,
            Renderer::Pie(r) => &r.overlay,
            Renderer::Histogram(r) => &r.overlay,
        }
    }
}

// ---- shared raster helpers ---------------------------------------------------

pub(crate) fn new_surface(width: i32, height: i32) -> Result<skia::Surface, ChartError> {
    skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })
}

/// Blank transparent image. A zero-sized request degrades to 1x1.
pub(crate) fn blank_image(width: i32, height: i32) -> Result<skia::Image, ChartError> {
    let (w, h) = if width <= 0 || height <= 0 {
        (1, 1)
    } else {
        (width, height)
    };
    let mut surface = new_surface(w, h)?;
    surface.canvas().clear(skia::Color::TRANSPARENT);
    Ok(surface.image_snapshot())
}

/// True when there is nothing to draw: no series, or a leading empty series.
pub(crate) fn dataset_is_blank(state: &ChartState) -> bool {
    state.data.is_empty() || state.data[0].is_empty()
}

pub(crate) fn with_alpha(color: skia::Color, alpha: u8) -> skia::Color {
    skia::Color::from_argb(alpha, color.r(), color.g(), color.b())
}

/// Fill color policy shared by the line and bar renderers: with several
/// series each fill takes its scheme color at reduced opacity; a single
/// series uses the explicitly configured fill (or none at all). Bars fill
/// multi-series datasets unconditionally; line fills are additionally
/// gated on a configured `fill_color` at the call site.
pub(crate) fn series_fill_color(state: &ChartState, index: usize) -> Option<skia::Color> {
    if state.data.len() > 1 {
        Some(with_alpha(
            state.options.scheme.color_at(index),
            STACKED_FILL_ALPHA,
        ))
    } else {
        state.options.fill_color
    }
}

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

pub(crate) fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_stroke_cap(skia::paint::Cap::Round);
    paint.set_stroke_join(skia::paint::Join::Round);
    paint.set_color(color);
    paint
}

pub(crate) fn pt(x: f64, y: f64) -> skia::Point {
    skia::Point::new(x as f32, y as f32)
}
