// File: crates/emberplot/src/chart.rs
// Summary: Chart model: kind, dataset, render options and the mutation lock.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use skia_safe as skia;
use tracing::debug;

use crate::error::ChartError;
use crate::overlay::Overlay;
use crate::render::{BarRenderer, HistogramRenderer, LineRenderer, PieRenderer, Renderer};
use crate::scheme::Scheme;
use crate::types::{accent, DataPoint, PointPx, SizePx};

/// Chart family. Immutable after construction; the renderer is bound 1:1 to
/// the kind. `Histogram` is the line variant rendered through the SVG
/// polygon intermediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Histogram,
}

/// Explicit render configuration. Every field has a stated default; there
/// are no sentinel values beyond `fill_color: None` meaning "no area fill".
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Stroke width in pixels, >= 0. Default 1.0 (0.0 for pie charts).
    pub stroke_width: f32,
    /// Area fill below lines / inside bars. `None` disables the fill.
    pub fill_color: Option<skia::Color>,
    /// Stroke color of the first series (and of pie sector boundaries).
    pub stroke_color: skia::Color,
    /// Cyclic palette for series after the first and for pie sectors.
    pub scheme: Scheme,
}

impl RenderOptions {
    /// Kind-dependent defaults: pie charts draw no boundary stroke unless
    /// asked to.
    pub fn for_kind(kind: ChartKind) -> Self {
        Self {
            stroke_width: if kind == ChartKind::Pie { 0.0 } else { 1.0 },
            fill_color: None,
            stroke_color: accent(),
            scheme: Scheme::analogous(None),
        }
    }
}

/// Everything guarded by the chart lock: the dataset, the options and the
/// pixel size of the last rasterization. Hit-testing reads all three under
/// the same lock a mutator takes, so a concurrent `set_data` can never be
/// observed halfway.
#[derive(Debug)]
pub(crate) struct ChartState {
    pub data: Vec<Vec<f64>>,
    pub options: RenderOptions,
    pub view: SizePx,
}

/// A chart bound to one dataset and one renderer.
///
/// Mutators (`set_data`, `plot`, `set_options`) raise the redraw flag; the
/// host drains it with [`Chart::take_redraw`] and calls
/// [`Chart::rasterize`] with its current pixel size. `clear` deliberately
/// does not raise the flag.
pub struct Chart {
    kind: ChartKind,
    state: Mutex<ChartState>,
    renderer: Renderer,
    needs_redraw: AtomicBool,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Self::with_options(kind, RenderOptions::for_kind(kind))
    }

    pub fn with_options(kind: ChartKind, options: RenderOptions) -> Self {
        let renderer = match kind {
            ChartKind::Line => Renderer::Line(LineRenderer::new()),
            ChartKind::Bar => Renderer::Bar(BarRenderer::new()),
            ChartKind::Pie => Renderer::Pie(PieRenderer::new()),
            ChartKind::Histogram => Renderer::Histogram(HistogramRenderer::new()),
        };
        Self {
            kind,
            state: Mutex::new(ChartState {
                data: Vec::new(),
                options,
                view: SizePx::default(),
            }),
            renderer,
            needs_redraw: AtomicBool::new(false),
        }
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    /// Replace the whole dataset and request a redraw.
    pub fn set_data(&self, data: Vec<Vec<f64>>) {
        let mut st = self.state.lock();
        debug!(series = data.len(), "set_data");
        st.data = data;
        drop(st);
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Append one series and request a redraw. Pie renderers ignore series
    /// after the first, but the mutation itself always succeeds.
    pub fn plot(&self, series: Vec<f64>) {
        let mut st = self.state.lock();
        debug!(len = series.len(), "plot");
        st.data.push(series);
        drop(st);
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Empty the dataset. Does not request a redraw; the caller decides
    /// when the now-blank chart is repainted.
    pub fn clear(&self) {
        let mut st = self.state.lock();
        debug!("clear");
        st.data.clear();
    }

    /// Snapshot of the current options.
    pub fn options(&self) -> RenderOptions {
        self.state.lock().options.clone()
    }

    /// Swap the render options and request a redraw.
    pub fn set_options(&self, options: RenderOptions) {
        self.state.lock().options = options;
        self.needs_redraw.store(true, Ordering::Release);
    }

    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw.load(Ordering::Acquire)
    }

    /// Drain the redraw flag, returning whether a redraw was pending.
    pub fn take_redraw(&self) -> bool {
        self.needs_redraw.swap(false, Ordering::AcqRel)
    }

    /// Annotation surface layered above the raster image.
    pub fn overlay(&self) -> &Overlay {
        self.renderer.overlay()
    }

    /// Rasterize the chart at the given pixel size.
    ///
    /// An empty dataset produces a blank transparent image of the requested
    /// size; a zero-sized target produces a 1x1 image. The viewport used by
    /// later hit-tests is recorded under the same lock.
    pub fn rasterize(&self, width: i32, height: i32) -> Result<skia::Image, ChartError> {
        let mut st = self.state.lock();
        st.view = SizePx::new(width.max(0) as f32, height.max(0) as f32);
        debug!(kind = ?self.kind, width, height, "rasterize");
        self.renderer.rasterize(&st, width, height)
    }

    /// Rasterize and composite the overlay annotations on top.
    pub fn rasterize_with_overlay(
        &self,
        width: i32,
        height: i32,
    ) -> Result<skia::Image, ChartError> {
        let image = self.rasterize(width, height)?;
        let mut surface = crate::render::new_surface(image.width(), image.height())?;
        let canvas = surface.canvas();
        canvas.clear(skia::Color::TRANSPARENT);
        canvas.draw_image(&image, (0, 0), None);
        self.overlay()
            .draw(canvas, SizePx::new(image.width() as f32, image.height() as f32));
        Ok(surface.image_snapshot())
    }

    /// Hit-test one knot/bar by series and point index. Out-of-bounds
    /// indices (and pie charts, which have no per-index geometry) answer
    /// `None`.
    pub fn at_index(&self, series: usize, index: usize) -> Option<DataPoint> {
        let st = self.state.lock();
        self.renderer.at_index(&st, series, index)
    }

    /// Hit-test a pointer position against the last rasterized geometry.
    /// Returns one entry per resolvable series (zero or one for pie).
    pub fn at_pointer(&self, pos: PointPx) -> Vec<DataPoint> {
        let st = self.state.lock();
        self.renderer.at_pointer(&st, pos)
    }

    /// Rasterize and read back tightly packed RGBA8 pixels:
    /// `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(
        &self,
        width: i32,
        height: i32,
    ) -> Result<(Vec<u8>, i32, i32, usize), ChartError> {
        let image = self.rasterize(width, height)?;
        let (w, h) = (image.width(), image.height());
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !image.read_pixels(
            &info,
            &mut pixels,
            stride,
            (0, 0),
            skia::image::CachingHint::Disallow,
        ) {
            return Err(ChartError::Readback);
        }
        Ok((pixels, w, h, stride))
    }

    /// Rasterize and encode to PNG bytes.
    pub fn render_to_png_bytes(&self, width: i32, height: i32) -> Result<Vec<u8>, ChartError> {
        let image = self.rasterize(width, height)?;
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::PngEncode)?;
        Ok(data.as_bytes().to_vec())
    }
}
