// File: crates/emberplot/src/lib.rs
// Summary: Library entry point; exports the chart model, renderers and helpers.

//! Embeddable 2D chart engine: line, bar, pie and histogram charts
//! rasterized to pixel images, with hit-testing back from pointer
//! coordinates to data points. The engine owns no windows or event loops;
//! a host hands it a pixel size and a dataset and gets an image and
//! hit-test answers back.

pub mod chart;
pub mod error;
pub mod hsluv;
pub mod overlay;
pub mod render;
pub mod scale;
pub mod scheme;
pub mod svg;
pub mod types;

pub use chart::{Chart, ChartKind, RenderOptions};
pub use error::ChartError;
pub use overlay::{Annotation, Overlay};
pub use render::Renderer;
pub use scheme::Scheme;
pub use types::{accent, DataPoint, PointPx, SizePx};
