// File: crates/emberplot/src/error.rs
// Summary: Typed error surface for chart construction and rasterization.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    /// A scheme with zero colors would make cyclic indexing divide by zero.
    #[error("color scheme must contain at least one color")]
    EmptyScheme,

    #[error("failed to create {width}x{height} raster surface")]
    Surface { width: i32, height: i32 },

    #[error("failed to read back pixels from rendered image")]
    Readback,

    #[error("PNG encoding failed")]
    PngEncode,

    #[error("generated svg document was rejected: {0}")]
    Svg(String),
}
