// File: crates/emberplot/src/scheme.rs
// Summary: Cyclic color schemes: random palette and analogous HSLuv-derived palette.

use rand::Rng;
use skia_safe as skia;

use crate::error::ChartError;
use crate::hsluv;
use crate::types::accent;

/// Ordered, non-empty, cyclically indexed palette.
///
/// Emptiness is rejected at construction so `color_at` can never hit a
/// modulo by zero.
#[derive(Clone, Debug)]
pub struct Scheme(Vec<skia::Color>);

impl Scheme {
    pub fn new(colors: Vec<skia::Color>) -> Result<Self, ChartError> {
        if colors.is_empty() {
            return Err(ChartError::EmptyScheme);
        }
        Ok(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// A scheme is never empty; provided for clippy symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Cyclic indexing: `color_at(i) == color_at(i + len)`.
    pub fn color_at(&self, index: usize) -> skia::Color {
        self.0[index % self.0.len()]
    }

    /// 360 randomly generated opaque colors. Two calls may differ.
    pub fn random() -> Self {
        let mut rng = rand::rng();
        let colors = (0..360)
            .map(|_| {
                skia::Color::from_argb(
                    255,
                    rng.random_range(0..=255u8),
                    rng.random_range(0..=255u8),
                    rng.random_range(0..=255u8),
                )
            })
            .collect();
        Self(colors)
    }

    /// 12 colors derived from `base` by 30-degree hue rotation in HSLuv space.
    ///
    /// Lightness is nudged by 10 per step, direction alternating with step
    /// parity; overflow above 100 resets to 10 and underflow below 0 resets
    /// to 90 (a wrap, not a clamp). Falls back to the accent color when
    /// `base` is `None`.
    pub fn analogous(base: Option<skia::Color>) -> Self {
        let base = base.unwrap_or_else(accent);
        let (h, s, mut l) = hsluv::rgb_to_hsluv(
            base.r() as f64 / 255.0,
            base.g() as f64 / 255.0,
            base.b() as f64 / 255.0,
        );

        let offset = 10.0;
        let mut colors = Vec::with_capacity(12);
        for step in 0..12u32 {
            if step % 2 == 0 {
                l += offset;
            } else {
                l -= offset;
            }
            if l > 100.0 {
                l = 10.0;
            }
            if l < 0.0 {
                l = 90.0;
            }
            let hue = (h + f64::from(step) * 30.0) % 360.0;
            let (r, g, b) = hsluv::hsluv_to_rgb(hue, s, l);
            colors.push(skia::Color::from_argb(
                255,
                (r * 255.0).round() as u8,
                (g * 255.0).round() as u8,
                (b * 255.0).round() as u8,
            ));
        }
        Self(colors)
    }
}

impl Default for Scheme {
    fn default() -> Self {
        Self::analogous(None)
    }
}
