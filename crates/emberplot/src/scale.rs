// File: crates/emberplot/src/scale.rs
// Summary: Coordinate mapping: value ranges, pixel scale factors and the shared zero row.

/// Minimum and maximum of a series.
///
/// Contract: the series must be non-empty; an empty slice yields an
/// infinite range that downstream functions treat as "no usable data".
pub fn range(series: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in series {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    (min, max)
}

/// Pixels per unit of data value for one series.
///
/// A flat series (max == min) would divide by zero; the span is treated as 1
/// instead so no non-finite factor ever reaches the drawing primitives.
pub fn scale_factor(series: &[f64], height: f64) -> f64 {
    let (min, max) = range(series);
    let span = max - min;
    if span == 0.0 || !span.is_finite() {
        return height;
    }
    height / span
}

/// Distance from the image top to the row representing data value 0.
///
/// The origin of the image is the top-left corner, so for a series whose
/// minimum is negative the zero row moves up from the bottom edge.
pub fn zero_row(series: &[f64], height: f64) -> f64 {
    let (min, _) = range(series);
    let min = if min.is_finite() { min } else { 0.0 };
    height - (-min * scale_factor(series, height))
}

/// Shared zero row and scale for a whole dataset.
///
/// Every series gets its own scale; the smallest one is kept so the most
/// extreme series still fits the drawable area. The first series reaching
/// the minimal scale wins ties, which keeps the result deterministic.
pub fn global_zero(dataset: &[Vec<f64>], height: f64) -> (f64, f64) {
    let mut zero = height;
    let mut scaler = 0.0f64;
    for series in dataset {
        if series.is_empty() {
            continue;
        }
        let scale = scale_factor(series, height);
        if scaler == 0.0 || scaler > scale {
            scaler = scale;
            zero = zero_row(series, height);
        }
    }
    if scaler == 0.0 {
        // dataset had no usable series
        return (height, 1.0);
    }
    (zero, scaler)
}

/// Length of the longest series, used by the bar renderer to size the X step
/// so all series align under a single X grid.
pub fn longest_series_len(dataset: &[Vec<f64>]) -> usize {
    dataset.iter().map(Vec::len).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_scans_min_and_max() {
        assert_eq!(range(&[3.0, -1.0, 7.0, 0.0]), (-1.0, 7.0));
    }

    #[test]
    fn flat_series_never_yields_non_finite_scale() {
        let s = scale_factor(&[5.0, 5.0, 5.0], 120.0);
        assert!(s.is_finite());
        assert_eq!(s, 120.0);
    }

    #[test]
    fn zero_row_accounts_for_negative_minimum() {
        // values span -5..5 over 100px => scale 10, zero row at mid-height
        assert_eq!(zero_row(&[-5.0, 5.0], 100.0), 50.0);
        // a series touching zero keeps the zero row on the bottom edge
        assert_eq!(zero_row(&[0.0, 8.0], 100.0), 100.0);
    }
}
