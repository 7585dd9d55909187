// File: crates/emberplot/tests/scale.rs
// Purpose: Validate coordinate-mapper properties over one and many series.

use emberplot::scale::{global_zero, longest_series_len, range, scale_factor, zero_row};

#[test]
fn scale_spans_pixel_height_exactly() {
    // scale * (max - min) == h for any non-empty finite series
    for (series, h) in [
        (vec![1.0, 2.0, 3.0], 120.0),
        (vec![-7.5, 0.0, 12.25], 333.0),
        (vec![0.001, 0.002], 1.0),
    ] {
        let (min, max) = range(&series);
        let s = scale_factor(&series, h);
        assert!((s * (max - min) - h).abs() < 1e-9);
    }
}

#[test]
fn global_zero_picks_the_most_conservative_scale() {
    // A spans 10 units, B spans 100: at height 100 the shared scale must be
    // min(100/10, 100/100) = 1, not 10
    let dataset = vec![vec![0.0, 10.0], vec![0.0, 100.0]];
    let (_, scale) = global_zero(&dataset, 100.0);
    assert!((scale - 1.0).abs() < 1e-9);
}

#[test]
fn global_zero_tie_break_is_first_series() {
    // both series have the same span; the zero row must come from the first
    let dataset = vec![vec![-10.0, 10.0], vec![0.0, 20.0]];
    let (zero, scale) = global_zero(&dataset, 100.0);
    assert!((scale - 5.0).abs() < 1e-9);
    // first series: min -10 => zero row at 100 - 10*5 = 50
    assert!((zero - 50.0).abs() < 1e-9);
}

#[test]
fn global_zero_skips_empty_series() {
    let dataset = vec![vec![], vec![0.0, 4.0]];
    let (zero, scale) = global_zero(&dataset, 80.0);
    assert!((scale - 20.0).abs() < 1e-9);
    assert!((zero - 80.0).abs() < 1e-9);
}

#[test]
fn flat_series_stays_finite_end_to_end() {
    let dataset = vec![vec![3.0, 3.0, 3.0]];
    let (zero, scale) = global_zero(&dataset, 200.0);
    assert!(zero.is_finite());
    assert!(scale.is_finite());
    assert!(zero_row(&dataset[0], 200.0).is_finite());
}

#[test]
fn longest_series_length() {
    let dataset = vec![vec![1.0], vec![1.0, 2.0, 3.0], vec![1.0, 2.0]];
    assert_eq!(longest_series_len(&dataset), 3);
    assert_eq!(longest_series_len(&[]), 0);
}
