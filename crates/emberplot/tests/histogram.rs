// File: crates/emberplot/tests/histogram.rs
// Purpose: Histogram (SVG-intermediate) rendering and bar-style hit-testing.

use emberplot::{Chart, ChartKind, PointPx, RenderOptions};
use skia_safe as skia;

fn histogram(data: Vec<f64>) -> Chart {
    let mut options = RenderOptions::for_kind(ChartKind::Histogram);
    options.fill_color = Some(skia::Color::from_argb(255, 0x44, 0x55, 0x66));
    let chart = Chart::with_options(ChartKind::Histogram, options);
    chart.set_data(vec![data]);
    chart
}

#[test]
fn raster_matches_requested_bounds() {
    let chart = histogram(vec![1.0, 2.0, 3.0]);
    let img = chart.rasterize(90, 30).expect("rasterize");
    assert_eq!((img.width(), img.height()), (90, 30));
}

#[test]
fn filled_bars_touch_pixels() {
    let chart = histogram(vec![1.0, 2.0, 3.0]);
    let (px, ..) = chart.render_to_rgba8(90, 30).expect("render");
    assert!(px.iter().any(|&b| b != 0), "fill must reach the raster");
}

#[test]
fn at_index_returns_bar_mid_top() {
    let chart = histogram(vec![1.0, 2.0, 3.0]);
    chart.rasterize(90, 30).expect("rasterize");

    // step = 90/3 = 30; scaling spans 0..3 over 30px
    let p = chart.at_index(0, 1).expect("in range");
    assert_eq!(p.value, 2.0);
    assert!((f64::from(p.position.x) - 45.0).abs() < 1e-3);
    assert!((f64::from(p.position.y) - 10.0).abs() < 1e-3);
}

#[test]
fn at_pointer_resolves_single_series() {
    let chart = histogram(vec![1.0, 2.0, 3.0]);
    chart.rasterize(90, 30).expect("rasterize");

    let points = chart.at_pointer(PointPx::new(50.0, 0.0));
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].value, 2.0);
}

#[test]
fn only_the_first_series_is_addressable() {
    let chart = histogram(vec![1.0, 2.0, 3.0]);
    chart.plot(vec![9.0, 9.0]);
    chart.rasterize(90, 30).expect("rasterize");
    assert!(chart.at_index(1, 0).is_none());
}

#[test]
fn empty_dataset_renders_blank() {
    let chart = Chart::new(ChartKind::Histogram);
    let (px, w, h, _) = chart.render_to_rgba8(40, 20).expect("render");
    assert_eq!((w, h), (40, 20));
    assert!(px.iter().all(|&b| b == 0));
}

#[test]
fn all_zero_series_stays_finite_and_blank_height() {
    let chart = histogram(vec![0.0, 0.0, 0.0]);
    let img = chart.rasterize(60, 20).expect("rasterize");
    assert_eq!((img.width(), img.height()), (60, 20));
    let p = chart.at_index(0, 0).expect("in range");
    assert!(p.position.y.is_finite());
}
