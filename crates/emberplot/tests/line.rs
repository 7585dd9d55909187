// File: crates/emberplot/tests/line.rs
// Purpose: Line renderer: raster shape, hit-test round-trips, idempotence.

use emberplot::{Chart, ChartKind, PointPx, RenderOptions};
use skia_safe as skia;

fn line_chart_1_to_10() -> Chart {
    let chart = Chart::new(ChartKind::Line);
    chart.set_data(vec![(1..=10).map(f64::from).collect()]);
    chart
}

#[test]
fn at_index_round_trip() {
    let chart = line_chart_1_to_10();
    chart.rasterize(500, 300).expect("rasterize");

    // 6th element (index 5), x consistent with index * step
    let p = chart.at_index(0, 5).expect("in range");
    assert_eq!(p.value, 6.0);
    let step = 500.0 / 9.0;
    assert!((f64::from(p.position.x) - 5.0 * step).abs() <= 1.0);
}

#[test]
fn at_index_out_of_bounds_is_none() {
    let chart = line_chart_1_to_10();
    chart.rasterize(500, 300).expect("rasterize");
    assert!(chart.at_index(0, 10).is_none());
    assert!(chart.at_index(3, 0).is_none());
}

#[test]
fn at_pointer_resolves_every_series() {
    let chart = Chart::new(ChartKind::Line);
    chart.set_data(vec![
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![5.0, 4.0, 3.0, 2.0, 1.0],
    ]);
    chart.rasterize(400, 200).expect("rasterize");

    let points = chart.at_pointer(PointPx::new(200.0, 100.0));
    assert_eq!(points.len(), 2);
    // step = 400/4 = 100 => pointer at x=200 lands on index 2
    assert_eq!(points[0].value, 3.0);
    assert_eq!(points[1].value, 3.0);
}

#[test]
fn empty_dataset_renders_blank_at_requested_size() {
    let chart = Chart::new(ChartKind::Line);
    let (px, w, h, stride) = chart.render_to_rgba8(50, 40).expect("render");
    assert_eq!((w, h), (50, 40));
    assert_eq!(stride, 50 * 4);
    assert!(px.iter().all(|&b| b == 0), "blank image must be transparent");
}

#[test]
fn zero_sized_target_degrades_to_1x1() {
    let chart = line_chart_1_to_10();
    let img = chart.rasterize(0, 300).expect("rasterize");
    assert_eq!((img.width(), img.height()), (1, 1));
}

#[test]
fn rasterize_is_idempotent() {
    let chart = Chart::new(ChartKind::Line);
    chart.set_data(vec![
        vec![4.0, -6.0, 7.0, 8.0],
        vec![6.0, -3.0, 2.0, 3.0],
    ]);
    let (a, ..) = chart.render_to_rgba8(320, 180).expect("first");
    let (b, ..) = chart.render_to_rgba8(320, 180).expect("second");
    assert_eq!(a, b, "unchanged dataset must produce identical pixels");
}

#[test]
fn multi_series_fill_requires_a_configured_fill_color() {
    let data = vec![vec![0.0, 10.0, 0.0], vec![0.0, 5.0, 0.0]];

    // default options leave fill_color unset, so only the strokes may paint
    let plain = Chart::new(ChartKind::Line);
    plain.set_data(data.clone());
    let (px, _, _, stride) = plain.render_to_rgba8(100, 100).expect("render");
    let unfilled = px.chunks_exact(4).filter(|p| p[3] != 0).count();
    // a point deep under both peaks, far from any stroke
    assert_eq!(px[75 * stride + 50 * 4 + 3], 0, "no area fill without a fill color");

    let mut options = RenderOptions::for_kind(ChartKind::Line);
    options.fill_color = Some(skia::Color::from_argb(255, 0x33, 0x66, 0x99));
    let chart = Chart::with_options(ChartKind::Line, options);
    chart.set_data(data);
    let (px, ..) = chart.render_to_rgba8(100, 100).expect("render");
    let filled = px.chunks_exact(4).filter(|p| p[3] != 0).count();

    assert!(filled > unfilled, "configured fill must cover the area under the lines");
}

#[test]
fn single_point_series_spans_the_full_width() {
    let chart = Chart::new(ChartKind::Line);
    chart.set_data(vec![vec![7.0]]);
    let img = chart.rasterize(200, 100).expect("rasterize");
    assert_eq!((img.width(), img.height()), (200, 100));

    // the lone knot sits at the left edge and owns the whole step
    let p = chart.at_index(0, 0).expect("in range");
    assert_eq!(p.value, 7.0);
    assert_eq!(p.position.x, 0.0);
    assert!(p.position.y.is_finite());
    assert!(chart.at_index(0, 1).is_none());
}

#[test]
fn negative_values_render() {
    let chart = Chart::new(ChartKind::Line);
    chart.set_data(vec![vec![-5.0, -4.0, -3.0, -2.0, -1.0, 0.0, 1.0, 2.0]]);
    let (px, w, h, _) = chart.render_to_rgba8(300, 200).expect("render");
    assert_eq!((w, h), (300, 200));
    assert!(px.iter().any(|&b| b != 0), "stroke must touch some pixels");
}
