use approx::assert_relative_eq;

use fxchart_rs::ChartError;
use fxchart_rs::core::{
    Bar, BarGeometry, PriceMapping, ViewRange, Viewport, WindowExtent, project_bars,
};

fn flat_bar(open: f64, close: f64, timestamp: i64) -> Bar {
    Bar::new(open, open.max(close), open.min(close), close, timestamp)
}

#[test]
fn fixed_baseline_mapping_reproduces_reference_formula() {
    let bars = vec![flat_bar(125.0, 150.0, 1_000)];
    let view = ViewRange::fitted(50, bars.len());
    let figures = project_bars(
        &bars,
        view,
        BarGeometry::default(),
        PriceMapping::default(),
        Viewport::new(600, 400),
    )
    .expect("projection");

    assert_eq!(figures.len(), 1);
    let figure = figures[0];
    // close 150 maps to 400 - (50/100)*400, open 125 to 400 - (25/100)*400.
    assert_relative_eq!(figure.close_y, 200.0);
    assert_relative_eq!(figure.top, 200.0);
    assert_relative_eq!(figure.height, 100.0);
    assert_relative_eq!(figure.width, 10.0);
    assert!(figure.is_bullish);
}

#[test]
fn bearish_bar_spans_from_open_down_to_close() {
    let bars = vec![flat_bar(150.0, 125.0, 1_000)];
    let view = ViewRange::fitted(50, bars.len());
    let figures = project_bars(
        &bars,
        view,
        BarGeometry::default(),
        PriceMapping::default(),
        Viewport::new(600, 400),
    )
    .expect("projection");

    let figure = figures[0];
    assert_relative_eq!(figure.top, 200.0);
    assert_relative_eq!(figure.height, 100.0);
    assert!(!figure.is_bullish);
}

#[test]
fn unchanged_close_projects_to_zero_height_bearish_body() {
    let bars = vec![flat_bar(140.0, 140.0, 1_000)];
    let view = ViewRange::fitted(50, bars.len());
    let figures = project_bars(
        &bars,
        view,
        BarGeometry::default(),
        PriceMapping::default(),
        Viewport::new(600, 400),
    )
    .expect("projection");

    assert_relative_eq!(figures[0].height, 0.0);
    assert!(!figures[0].is_bullish);
}

#[test]
fn visible_slots_advance_by_bar_width_plus_gap() {
    let bars: Vec<Bar> = (0..4)
        .map(|i| flat_bar(120.0, 130.0, 1_000 + i * 60))
        .collect();
    let view = ViewRange::fitted(50, bars.len());
    let figures = project_bars(
        &bars,
        view,
        BarGeometry::default(),
        PriceMapping::default(),
        Viewport::new(600, 400),
    )
    .expect("projection");

    let xs: Vec<f64> = figures.iter().map(|figure| figure.x).collect();
    assert_eq!(xs, vec![0.0, 12.0, 24.0, 36.0]);
}

#[test]
fn window_outside_origin_projects_only_the_visible_slice() {
    let bars: Vec<Bar> = (0..4)
        .map(|i| flat_bar(120.0, 130.0, 1_000 + i * 60))
        .collect();
    let mut view = ViewRange::fitted(2, bars.len());
    view.pan(1, bars.len());

    let figures = project_bars(
        &bars,
        view,
        BarGeometry::default(),
        PriceMapping::default(),
        Viewport::new(600, 400),
    )
    .expect("projection");

    assert_eq!(figures.len(), 2);
    assert_relative_eq!(figures[0].x, 0.0);
    assert_relative_eq!(figures[1].x, 12.0);
}

#[test]
fn visible_range_mapping_pins_window_extremes_to_canvas_edges() {
    let bars = vec![Bar::new(1.2, 2.0, 1.0, 1.8, 1_000)];
    let view = ViewRange::fitted(50, bars.len());
    let figures = project_bars(
        &bars,
        view,
        BarGeometry::default(),
        PriceMapping::VisibleRange,
        Viewport::new(600, 400),
    )
    .expect("projection");

    let figure = figures[0];
    // Window extent is [1.0, 2.0]: close 1.8 -> 80, open 1.2 -> 320.
    assert_relative_eq!(figure.close_y, 80.0, max_relative = 1e-12);
    assert_relative_eq!(figure.top, 80.0, max_relative = 1e-12);
    assert_relative_eq!(figure.height, 240.0, max_relative = 1e-12);

    let extent = WindowExtent::from_bars(&bars).expect("extent");
    let bottom = PriceMapping::VisibleRange
        .price_to_pixel(extent.min_low, 400.0, Some(extent))
        .expect("bottom");
    let top = PriceMapping::VisibleRange
        .price_to_pixel(extent.max_high, 400.0, Some(extent))
        .expect("top");
    assert_relative_eq!(bottom, 400.0);
    assert_relative_eq!(top, 0.0);
}

#[test]
fn window_extent_scans_lows_and_highs() {
    let bars = vec![
        Bar::new(1.1010, 1.1050, 1.1000, 1.1040, 1_000),
        Bar::new(1.1000, 1.1010, 1.0950, 1.0960, 1_060),
        Bar::new(1.1030, 1.1080, 1.1020, 1.1060, 1_120),
    ];
    let extent = WindowExtent::from_bars(&bars).expect("extent");
    assert_relative_eq!(extent.min_low, 1.0950);
    assert_relative_eq!(extent.max_high, 1.1080);
}

#[test]
fn empty_window_projects_to_nothing() {
    let view = ViewRange::fitted(50, 0);
    let figures = project_bars(
        &[],
        view,
        BarGeometry::default(),
        PriceMapping::default(),
        Viewport::new(600, 400),
    )
    .expect("projection");
    assert!(figures.is_empty());
}

#[test]
fn invalid_viewport_is_rejected() {
    let view = ViewRange::fitted(50, 0);
    let err = project_bars(
        &[],
        view,
        BarGeometry::default(),
        PriceMapping::default(),
        Viewport::new(0, 400),
    )
    .expect_err("zero-width viewport must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}
