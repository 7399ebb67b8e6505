use fxchart_rs::api::{AxisLabels, NO_DATA_LABEL, price_range_label, time_range_label};
use fxchart_rs::core::{Bar, ViewRange};

fn sample_bars() -> Vec<Bar> {
    vec![
        Bar::new(1.1010, 1.1050, 1.1000, 1.1040, 1_000),
        Bar::new(1.1000, 1.1010, 1.0950, 1.0960, 1_060),
        Bar::new(1.1030, 1.1080, 1.1020, 1.1060, 1_120),
    ]
}

#[test]
fn time_label_formats_first_and_last_visible_timestamps() {
    let bars = sample_bars();
    let view = ViewRange::fitted(3, bars.len());

    assert_eq!(
        time_range_label(&bars, view),
        "Timestamp Range: 1970-01-01 00:16:40 - 1970-01-01 00:18:40"
    );
}

#[test]
fn price_label_reports_visible_min_low_and_max_high_to_four_decimals() {
    let bars = sample_bars();
    let view = ViewRange::fitted(3, bars.len());

    assert_eq!(price_range_label(&bars, view), "Price Range: 1.0950 - 1.1080");
}

#[test]
fn labels_follow_the_visible_slice_only() {
    let bars = sample_bars();
    let mut view = ViewRange::fitted(2, bars.len());
    view.pan(1, bars.len());

    assert_eq!(
        time_range_label(&bars, view),
        "Timestamp Range: 1970-01-01 00:17:40 - 1970-01-01 00:18:40"
    );
    assert_eq!(price_range_label(&bars, view), "Price Range: 1.0950 - 1.1080");
}

#[test]
fn empty_dataset_yields_explicit_no_data_labels() {
    let view = ViewRange::fitted(50, 0);

    assert_eq!(
        time_range_label(&[], view),
        format!("Timestamp Range: {NO_DATA_LABEL}")
    );
    assert_eq!(
        price_range_label(&[], view),
        format!("Price Range: {NO_DATA_LABEL}")
    );
}

#[test]
fn axis_labels_update_and_clear() {
    let bars = sample_bars();
    let view = ViewRange::fitted(3, bars.len());

    let mut labels = AxisLabels::default();
    labels.update(&bars, view);
    assert!(labels.x_text().starts_with("Timestamp Range: 1970-01-01"));
    assert!(labels.y_text().ends_with("1.1080"));

    labels.clear();
    assert!(labels.x_text().is_empty());
    assert!(labels.y_text().is_empty());
}
