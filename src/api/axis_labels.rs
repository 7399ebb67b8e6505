use serde::{Deserialize, Serialize};

use crate::core::{Bar, ViewRange, WindowExtent};

pub const NO_DATA_LABEL: &str = "no data";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Axis label texts, recomputed from the visible slice after every paint.
/// The host materializes them as plain text elements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AxisLabels {
    x_text: String,
    y_text: String,
}

impl AxisLabels {
    #[must_use]
    pub fn x_text(&self) -> &str {
        &self.x_text
    }

    #[must_use]
    pub fn y_text(&self) -> &str {
        &self.y_text
    }

    pub fn update(&mut self, bars: &[Bar], view: ViewRange) {
        self.x_text = time_range_label(bars, view);
        self.y_text = price_range_label(bars, view);
    }

    pub fn clear(&mut self) {
        self.x_text.clear();
        self.y_text.clear();
    }
}

/// `Timestamp Range: <start> - <end>` over the visible window, UTC.
#[must_use]
pub fn time_range_label(bars: &[Bar], view: ViewRange) -> String {
    let (start, end) = view.slice_bounds(bars.len());
    let window = &bars[start..end];

    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return format!("Timestamp Range: {NO_DATA_LABEL}");
    };
    let (Some(from), Some(to)) = (first.time_utc(), last.time_utc()) else {
        return format!("Timestamp Range: {NO_DATA_LABEL}");
    };

    format!(
        "Timestamp Range: {} - {}",
        from.format(TIMESTAMP_FORMAT),
        to.format(TIMESTAMP_FORMAT)
    )
}

/// `Price Range: <min low> - <max high>` over the visible window, four
/// decimal places.
#[must_use]
pub fn price_range_label(bars: &[Bar], view: ViewRange) -> String {
    let (start, end) = view.slice_bounds(bars.len());

    match WindowExtent::from_bars(&bars[start..end]) {
        Some(extent) => format!(
            "Price Range: {:.4} - {:.4}",
            extent.min_low, extent.max_high
        ),
        None => format!("Price Range: {NO_DATA_LABEL}"),
    }
}
