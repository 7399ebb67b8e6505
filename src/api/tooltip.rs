use serde::{Deserialize, Serialize};

use crate::core::Bar;

use super::axis_labels::TIMESTAMP_FORMAT;

/// Floating info box for the hovered bar.
///
/// One instance is reused across displays; the host materializes it from
/// this state. The position is the hovered bar's pixel position, unclamped
/// against the canvas edges.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Tooltip {
    visible: bool,
    x: f64,
    y: f64,
    text: String,
}

impl Tooltip {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn show(&mut self, bar: Bar, x: f64, y: f64) {
        self.text = format_bar(bar);
        self.x = x;
        self.y = y;
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// OHLC to four decimal places plus a human-readable UTC timestamp, one
/// field per line.
#[must_use]
pub fn format_bar(bar: Bar) -> String {
    let when = bar.time_utc().map_or_else(
        || "invalid timestamp".to_owned(),
        |time| time.format(TIMESTAMP_FORMAT).to_string(),
    );

    format!(
        "Open: {:.4}\nHigh: {:.4}\nLow: {:.4}\nClose: {:.4}\nTimestamp: {}",
        bar.open, bar.high, bar.low, bar.close, when
    )
}
