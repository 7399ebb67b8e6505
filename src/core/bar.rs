use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// One OHLC price sample for a fixed time interval.
///
/// `timestamp` is Unix seconds. Bars are immutable once loaded; the chart
/// replaces the whole dataset on reload instead of patching bars in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub timestamp: i64,
}

impl Bar {
    #[must_use]
    pub const fn new(open: f64, high: f64, low: f64, close: f64, timestamp: i64) -> Self {
        Self {
            open,
            high,
            low,
            close,
            timestamp,
        }
    }

    /// Converts strongly-typed temporal/decimal input into a bar.
    pub fn from_decimal(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
    ) -> ChartResult<Self> {
        Ok(Self::new(
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            time.timestamp(),
        ))
    }

    /// Returns `true` when the bar closed strictly above its open.
    ///
    /// An unchanged close counts as bearish, which drives the red/green
    /// body fill tie-break.
    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close > self.open
    }

    #[must_use]
    pub fn time_utc(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }
}
