use serde::{Deserialize, Serialize};

use crate::core::Bar;
use crate::error::{ChartError, ChartResult};

/// Smallest accepted price span before the visible-range mapping degrades
/// to a flat window.
pub const MIN_PRICE_SPAN: f64 = 0.000_001;

/// Vertical price-to-pixel mapping mode.
///
/// `FixedBaseline` reproduces the historical mapping where bar bodies are
/// measured against a constant baseline and span rather than the data's
/// real range; axis labels still report the real visible min/max, so the
/// two modes remain visually distinguishable. `VisibleRange` rebases the
/// vertical axis onto the visible window's min(low)/max(high).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PriceMapping {
    /// `y = h - ((price - base) / span) * h`
    FixedBaseline { base: f64, span: f64 },
    /// `y = h - ((price - min_low) / (max_high - min_low)) * h`
    VisibleRange,
}

impl Default for PriceMapping {
    fn default() -> Self {
        Self::FixedBaseline {
            base: 100.0,
            span: 100.0,
        }
    }
}

/// Price extent of the currently visible window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowExtent {
    pub min_low: f64,
    pub max_high: f64,
}

impl WindowExtent {
    /// Scans a visible slice; `None` when the slice is empty.
    #[must_use]
    pub fn from_bars(bars: &[Bar]) -> Option<Self> {
        let first = bars.first()?;
        let mut extent = Self {
            min_low: first.low,
            max_high: first.high,
        };
        for bar in &bars[1..] {
            extent.min_low = extent.min_low.min(bar.low);
            extent.max_high = extent.max_high.max(bar.high);
        }
        Some(extent)
    }
}

impl PriceMapping {
    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::FixedBaseline { base, span } => {
                if !base.is_finite() || !span.is_finite() || span == 0.0 {
                    return Err(ChartError::InvalidData(
                        "fixed baseline mapping needs finite base and non-zero span".to_owned(),
                    ));
                }
                Ok(())
            }
            Self::VisibleRange => Ok(()),
        }
    }

    /// Maps a price to pixel Y on a canvas `height_px` tall.
    ///
    /// `extent` carries the visible window's price range and is only
    /// consulted in `VisibleRange` mode.
    pub fn price_to_pixel(
        self,
        price: f64,
        height_px: f64,
        extent: Option<WindowExtent>,
    ) -> ChartResult<f64> {
        if !price.is_finite() {
            return Err(ChartError::InvalidData("price must be finite".to_owned()));
        }
        if !height_px.is_finite() || height_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "canvas height must be finite and > 0".to_owned(),
            ));
        }

        match self {
            Self::FixedBaseline { base, span } => {
                self.validate()?;
                Ok(height_px - ((price - base) / span) * height_px)
            }
            Self::VisibleRange => {
                let extent = extent.ok_or_else(|| {
                    ChartError::InvalidData(
                        "visible-range mapping needs a non-empty window".to_owned(),
                    )
                })?;
                let span = (extent.max_high - extent.min_low).max(MIN_PRICE_SPAN);
                Ok(height_px - ((price - extent.min_low) / span) * height_px)
            }
        }
    }
}
