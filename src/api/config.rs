use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, DEFAULT_VISIBLE_BARS, PriceMapping, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub geometry: BarGeometry,
    #[serde(default)]
    pub price_mapping: PriceMapping,
    #[serde(default = "default_initial_visible_bars")]
    pub initial_visible_bars: usize,
}

fn default_initial_visible_bars() -> usize {
    DEFAULT_VISIBLE_BARS
}

impl BarChartConfig {
    /// Creates a config with default geometry, mapping and window size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            geometry: BarGeometry::default(),
            price_mapping: PriceMapping::default(),
            initial_visible_bars: default_initial_visible_bars(),
        }
    }

    #[must_use]
    pub fn with_geometry(mut self, geometry: BarGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    #[must_use]
    pub fn with_price_mapping(mut self, price_mapping: PriceMapping) -> Self {
        self.price_mapping = price_mapping;
        self
    }

    #[must_use]
    pub fn with_initial_visible_bars(mut self, initial_visible_bars: usize) -> Self {
        self.initial_visible_bars = initial_visible_bars;
        self
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.initial_visible_bars == 0 {
            return Err(ChartError::InvalidData(
                "initial visible bar count must be >= 1".to_owned(),
            ));
        }
        self.price_mapping.validate()
    }
}
