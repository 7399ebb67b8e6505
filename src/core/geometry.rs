use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Horizontal layout policy for bar bodies.
///
/// Drag math and hover hit-testing must agree with drawing on the same
/// constants, so the policy lives here and is handed to every consumer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    bar_width_px: f64,
    bar_gap_px: f64,
}

impl Default for BarGeometry {
    fn default() -> Self {
        Self {
            bar_width_px: 10.0,
            bar_gap_px: 2.0,
        }
    }
}

impl BarGeometry {
    pub fn new(bar_width_px: f64, bar_gap_px: f64) -> ChartResult<Self> {
        if !bar_width_px.is_finite() || bar_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "bar width must be finite and > 0".to_owned(),
            ));
        }
        if !bar_gap_px.is_finite() || bar_gap_px < 0.0 {
            return Err(ChartError::InvalidData(
                "bar gap must be finite and >= 0".to_owned(),
            ));
        }

        Ok(Self {
            bar_width_px,
            bar_gap_px,
        })
    }

    #[must_use]
    pub fn bar_width_px(self) -> f64 {
        self.bar_width_px
    }

    #[must_use]
    pub fn bar_gap_px(self) -> f64 {
        self.bar_gap_px
    }

    /// One bar's horizontal footprint: body width plus gap.
    #[must_use]
    pub fn slot_px(self) -> f64 {
        self.bar_width_px + self.bar_gap_px
    }

    /// Pixel X of the slot `offset` slots from the window start.
    #[must_use]
    pub fn slot_x(self, offset: usize) -> f64 {
        offset as f64 * self.slot_px()
    }

    /// Slot index under a pixel X, relative to the window start.
    ///
    /// Pixels left of the origin land in negative slots, which callers
    /// reject through the visible-window containment check.
    #[must_use]
    pub fn slot_at(self, x_px: f64) -> i64 {
        (x_px / self.slot_px()).floor() as i64
    }

    /// Whole bars covered by a horizontal drag distance.
    ///
    /// Truncates toward zero so a sub-slot drag in either direction moves
    /// nothing; the remainder stays in the unchanged drag origin.
    #[must_use]
    pub fn bars_in_delta(self, delta_x_px: f64) -> i64 {
        (delta_x_px / self.slot_px()).trunc() as i64
    }
}
