use serde::{Deserialize, Serialize};

/// Visible-bar count for a freshly constructed chart.
pub const DEFAULT_VISIBLE_BARS: usize = 50;

/// Bars added or removed by one wheel step.
pub const ZOOM_STEP_BARS: usize = 5;

/// Zoom-in refuses any step that would leave this many bars or fewer.
pub const MIN_VISIBLE_BARS: usize = 10;

/// Contiguous index window over the dataset: start index plus visible count.
///
/// Mutators maintain `start_index + visible_bars <= dataset_len`, and
/// `visible_bars >= 1` whenever the dataset is non-empty. An empty dataset
/// collapses the range to zero so downstream slicing stays total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRange {
    start_index: usize,
    visible_bars: usize,
}

impl ViewRange {
    /// Initial window over a freshly loaded dataset.
    #[must_use]
    pub fn fitted(initial_visible: usize, dataset_len: usize) -> Self {
        Self {
            start_index: 0,
            visible_bars: initial_visible.min(dataset_len),
        }
    }

    #[must_use]
    pub fn start_index(self) -> usize {
        self.start_index
    }

    #[must_use]
    pub fn visible_bars(self) -> usize {
        self.visible_bars
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.visible_bars == 0
    }

    /// True when `index` falls inside the visible window.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index >= self.start_index && index < self.start_index + self.visible_bars
    }

    /// Clamped `[start, end)` slice bounds over a dataset of `dataset_len` items.
    #[must_use]
    pub fn slice_bounds(self, dataset_len: usize) -> (usize, usize) {
        let start = self.start_index.min(dataset_len);
        let end = (self.start_index + self.visible_bars).min(dataset_len);
        (start, end)
    }

    /// Wheel-up zoom: one step fewer bars, refusing any step that would
    /// leave `MIN_VISIBLE_BARS` or fewer visible.
    pub fn zoom_in(&mut self) {
        if self.visible_bars > MIN_VISIBLE_BARS + ZOOM_STEP_BARS {
            self.visible_bars -= ZOOM_STEP_BARS;
        }
    }

    /// Wheel-down zoom: one step more bars, capped at the dataset length.
    pub fn zoom_out(&mut self, dataset_len: usize) {
        self.visible_bars = (self.visible_bars + ZOOM_STEP_BARS).min(dataset_len);
    }

    /// Drag pan: positive `delta_bars` moves the window toward later bars.
    ///
    /// The start index is clamped so the window never leaves the dataset.
    pub fn pan(&mut self, delta_bars: i64, dataset_len: usize) {
        let max_start = dataset_len.saturating_sub(self.visible_bars) as i64;
        let next = (self.start_index as i64 + delta_bars).clamp(0, max_start);
        self.start_index = next as usize;
    }

    /// Slider-driven resize, clamped to `[1, dataset_len]`.
    ///
    /// Growing the window can push it past the dataset tail; the start
    /// index is pulled back so the invariant holds.
    pub fn set_visible_bars(&mut self, requested: i64, dataset_len: usize) {
        if dataset_len == 0 {
            self.start_index = 0;
            self.visible_bars = 0;
            return;
        }

        self.visible_bars = requested.clamp(1, dataset_len as i64) as usize;
        let max_start = dataset_len - self.visible_bars;
        self.start_index = self.start_index.min(max_start);
    }
}
