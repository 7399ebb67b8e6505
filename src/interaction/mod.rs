use serde::{Deserialize, Serialize};

/// Pointer interaction mode over the chart surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum PointerMode {
    #[default]
    Idle,
    /// Click-drag pan in progress. `last_x` is the origin for the next
    /// whole-bar delta; it only advances when a shift is applied, so
    /// sub-slot movement accumulates.
    Dragging { last_x: f64 },
}

/// Pointer state carried between host events.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PointerState {
    mode: PointerMode,
    hovered_index: Option<usize>,
}

impl PointerState {
    #[must_use]
    pub fn mode(self) -> PointerMode {
        self.mode
    }

    #[must_use]
    pub fn is_dragging(self) -> bool {
        matches!(self.mode, PointerMode::Dragging { .. })
    }

    #[must_use]
    pub fn hovered_index(self) -> Option<usize> {
        self.hovered_index
    }

    pub fn press(&mut self, x: f64) {
        self.mode = PointerMode::Dragging { last_x: x };
    }

    pub fn release(&mut self) {
        self.mode = PointerMode::Idle;
    }

    /// Advances the drag origin after a whole-bar shift was applied.
    pub fn rebase_drag(&mut self, x: f64) {
        if self.is_dragging() {
            self.mode = PointerMode::Dragging { last_x: x };
        }
    }

    pub fn set_hovered(&mut self, index: Option<usize>) {
        self.hovered_index = index;
    }
}
