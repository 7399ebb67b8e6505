use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{Bar, ViewRange, Viewport, WindowExtent};
use crate::data::DataProvider;
use crate::error::ChartResult;
use crate::interaction::{PointerMode, PointerState};
use crate::render::Renderer;

use super::axis_labels::AxisLabels;
use super::config::BarChartConfig;
use super::frame_renderer::FrameRenderer;
use super::tooltip::Tooltip;

/// Range-slider bounds the host builds its control from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SliderBounds {
    pub min: usize,
    pub max: usize,
    pub value: usize,
}

/// Interactive OHLC bar chart orchestrator.
///
/// Owns the dataset, the index viewport, pointer state and the host-facing
/// tooltip/axis-label/slider surface. Hosts forward pointer, wheel, resize
/// and slider events; each one mutates viewport state and repaints
/// synchronously. `load` fetches the dataset once; a failed fetch degrades
/// to the explicit empty state rather than an error.
pub struct BarChart<R: Renderer, P: DataProvider> {
    provider: P,
    renderer: FrameRenderer<R>,
    bars: Vec<Bar>,
    view: ViewRange,
    pointer: PointerState,
    tooltip: Tooltip,
    axis_labels: AxisLabels,
    initial_visible_bars: usize,
    disposed: bool,
}

impl<R: Renderer, P: DataProvider> BarChart<R, P> {
    pub fn new(backend: R, provider: P, config: BarChartConfig) -> ChartResult<Self> {
        config.validate()?;
        let renderer = FrameRenderer::new(
            backend,
            config.viewport,
            config.geometry,
            config.price_mapping,
        )?;

        Ok(Self {
            provider,
            renderer,
            bars: Vec::new(),
            view: ViewRange::fitted(config.initial_visible_bars, 0),
            pointer: PointerState::default(),
            tooltip: Tooltip::default(),
            axis_labels: AxisLabels::default(),
            initial_visible_bars: config.initial_visible_bars,
            disposed: false,
        })
    }

    /// Fetches the dataset once and performs the first paint.
    pub fn load(&mut self) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        let bars = self.provider.fetch_bars();
        debug!(count = bars.len(), "dataset loaded");
        self.set_bars(bars)
    }

    /// Replaces the dataset wholesale, refits the window and repaints.
    pub fn set_bars(&mut self, bars: Vec<Bar>) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.bars = bars;
        self.view = ViewRange::fitted(self.initial_visible_bars, self.bars.len());
        self.pointer.set_hovered(None);
        self.render()
    }

    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    #[must_use]
    pub fn view(&self) -> ViewRange {
        self.view
    }

    #[must_use]
    pub fn hovered_index(&self) -> Option<usize> {
        self.pointer.hovered_index()
    }

    #[must_use]
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    #[must_use]
    pub fn axis_labels(&self) -> &AxisLabels {
        &self.axis_labels
    }

    #[must_use]
    pub fn renderer(&self) -> &FrameRenderer<R> {
        &self.renderer
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    #[must_use]
    pub fn slider_bounds(&self) -> SliderBounds {
        SliderBounds {
            min: 1,
            max: self.bars.len().max(1),
            value: self.view.visible_bars().max(1),
        }
    }

    /// Wheel zoom: scrolling up shrinks the window, scrolling down grows it.
    pub fn on_wheel(&mut self, delta_y: f64) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        if delta_y < 0.0 {
            self.view.zoom_in();
        } else {
            self.view.zoom_out(self.bars.len());
        }
        trace!(visible = self.view.visible_bars(), "wheel zoom");
        self.render()
    }

    pub fn on_pointer_down(&mut self, x: f64) {
        if self.disposed {
            return;
        }
        self.pointer.press(x);
    }

    /// Pointer movement: pans while dragging, hit-tests the hovered bar
    /// while idle. Either path repaints when state changed.
    pub fn on_pointer_move(&mut self, x: f64, _y: f64) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }

        match self.pointer.mode() {
            PointerMode::Dragging { last_x } => {
                let dragged = self.renderer.geometry().bars_in_delta(x - last_x);
                if dragged != 0 {
                    // Dragging right reveals earlier bars.
                    self.view.pan(-dragged, self.bars.len());
                    self.pointer.rebase_drag(x);
                    trace!(start = self.view.start_index(), "drag pan");
                    self.render()?;
                }
                Ok(())
            }
            PointerMode::Idle => {
                let index = self.renderer.geometry().slot_at(x) + self.view.start_index() as i64;
                let hovered = usize::try_from(index)
                    .ok()
                    .filter(|&candidate| self.view.contains(candidate));
                self.pointer.set_hovered(hovered);
                self.render()
            }
        }
    }

    pub fn on_pointer_up(&mut self) {
        if self.disposed {
            return;
        }
        self.pointer.release();
    }

    /// Resize path: adopts the canvas' new pixel size and repaints.
    pub fn on_resize(&mut self, width: u32, height: u32) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }
        self.renderer.set_viewport(Viewport::new(width, height))?;
        self.render()
    }

    /// Slider input: raw control value, clamped to `[1, dataset length]`.
    /// Unparseable input is logged and ignored.
    pub fn on_slider_input(&mut self, raw_value: &str) -> ChartResult<()> {
        if self.disposed {
            return Ok(());
        }

        let Ok(requested) = raw_value.trim().parse::<i64>() else {
            warn!(raw_value, "ignoring unparseable slider value");
            return Ok(());
        };
        self.view.set_visible_bars(requested, self.bars.len());
        trace!(visible = self.view.visible_bars(), "slider resize");
        self.render()
    }

    /// Releases the host-facing UI surface. Subsequent events are inert.
    pub fn dispose(&mut self) {
        self.tooltip.hide();
        self.axis_labels.clear();
        self.bars.clear();
        self.view = ViewRange::fitted(self.initial_visible_bars, 0);
        self.pointer = PointerState::default();
        self.disposed = true;
    }

    fn render(&mut self) -> ChartResult<()> {
        self.renderer.render_window(&self.bars, self.view)?;
        self.axis_labels.update(&self.bars, self.view);
        self.replay_highlight()
    }

    /// Recomputes the hovered bar's pixel position for the current viewport
    /// and replays marker plus tooltip. Leaving the hover state hides the
    /// tooltip in the same paint cycle.
    fn replay_highlight(&mut self) -> ChartResult<()> {
        let hovered = self
            .pointer
            .hovered_index()
            .filter(|&index| index < self.bars.len());
        let Some(index) = hovered else {
            self.tooltip.hide();
            return Ok(());
        };

        let bar = self.bars[index];
        let offset = index as i64 - self.view.start_index() as i64;
        let x = offset as f64 * self.renderer.geometry().slot_px();

        let (start, end) = self.view.slice_bounds(self.bars.len());
        let extent = WindowExtent::from_bars(&self.bars[start..end]);
        let y = self.renderer.mapping().price_to_pixel(
            bar.close,
            self.renderer.viewport().height_px(),
            extent,
        )?;

        self.renderer.highlight_point(x, y)?;
        self.tooltip.show(bar, x, y);
        Ok(())
    }
}
