use tracing::trace;

use crate::core::{Bar, BarGeometry, PriceMapping, ViewRange, Viewport, project_bars};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, Color, RectPrimitive, RenderFrame, Renderer};

pub const BULLISH_FILL: Color = Color::rgb(0.0, 0.5, 0.0);
pub const BEARISH_FILL: Color = Color::rgb(1.0, 0.0, 0.0);
pub const HIGHLIGHT_FILL: Color = Color::rgb(1.0, 1.0, 0.0);
pub const HIGHLIGHT_RADIUS_PX: f64 = 5.0;

/// Chart-level renderer.
///
/// Owns the backend, the canvas pixel size and the drawing policies, and
/// turns visible windows into backend frames. The geometry policy it
/// exposes is the single source the orchestrator uses for hit-testing and
/// drag math.
pub struct FrameRenderer<R: Renderer> {
    backend: R,
    viewport: Viewport,
    geometry: BarGeometry,
    mapping: PriceMapping,
}

impl<R: Renderer> FrameRenderer<R> {
    pub fn new(
        backend: R,
        viewport: Viewport,
        geometry: BarGeometry,
        mapping: PriceMapping,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        mapping.validate()?;

        Ok(Self {
            backend,
            viewport,
            geometry,
            mapping,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn geometry(&self) -> BarGeometry {
        self.geometry
    }

    #[must_use]
    pub fn mapping(&self) -> PriceMapping {
        self.mapping
    }

    #[must_use]
    pub fn backend(&self) -> &R {
        &self.backend
    }

    /// Resize path: adopts the canvas' current pixel size.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        Ok(())
    }

    /// Clears the target and draws every bar of the visible window.
    pub fn render_window(&mut self, bars: &[Bar], view: ViewRange) -> ChartResult<()> {
        let frame = build_window_frame(bars, view, self.geometry, self.mapping, self.viewport)?;
        trace!(rects = frame.rects.len(), "render window");
        self.backend.render(&frame)
    }

    /// Overlay pass marking the hovered bar at a pixel position.
    pub fn highlight_point(&mut self, x: f64, y: f64) -> ChartResult<()> {
        let frame = RenderFrame::overlay(self.viewport).with_circle(CirclePrimitive::new(
            x,
            y,
            HIGHLIGHT_RADIUS_PX,
            HIGHLIGHT_FILL,
        ));
        self.backend.render(&frame)
    }
}

/// Pure frame construction from the visible window.
///
/// An empty window yields a clear-only frame, which is the chart's explicit
/// empty state.
pub fn build_window_frame(
    bars: &[Bar],
    view: ViewRange,
    geometry: BarGeometry,
    mapping: PriceMapping,
    viewport: Viewport,
) -> ChartResult<RenderFrame> {
    let figures = project_bars(bars, view, geometry, mapping, viewport)?;

    let mut frame = RenderFrame::new(viewport);
    for figure in &figures {
        let fill = if figure.is_bullish {
            BULLISH_FILL
        } else {
            BEARISH_FILL
        };
        frame = frame.with_rect(RectPrimitive::new(
            figure.x,
            figure.top,
            figure.width,
            figure.height,
            fill,
        ));
    }

    frame.validate()?;
    Ok(frame)
}
