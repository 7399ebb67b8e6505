use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, RectPrimitive};

/// Backend-agnostic scene for one draw pass.
///
/// A base pass (`clear = true`) wipes the surface before drawing; an
/// overlay pass (`clear = false`) paints on top of the previous pass, the
/// way the hover marker is stacked onto the bar layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub clear: bool,
    pub rects: Vec<RectPrimitive>,
    pub circles: Vec<CirclePrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            clear: true,
            rects: Vec::new(),
            circles: Vec::new(),
        }
    }

    #[must_use]
    pub fn overlay(viewport: Viewport) -> Self {
        Self {
            clear: false,
            ..Self::new(viewport)
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.circles.is_empty()
    }
}
