use std::f64::consts::PI;

use cairo::{Context, Format, ImageSurface};

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RenderFrame, Renderer};

/// Cairo image-surface backend standing in for an on-screen canvas.
///
/// Base passes clear to `clear_color`; overlay passes draw straight onto
/// the existing surface content.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    pub fn write_png(&mut self, writer: &mut impl std::io::Write) -> ChartResult<()> {
        self.surface
            .write_to_png(writer)
            .map_err(|err| map_backend_error("failed to encode png", err))
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        if frame.clear {
            apply_color(&context, self.clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
        }

        for rect in &frame.rects {
            apply_color(&context, rect.fill_color);
            context.rectangle(rect.x, rect.y, rect.width, rect.height);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        }

        for circle in &frame.circles {
            apply_color(&context, circle.fill_color);
            context.arc(circle.center_x, circle.center_y, circle.radius, 0.0, 2.0 * PI);
            context
                .fill()
                .map_err(|err| map_backend_error("failed to fill circle", err))?;
        }

        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(context_message: &str, err: impl std::fmt::Display) -> ChartError {
    ChartError::Backend(format!("{context_message}: {err}"))
}
