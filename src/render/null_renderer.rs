use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless chart usage.
///
/// It still validates frame content so tests catch invalid geometry before
/// a real backend is involved, and it keeps the last base and overlay
/// frames around for inspection.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_base_frame: Option<RenderFrame>,
    pub last_overlay_frame: Option<RenderFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        if frame.clear {
            self.last_base_frame = Some(frame.clone());
            self.last_overlay_frame = None;
        } else {
            self.last_overlay_frame = Some(frame.clone());
        }
        Ok(())
    }
}
