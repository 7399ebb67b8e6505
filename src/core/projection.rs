use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Bar, BarGeometry, PriceMapping, ViewRange, Viewport, WindowExtent};
use crate::error::{ChartError, ChartResult};

/// Pixel-space figure for one visible bar.
///
/// `close_y` is kept alongside the body rectangle so hover markers can sit
/// on the close price without re-deriving the mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarFigure {
    pub x: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub close_y: f64,
    pub is_bullish: bool,
}

/// Projects the visible window into per-bar pixel rectangles.
///
/// Pure and deterministic so rendering and regression tests share it. The
/// window is truncated to the dataset tail instead of reading out of range.
pub fn project_bars(
    bars: &[Bar],
    view: ViewRange,
    geometry: BarGeometry,
    mapping: PriceMapping,
    viewport: Viewport,
) -> ChartResult<Vec<BarFigure>> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let (start, end) = view.slice_bounds(bars.len());
    let window = &bars[start..end];
    let extent = WindowExtent::from_bars(window);
    let height_px = viewport.height_px();

    #[cfg(feature = "parallel-projection")]
    {
        let projected: Vec<ChartResult<BarFigure>> = window
            .par_iter()
            .enumerate()
            .map(|(offset, bar)| project_single_bar(*bar, offset, geometry, mapping, height_px, extent))
            .collect();
        projected.into_iter().collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        let mut out = Vec::with_capacity(window.len());
        for (offset, bar) in window.iter().enumerate() {
            out.push(project_single_bar(
                *bar, offset, geometry, mapping, height_px, extent,
            )?);
        }
        Ok(out)
    }
}

fn project_single_bar(
    bar: Bar,
    offset: usize,
    geometry: BarGeometry,
    mapping: PriceMapping,
    height_px: f64,
    extent: Option<WindowExtent>,
) -> ChartResult<BarFigure> {
    let open_y = mapping.price_to_pixel(bar.open, height_px, extent)?;
    let close_y = mapping.price_to_pixel(bar.close, height_px, extent)?;

    Ok(BarFigure {
        x: geometry.slot_x(offset),
        top: open_y.min(close_y),
        width: geometry.bar_width_px(),
        height: (open_y - close_y).abs(),
        close_y,
        is_bullish: bar.is_bullish(),
    })
}
