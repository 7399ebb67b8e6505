mod axis_labels;
mod chart;
mod config;
mod frame_renderer;
mod input;
mod tooltip;

pub use axis_labels::{
    AxisLabels, NO_DATA_LABEL, TIMESTAMP_FORMAT, price_range_label, time_range_label,
};
pub use chart::{BarChart, SliderBounds};
pub use config::BarChartConfig;
pub use frame_renderer::{
    BEARISH_FILL, BULLISH_FILL, FrameRenderer, HIGHLIGHT_FILL, HIGHLIGHT_RADIUS_PX,
    build_window_frame,
};
pub use input::{ControlId, InputHandler};
pub use tooltip::{Tooltip, format_bar};
