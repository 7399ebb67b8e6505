pub mod bar;
pub mod geometry;
pub mod price_mapping;
pub mod primitives;
pub mod projection;
pub mod types;
pub mod view_range;

pub use bar::Bar;
pub use geometry::BarGeometry;
pub use price_mapping::{PriceMapping, WindowExtent};
pub use projection::{BarFigure, project_bars};
pub use types::Viewport;
pub use view_range::{DEFAULT_VISIBLE_BARS, MIN_VISIBLE_BARS, ViewRange, ZOOM_STEP_BARS};
