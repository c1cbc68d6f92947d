// Data structures for the plotting library

pub mod bounds;
pub mod state;
pub mod style;

pub use bounds::BoundingBox;
pub use state::{AxisConfig, PlotViewConfig, ViewState};
pub use style::{Color, Font, LabelAlign, LayerStyle, Pen};

use serde::{Deserialize, Serialize};

/// Scroll direction reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Scrollable extent published to the host after every view refresh.
///
/// All values are device pixels. `scroll_x`/`scroll_y` are offsets of the
/// viewport's top-left corner from the bounding box minimum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollbarConfig {
    pub unit: i32,
    pub virtual_width: i32,
    pub virtual_height: i32,
    pub scroll_x: i32,
    pub scroll_y: i32,
}
