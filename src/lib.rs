//! mathplot crate for plotting functions and axes on any drawing surface

pub mod axis_renderer;
pub mod data_types;
pub mod plot_types;
pub mod plot_view;
pub mod surface;
pub mod theme;
pub mod transform;
pub mod view_controller;

pub use data_types::{BoundingBox, LabelAlign, LayerStyle, Orientation, ScrollbarConfig};
pub use plot_types::{FunctionX, FunctionY, Layer, ParametricCurve, ScaleX, ScaleY};
pub use plot_view::{LayerId, NullHost, PlotCommand, PlotView, ViewportHost};
pub use surface::{DrawSurface, RecordingSurface};
pub use theme::PlotTheme;
pub use transform::PlotTransform;
