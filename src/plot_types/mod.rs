// Plot layer types

pub mod function_x;
pub mod function_y;
pub mod parametric;
pub mod scale;

pub use function_x::FunctionX;
pub use function_y::FunctionY;
pub use parametric::{FnSource, ParametricCurve, SampleSource};
pub use scale::{ScaleX, ScaleY};

use crate::data_types::{BoundingBox, LayerStyle, ViewState};
use crate::surface::DrawSurface;

/// A drawable unit owned by a [`PlotView`](crate::PlotView).
pub trait Layer {
    /// Draws the layer. The surface origin is already at the viewport centre.
    fn draw(&self, surface: &mut dyn DrawSurface, view: &ViewState);

    /// World-space extent used for fitting and scroll ranges.
    fn bounds(&self) -> BoundingBox {
        BoundingBox::UNIT
    }

    fn style(&self) -> &LayerStyle;

    fn style_mut(&mut self) -> &mut LayerStyle;

    fn name(&self) -> &str {
        &self.style().name
    }
}
