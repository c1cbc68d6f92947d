use super::Layer;
use crate::axis_renderer::AxisRenderer;
use crate::data_types::{LayerStyle, ViewState};
use crate::surface::DrawSurface;

/// Horizontal axis with power-of-ten ticks.
pub struct ScaleX {
    pub style: LayerStyle,
}

impl ScaleX {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            style: LayerStyle::named(name),
        }
    }
}

impl Layer for ScaleX {
    fn draw(&self, surface: &mut dyn DrawSurface, view: &ViewState) {
        AxisRenderer::paint_x_axis(surface, view, &self.style);
    }

    fn style(&self) -> &LayerStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut LayerStyle {
        &mut self.style
    }
}

/// Vertical axis with power-of-ten ticks.
pub struct ScaleY {
    pub style: LayerStyle,
}

impl ScaleY {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            style: LayerStyle::named(name),
        }
    }
}

impl Layer for ScaleY {
    fn draw(&self, surface: &mut dyn DrawSurface, view: &ViewState) {
        AxisRenderer::paint_y_axis(surface, view, &self.style);
    }

    fn style(&self) -> &LayerStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut LayerStyle {
        &mut self.style
    }
}
