use super::Layer;
use crate::data_types::{BoundingBox, LabelAlign, LayerStyle, ViewState};
use crate::surface::DrawSurface;
use glam::IVec2;

/// Plots `x = f(y)`, one sample per pixel row.
pub struct FunctionY {
    pub style: LayerStyle,
    pub align: LabelAlign,
    bounds: BoundingBox,
    f: Box<dyn Fn(f64) -> f64>,
}

impl FunctionY {
    pub fn new(name: impl Into<String>, f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self {
            style: LayerStyle::named(name),
            align: LabelAlign::default(),
            bounds: BoundingBox::UNIT,
            f: Box::new(f),
        }
    }

    pub fn with_align(mut self, align: LabelAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn eval(&self, y: f64) -> f64 {
        (self.f)(y)
    }

    /// Device x of the curve at `row` pixels above the centre.
    fn device_x_at(&self, view: &ViewState, row: i32) -> i32 {
        let t = &view.transform;
        t.x_to_device(self.eval(t.device_to_y(-row as f64))) as i32
    }
}

impl Layer for FunctionY {
    fn draw(&self, surface: &mut dyn DrawSurface, view: &ViewState) {
        surface.set_pen(&self.style.pen_or(view.theme.layer_pen));

        let half = view.half_height();
        for i in -half..half {
            surface.draw_point(IVec2::new(self.device_x_at(view, i), -i));
        }

        if self.style.name.is_empty() {
            return;
        }
        surface.set_font(&self.style.font_or(view.theme.layer_font));
        let extent = surface.text_extent(&self.style.name);
        let ty = match self.align {
            LabelAlign::End => half - view.label_margin,
            LabelAlign::Center => 16 - extent.y / 2,
            LabelAlign::Start => -half + view.label_margin + extent.y,
        };
        surface.draw_text(&self.style.name, IVec2::new(self.device_x_at(view, ty), -ty));
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
    }

    fn style(&self) -> &LayerStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut LayerStyle {
        &mut self.style
    }
}
