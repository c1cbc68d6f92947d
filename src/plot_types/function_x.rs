use super::Layer;
use crate::data_types::{BoundingBox, LabelAlign, LayerStyle, ViewState};
use crate::surface::DrawSurface;
use glam::IVec2;

/// Plots `y = f(x)`, one sample per pixel column.
pub struct FunctionX {
    pub style: LayerStyle,
    pub align: LabelAlign,
    bounds: BoundingBox,
    f: Box<dyn Fn(f64) -> f64>,
}

impl FunctionX {
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

    pub fn eval(&self, x: f64) -> f64 {
        (self.f)(x)
    }

    fn device_y_at(&self, view: &ViewState, column: i32) -> i32 {
        let t = &view.transform;
        t.y_to_device(self.eval(t.device_to_x(column as f64))) as i32
    }
}

impl Layer for FunctionX {
    fn draw(&self, surface: &mut dyn DrawSurface, view: &ViewState) {
        surface.set_pen(&self.style.pen_or(view.theme.layer_pen));

        let half = view.half_width();
        for i in -half..half {
            surface.draw_point(IVec2::new(i, self.device_y_at(view, i)));
        }

        if self.style.name.is_empty() {
            return;
        }
        surface.set_font(&self.style.font_or(view.theme.layer_font));
        let extent = surface.text_extent(&self.style.name);
        let tx = match self.align {
            LabelAlign::End => half - extent.x - view.label_margin,
            LabelAlign::Center => -extent.x / 2,
            LabelAlign::Start => -half + view.label_margin,
        };
        surface.draw_text(&self.style.name, IVec2::new(tx, self.device_y_at(view, tx)));
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
