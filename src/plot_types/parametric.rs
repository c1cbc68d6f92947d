use super::Layer;
use crate::data_types::{BoundingBox, LayerStyle, ViewState};
use crate::surface::DrawSurface;
use glam::{DVec2, IVec2};

/// Indexed (x, y) samples of a parametric curve.
///
/// Samples are requested for every index in `0..=num_samples()`; a source may
/// return `None` for indices it has no value for.
pub trait SampleSource {
    fn num_samples(&self) -> usize;

    fn sample(&self, index: usize) -> Option<DVec2>;
}

impl SampleSource for Vec<DVec2> {
    fn num_samples(&self) -> usize {
        self.len()
    }

    fn sample(&self, index: usize) -> Option<DVec2> {
        self.get(index).copied()
    }
}

/// Samples computed on demand from the index.
pub struct FnSource<F> {
    count: usize,
    f: F,
}

impl<F: Fn(usize) -> DVec2> FnSource<F> {
    pub fn new(count: usize, f: F) -> Self {
        Self { count, f }
    }
}

impl<F: Fn(usize) -> DVec2> SampleSource for FnSource<F> {
    fn num_samples(&self) -> usize {
        self.count
    }

    fn sample(&self, index: usize) -> Option<DVec2> {
        (index <= self.count).then(|| (self.f)(index))
    }
}

/// Point plot of a parametric curve; samples are not joined.
pub struct ParametricCurve {
    pub style: LayerStyle,
    bounds: Option<BoundingBox>,
    source: Box<dyn SampleSource>,
}

impl ParametricCurve {
    pub fn new(name: impl Into<String>, source: impl SampleSource + 'static) -> Self {
        Self {
            style: LayerStyle::named(name),
            bounds: None,
            source: Box::new(source),
        }
    }

    pub fn from_points(name: impl Into<String>, points: Vec<DVec2>) -> Self {
        Self::new(name, points)
    }

    pub fn from_fn(
        name: impl Into<String>,
        count: usize,
        f: impl Fn(usize) -> DVec2 + 'static,
    ) -> Self {
        Self::new(name, FnSource::new(count, f))
    }

    /// Overrides the extent computed from the samples.
    pub fn with_bounds(mut self, bounds: BoundingBox) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn samples(&self) -> impl Iterator<Item = DVec2> + '_ {
        (0..=self.source.num_samples()).filter_map(|i| self.source.sample(i))
    }
}

impl Layer for ParametricCurve {
    fn draw(&self, surface: &mut dyn DrawSurface, view: &ViewState) {
        surface.set_pen(&self.style.pen_or(view.theme.layer_pen));

        for p in self.samples() {
            surface.draw_point(view.transform.to_pixel(p));
        }

        if self.style.name.is_empty() {
            return;
        }
        if let Some(first) = self.samples().next() {
            surface.set_font(&self.style.font_or(view.theme.layer_font));
            let at = view.transform.to_pixel(first);
            surface.draw_text(
                &self.style.name,
                at + IVec2::new(view.label_margin, view.label_margin),
            );
        }
    }

    fn bounds(&self) -> BoundingBox {
        self.bounds
            .or_else(|| BoundingBox::from_points(self.samples()))
            .unwrap_or(BoundingBox::UNIT)
    }

    fn style(&self) -> &LayerStyle {
        &self.style
    }

    fn style_mut(&mut self) -> &mut LayerStyle {
        &mut self.style
    }
}
