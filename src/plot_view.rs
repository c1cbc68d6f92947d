//! Plot View
//!
//! `PlotView` owns the layers and the world-to-screen transform. Every
//! mutation (layers added or removed, resize, fit, zoom, scroll) ends in
//! [`PlotView::update_all`], which recomputes the bounding box, publishes the
//! scrollable extent to the host and asks it for a redraw. The host answers
//! with [`PlotView::render`].

pub mod actions;

pub use actions::PlotCommand;

use crate::data_types::{BoundingBox, Orientation, PlotViewConfig, ScrollbarConfig, ViewState};
use crate::plot_types::Layer;
use crate::surface::DrawSurface;
use crate::transform::PlotTransform;
use crate::view_controller::ViewController;
use glam::IVec2;
use tracing::{debug, trace, warn};

/// Scrolling and repaint hooks of the hosting window.
pub trait ViewportHost {
    /// Publishes the scrollable extent. Both offsets count from the bounding
    /// box minimum, so `scroll_y == 0` shows the bottom of the data. Hosts
    /// whose vertical scrollbar starts at the top must flip the offset,
    /// `virtual_height - screen_height - scroll_y`, both when showing it and
    /// when passing it back to [`PlotView::handle_scroll`].
    fn set_scrollbars(&mut self, config: ScrollbarConfig);

    /// Asks for the whole surface to be repainted.
    fn request_redraw(&mut self);
}

/// Host that ignores scroll and redraw requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl ViewportHost for NullHost {
    fn set_scrollbars(&mut self, _config: ScrollbarConfig) {}

    fn request_redraw(&mut self) {}
}

/// Handle returned by [`PlotView::add_layer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LayerId(u64);

pub struct PlotView<H: ViewportHost = NullHost> {
    host: H,
    config: PlotViewConfig,
    layers: Vec<(LayerId, Box<dyn Layer>)>,
    next_layer_id: u64,
    transform: PlotTransform,
    scr_x: i32,
    scr_y: i32,
    bbox: BoundingBox,
}

impl PlotView<NullHost> {
    pub fn new() -> Self {
        Self::with_host(NullHost)
    }
}

impl Default for PlotView<NullHost> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: ViewportHost> PlotView<H> {
    pub fn with_host(host: H) -> Self {
        Self::with_config(host, PlotViewConfig::default())
    }

    pub fn with_config(host: H, config: PlotViewConfig) -> Self {
        let mut view = Self {
            host,
            transform: config.initial_transform,
            config,
            layers: vec![],
            next_layer_id: 0,
            scr_x: 64,
            scr_y: 64,
            bbox: BoundingBox::default(),
        };
        view.update_all();
        view
    }

    // --- Layers ---

    /// Appends a layer on top of the existing ones. The view owns it from now on.
    pub fn add_layer(&mut self, layer: Box<dyn Layer>) -> LayerId {
        let id = LayerId(self.next_layer_id);
        self.next_layer_id += 1;
        debug!(?id, name = layer.name(), "adding layer");
        self.layers.push((id, layer));
        self.update_all();
        id
    }

    /// Removes and drops a layer. Returns false if `id` is not in the view.
    pub fn remove_layer(&mut self, id: LayerId) -> bool {
        let Some(idx) = self.layers.iter().position(|(l, _)| *l == id) else {
            return false;
        };
        let (_, layer) = self.layers.remove(idx);
        debug!(?id, name = layer.name(), "removed layer");
        self.update_all();
        true
    }

    pub fn layer(&self, id: LayerId) -> Option<&dyn Layer> {
        self.layers
            .iter()
            .find(|(l, _)| *l == id)
            .map(|(_, layer)| layer.as_ref())
    }

    /// Mutable access to a layer, e.g. to restyle it. Call
    /// [`PlotView::update_all`] afterwards if its bounds changed.
    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut (dyn Layer + 'static)> {
        self.layers
            .iter_mut()
            .find(|(l, _)| *l == id)
            .map(|(_, layer)| layer.as_mut())
    }

    /// Layers in drawing order.
    pub fn layers(&self) -> impl Iterator<Item = (LayerId, &dyn Layer)> + '_ {
        self.layers.iter().map(|(id, layer)| (*id, layer.as_ref()))
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    // --- View operations ---

    /// Recomputes the union of all layer extents. With no layers the stored
    /// box is left as is and `None` is returned.
    pub fn update_bounding_box(&mut self) -> Option<BoundingBox> {
        let bbox = BoundingBox::union_all(self.layers.iter().map(|(_, l)| l.bounds()))?;
        self.bbox = bbox;
        Some(bbox)
    }

    /// Scales and centres the view so every layer fits on screen.
    pub fn fit(&mut self) {
        let Some(bbox) = self.update_bounding_box() else {
            return;
        };
        ViewController::fit(&mut self.transform, &bbox, self.scr_x, self.scr_y);
        debug!(transform = ?self.transform, ?bbox, "fit");
        self.update_all();
    }

    pub fn zoom_in(&mut self) {
        ViewController::zoom_in(&mut self.transform);
        self.check_scale();
        self.update_all();
    }

    pub fn zoom_out(&mut self) {
        ViewController::zoom_out(&mut self.transform);
        self.check_scale();
        self.update_all();
    }

    pub fn set_pos(&mut self, x: f64, y: f64) {
        self.transform.pos_x = x;
        self.transform.pos_y = y;
        self.update_all();
    }

    pub fn set_pos_x(&mut self, x: f64) {
        self.transform.pos_x = x;
        self.update_all();
    }

    pub fn set_pos_y(&mut self, y: f64) {
        self.transform.pos_y = y;
        self.update_all();
    }

    pub fn handle_command(&mut self, command: PlotCommand) {
        match command {
            PlotCommand::Fit => self.fit(),
            PlotCommand::ZoomIn => self.zoom_in(),
            PlotCommand::ZoomOut => self.zoom_out(),
        }
    }

    // --- Host events ---

    /// The client area changed size.
    pub fn handle_resize(&mut self, width: i32, height: i32) {
        self.scr_x = width;
        self.scr_y = height;
        self.update_all();
    }

    /// The host scrolled to `position` pixels from the start of the scrollable area.
    pub fn handle_scroll(&mut self, orientation: Orientation, position: i32) {
        let viewport = match orientation {
            Orientation::Horizontal => self.scr_x,
            Orientation::Vertical => self.scr_y,
        };
        let pos = ViewController::pos_from_scroll(
            &self.transform,
            &self.bbox,
            orientation,
            position,
            viewport,
        );
        trace!(?orientation, position, pos, "scroll");
        match orientation {
            Orientation::Horizontal => self.set_pos_x(pos),
            Orientation::Vertical => self.set_pos_y(pos),
        }
    }

    /// Republishes the scrollable extent and requests a redraw.
    pub fn update_all(&mut self) {
        if let Some(bbox) = self.update_bounding_box() {
            let scrollbars =
                ViewController::scrollbars(&self.transform, &bbox, self.scr_x, self.scr_y);
            trace!(?scrollbars, "updating scrollbars");
            self.host.set_scrollbars(scrollbars);
        }
        self.host.request_redraw();
    }

    /// Paints every layer in insertion order; later layers draw over earlier ones.
    pub fn render(&mut self, surface: &mut dyn DrawSurface) {
        let size = surface.size();
        self.scr_x = size.x;
        self.scr_y = size.y;
        surface.set_device_origin(IVec2::new(self.scr_x >> 1, self.scr_y >> 1));
        surface.clear(self.config.theme.background);

        let state = self.view_state();
        for (_, layer) in &self.layers {
            layer.draw(surface, &state);
        }
    }

    fn check_scale(&self) {
        if !self.transform.is_well_conditioned() {
            warn!(
                scale_x = self.transform.scale_x,
                scale_y = self.transform.scale_y,
                "scale left the representable range"
            );
        }
    }

    // --- Accessors ---

    pub fn scale_x(&self) -> f64 {
        self.transform.scale_x
    }

    pub fn scale_y(&self) -> f64 {
        self.transform.scale_y
    }

    pub fn pos_x(&self) -> f64 {
        self.transform.pos_x
    }

    pub fn pos_y(&self) -> f64 {
        self.transform.pos_y
    }

    pub fn screen_width(&self) -> i32 {
        self.scr_x
    }

    pub fn screen_height(&self) -> i32 {
        self.scr_y
    }

    /// Last computed bounding box; all zero until a layer has been added.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn transform(&self) -> PlotTransform {
        self.transform
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            transform: self.transform,
            scr_x: self.scr_x,
            scr_y: self.scr_y,
            axis: self.config.axis,
            label_margin: self.config.label_margin,
            theme: self.config.theme,
        }
    }

    pub fn config(&self) -> &PlotViewConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
