use crate::data_types::{BoundingBox, Orientation, ScrollbarConfig};
use crate::transform::PlotTransform;

/// ViewController holds the arithmetic behind fit, zoom and scrolling,
/// independently of any host toolkit to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Scales and centres the transform so `bbox` fills a `width` x `height`
    /// viewport. An axis with zero extent is left untouched.
    pub fn fit(transform: &mut PlotTransform, bbox: &BoundingBox, width: i32, height: i32) {
        let d = bbox.width();
        if d != 0.0 {
            transform.scale_x = width as f64 / d;
            transform.pos_x = bbox.min_x + d / 2.0;
        }
        let d = bbox.height();
        if d != 0.0 {
            transform.scale_y = height as f64 / d;
            transform.pos_y = bbox.min_y + d / 2.0;
        }
    }

    pub fn zoom_in(transform: &mut PlotTransform) {
        transform.scale_x *= 2.0;
        transform.scale_y *= 2.0;
    }

    pub fn zoom_out(transform: &mut PlotTransform) {
        transform.scale_x /= 2.0;
        transform.scale_y /= 2.0;
    }

    /// Scrollable extent and current offset of a `width` x `height` viewport
    /// over `bbox`, in pixels.
    pub fn scrollbars(
        transform: &PlotTransform,
        bbox: &BoundingBox,
        width: i32,
        height: i32,
    ) -> ScrollbarConfig {
        ScrollbarConfig {
            unit: 1,
            virtual_width: (bbox.width() * transform.scale_x) as i32,
            virtual_height: (bbox.height() * transform.scale_y) as i32,
            scroll_x: ((transform.pos_x - bbox.min_x) * transform.scale_x - (width >> 1) as f64)
                as i32,
            scroll_y: ((transform.pos_y - bbox.min_y) * transform.scale_y - (height >> 1) as f64)
                as i32,
        }
    }

    /// World position at the viewport centre for a scroll offset, the inverse
    /// of the offset published by [`ViewController::scrollbars`].
    pub fn pos_from_scroll(
        transform: &PlotTransform,
        bbox: &BoundingBox,
        orientation: Orientation,
        offset: i32,
        viewport: i32,
    ) -> f64 {
        let half = (viewport >> 1) as f64;
        match orientation {
            Orientation::Horizontal => (offset as f64 + half) / transform.scale_x + bbox.min_x,
            Orientation::Vertical => (offset as f64 + half) / transform.scale_y + bbox.min_y,
        }
    }
}
