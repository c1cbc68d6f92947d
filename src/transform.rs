//! Transform helper for coordinate projection
//!
//! Device coordinates are relative to the centre of the viewport: the render
//! pass moves the surface origin to `(width / 2, height / 2)` before any layer
//! draws, so device `(0, 0)` is the point the view is centred on.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

/// World-to-device projection: scale (pixels per world unit) and the world
/// coordinate shown at the centre of the viewport, per axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub pos_x: f64,
    pub pos_y: f64,
}

impl Default for PlotTransform {
    fn default() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            pos_x: 0.0,
            pos_y: 0.0,
        }
    }
}

impl PlotTransform {
    pub fn new(scale_x: f64, scale_y: f64, pos_x: f64, pos_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            pos_x,
            pos_y,
        }
    }

    pub fn world_to_device(&self, point: DVec2) -> DVec2 {
        DVec2::new(self.x_to_device(point.x), self.y_to_device(point.y))
    }

    pub fn device_to_world(&self, point: DVec2) -> DVec2 {
        DVec2::new(self.device_to_x(point.x), self.device_to_y(point.y))
    }

    /// Projects a world point and truncates it to integer device pixels.
    pub fn to_pixel(&self, point: DVec2) -> IVec2 {
        let device = self.world_to_device(point);
        IVec2::new(device.x as i32, device.y as i32)
    }

    pub fn x_to_device(&self, x: f64) -> f64 {
        (x - self.pos_x) * self.scale_x
    }

    /// Screen Y grows downwards while world Y grows upwards.
    pub fn y_to_device(&self, y: f64) -> f64 {
        (self.pos_y - y) * self.scale_y
    }

    pub fn device_to_x(&self, px: f64) -> f64 {
        px / self.scale_x + self.pos_x
    }

    pub fn device_to_y(&self, py: f64) -> f64 {
        self.pos_y - py / self.scale_y
    }

    /// Visible world range along X for a viewport `width` pixels wide.
    pub fn visible_x(&self, width: i32) -> (f64, f64) {
        let half = (width >> 1) as f64 / self.scale_x;
        (self.pos_x - half, self.pos_x + half)
    }

    /// Visible world range along Y for a viewport `height` pixels tall.
    pub fn visible_y(&self, height: i32) -> (f64, f64) {
        let half = (height >> 1) as f64 / self.scale_y;
        (self.pos_y - half, self.pos_y + half)
    }

    /// Returns true when both scales are finite, normal and positive.
    pub fn is_well_conditioned(&self) -> bool {
        self.scale_x.is_normal()
            && self.scale_y.is_normal()
            && self.scale_x > 0.0
            && self.scale_y > 0.0
    }
}
