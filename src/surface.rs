//! Drawing surface abstraction.
//!
//! The host toolkit provides the actual device context. Layers only depend on
//! the primitives below, all in device pixels relative to the origin set by
//! [`DrawSurface::set_device_origin`].

use crate::data_types::{Color, Font, Pen};
use glam::IVec2;

pub trait DrawSurface {
    /// Surface size in pixels (width, height).
    fn size(&self) -> IVec2;

    fn set_device_origin(&mut self, origin: IVec2);

    /// Fills the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn set_pen(&mut self, pen: &Pen);

    fn set_font(&mut self, font: &Font);

    fn draw_point(&mut self, at: IVec2);

    fn draw_line(&mut self, from: IVec2, to: IVec2);

    /// Draws `text` with its top-left corner at `at`.
    fn draw_text(&mut self, text: &str, at: IVec2);

    /// Width and height of `text` in the current font.
    fn text_extent(&self, text: &str) -> IVec2;
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    SetDeviceOrigin(IVec2),
    Clear(Color),
    SetPen(Pen),
    SetFont(Font),
    Point(IVec2),
    Line(IVec2, IVec2),
    Text(String, IVec2),
}

/// Headless surface that records every call, with fixed-pitch text metrics.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    pub size: IVec2,
    pub char_width: i32,
    pub line_height: i32,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: IVec2::new(width, height),
            char_width: 6,
            line_height: 12,
            calls: Vec::new(),
        }
    }

    pub fn points(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Point(p) => Some(*p),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (IVec2, IVec2)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Line(a, b) => Some((*a, *b)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, IVec2)> + '_ {
        self.calls.iter().filter_map(|c| match c {
            DrawCall::Text(s, at) => Some((s.as_str(), *at)),
            _ => None,
        })
    }

    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> IVec2 {
        self.size
    }

    fn set_device_origin(&mut self, origin: IVec2) {
        self.calls.push(DrawCall::SetDeviceOrigin(origin));
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn set_pen(&mut self, pen: &Pen) {
        self.calls.push(DrawCall::SetPen(*pen));
    }

    fn set_font(&mut self, font: &Font) {
        self.calls.push(DrawCall::SetFont(*font));
    }

    fn draw_point(&mut self, at: IVec2) {
        self.calls.push(DrawCall::Point(at));
    }

    fn draw_line(&mut self, from: IVec2, to: IVec2) {
        self.calls.push(DrawCall::Line(from, to));
    }

    fn draw_text(&mut self, text: &str, at: IVec2) {
        self.calls.push(DrawCall::Text(text.to_string(), at));
    }

    fn text_extent(&self, text: &str) -> IVec2 {
        IVec2::new(text.chars().count() as i32 * self.char_width, self.line_height)
    }
}
