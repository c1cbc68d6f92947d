use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GREY: Color = Color::rgb(128, 128, 128);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Stroke style used for points and lines.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Color,
    pub width: f32,
}

impl Pen {
    pub const fn solid(color: Color) -> Self {
        Self { color, width: 1.0 }
    }

    pub fn black() -> Self {
        Self::solid(Color::BLACK)
    }

    pub fn grey() -> Self {
        Self::solid(Color::GREY)
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::black()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub point_size: f32,
}

impl Font {
    pub fn normal() -> Self {
        Self { point_size: 10.0 }
    }

    pub fn small() -> Self {
        Self { point_size: 8.0 }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::normal()
    }
}

/// Where a function layer places its name label along the sampled axis.
///
/// For a function of x `Start`/`End` are the left/right edges of the view;
/// for a function of y they are the bottom/top edges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAlign {
    Start,
    Center,
    #[default]
    End,
}

/// Attributes shared by every layer. An unset pen or font falls back to the
/// view's [`PlotTheme`](crate::theme::PlotTheme).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub name: String,
    pub pen: Option<Pen>,
    pub font: Option<Font>,
}

impl LayerStyle {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_pen(mut self, pen: Pen) -> Self {
        self.pen = Some(pen);
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }

    pub fn pen_or(&self, fallback: Pen) -> Pen {
        self.pen.unwrap_or(fallback)
    }

    pub fn font_or(&self, fallback: Font) -> Font {
        self.font.unwrap_or(fallback)
    }
}
