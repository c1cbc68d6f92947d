use crate::data_types::{Color, Font, Pen};
use serde::{Deserialize, Serialize};

/// Colours, pens and fonts used when a layer does not set its own.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotTheme {
    pub background: Color,
    pub layer_pen: Pen,
    pub scale_pen: Pen,
    pub layer_font: Font,
    pub scale_font: Font,
}

impl Default for PlotTheme {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            layer_pen: Pen::black(),
            scale_pen: Pen::grey(),
            layer_font: Font::normal(),
            scale_font: Font::small(),
        }
    }
}
