use crate::theme::PlotTheme;
use crate::transform::PlotTransform;
use eyre::{ensure, Result, WrapErr};
use serde::{Deserialize, Serialize};

/// Snapshot of the view handed to each layer during a render pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub transform: PlotTransform,
    /// Screen width in pixels
    pub scr_x: i32,
    /// Screen height in pixels
    pub scr_y: i32,
    pub axis: AxisConfig,
    /// Distance kept between a function label and the edge of the view.
    pub label_margin: i32,
    pub theme: PlotTheme,
}

impl ViewState {
    pub fn half_width(&self) -> i32 {
        self.scr_x >> 1
    }

    pub fn half_height(&self) -> i32 {
        self.scr_y >> 1
    }
}

/// Tick and label geometry for axis scales.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    /// Desired distance between ticks in pixels; the step is rounded down to
    /// a power of ten.
    pub target_tick_spacing: f64,
    pub tick_length: i32,
    pub min_label_gap_x: i32,
    pub min_label_gap_y: i32,
    /// Offset of the axis name from the end of the axis line.
    pub name_offset: i32,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            target_tick_spacing: 128.0,
            tick_length: 4,
            min_label_gap_x: 64,
            min_label_gap_y: 32,
            name_offset: 4,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotViewConfig {
    pub theme: PlotTheme,
    pub initial_transform: PlotTransform,
    pub axis: AxisConfig,
    pub label_margin: i32,
}

impl Default for PlotViewConfig {
    fn default() -> Self {
        Self {
            theme: PlotTheme::default(),
            initial_transform: PlotTransform::default(),
            axis: AxisConfig::default(),
            label_margin: 8,
        }
    }
}

impl PlotViewConfig {
    /// Parses a configuration; missing fields take their default value.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).wrap_err("failed to parse plot view configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).wrap_err("failed to serialize plot view configuration")
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.initial_transform;
        ensure!(
            t.is_well_conditioned(),
            "initial scale must be finite and positive, got ({}, {})",
            t.scale_x,
            t.scale_y
        );
        ensure!(
            t.pos_x.is_finite() && t.pos_y.is_finite(),
            "initial position must be finite"
        );
        ensure!(
            self.axis.target_tick_spacing.is_finite() && self.axis.target_tick_spacing > 0.0,
            "target tick spacing must be positive, got {}",
            self.axis.target_tick_spacing
        );
        Ok(())
    }
}
