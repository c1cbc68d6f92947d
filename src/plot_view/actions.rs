use serde::{Deserialize, Serialize};

/// Commands a host can bind to menu entries, buttons or keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlotCommand {
    Fit,
    ZoomIn,
    ZoomOut,
}

impl PlotCommand {
    pub const ALL: [PlotCommand; 3] = [PlotCommand::Fit, PlotCommand::ZoomIn, PlotCommand::ZoomOut];

    pub fn label(self) -> &'static str {
        match self {
            PlotCommand::Fit => "Fit",
            PlotCommand::ZoomIn => "Zoom in",
            PlotCommand::ZoomOut => "Zoom out",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            PlotCommand::Fit => "Set plot view to show all items",
            PlotCommand::ZoomIn => "Zoom in plot view.",
            PlotCommand::ZoomOut => "Zoom out plot view.",
        }
    }
}
