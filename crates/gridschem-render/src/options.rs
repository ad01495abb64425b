use serde::{Deserialize, Serialize};

use crate::scale::GridScale;

/// Rendering options. Every field may be omitted in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Draw chip identifiers above chips that have no top pins.
    pub chip_labels: bool,
    /// Prefix rows and columns with layout coordinates.
    pub show_axis_labels: bool,
    /// Grid cells per layout unit along X.
    pub grid_scale_x: f64,
    /// Grid cells per layout unit along Y.
    pub grid_scale_y: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            chip_labels: true,
            show_axis_labels: false,
            grid_scale_x: 1.0,
            grid_scale_y: 1.0,
        }
    }
}

impl RenderOptions {
    pub fn with_chip_labels(mut self, show: bool) -> Self {
        self.chip_labels = show;
        self
    }

    pub fn with_axis_labels(mut self, show: bool) -> Self {
        self.show_axis_labels = show;
        self
    }

    pub fn with_scale(mut self, x: f64, y: f64) -> Self {
        self.grid_scale_x = x;
        self.grid_scale_y = y;
        self
    }

    pub fn scale(&self) -> GridScale {
        GridScale::new(self.grid_scale_x, self.grid_scale_y)
    }
}
