//! View mode and layer state.
//!
//! The editor shows either the 2D plan or the 3D preview. Objects are split
//! into a lower layer (floor units) and an upper layer (wall units); only the
//! active layer is interactive in the 2D plan, the other is dimmed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Objects at or below this height (meters) belong to the lower layer.
pub const LOWER_LAYER_MAX_HEIGHT: f64 = 1.5;

/// Opacity of the inactive layer in the 2D plan.
pub const INACTIVE_LAYER_OPACITY: f32 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    #[default]
    Editing2D,
    Previewing3D,
}

impl ViewMode {
    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Editing2D => ViewMode::Previewing3D,
            ViewMode::Previewing3D => ViewMode::Editing2D,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Editing2D => write!(f, "2D"),
            ViewMode::Previewing3D => write!(f, "3D"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewLayer {
    #[default]
    Lower,
    Upper,
}

impl ViewLayer {
    pub fn for_height(height: f64) -> Self {
        if height <= LOWER_LAYER_MAX_HEIGHT {
            ViewLayer::Lower
        } else {
            ViewLayer::Upper
        }
    }
}

impl fmt::Display for ViewLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewLayer::Lower => write!(f, "lower"),
            ViewLayer::Upper => write!(f, "upper"),
        }
    }
}

/// How a layer is drawn in the 2D plan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerPresentation {
    pub opacity: f32,
    pub interactive: bool,
}

impl LayerPresentation {
    pub fn for_layer(layer: ViewLayer, active: ViewLayer, inactive_opacity: f32) -> Self {
        if layer == active {
            Self {
                opacity: 1.0,
                interactive: true,
            }
        } else {
            Self {
                opacity: inactive_opacity,
                interactive: false,
            }
        }
    }
}
