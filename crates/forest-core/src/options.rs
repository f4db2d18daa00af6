// File: crates/forest-core/src/options.rs
// Summary: User-facing plot options (effect scale, mirroring, axis label, sizing, colors).

use serde::{Deserialize, Serialize};

use crate::error::ForestResult;
use crate::markers::MarkerSizing;
use crate::row::EffectScale;
use crate::theme::ColorConfig;

pub const DEFAULT_AXIS_LABEL: &str = "Effect size";

/// Every input of the pipeline besides the rows. Missing JSON fields take defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub scale: EffectScale,
    /// Draw high values on the left.
    pub mirror_x: bool,
    pub axis_label: String,
    pub sizing: MarkerSizing,
    pub colors: ColorConfig,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            scale: EffectScale::Ratio,
            mirror_x: false,
            axis_label: DEFAULT_AXIS_LABEL.to_string(),
            sizing: MarkerSizing::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl PlotOptions {
    pub fn from_json_str(input: &str) -> ForestResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}
