// File: crates/forest-core/src/axis.rs
// Summary: Axis model with title, scale kind, fixed range and optional tick override.

use serde::{Deserialize, Serialize};

use crate::ticks::TickPlan;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScaleKind {
    Linear,
    Log10,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub label: String,
    pub kind: ScaleKind,
    /// Fixed data range; `None` lets the charting engine autoscale.
    pub range: Option<(f64, f64)>,
    /// High values on the left (x) or bottom (y).
    pub reversed: bool,
    /// Explicit ticks replacing the engine's defaults.
    pub ticks: Option<TickPlan>,
}

impl Axis {
    pub fn new(label: impl Into<String>, kind: ScaleKind) -> Self {
        Self { label: label.into(), kind, range: None, reversed: false, ticks: None }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub fn with_ticks(mut self, ticks: TickPlan) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn reversed(mut self, reversed: bool) -> Self {
        self.reversed = reversed;
        self
    }
}
