// File: crates/forest-core/src/markers.rs
// Summary: Marker diameters proportional to each study's share of the largest weight.

use serde::{Deserialize, Serialize};

use crate::augment::max_weight;
use crate::row::AugmentedRow;
use crate::types::{MAX_MARKER_SIZE, MIN_MARKER_SIZE};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSizing {
    pub min_size: f64,
    pub max_size: f64,
    /// User-controlled scale applied after interpolation.
    pub multiplier: f64,
}

impl Default for MarkerSizing {
    fn default() -> Self {
        Self { min_size: MIN_MARKER_SIZE, max_size: MAX_MARKER_SIZE, multiplier: 1.0 }
    }
}

impl MarkerSizing {
    /// `(weight / max_weight) × max_size + min_size`, scaled by the multiplier.
    /// A non-positive `max_weight` leaves every marker at the minimum size.
    pub fn size_for(&self, weight: f64, max_weight: f64) -> f64 {
        let share = if max_weight > 0.0 && weight.is_finite() { (weight / max_weight).max(0.0) } else { 0.0 };
        (share * self.max_size + self.min_size) * self.multiplier
    }

    /// Size per row, `None` for rows that get no marker.
    pub fn sizes(&self, rows: &[AugmentedRow]) -> Vec<Option<f64>> {
        let max_w = max_weight(rows);
        rows.iter()
            .map(|r| r.is_plotted().then(|| self.size_for(r.weight_calc, max_w)))
            .collect()
    }
}
