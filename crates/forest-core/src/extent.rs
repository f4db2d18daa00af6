// File: crates/forest-core/src/extent.rs
// Summary: Horizontal data extent over effect estimates and interval bounds.

use crate::row::{AugmentedRow, EffectScale};
use crate::types::POSITIVE_FLOOR;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataExtent {
    pub x_min: f64,
    pub x_max: f64,
}

impl DataExtent {
    /// Fallback used when no finite value is available; keeps `log10` well defined.
    pub const EMPTY: Self = Self { x_min: 1.0, x_max: 1.0 };

    /// Min/max over every finite `effect`, `ci_low` and `ci_high` value. Under the
    /// ratio scale each value is first clamped to a small positive floor.
    pub fn from_rows(rows: &[AugmentedRow], scale: EffectScale) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        for r in rows {
            for v in [r.raw.effect, r.raw.ci_low, r.raw.ci_high].into_iter().flatten() {
                if !v.is_finite() { continue; }
                let v = if scale.is_ratio() { v.max(POSITIVE_FLOOR) } else { v };
                x_min = x_min.min(v);
                x_max = x_max.max(v);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() {
            return Self::EMPTY;
        }
        Self { x_min, x_max }
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.x_min && v <= self.x_max
    }

    /// Decades touched by the extent: `(floor(log10 min), ceil(log10 max))`.
    pub fn decades(&self) -> (i32, i32) {
        (self.x_min.log10().floor() as i32, self.x_max.log10().ceil() as i32)
    }
}
