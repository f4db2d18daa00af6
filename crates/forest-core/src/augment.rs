// File: crates/forest-core/src/augment.rs
// Summary: Row augmenter: fixed-effect inverse-variance weights inferred from 95% intervals.

use crate::row::{AugmentedRow, EffectScale, RawRow};
use crate::types::{POSITIVE_FLOOR, Z_95};

/// Augment every row with its standard error and pooling weight.
/// Pure and total: row order and count are preserved.
pub fn augment(rows: &[RawRow], scale: EffectScale) -> Vec<AugmentedRow> {
    rows.iter().map(|r| augment_row(r, scale)).collect()
}

/// Per-row policy: a supplied weight wins; otherwise the weight is `1/se²` with
/// `se` taken from the interval width (on the log scale for ratio measures).
pub fn augment_row(row: &RawRow, scale: EffectScale) -> AugmentedRow {
    if let Some(w) = row.weight {
        return AugmentedRow { raw: row.clone(), se: None, weight_calc: w, has_weight: true };
    }
    let Some((_, lo, hi)) = row.interval() else {
        return AugmentedRow { raw: row.clone(), se: None, weight_calc: 0.0, has_weight: false };
    };

    let se = match scale {
        EffectScale::Ratio => {
            let lo = lo.max(POSITIVE_FLOOR);
            let hi = hi.max(POSITIVE_FLOOR);
            (hi.ln() - lo.ln()) / (2.0 * Z_95)
        }
        EffectScale::Linear => (hi - lo) / (2.0 * Z_95),
    };
    // se <= 0 (or NaN) must not leak Infinity into sizes and percentages
    let weight_calc = if se > 0.0 { 1.0 / (se * se) } else { 0.0 };

    AugmentedRow { raw: row.clone(), se: Some(se), weight_calc, has_weight: true }
}

/// Sum of `weight_calc` over rows that carry a weight.
pub fn total_weight(rows: &[AugmentedRow]) -> f64 {
    rows.iter().filter(|r| r.has_weight).map(|r| r.weight_calc).sum()
}

/// Share of the total weight in percent, or `None` for weightless rows / zero totals.
pub fn weight_percent(row: &AugmentedRow, total: f64) -> Option<f64> {
    if !row.has_weight || !(total > 0.0) {
        return None;
    }
    Some(row.weight_calc / total * 100.0)
}

/// Largest `weight_calc` among weighted rows, 0 when there are none.
pub fn max_weight(rows: &[AugmentedRow]) -> f64 {
    rows.iter()
        .filter(|r| r.has_weight)
        .map(|r| r.weight_calc)
        .filter(|w| w.is_finite())
        .fold(0.0, f64::max)
}
