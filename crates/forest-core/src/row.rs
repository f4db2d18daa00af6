// File: crates/forest-core/src/row.rs
// Summary: Study row model (raw CSV rows and weight-augmented rows) and the effect scale.
// Notes:
// - Numeric fields stay `Option<f64>` end to end; a missing value is never
//   defaulted to zero before it reaches the augmenter or the planner.

use serde::{Deserialize, Serialize};

/// How effect estimates are pooled and plotted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectScale {
    /// Ratio measures (OR, RR, HR): null effect at 1, log-scale axis.
    #[default]
    Ratio,
    /// Differences (MD, SMD): null effect at 0, linear axis.
    Linear,
}

impl EffectScale {
    pub const fn is_ratio(self) -> bool {
        matches!(self, EffectScale::Ratio)
    }

    /// The x position of the "no effect" reference line.
    pub const fn null_effect(self) -> f64 {
        match self {
            EffectScale::Ratio => 1.0,
            EffectScale::Linear => 0.0,
        }
    }
}

/// One parsed CSV row. `study` is always present; rows without it never get this far.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub study: String,
    pub effect: Option<f64>,
    pub ci_low: Option<f64>,
    pub ci_high: Option<f64>,
    pub weight: Option<f64>,
}

impl RawRow {
    /// A label-only row (no numeric fields).
    pub fn subheader(study: impl Into<String>) -> Self {
        Self { study: study.into(), ..Self::default() }
    }

    /// A study with an estimate and a 95% interval.
    pub fn with_ci(study: impl Into<String>, effect: f64, ci_low: f64, ci_high: f64) -> Self {
        Self {
            study: study.into(),
            effect: Some(effect),
            ci_low: Some(ci_low),
            ci_high: Some(ci_high),
            weight: None,
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = Some(weight);
        self
    }

    /// True when none of the numeric fields are set.
    pub fn is_subheader(&self) -> bool {
        self.effect.is_none() && self.ci_low.is_none() && self.ci_high.is_none() && self.weight.is_none()
    }

    /// Effect and both bounds, when all three are present.
    pub fn interval(&self) -> Option<(f64, f64, f64)> {
        match (self.effect, self.ci_low, self.ci_high) {
            (Some(e), Some(lo), Some(hi)) => Some((e, lo, hi)),
            _ => None,
        }
    }
}

/// A raw row plus the standard error and pooling weight derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AugmentedRow {
    #[serde(flatten)]
    pub raw: RawRow,
    pub se: Option<f64>,
    pub weight_calc: f64,
    pub has_weight: bool,
}

impl AugmentedRow {
    pub fn study(&self) -> &str {
        &self.raw.study
    }

    /// Whether the row is drawn with a marker: it must carry a weight and an estimate.
    pub fn is_plotted(&self) -> bool {
        self.has_weight && self.raw.effect.is_some()
    }
}
