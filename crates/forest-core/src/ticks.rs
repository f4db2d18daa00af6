// File: crates/forest-core/src/ticks.rs
// Summary: Logarithmic tick synthesis and tick label formatting for ratio-scale axes.
// Notes:
// - Candidates are mantissa × 10^d over every decade touched by the data, filtered
//   to the data extent. Crowded axes step down to sparser mantissa sets; an empty
//   result inside a single decade falls back to log-even spacing.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extent::DataExtent;
use crate::grid::logspace;

/// Upper bound on mantissa-generated ticks before a sparser set is tried.
pub const MAX_TICKS: usize = 12;

const FULL_MANTISSAS: [f64; 9] = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0];
const REDUCED_MANTISSAS: [f64; 3] = [1.0, 2.0, 5.0];
const DECADE_MANTISSAS: [f64; 1] = [1.0];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Ordered tick values with their display labels.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub ticks: Vec<Tick>,
}

impl TickPlan {
    /// Build the tick plan for `extent`. With `mirror` set both sequences are
    /// reversed so they line up with a reversed axis.
    pub fn synthesize(extent: &DataExtent, mirror: bool) -> Self {
        let values = tick_values(extent);
        let mut ticks: Vec<Tick> = values
            .into_iter()
            .map(|value| Tick { value, label: format_tick(value) })
            .collect();
        if mirror {
            ticks.reverse();
        }
        Self { ticks }
    }

    pub fn len(&self) -> usize { self.ticks.len() }
    pub fn is_empty(&self) -> bool { self.ticks.is_empty() }

    pub fn values(&self) -> Vec<f64> {
        self.ticks.iter().map(|t| t.value).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|t| t.label.clone()).collect()
    }
}

/// Ascending tick values covering `extent`.
pub fn tick_values(extent: &DataExtent) -> Vec<f64> {
    let full = candidates(extent, &FULL_MANTISSAS);
    if full.len() <= MAX_TICKS && !full.is_empty() {
        debug!(count = full.len(), "log ticks: full mantissa set");
        return full;
    }
    if full.len() > MAX_TICKS {
        let reduced = candidates(extent, &REDUCED_MANTISSAS);
        if reduced.len() <= MAX_TICKS {
            debug!(full = full.len(), count = reduced.len(), "log ticks: reduced to 1-2-5");
            return reduced;
        }
        let decades = thin_decades(candidates(extent, &DECADE_MANTISSAS));
        debug!(reduced = reduced.len(), count = decades.len(), "log ticks: reduced to decades");
        return decades;
    }

    // No mantissa lands inside a narrow single-decade range.
    let steps = ((extent.x_max / extent.x_min).ceil() as usize).clamp(2, 6);
    let mut out = logspace(extent.x_min, extent.x_max, steps);
    out.dedup();
    debug!(steps, count = out.len(), "log ticks: even log spacing fallback");
    out
}

/// `m × 10^d` for every decade touched by `extent`, filtered to the extent.
pub fn candidates(extent: &DataExtent, mantissas: &[f64]) -> Vec<f64> {
    let (lo, hi) = extent.decades();
    (lo..=hi)
        .flat_map(|d| mantissas.iter().map(move |&m| decade_value(m, d)))
        .filter(|v| extent.contains(*v))
        .collect()
}

/// Keep every k-th power of ten so at most `MAX_TICKS` remain. Kept exponents
/// are multiples of k, which keeps 1 whenever it is in range.
fn thin_decades(decades: Vec<f64>) -> Vec<f64> {
    if decades.len() <= MAX_TICKS {
        return decades;
    }
    let k = decades.len().div_ceil(MAX_TICKS) as i32;
    decades
        .into_iter()
        .filter(|v| (v.log10().round() as i32).rem_euclid(k) == 0)
        .collect()
}

/// `m × 10^d`, dividing for negative decades so `3 × 10^-1` is exactly `0.3`.
fn decade_value(m: f64, d: i32) -> f64 {
    if d >= 0 {
        m * 10f64.powi(d)
    } else {
        m / 10f64.powi(-d)
    }
}

/// Compact tick label: integers when exact, otherwise one decimal; values
/// below one drop the leading zero (`0.3` -> `.3`, `0.05` -> `.05`).
pub fn format_tick(v: f64) -> String {
    if v >= 1.0 {
        let r = v.round();
        if (v - r).abs() <= 1e-9 * r.abs().max(1.0) {
            format!("{}", r as i64)
        } else {
            format!("{v:.1}")
        }
    } else {
        let s = if v >= 0.1 { format!("{v:.1}") } else { format!("{v:.2}") };
        match s.strip_prefix('0') {
            Some(rest) => rest.to_string(),
            None => s,
        }
    }
}
