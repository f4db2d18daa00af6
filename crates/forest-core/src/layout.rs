// File: crates/forest-core/src/layout.rs
// Summary: Axis/layout planner: row positions, chart height, margins, reference line and x ticks.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::{Axis, ScaleKind};
use crate::extent::DataExtent;
use crate::row::{AugmentedRow, EffectScale};
use crate::ticks::{Tick, TickPlan};
use crate::types::{
    Insets, BASE_HEIGHT, LABEL_CHAR_PX, LABEL_PAD_PX, MAX_LEFT_MARGIN, MIN_HEIGHT, MIN_LEFT_MARGIN,
    ROW_HEIGHT,
};

/// Vertical "no effect" line spanning the whole y range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceLine {
    pub x: f64,
    pub y0: f64,
    pub y1: f64,
}

/// Chart geometry handed to the charting engine alongside the traces.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub height: u32,
    pub margins: Insets,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub reference_line: ReferenceLine,
    /// y position of each row, parallel to the input rows (topmost first).
    pub row_y: Vec<f64>,
    /// Horizontal data extent the x ticks were derived from.
    pub extent: (f64, f64),
}

/// Plan the chart geometry for `rows`.
pub fn plan_layout(rows: &[AugmentedRow], scale: EffectScale, mirror_x: bool, label: &str) -> LayoutSpec {
    let n = rows.len();
    let row_y = row_positions(n);
    let y_top = (n + 1) as f64;

    let y_ticks = TickPlan {
        ticks: rows
            .iter()
            .zip(&row_y)
            .map(|(r, &y)| Tick { value: y, label: r.study().to_string() })
            .collect(),
    };
    let y_axis = Axis::new("", ScaleKind::Linear).with_range(0.0, y_top).with_ticks(y_ticks);

    let extent = DataExtent::from_rows(rows, scale);
    let x_axis = match scale {
        EffectScale::Ratio => Axis::new(label, ScaleKind::Log10)
            .with_ticks(TickPlan::synthesize(&extent, mirror_x))
            .reversed(mirror_x),
        EffectScale::Linear => Axis::new(label, ScaleKind::Linear).reversed(mirror_x),
    };

    let margins = Insets { left: left_margin(rows), ..Insets::default() };
    let height = chart_height(n);
    debug!(rows = n, height, left = margins.left, x_min = extent.x_min, x_max = extent.x_max, "planned layout");

    LayoutSpec {
        height,
        margins,
        x_axis,
        y_axis,
        reference_line: ReferenceLine { x: scale.null_effect(), y0: 0.0, y1: y_top },
        row_y,
        extent: (extent.x_min, extent.x_max),
    }
}

/// Row `i` of `n` sits at `y = n - i`, so the first row is drawn on top.
pub fn row_positions(n: usize) -> Vec<f64> {
    (0..n).map(|i| (n - i) as f64).collect()
}

/// `max(400, 40 × n + 160)` pixels.
pub fn chart_height(n: usize) -> u32 {
    let rows = u32::try_from(n).unwrap_or(u32::MAX);
    rows.saturating_mul(ROW_HEIGHT).saturating_add(BASE_HEIGHT).max(MIN_HEIGHT)
}

/// Left margin sized for the longest study label, clamped to a sane band.
pub fn left_margin(rows: &[AugmentedRow]) -> u32 {
    let longest = rows.iter().map(|r| r.study().chars().count()).max().unwrap_or(0);
    let px = (longest as f64 * LABEL_CHAR_PX + LABEL_PAD_PX).round();
    px.clamp(MIN_LEFT_MARGIN as f64, MAX_LEFT_MARGIN as f64) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::augment::augment;
    use crate::row::RawRow;

    #[test]
    fn height_has_floor_and_grows_linearly() {
        assert_eq!(chart_height(0), 400);
        assert_eq!(chart_height(6), 400);
        assert_eq!(chart_height(7), 440);
        assert_eq!(chart_height(20), 960);
    }

    #[test]
    fn rows_are_placed_top_down() {
        assert_eq!(row_positions(3), vec![3.0, 2.0, 1.0]);
        assert!(row_positions(0).is_empty());
    }

    #[test]
    fn left_margin_is_clamped() {
        let short = augment(&[RawRow::subheader("A")], EffectScale::Ratio);
        assert_eq!(left_margin(&short), MIN_LEFT_MARGIN);
        let long = augment(&[RawRow::subheader("x".repeat(500))], EffectScale::Ratio);
        assert_eq!(left_margin(&long), MAX_LEFT_MARGIN);
        let mid = augment(&[RawRow::subheader("Smith et al. 2019")], EffectScale::Ratio);
        assert_eq!(left_margin(&mid), 17 * 7 + 24);
        assert_eq!(left_margin(&[]), MIN_LEFT_MARGIN);
    }

    #[test]
    fn linear_layout_has_no_tick_override() {
        let rows = augment(&[RawRow::with_ci("a", 0.2, -0.1, 0.5)], EffectScale::Linear);
        let l = plan_layout(&rows, EffectScale::Linear, false, "Mean difference");
        assert_eq!(l.x_axis.kind, ScaleKind::Linear);
        assert!(l.x_axis.ticks.is_none());
        assert_eq!(l.reference_line.x, 0.0);
        assert_eq!(l.y_axis.range, Some((0.0, 2.0)));
    }
}
