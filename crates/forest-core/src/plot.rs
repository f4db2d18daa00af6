// File: crates/forest-core/src/plot.rs
// Summary: ForestPlot ties rows and options to the augment -> size -> layout -> payload pipeline.

use crate::augment::augment;
use crate::layout::{plan_layout, LayoutSpec};
use crate::options::PlotOptions;
use crate::payload::RenderPayload;
use crate::row::{AugmentedRow, RawRow};

/// Rows plus options. Every derived value is recomputed on request; nothing is cached.
#[derive(Clone, Debug, Default)]
pub struct ForestPlot {
    pub rows: Vec<RawRow>,
    pub options: PlotOptions,
}

impl ForestPlot {
    pub fn new(options: PlotOptions) -> Self {
        Self { rows: Vec::new(), options }
    }

    pub fn with_rows(rows: Vec<RawRow>, options: PlotOptions) -> Self {
        Self { rows, options }
    }

    pub fn add_row(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    pub fn augmented(&self) -> Vec<AugmentedRow> {
        augment(&self.rows, self.options.scale)
    }

    pub fn layout(&self) -> LayoutSpec {
        let o = &self.options;
        plan_layout(&self.augmented(), o.scale, o.mirror_x, &o.axis_label)
    }

    /// Full render payload for the charting engine.
    pub fn build_payload(&self) -> RenderPayload {
        build_payload(&self.rows, &self.options)
    }
}

/// Run the whole pipeline for `rows` under `options`.
pub fn build_payload(rows: &[RawRow], options: &PlotOptions) -> RenderPayload {
    let augmented = augment(rows, options.scale);
    let sizes = options.sizing.sizes(&augmented);
    let layout = plan_layout(&augmented, options.scale, options.mirror_x, &options.axis_label);
    RenderPayload::assemble(&augmented, &sizes, layout, options.colors)
}
