// File: crates/forest-core/src/payload.rs
// Summary: Render payload for the charting engine: CI and marker traces, label table, shapes, colors.

use serde::{Deserialize, Serialize};

use crate::augment::{total_weight, weight_percent};
use crate::error::ForestResult;
use crate::layout::LayoutSpec;
use crate::row::AugmentedRow;
use crate::theme::{ColorConfig, Rgba};

pub const RENDER_PAYLOAD_JSON_SCHEMA_V1: u32 = 1;

/// Horizontal CI whiskers as one polyline; `None` entries break the line between rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CiTrace {
    pub x: Vec<Option<f64>>,
    pub y: Vec<Option<f64>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkerTrace {
    pub symbol: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub size: Vec<f64>,
    pub hover_text: Vec<String>,
    /// Index of the source row for each marker.
    pub row_index: Vec<usize>,
}

/// One line of the label table, aligned with its chart row through `y`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub y: f64,
    pub study: String,
    pub effect: String,
    pub ci: String,
    pub weight: String,
    pub subheader: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineShape {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub color: Rgba,
    pub dash: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub ci: CiTrace,
    pub markers: MarkerTrace,
    pub layout: LayoutSpec,
    pub shapes: Vec<LineShape>,
    pub table: Vec<TableRow>,
    pub colors: ColorConfig,
    pub total_weight: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RenderPayloadJsonContractV1 {
    pub schema_version: u32,
    pub payload: RenderPayload,
}

impl RenderPayload {
    /// Assemble traces and table from augmented rows, their marker sizes and the planned layout.
    pub fn assemble(rows: &[AugmentedRow], sizes: &[Option<f64>], layout: LayoutSpec, colors: ColorConfig) -> Self {
        let total = total_weight(rows);
        let mut ci = CiTrace::default();
        let mut markers = MarkerTrace { symbol: "diamond".to_string(), ..MarkerTrace::default() };
        let mut table = Vec::with_capacity(rows.len());

        for (i, (row, &y)) in rows.iter().zip(&layout.row_y).enumerate() {
            let pct = weight_percent(row, total);

            if row.has_weight {
                if let Some((_, lo, hi)) = row.raw.interval() {
                    ci.x.extend([Some(lo), Some(hi), None]);
                    ci.y.extend([Some(y), Some(y), None]);
                }
            }
            if let (Some(effect), Some(Some(size))) = (row.raw.effect, sizes.get(i)) {
                markers.x.push(effect);
                markers.y.push(y);
                markers.size.push(*size);
                markers.hover_text.push(hover_text(row, pct));
                markers.row_index.push(i);
            }
            table.push(table_row(row, y, pct));
        }

        let rl = layout.reference_line;
        let shapes = vec![LineShape {
            x0: rl.x,
            x1: rl.x,
            y0: rl.y0,
            y1: rl.y1,
            color: colors.reference_line,
            dash: "dash".to_string(),
        }];

        Self { ci, markers, layout, shapes, table, colors, total_weight: total }
    }

    pub fn to_json_contract_v1_pretty(&self) -> ForestResult<String> {
        let envelope = RenderPayloadJsonContractV1 {
            schema_version: RENDER_PAYLOAD_JSON_SCHEMA_V1,
            payload: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&envelope)?)
    }
}

fn fmt_num(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.2}")).unwrap_or_default()
}

fn fmt_ci(row: &AugmentedRow) -> String {
    match (row.raw.ci_low, row.raw.ci_high) {
        (Some(lo), Some(hi)) => format!("[{lo:.2}, {hi:.2}]"),
        _ => String::new(),
    }
}

fn fmt_pct(pct: Option<f64>) -> String {
    pct.map(|p| format!("{p:.1}%")).unwrap_or_default()
}

/// `"<study><br>Effect: E<br>CI: [L, H]<br>Weight: P%"`
pub fn hover_text(row: &AugmentedRow, pct: Option<f64>) -> String {
    format!(
        "{}<br>Effect: {}<br>CI: {}<br>Weight: {}",
        row.study(),
        fmt_num(row.raw.effect),
        fmt_ci(row),
        fmt_pct(pct),
    )
}

fn table_row(row: &AugmentedRow, y: f64, pct: Option<f64>) -> TableRow {
    if !row.has_weight {
        return TableRow {
            y,
            study: row.study().to_string(),
            effect: String::new(),
            ci: String::new(),
            weight: String::new(),
            subheader: true,
        };
    }
    TableRow {
        y,
        study: row.study().to_string(),
        effect: fmt_num(row.raw.effect),
        ci: fmt_ci(row),
        weight: fmt_pct(pct),
        subheader: false,
    }
}
