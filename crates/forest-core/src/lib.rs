// File: crates/forest-core/src/lib.rs
// Summary: Core library entry point; exports the forest plot planning pipeline.

pub mod row;
pub mod augment;
pub mod axis;
pub mod grid;
pub mod types;
pub mod extent;
pub mod ticks;
pub mod layout;
pub mod markers;
pub mod theme;
pub mod options;
pub mod payload;
pub mod plot;
pub mod csv_input;
pub mod error;
pub mod telemetry;

pub use row::{AugmentedRow, EffectScale, RawRow};
pub use augment::{augment, total_weight, weight_percent};
pub use axis::{Axis, ScaleKind};
pub use extent::DataExtent;
pub use ticks::{format_tick, Tick, TickPlan};
pub use layout::{plan_layout, LayoutSpec, ReferenceLine};
pub use markers::MarkerSizing;
pub use theme::{ColorConfig, Rgba, Theme};
pub use options::PlotOptions;
pub use payload::RenderPayload;
pub use plot::{build_payload, ForestPlot};
pub use csv_input::Dataset;
pub use error::{ForestError, ForestResult};
