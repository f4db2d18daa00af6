// File: crates/forest-core/src/types.rs
// Summary: Shared types and constants (margins, sizing, statistical constants).

use serde::{Deserialize, Serialize};

/// Two-sided 95% normal quantile used to turn CI widths into standard errors.
pub const Z_95: f64 = 1.96;
/// Smallest value allowed under a log transform.
pub const POSITIVE_FLOOR: f64 = 1e-12;

/// Minimum chart height in pixels.
pub const MIN_HEIGHT: u32 = 400;
/// Pixels per study row.
pub const ROW_HEIGHT: u32 = 40;
/// Fixed vertical chrome (title, axis, padding) added to the row block.
pub const BASE_HEIGHT: u32 = 160;

/// Approximate pixel width of one label character.
pub const LABEL_CHAR_PX: f64 = 7.0;
/// Padding between the label column and the plot area.
pub const LABEL_PAD_PX: f64 = 24.0;
pub const MIN_LEFT_MARGIN: u32 = 80;
pub const MAX_LEFT_MARGIN: u32 = 360;

/// Marker diameters in pixels before the user multiplier.
pub const MIN_MARKER_SIZE: f64 = 6.0;
pub const MAX_MARKER_SIZE: f64 = 18.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(MIN_LEFT_MARGIN, 40, 40, 60)
    }
}
