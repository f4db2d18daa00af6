// File: crates/forest-core/src/theme.rs
// Summary: RGBA colors, per-plot color configuration and light/dark presets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ForestError, ForestResult};

/// 8-bit RGB with a unit-interval alpha. Always printed as `rgba(r,g,b,a)`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `rgba(...)`, `rgb(...)` or `#rgb` / `#rrggbb` / `#rrggbbaa`.
    /// Channels outside 0..=255 and alpha outside [0, 1] are clamped.
    pub fn parse(input: &str) -> ForestResult<Self> {
        let s = input.trim();
        let bad = || ForestError::InvalidColor(input.to_string());

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(bad);
        }

        let lower = s.to_ascii_lowercase();
        let (body, want_alpha) = if let Some(b) = lower.strip_prefix("rgba(") {
            (b, true)
        } else if let Some(b) = lower.strip_prefix("rgb(") {
            (b, false)
        } else {
            return Err(bad());
        };
        let body = body.strip_suffix(')').ok_or_else(bad)?;
        let parts: Vec<f64> = body
            .split(',')
            .map(|p| p.trim().parse::<f64>())
            .collect::<Result<_, _>>()
            .map_err(|_| bad())?;
        if parts.iter().any(|v| !v.is_finite()) {
            return Err(bad());
        }
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        match (parts.as_slice(), want_alpha) {
            ([r, g, b, a], true) => Ok(Self::new(channel(*r), channel(*g), channel(*b), a.clamp(0.0, 1.0) as f32)),
            ([r, g, b], false) => Ok(Self::opaque(channel(*r), channel(*g), channel(*b))),
            _ => Err(bad()),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Rgba::opaque(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(Rgba::opaque(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::new(byte(0)?, byte(2)?, byte(4)?, byte(6)? as f32 / 255.0)),
        _ => None,
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // two decimals for alpha, trailing zeros trimmed: 1, 0.5, 0.35
        let a = format!("{:.2}", self.a);
        let a = a.trim_end_matches('0').trim_end_matches('.');
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, a)
    }
}

impl FromStr for Rgba {
    type Err = ForestError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ForestError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

/// Colors consumed by the traces plus the plot background and text color.
/// Fields missing from JSON take the light preset's values.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub marker_fill: Rgba,
    pub marker_opacity: f32,
    pub ci_line: Rgba,
    pub reference_line: Rgba,
    pub background: Rgba,
    pub text: Rgba,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Theme::light().colors
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub colors: ColorConfig,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            colors: ColorConfig {
                marker_fill: Rgba::opaque(32, 120, 200),
                marker_opacity: 0.85,
                ci_line: Rgba::opaque(60, 60, 70),
                reference_line: Rgba::new(200, 60, 60, 0.8),
                background: Rgba::opaque(255, 255, 255),
                text: Rgba::opaque(20, 20, 30),
            },
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            colors: ColorConfig {
                marker_fill: Rgba::opaque(64, 160, 255),
                marker_opacity: 0.9,
                ci_line: Rgba::opaque(180, 180, 190),
                reference_line: Rgba::new(255, 230, 70, 0.8),
                background: Rgba::opaque(18, 18, 20),
                text: Rgba::opaque(235, 235, 245),
            },
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
