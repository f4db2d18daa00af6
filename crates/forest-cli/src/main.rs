// File: crates/forest-cli/src/main.rs
// Summary: Loads a study CSV, applies plot options and writes the forest plot render payload as JSON.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueHint};
use forest_core::telemetry::init_default_tracing;
use forest_core::{theme, Dataset, EffectScale, ForestPlot, PlotOptions, Rgba};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(author, version, about = "Forest plot render payload from a study CSV", long_about = None)]
struct Cli {
    /// CSV with study, effect, ci_low, ci_high and optional weight columns. A header without a study column (study, name, Studie, ...) is rejected instead of loading zero rows
    #[arg(value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Output JSON path (stdout when omitted or `-`)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// JSON file with base plot options; flags below override it
    #[arg(long, value_hint = ValueHint::FilePath)]
    options: Option<PathBuf>,

    /// Treat effects as differences (linear axis, null at 0) instead of ratios
    #[arg(long, action = ArgAction::SetTrue)]
    linear: bool,

    /// Draw high values on the left
    #[arg(long, action = ArgAction::SetTrue)]
    mirror: bool,

    /// X axis title
    #[arg(long)]
    label: Option<String>,

    /// Marker size multiplier
    #[arg(long)]
    size_scale: Option<f64>,

    /// Color preset: light or dark
    #[arg(long)]
    theme: Option<String>,

    /// Marker fill color (rgba(...), rgb(...) or #hex)
    #[arg(long)]
    marker_color: Option<String>,

    /// Marker fill opacity in [0, 1]
    #[arg(long)]
    marker_opacity: Option<f32>,

    /// CI whisker color
    #[arg(long)]
    line_color: Option<String>,

    /// Reference line color
    #[arg(long)]
    ref_color: Option<String>,
}

fn main() -> Result<()> {
    let _ = init_default_tracing();
    let cli = Cli::parse();

    let (path, used_alt) = resolve_path(&cli.input)?;
    info!(path = %path.display(), "using input file");
    if used_alt {
        info!("extension swapped between .csv/.cvs");
    }

    let mut dataset = Dataset::default();
    let n = dataset
        .load_path(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if n == 0 {
        warn!("no study rows loaded; check headers/delimiter");
    }

    let options = build_options(&cli)?;
    let plot = ForestPlot::with_rows(dataset.rows().to_vec(), options);
    let payload = plot.build_payload();
    info!(
        rows = n,
        markers = payload.markers.x.len(),
        total_weight = payload.total_weight,
        "built payload"
    );

    let json = payload.to_json_contract_v1_pretty()?;
    match cli.output.as_deref() {
        Some(out) if out != Path::new("-") => {
            if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(out, json).with_context(|| format!("writing {}", out.display()))?;
            info!(output = %out.display(), "wrote payload");
        }
        _ => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}

/// Options file (if any), then theme, then individual flags.
fn build_options(cli: &Cli) -> Result<PlotOptions> {
    let mut opts = match &cli.options {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            PlotOptions::from_json_str(&text).with_context(|| format!("parsing options {}", p.display()))?
        }
        None => PlotOptions::default(),
    };

    if let Some(name) = &cli.theme {
        opts.colors = theme::find(name).colors;
    }
    if cli.linear {
        opts.scale = EffectScale::Linear;
    }
    if cli.mirror {
        opts.mirror_x = true;
    }
    if let Some(label) = &cli.label {
        opts.axis_label = label.clone();
    }
    if let Some(k) = cli.size_scale {
        anyhow::ensure!(k.is_finite() && k > 0.0, "--size-scale must be a positive number");
        opts.sizing.multiplier = k;
    }
    if let Some(c) = &cli.marker_color {
        opts.colors.marker_fill = Rgba::parse(c).context("--marker-color")?;
    }
    if let Some(a) = cli.marker_opacity {
        opts.colors.marker_opacity = a.clamp(0.0, 1.0);
    }
    if let Some(c) = &cli.line_color {
        opts.colors.ci_line = Rgba::parse(c).context("--line-color")?;
    }
    if let Some(c) = &cli.ref_color {
        opts.colors.reference_line = Rgba::parse(c).context("--ref-color")?;
    }
    Ok(opts)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(p: &Path) -> Result<(PathBuf, bool)> {
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
