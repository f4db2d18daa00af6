// File: crates/forest-core/tests/snapshot.rs
// Purpose: Golden snapshot of the render payload JSON with a bless flow.
// Behavior:
// - Builds a deterministic payload (subheader, weighted and CI-only rows, mirrored axis).
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, compares the parsed JSON against the committed snapshot; numbers match
//   to a relative 1e-12 so a last-bit libm difference does not count.
// - A missing snapshot fails; bless it with UPDATE_SNAPSHOTS=1.

use approx::relative_eq;
use forest_core::{build_payload, EffectScale, PlotOptions, RawRow};
use serde_json::Value;

fn payload_json() -> String {
    let rows = vec![
        RawRow::subheader("Randomised"),
        RawRow::with_ci("Adams 2011", 0.72, 0.51, 1.02),
        RawRow::with_ci("Baker 2015", 0.95, 0.80, 1.13),
        RawRow::with_ci("Chen 2019", 1.10, 0.70, 1.73).with_weight(4.0),
        RawRow::subheader("Observational"),
        RawRow::with_ci("Diaz 2021", 0.60, 0.31, 1.16),
    ];
    let opts = PlotOptions {
        scale: EffectScale::Ratio,
        mirror_x: true,
        axis_label: "Hazard ratio".into(),
        ..PlotOptions::default()
    };
    build_payload(&rows, &opts).to_json_contract_v1_pretty().expect("serialize payload")
}

#[test]
fn golden_payload() {
    let got = payload_json();
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/payload.json");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(snap_path.parent().unwrap()).expect("create snapshots dir");
        std::fs::write(&snap_path, &got).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), got.len());
        return;
    }

    assert!(
        snap_path.exists(),
        "missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless",
        snap_path.display()
    );
    let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
    // Compare parsed values so whitespace changes do not count
    let got_v: Value = serde_json::from_str(&got).expect("parse got");
    let want_v: Value = serde_json::from_str(&want).expect("parse want");
    if let Err(at) = same_json(&got_v, &want_v, "$") {
        panic!("payload differs from golden snapshot {} at {at}\n{got}", snap_path.display());
    }
}

/// Structural equality; numbers compare as f64 within a relative 1e-12.
fn same_json(got: &Value, want: &Value, path: &str) -> Result<(), String> {
    match (got, want) {
        (Value::Number(a), Value::Number(b)) => {
            let (a, b) = (a.as_f64().unwrap_or(f64::NAN), b.as_f64().unwrap_or(f64::NAN));
            if relative_eq!(a, b, max_relative = 1e-12) { Ok(()) } else { Err(format!("{path}: {a} != {b}")) }
        }
        (Value::Array(a), Value::Array(b)) => {
            if a.len() != b.len() {
                return Err(format!("{path}: length {} != {}", a.len(), b.len()));
            }
            a.iter().zip(b).enumerate().try_for_each(|(i, (x, y))| same_json(x, y, &format!("{path}[{i}]")))
        }
        (Value::Object(a), Value::Object(b)) => {
            let mut keys: Vec<&String> = a.keys().chain(b.keys()).collect();
            keys.sort();
            keys.dedup();
            keys.into_iter().try_for_each(|k| match (a.get(k), b.get(k)) {
                (Some(x), Some(y)) => same_json(x, y, &format!("{path}.{k}")),
                _ => Err(format!("{path}.{k}: present on one side only")),
            })
        }
        _ if got == want => Ok(()),
        _ => Err(format!("{path}: {got} != {want}")),
    }
}

#[test]
fn snapshot_comparison_catches_drift() {
    let golden: Value = serde_json::from_str(r#"{ "a": [1.0, null, "x"], "b": { "c": 0.85 } }"#).unwrap();
    let near: Value = serde_json::from_str(r#"{ "a": [1.0000000000000002, null, "x"], "b": { "c": 0.85 } }"#).unwrap();
    let off: Value = serde_json::from_str(r#"{ "a": [1.001, null, "x"], "b": { "c": 0.85 } }"#).unwrap();
    let extra: Value = serde_json::from_str(r#"{ "a": [1.0, null, "x"], "b": { "c": 0.85, "d": 1 } }"#).unwrap();
    assert!(same_json(&near, &golden, "$").is_ok());
    assert_eq!(same_json(&off, &golden, "$").unwrap_err(), "$.a[0]: 1.001 != 1");
    assert!(same_json(&extra, &golden, "$").is_err());
}

#[test]
fn payload_is_deterministic() {
    assert_eq!(payload_json(), payload_json());
}
