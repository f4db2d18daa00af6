// File: crates/forest-core/tests/end_to_end.rs
// Purpose: CSV text through augmentation, sizing and layout to the render payload.

use forest_core::csv_input::read_str;
use forest_core::{build_payload, EffectScale, ForestPlot, MarkerSizing, PlotOptions, RawRow};

const TWO_STUDIES: &str = "study,effect,ci_low,ci_high\nA,1.0,0.8,1.25\nB,2.0,1.5,2.6\n";

#[test]
fn two_ratio_studies() {
    let rows = read_str(TWO_STUDIES).expect("parse csv");
    let payload = build_payload(&rows, &PlotOptions::default());

    assert_eq!(payload.markers.y, vec![2.0, 1.0]);
    assert_eq!(payload.markers.x, vec![1.0, 2.0]);
    assert_eq!(payload.markers.symbol, "diamond");

    let reference = &payload.shapes[0];
    assert_eq!((reference.x0, reference.x1), (1.0, 1.0));
    assert_eq!((reference.y0, reference.y1), (0.0, 3.0));
    assert_eq!(payload.layout.y_axis.range, Some((0.0, 3.0)));
    assert_eq!(payload.layout.height, 400);

    let ticks = payload.layout.x_axis.ticks.as_ref().expect("log ticks").values();
    assert!(ticks.iter().all(|t| (0.8..=2.6).contains(t)));
    assert!(ticks.first().copied().unwrap() <= 1.0);
    assert!(ticks.last().copied().unwrap() >= 2.0);

    let pct: f64 = payload
        .table
        .iter()
        .map(|r| r.weight.trim_end_matches('%').parse::<f64>().unwrap())
        .sum();
    assert!((pct - 100.0).abs() < 0.15, "{pct}");
}

#[test]
fn ci_segments_are_null_separated() {
    let rows = read_str(TWO_STUDIES).unwrap();
    let payload = build_payload(&rows, &PlotOptions::default());
    assert_eq!(payload.ci.x, vec![Some(0.8), Some(1.25), None, Some(1.5), Some(2.6), None]);
    assert_eq!(payload.ci.y, vec![Some(2.0), Some(2.0), None, Some(1.0), Some(1.0), None]);
}

#[test]
fn narrowest_interval_gets_the_largest_marker() {
    let rows = read_str(TWO_STUDIES).unwrap();
    let sizing = MarkerSizing::default();
    let payload = build_payload(&rows, &PlotOptions { sizing, ..PlotOptions::default() });
    // A spans ln(1.25/0.8) = 0.45 on the log scale, B spans ln(2.6/1.5) = 0.55
    assert_eq!(payload.markers.size[0], sizing.min_size + sizing.max_size);
    assert!(payload.markers.size[1] < payload.markers.size[0]);
}

#[test]
fn subheaders_take_a_row_but_no_marker() {
    let csv = "Studie;OR;Untere_KI;Obere_KI\nKohorten;;;\nMeyer 2020;1,4;0,9;2,1\n;1;1;1\n";
    let rows = read_str(csv).unwrap();
    assert_eq!(rows.len(), 2);

    let payload = build_payload(&rows, &PlotOptions::default());
    assert_eq!(payload.layout.row_y, vec![2.0, 1.0]);
    assert_eq!(payload.markers.row_index, vec![1]);
    assert!(payload.table[0].subheader);
    assert_eq!(payload.table[0].study, "Kohorten");
    assert_eq!(payload.table[1].ci, "[0.90, 2.10]");
}

#[test]
fn linear_mode_centres_reference_on_zero() {
    let mut plot = ForestPlot::new(PlotOptions { scale: EffectScale::Linear, mirror_x: true, ..PlotOptions::default() });
    plot.add_row(RawRow::with_ci("a", -0.2, -0.5, 0.1));
    plot.add_row(RawRow::with_ci("b", 0.3, 0.0, 0.6));
    let payload = plot.build_payload();
    assert_eq!(payload.shapes[0].x0, 0.0);
    assert!(payload.layout.x_axis.ticks.is_none());
    assert!(payload.layout.x_axis.reversed);
    assert_eq!(plot.layout(), payload.layout);
}

#[test]
fn json_contract_carries_schema_version() {
    let rows = read_str(TWO_STUDIES).unwrap();
    let json = build_payload(&rows, &PlotOptions::default()).to_json_contract_v1_pretty().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["schema_version"], 1);
    assert_eq!(v["payload"]["ci"]["x"][2], serde_json::Value::Null);
    assert_eq!(v["payload"]["colors"]["marker_fill"], "rgba(32,120,200,1)");
}
