use chartpath::core::{AutoScaleAxis, Axis, AxisDimension, AxisOptions, HighLow, StepAxis};
use chartpath::diagnostics::AxisSnapshot;

#[test]
fn snapshot_captures_axis_state() {
    let axis = AutoScaleAxis::new(
        AxisDimension::Y,
        100.0,
        HighLow::new(10.0, 0.0),
        &AxisOptions::default(),
    )
    .expect("valid axis");

    let snapshot = AxisSnapshot::capture_with_bounds(&axis, axis.bounds());
    assert_eq!(snapshot.dimension, AxisDimension::Y);
    assert_eq!(snapshot.ticks, axis.ticks());
    assert!(snapshot.bounds.is_some());
}

#[test]
fn snapshot_json_round_trips() {
    let axis = StepAxis::new(AxisDimension::X, 300.0, 5, &AxisOptions::default()).expect("valid axis");

    let snapshot = AxisSnapshot::capture(&axis);
    let json = snapshot.to_json_pretty().expect("snapshot json");
    assert!(json.contains("\"ticks\""));

    let restored = AxisSnapshot::from_json(&json).expect("snapshot parse");
    assert_eq!(restored, snapshot);
}
