//! Integration test: parse a day of time entries from JSON, lay them out in
//! a UTC day column and check lanes, boxes and the wire shape.

use chrono::NaiveDate;
use daylane_core::parsers::parse_entries;
use daylane_core::{Day, assign_lanes, layout_day};

fn workday() -> Day {
    Day::utc(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap())
}

#[test]
fn lay_out_a_workday() {
    let data = include_bytes!("fixtures/workday.json");
    let entries = parse_entries(data).expect("failed to parse fixture");
    assert_eq!(entries.len(), 8);

    let column = layout_day(&workday(), &entries).expect("layout failed");
    let order: Vec<u64> = column.entries.iter().map(|e| e.id).collect();
    assert_eq!(order, vec![6, 1, 2, 3, 4, 5, 7, 8]);

    let lanes: Vec<(u32, u32)> = column
        .entries
        .iter()
        .map(|e| (e.lane.elevation, e.lane.max_elevation))
        .collect();
    assert_eq!(
        lanes,
        vec![(0, 0), (0, 2), (1, 2), (2, 2), (0, 0), (0, 0), (0, 1), (1, 1)]
    );

    // The overnight deploy is clipped to the first hour of the day.
    let deploy = &column.entries[0];
    assert_eq!(deploy.layout.top, 0.0);
    let height = deploy.layout.height.expect("closed entry has a height");
    assert!((height - 100.0 / 24.0).abs() < 1e-9);

    // The running timer keeps an open end and leads its start-time tie.
    let timer = &column.entries[6];
    assert_eq!(timer.label.as_deref(), Some("timer"));
    assert_eq!(timer.layout.height, None);
    assert_eq!((timer.layout.left, timer.layout.width), (0.0, 100.0));
    let call = &column.entries[7];
    assert_eq!((call.layout.left, call.layout.width), (50.0, 50.0));
    assert_eq!(call.layout.top, timer.layout.top);

    for entry in &column.entries {
        assert!(entry.lane.max_elevation >= entry.lane.elevation);
        let layout = entry.layout;
        assert!((0.0..=100.0).contains(&layout.top));
        assert!((layout.left + layout.width - 100.0).abs() < 1e-9);
    }
}

#[test]
fn lanes_are_deterministic_across_runs() {
    let entries = parse_entries(include_bytes!("fixtures/workday.json")).unwrap();
    let first: Vec<_> = assign_lanes(&entries)
        .unwrap()
        .iter()
        .map(|r| (r.source.id, r.lane))
        .collect();
    let second: Vec<_> = assign_lanes(&entries)
        .unwrap()
        .iter()
        .map(|r| (r.source.id, r.lane))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn column_serializes_for_the_renderer() {
    let entries = parse_entries(include_bytes!("fixtures/workday.json")).unwrap();
    let column = layout_day(&workday(), &entries).unwrap();
    let json = serde_json::to_value(&column).unwrap();

    assert_eq!(json["date"], "2024-03-14");
    let first = &json["entries"][1];
    assert_eq!(first["id"], 1);
    assert_eq!(first["lane"]["maxElevation"], 2);
    assert_eq!(first["layout"]["top"], 37.5);
    assert!(json["entries"][6]["layout"].get("height").is_none());
}
