// core/tests/test_workout_graph.rs
use zonegraph_core::models::{Interval, Step, Workout};
use zonegraph_core::scaling::{FREE_RIDE_VALUE, GRAPH_HEADROOM};
use zonegraph_core::{build_interval_graph, scale_height, GraphError, Zone};

fn step(power: f64, duration: f64) -> Step {
    Step { power, duration }
}

fn sweet_spot() -> Workout {
    Workout {
        name: Some("Sweet spot 2x10".into()),
        intervals: vec![
            Interval { duration: 300.0, steps: vec![step(0.5, 150.0), step(0.6, 150.0)] },
            Interval { duration: 600.0, steps: vec![step(0.9, 600.0)] },
            Interval { duration: 120.0, steps: vec![step(0.0, 120.0)] },
            Interval { duration: 600.0, steps: vec![step(0.9, 600.0)] },
            Interval { duration: 300.0, steps: vec![step(1.25, 60.0), step(0.5, 120.0), step(0.5, 120.0)] },
        ],
    }
}

#[test]
fn build_is_pure() {
    let w = sweet_spot();
    let a = build_interval_graph(&w, 250.0).unwrap();
    let b = build_interval_graph(&w, 250.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn two_equal_steps_split_group_in_half() {
    let w = Workout {
        name: None,
        intervals: vec![Interval { duration: 10.0, steps: vec![step(0.8, 5.0), step(0.8, 5.0)] }],
    };
    let g = build_interval_graph(&w, 200.0).unwrap();
    assert_eq!(g.groups.len(), 1);
    assert_eq!(g.groups[0].width_units, 10);
    for seg in &g.groups[0].segments {
        assert_eq!(seg.width_percent, 50.0);
    }
}

#[test]
fn free_ride_has_value_80_height_for_any_metric() {
    let w = Workout {
        name: None,
        intervals: vec![Interval { duration: 60.0, steps: vec![step(0.0, 60.0)] }],
    };
    for ftp in [150.0, 256.0, 400.0] {
        let g = build_interval_graph(&w, ftp).unwrap();
        let seg = &g.groups[0].segments[0];
        let expected = scale_height(ftp * GRAPH_HEADROOM, FREE_RIDE_VALUE);
        assert!((seg.height_percent - expected).abs() < 1e-9, "ftp={ftp}");
        assert!(seg.height_percent > 0.0);
        assert_eq!(seg.info_power, "Free ride");
        assert_eq!(seg.info_power_unit, "");
        assert_eq!(seg.zone, Zone::One);
    }
}

#[test]
fn steps_are_scaled_and_labelled() {
    let g = build_interval_graph(&sweet_spot(), 250.0).unwrap();
    assert_eq!(g.scale, 400.0);

    let ss = &g.groups[1].segments[0];
    // 0.9 × 250 = 225 W
    assert_eq!(ss.info_power, "225");
    assert_eq!(ss.info_power_unit, "W");
    assert_eq!(ss.height_percent, scale_height(400.0, 225.0));
    assert_eq!(ss.zone, Zone::Four);
    assert_eq!(ss.info_time, "10:00");

    let burst = &g.groups[4].segments[0];
    assert_eq!(burst.info_power, "313"); // 312.5 rundes opp
    assert_eq!(burst.zone, Zone::Seven);
    assert_eq!(burst.info_time, "01:00");
}

#[test]
fn order_and_group_widths_follow_workout() {
    let g = build_interval_graph(&sweet_spot(), 250.0).unwrap();
    let widths: Vec<u32> = g.groups.iter().map(|gr| gr.width_units).collect();
    assert_eq!(widths, vec![300, 600, 120, 600, 300]);
    let per_group: Vec<usize> = g.groups.iter().map(|gr| gr.segments.len()).collect();
    assert_eq!(per_group, vec![2, 1, 1, 1, 3]);
    assert_eq!(g.total_units(), 1920);

    let third = &g.groups[4].segments;
    assert!(third.iter().all(|s| (s.width_percent - 100.0 / 3.0).abs() < 1e-12));
}

#[test]
fn sub_second_interval_reserves_one_unit() {
    let w = Workout {
        name: None,
        intervals: vec![Interval { duration: 0.3, steps: vec![step(1.0, 0.3)] }],
    };
    let g = build_interval_graph(&w, 250.0).unwrap();
    assert_eq!(g.groups[0].width_units, 1);
}

#[test]
fn metric_change_keeps_structure_but_updates_heights() {
    let w = sweet_spot();
    let low = build_interval_graph(&w, 200.0).unwrap();
    let high = build_interval_graph(&w, 320.0).unwrap();

    assert_eq!(low.group_count(), high.group_count());
    assert_eq!(low.step_count(), high.step_count());
    assert_eq!(low.step_count(), w.step_count());
    assert_ne!(low.groups[1].segments[0].info_power, high.groups[1].segments[0].info_power);
}

#[test]
fn unusable_metric_falls_back_to_default() {
    let w = sweet_spot();
    let g = build_interval_graph(&w, 0.0).unwrap();
    assert_eq!(g.threshold, 256.0);
    assert!(g.groups.iter().flat_map(|gr| &gr.segments).all(|s| s.height_percent.is_finite()));
}

#[test]
fn empty_interval_gives_empty_group() {
    let w = Workout {
        name: None,
        intervals: vec![Interval { duration: 30.0, steps: vec![] }],
    };
    let g = build_interval_graph(&w, 250.0).unwrap();
    assert_eq!(g.group_count(), 1);
    assert!(g.groups[0].segments.is_empty());
}

#[test]
fn non_finite_input_fails_fast() {
    let w = Workout {
        name: None,
        intervals: vec![
            Interval { duration: 60.0, steps: vec![step(0.5, 60.0)] },
            Interval { duration: 60.0, steps: vec![step(f64::NAN, 60.0)] },
        ],
    };
    match build_interval_graph(&w, 250.0) {
        Err(GraphError::NonFinite { interval, step, field }) => {
            assert_eq!(interval, 1);
            assert_eq!(step, Some(0));
            assert_eq!(field, "power");
        }
        other => panic!("forventet NonFinite, fikk {other:?}"),
    }
}

#[test]
fn missing_steps_reports_path() {
    let json_in = r#"{"intervals":[{"duration":60,"steps":[{"power":0.5,"duration":60}]},{"duration":30}]}"#;
    let err = Workout::from_json(json_in).unwrap_err();
    match err {
        GraphError::InvalidWorkout { path, message } => {
            assert!(path.starts_with("intervals[1]"), "path={path}");
            assert!(message.contains("steps"), "message={message}");
        }
        other => panic!("forventet InvalidWorkout, fikk {other:?}"),
    }
}

#[test]
fn workout_json_roundtrips_into_graph() {
    let json_in = r#"{
        "name": "Ramp",
        "intervals": [
            {"duration": 120, "steps": [{"power": 0.5, "duration": 60}, {"power": 0.6, "duration": 60}]},
            {"duration": 60, "steps": [{"power": 0, "duration": 60}]}
        ]
    }"#;
    let w = Workout::from_json(json_in).unwrap();
    assert_eq!(w.total_duration(), 180.0);
    let g = build_interval_graph(&w, 300.0).unwrap();
    let v = serde_json::to_value(&g).unwrap();
    assert_eq!(v["groups"][0]["segments"][1]["zone"], "two");
    assert_eq!(v["groups"][1]["segments"][0]["info_power"], "Free ride");
}
