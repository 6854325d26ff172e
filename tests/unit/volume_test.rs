//! Unit tests for volume aggregation and formatting.

use trackplan::plan::aggregate::{
    format_volume, segment_planned_distance_m, session_totals, SessionTotals,
};
use trackplan::plan::types::{
    BlockBody, BlockKind, CustomMetric, DistanceUnit, Segment, Series,
};

fn vitesse(distance: f64, unit: DistanceUnit, repetitions: u32) -> Segment {
    let mut segment = Segment::new(BlockKind::Vitesse);
    segment.body = BlockBody::Vitesse {
        distance: Some(distance),
        unit,
        repetitions: Some(repetitions),
    };
    segment
}

#[test]
fn test_inert_kinds_never_contribute_distance() {
    for kind in [BlockKind::Ppg, BlockKind::Start, BlockKind::Recup] {
        let segment = Segment::new(kind);
        assert_eq!(
            segment_planned_distance_m(&segment),
            0.0,
            "{kind} should contribute no distance"
        );
    }
}

#[test]
fn test_volume_multiplies_reps_and_repeats() {
    // 400m x 3 repetitions in a series repeated twice
    let series = Series::new()
        .with_segments(vec![vitesse(400.0, DistanceUnit::M, 3)])
        .with_repeat_count(2);
    let totals = session_totals(&[series]);
    assert_eq!(totals.volume_meters, 2400.0);
}

#[test]
fn test_seance_count_multiplies_blocks_do_not() {
    let series = vec![
        Series::new()
            .with_segments(vec![
                vitesse(100.0, DistanceUnit::M, 1),
                vitesse(120.0, DistanceUnit::M, 1),
            ])
            .with_repeat_count(3),
        Series::new().with_segments(vec![vitesse(150.0, DistanceUnit::M, 1)]),
    ];

    let totals = session_totals(&series);
    assert_eq!(totals.seance_count, 4);
    assert_eq!(totals.block_count, 3);
}

#[test]
fn test_custom_distance_metric_contributes() {
    let mut custom = Segment::new(BlockKind::Custom);
    custom.body = BlockBody::Custom {
        goal: None,
        notes: None,
        distance: None,
        unit: DistanceUnit::M,
        metric: Some(CustomMetric::Distance {
            distance: Some(0.5),
            unit: DistanceUnit::Km,
            repetitions: Some(2),
        }),
        repetitions: None,
    };
    let series = Series::new().with_segments(vec![custom]);
    assert_eq!(session_totals(&[series]).volume_meters, 1000.0);
}

#[test]
fn test_volume_formatting_thresholds() {
    assert_eq!(format_volume(0.0), "0 m");
    assert_eq!(format_volume(950.0), "950 m");
    assert_eq!(format_volume(999.0), "999 m");
    assert_eq!(format_volume(1000.0), "1.0 km");
    assert_eq!(format_volume(12345.0), "12.3 km");
}

#[test]
fn test_empty_series_list_totals() {
    assert_eq!(session_totals(&[]), SessionTotals::default());
}
