//! Unit tests for segment and series validity rules.

use trackplan::plan::types::{
    BlockBody, BlockKind, CotesEffort, CustomMetric, DistanceUnit, PpgDose, Segment, Series,
};
use trackplan::plan::validate::{segment_is_valid, series_is_valid};

fn vitesse_segment(distance: Option<f64>, repetitions: Option<u32>, rest: Option<u32>) -> Segment {
    let mut segment = Segment::new(BlockKind::Vitesse);
    segment.rest_seconds = rest;
    segment.body = BlockBody::Vitesse {
        distance,
        unit: DistanceUnit::M,
        repetitions,
    };
    segment
}

#[test]
fn test_sole_segment_repetition_boundary() {
    let segment = vitesse_segment(Some(400.0), None, Some(120));

    // Alone in its series the segment needs its own repetition count
    assert!(!segment_is_valid(&segment, 1));

    // The same segment alongside a sibling does not
    assert!(segment_is_valid(&segment, 2));

    let counted = vitesse_segment(Some(400.0), Some(3), Some(120));
    assert!(segment_is_valid(&counted, 1));
}

#[test]
fn test_series_passes_its_own_segments_as_siblings() {
    let uncounted = vitesse_segment(Some(200.0), None, Some(60));

    let solo = Series::new().with_segments(vec![uncounted.clone()]);
    assert!(!series_is_valid(&solo));

    let pair = Series::new().with_segments(vec![
        uncounted,
        vitesse_segment(Some(300.0), Some(2), Some(90)),
    ]);
    assert!(series_is_valid(&pair));
}

#[test]
fn test_zero_values_count_as_unset() {
    let zero_distance = vitesse_segment(Some(0.0), Some(3), Some(120));
    assert!(!segment_is_valid(&zero_distance, 2));

    let zero_rest = vitesse_segment(Some(200.0), Some(3), Some(0));
    assert!(!segment_is_valid(&zero_rest, 2));
}

#[test]
fn test_per_kind_rest_exceptions() {
    // ppg, muscu, recup and start never require the generic rest field
    let mut ppg = Segment::new(BlockKind::Ppg);
    ppg.body = BlockBody::Ppg {
        exercises: vec!["Corde à sauter".to_string()],
        dose: PpgDose::Time { seconds: Some(45) },
        exercise_rest_seconds: None,
    };
    assert!(segment_is_valid(&ppg, 2));

    let mut muscu = Segment::new(BlockKind::Muscu);
    muscu.body = BlockBody::Muscu {
        exercises: vec!["Développé".to_string()],
        repetitions: Some(6),
    };
    assert!(segment_is_valid(&muscu, 2));

    let mut recup = Segment::new(BlockKind::Recup);
    recup.body = BlockBody::Recup {
        mode: Default::default(),
        duration_seconds: Some(240),
        repetitions: None,
    };
    assert!(segment_is_valid(&recup, 2));

    let mut start = Segment::new(BlockKind::Start);
    start.body = BlockBody::Start {
        count: Some(5),
        exit_distance_m: None,
    };
    assert!(segment_is_valid(&start, 2));
}

#[test]
fn test_cotes_duration_mode() {
    let mut cotes = Segment::new(BlockKind::Cotes);
    cotes.rest_seconds = Some(150);
    cotes.body = BlockBody::Cotes {
        effort: CotesEffort::Duration { seconds: Some(30) },
        repetitions: Some(8),
    };
    assert!(segment_is_valid(&cotes, 1));
}

#[test]
fn test_custom_metric_gate() {
    let mut custom = Segment::new(BlockKind::Custom);
    custom.rest_seconds = Some(60);
    custom.body = BlockBody::Custom {
        goal: Some("Relais".to_string()),
        notes: None,
        distance: None,
        unit: DistanceUnit::M,
        metric: Some(CustomMetric::Duration { seconds: Some(600) }),
        repetitions: None,
    };
    assert!(segment_is_valid(&custom, 2));

    // Same segment with the duration blanked out
    custom.body = BlockBody::Custom {
        goal: Some("Relais".to_string()),
        notes: None,
        distance: None,
        unit: DistanceUnit::M,
        metric: Some(CustomMetric::Duration { seconds: None }),
        repetitions: None,
    };
    assert!(!segment_is_valid(&custom, 2));
}

#[test]
fn test_empty_series_invalid() {
    assert!(!series_is_valid(&Series::new()));
}
