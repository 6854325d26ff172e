//! Unit tests for pace capability resolution.

use trackplan::pace::references::PaceReference;
use trackplan::pace::resolver::{legal_references, reconcile_pace};
use trackplan::plan::types::{BlockBody, BlockKind, CustomMetric, DistanceUnit, Segment, Series};

fn series_of(kinds: &[BlockKind]) -> Series {
    Series::new().with_segments(kinds.iter().map(|k| Segment::new(*k)).collect())
}

#[test]
fn test_muscu_only_series_exposes_load_references() {
    let legal = legal_references(&series_of(&[BlockKind::Muscu]));
    assert!(!legal.is_empty());
    assert!(legal.iter().all(|r| r.is_load()));
    assert!(legal.contains(&PaceReference::BodyWeight));
}

#[test]
fn test_recup_only_series_forces_pace_off() {
    let mut series = series_of(&[BlockKind::Recup]);
    series.pace.enabled = true;
    series.pace.percent = 85;
    series.pace.reference = Some(PaceReference::M200);

    assert!(legal_references(&series).is_empty());
    reconcile_pace(&mut series);
    assert!(!series.pace.enabled);
    assert_eq!(series.pace.reference, None);
}

#[test]
fn test_mixed_series_exposes_both_catalogs() {
    let legal = legal_references(&series_of(&[BlockKind::Vitesse, BlockKind::Muscu]));
    assert!(legal.contains(&PaceReference::M100));
    assert!(legal.contains(&PaceReference::MaxMuscu));
}

#[test]
fn test_custom_distance_metric_enables_distance_references() {
    let mut series = series_of(&[BlockKind::Custom]);
    // Custom without a distance metric is not distance-capable
    assert!(legal_references(&series).is_empty());

    series.segments[0].body = BlockBody::Custom {
        goal: None,
        notes: None,
        distance: None,
        unit: DistanceUnit::M,
        metric: Some(CustomMetric::Distance {
            distance: Some(60.0),
            unit: DistanceUnit::M,
            repetitions: None,
        }),
        repetitions: None,
    };
    assert!(legal_references(&series).contains(&PaceReference::M100));
}

#[test]
fn test_reconciliation_is_idempotent() {
    let mut series = series_of(&[BlockKind::Vitesse]);
    series.pace.enabled = true;
    series.pace.reference = Some(PaceReference::MaxChariot);
    series.pace.max_chariot_kg = Some(60.0);

    let first_changed = reconcile_pace(&mut series);
    assert!(first_changed);
    let snapshot = series.clone();

    let second_changed = reconcile_pace(&mut series);
    assert!(!second_changed);
    assert_eq!(series, snapshot);
}

#[test]
fn test_deterministic_default_prefers_100m() {
    let mut series = series_of(&[BlockKind::Vitesse, BlockKind::Muscu]);
    series.pace.enabled = true;
    series.pace.reference = None;

    reconcile_pace(&mut series);
    assert_eq!(series.pace.reference, Some(PaceReference::M100));
}
