//! Unit tests for the template form controller.

use trackplan::form::controller::TemplateFormController;
use trackplan::plan::types::{BlockBody, BlockKind, Discipline, DistanceUnit};

fn ready_controller() -> TemplateFormController {
    let mut controller = TemplateFormController::new();
    controller.set_title("Séance côtes");
    controller.set_discipline(Some(Discipline::Sprint));
    controller.set_series_rest(Some(420));

    let series_id = controller.add_series();
    let segment_id = controller
        .add_segment(series_id, BlockKind::Vitesse)
        .expect("Should add segment");
    controller.update_segment(series_id, segment_id, |s| {
        s.rest_seconds = Some(90);
        s.body = BlockBody::Vitesse {
            distance: Some(200.0),
            unit: DistanceUnit::M,
            repetitions: Some(6),
        };
    });
    controller
}

#[test]
fn test_empty_draft_cannot_submit() {
    let controller = TemplateFormController::new();
    assert!(!controller.can_submit());
}

#[test]
fn test_complete_draft_can_submit() {
    assert!(ready_controller().can_submit());
}

#[test]
fn test_removing_last_series_blocks_submit() {
    let mut controller = ready_controller();
    let series_id = controller.draft().series[0].id;
    assert!(controller.remove_series(series_id));
    assert!(!controller.can_submit());
}

#[test]
fn test_unchanged_setter_keeps_revision() {
    let mut controller = ready_controller();
    let revision = controller.revision();

    controller.set_title("Séance côtes");
    controller.set_series_rest(Some(420));
    controller.set_discipline(Some(Discipline::Sprint));
    assert_eq!(controller.revision(), revision);
}

#[test]
fn test_normalization_of_submit_payload() {
    let mut controller = ready_controller();
    controller.set_title("  Séance côtes  ");
    controller.set_target_intensity(Some(12));

    let payload = controller.submission_payload();
    assert_eq!(payload.title, "Séance côtes");
    assert_eq!(payload.target_intensity, Some(10));
    assert_eq!(payload.series_rest_unit, "s");
    assert_eq!(payload.series.len(), 1);
}

#[test]
fn test_kind_switch_does_not_resurrect_fields() {
    let mut controller = ready_controller();
    let series_id = controller.draft().series[0].id;
    let segment_id = controller.draft().series[0].segments[0].id;

    controller.switch_segment_kind(series_id, segment_id, BlockKind::Muscu);
    controller.update_segment(series_id, segment_id, |s| {
        s.body = BlockBody::Muscu {
            exercises: vec!["Squat".to_string()],
            repetitions: Some(5),
        };
    });

    controller.switch_segment_kind(series_id, segment_id, BlockKind::Vitesse);
    controller.switch_segment_kind(series_id, segment_id, BlockKind::Muscu);

    let BlockBody::Muscu {
        exercises,
        repetitions,
    } = &controller.draft().series[0].segments[0].body
    else {
        panic!("expected muscu body");
    };
    assert!(exercises.is_empty());
    assert_eq!(*repetitions, None);
    assert_eq!(controller.draft().series[0].segments[0].id, segment_id);
}
