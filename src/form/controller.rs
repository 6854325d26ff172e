//! Template form controller.
//!
//! Owns the single editable draft of a session template. Mutations go
//! through typed setters that short-circuit when the value is unchanged;
//! structural edits to a series re-run pace reconciliation for that series.
//! The revision counter only moves when the draft actually changed.

use chrono::Utc;
use uuid::Uuid;

use crate::form::payload::{normalize, SessionPayload};
use crate::pace::references::{snap_percent, PaceReference};
use crate::pace::resolver::reconcile_pace;
use crate::plan::types::{
    dedup_exercises, BlockBody, BlockKind, CustomMetric, Discipline, RestUnit, Segment, Series,
    SessionTemplate, Visibility,
};
use crate::plan::validate::template_is_submit_ready;

/// Controller for the template editing session.
pub struct TemplateFormController {
    /// The draft being edited
    draft: SessionTemplate,
    /// Bumped on every effective change
    revision: u64,
}

impl TemplateFormController {
    /// Create a controller with an empty draft.
    pub fn new() -> Self {
        Self {
            draft: SessionTemplate::default(),
            revision: 0,
        }
    }

    /// Read access to the draft.
    pub fn draft(&self) -> &SessionTemplate {
        &self.draft
    }

    /// Current revision; unchanged setters leave it untouched.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the draft is complete enough to submit.
    pub fn can_submit(&self) -> bool {
        template_is_submit_ready(&self.draft)
    }

    /// Build the submission payload from the current draft.
    pub fn submission_payload(&self) -> SessionPayload {
        normalize(&self.draft)
    }

    /// Drop the draft and start over from defaults.
    pub fn reset(&mut self) {
        self.draft = SessionTemplate::default();
        self.touch();
        tracing::info!("draft reset");
    }

    /// Replace the whole draft with a loaded template.
    ///
    /// Used when editing an existing template; sanitizes what storage may
    /// have drifted (repeat counts, pace config, exercise lists). The swap
    /// happens only once the caller holds a fully loaded template, so a
    /// failed load never touches the draft in progress.
    pub fn hydrate(&mut self, mut template: SessionTemplate) {
        for series in &mut template.series {
            series.repeat_count = series.repeat_count.max(1);
            series.pace.percent = snap_percent(series.pace.percent);
            for segment in &mut series.segments {
                sanitize_segment(segment);
            }
            reconcile_pace(series);
        }
        tracing::info!(template = %template.id, "draft hydrated");
        self.draft = template;
        self.touch();
    }

    // --- template fields ---------------------------------------------------

    /// Set the title; no-op when unchanged.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.draft.title != title {
            self.draft.title = title;
            self.touch();
        }
    }

    /// Functional-update form of [`set_title`](Self::set_title).
    pub fn update_title(&mut self, f: impl FnOnce(&str) -> String) {
        let next = f(&self.draft.title);
        self.set_title(next);
    }

    /// Set the training discipline tag.
    pub fn set_discipline(&mut self, discipline: Option<Discipline>) {
        if self.draft.discipline != discipline {
            self.draft.discipline = discipline;
            self.touch();
        }
    }

    /// Set the description text.
    pub fn set_description(&mut self, description: impl Into<String>) {
        let description = description.into();
        if self.draft.description != description {
            self.draft.description = description;
            self.touch();
        }
    }

    /// Set the equipment notes.
    pub fn set_equipment(&mut self, equipment: impl Into<String>) {
        let equipment = equipment.into();
        if self.draft.equipment != equipment {
            self.draft.equipment = equipment;
            self.touch();
        }
    }

    /// Set the target intensity. Stored as given; submit-readiness checks
    /// the 1-10 range and normalization clamps into it.
    pub fn set_target_intensity(&mut self, intensity: Option<u8>) {
        if self.draft.target_intensity != intensity {
            self.draft.target_intensity = intensity;
            self.touch();
        }
    }

    /// Set the between-series rest value.
    pub fn set_series_rest(&mut self, rest: Option<u32>) {
        if self.draft.series_rest != rest {
            self.draft.series_rest = rest;
            self.touch();
        }
    }

    /// Set the between-series rest unit.
    pub fn set_series_rest_unit(&mut self, unit: Option<RestUnit>) {
        if self.draft.series_rest_unit != unit {
            self.draft.series_rest_unit = unit;
            self.touch();
        }
    }

    /// Set the template visibility.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        if self.draft.visibility != visibility {
            self.draft.visibility = visibility;
            self.touch();
        }
    }

    // --- series ------------------------------------------------------------

    /// Append an empty series; returns its id.
    pub fn add_series(&mut self) -> Uuid {
        let series = Series::new();
        let id = series.id;
        self.draft.series.push(series);
        self.touch();
        id
    }

    /// Remove a series; returns whether it existed.
    pub fn remove_series(&mut self, series_id: Uuid) -> bool {
        let before = self.draft.series.len();
        self.draft.series.retain(|s| s.id != series_id);
        let removed = self.draft.series.len() != before;
        if removed {
            self.touch();
        }
        removed
    }

    /// Set a series' repeat count, clamped to at least 1.
    pub fn set_repeat_count(&mut self, series_id: Uuid, count: u32) {
        let count = count.max(1);
        if let Some(series) = self.series_mut(series_id) {
            if series.repeat_count != count {
                series.repeat_count = count;
                self.touch();
            }
        }
    }

    // --- segments ----------------------------------------------------------

    /// Append a fresh default segment of the given kind; returns its id.
    pub fn add_segment(&mut self, series_id: Uuid, kind: BlockKind) -> Option<Uuid> {
        let series = self.series_mut(series_id)?;
        let segment = Segment::new(kind);
        let id = segment.id;
        series.segments.push(segment);
        reconcile_pace(series);
        self.touch();
        Some(id)
    }

    /// Remove a segment; returns whether it existed.
    pub fn remove_segment(&mut self, series_id: Uuid, segment_id: Uuid) -> bool {
        let Some(series) = self.series_mut(series_id) else {
            return false;
        };
        let before = series.segments.len();
        series.segments.retain(|s| s.id != segment_id);
        if series.segments.len() == before {
            return false;
        }
        reconcile_pace(series);
        self.touch();
        true
    }

    /// Switch a segment to another block kind.
    ///
    /// Builds a fresh default segment of the new kind carrying only `id`
    /// and `name` over; no-op when the kind is unchanged.
    pub fn switch_segment_kind(&mut self, series_id: Uuid, segment_id: Uuid, kind: BlockKind) {
        let Some(series) = self.series_mut(series_id) else {
            return;
        };
        let Some(segment) = series.segments.iter_mut().find(|s| s.id == segment_id) else {
            return;
        };
        if segment.kind() == kind {
            return;
        }
        *segment = segment.switched_to(kind);
        reconcile_pace(series);
        self.touch();
    }

    /// Edit a segment's fields through a closure.
    ///
    /// The segment id is stable and cannot be rewritten; exercise lists are
    /// deduplicated afterwards. No-op when the closure leaves the segment
    /// structurally identical.
    pub fn update_segment(
        &mut self,
        series_id: Uuid,
        segment_id: Uuid,
        f: impl FnOnce(&mut Segment),
    ) {
        let Some(series) = self.series_mut(series_id) else {
            return;
        };
        let Some(index) = series.segments.iter().position(|s| s.id == segment_id) else {
            return;
        };

        let mut edited = series.segments[index].clone();
        f(&mut edited);
        edited.id = segment_id;
        sanitize_segment(&mut edited);

        if edited == series.segments[index] {
            return;
        }
        series.segments[index] = edited;
        reconcile_pace(series);
        self.touch();
    }

    // --- pace --------------------------------------------------------------

    /// Toggle pace targeting for a series.
    pub fn set_pace_enabled(&mut self, series_id: Uuid, enabled: bool) {
        if let Some(series) = self.series_mut(series_id) {
            if series.pace.enabled != enabled {
                series.pace.enabled = enabled;
                reconcile_pace(series);
                self.touch();
            }
        }
    }

    /// Set the pace percentage, snapped to the 50-100 step-5 grid.
    pub fn set_pace_percent(&mut self, series_id: Uuid, percent: u8) {
        let percent = snap_percent(percent);
        if let Some(series) = self.series_mut(series_id) {
            if series.pace.percent != percent {
                series.pace.percent = percent;
                self.touch();
            }
        }
    }

    /// Select a pace reference; an illegal choice is reconciled away.
    pub fn set_pace_reference(&mut self, series_id: Uuid, reference: PaceReference) {
        if let Some(series) = self.series_mut(series_id) {
            if series.pace.reference != Some(reference) {
                series.pace.reference = Some(reference);
                reconcile_pace(series);
                self.touch();
            }
        }
    }

    /// Set the athlete body weight for load-based references.
    pub fn set_body_weight_kg(&mut self, series_id: Uuid, weight: Option<f32>) {
        if let Some(series) = self.series_mut(series_id) {
            if series.pace.body_weight_kg != weight {
                series.pace.body_weight_kg = weight;
                reconcile_pace(series);
                self.touch();
            }
        }
    }

    /// Set the weight-room one-rep max for load-based references.
    pub fn set_max_muscu_kg(&mut self, series_id: Uuid, load: Option<f32>) {
        if let Some(series) = self.series_mut(series_id) {
            if series.pace.max_muscu_kg != load {
                series.pace.max_muscu_kg = load;
                reconcile_pace(series);
                self.touch();
            }
        }
    }

    /// Set the max sled load for load-based references.
    pub fn set_max_chariot_kg(&mut self, series_id: Uuid, load: Option<f32>) {
        if let Some(series) = self.series_mut(series_id) {
            if series.pace.max_chariot_kg != load {
                series.pace.max_chariot_kg = load;
                reconcile_pace(series);
                self.touch();
            }
        }
    }

    // --- internals ---------------------------------------------------------

    fn series_mut(&mut self, series_id: Uuid) -> Option<&mut Series> {
        self.draft.series.iter_mut().find(|s| s.id == series_id)
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.draft.updated_at = Utc::now();
    }
}

impl Default for TemplateFormController {
    fn default() -> Self {
        Self::new()
    }
}

/// Enforce segment-level invariants after an edit or a load.
fn sanitize_segment(segment: &mut Segment) {
    match &mut segment.body {
        BlockBody::Ppg { exercises, .. } | BlockBody::Muscu { exercises, .. } => {
            *exercises = dedup_exercises(exercises);
        }
        BlockBody::Custom {
            metric: Some(CustomMetric::Exercises { names }),
            ..
        } => {
            *names = dedup_exercises(names);
        }
        _ => {}
    }
}
