//! Submission payload and draft normalization.
//!
//! `normalize` is the pure transformation from an in-progress draft to the
//! wire shape the persistence API consumes: free text trimmed, intensity
//! clamped into [1,10], the between-series rest converted to seconds, and
//! pace fields stripped down to what the series' config actually targets.

use serde::{Deserialize, Serialize};

use crate::pace::references::PaceReference;
use crate::plan::types::{RestUnit, Segment, Series, SessionTemplate, Visibility};

/// Wire form of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesPayload {
    pub repeat_count: u32,
    pub segments: Vec<Segment>,
    pub enable_pace: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_percent: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_reference_distance: Option<PaceReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_reference_body_weight_kg: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_reference_max_muscu_kg: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace_reference_max_chariot_kg: Option<f32>,
}

/// Wire form of a submitted session template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub title: String,
    #[serde(rename = "type")]
    pub discipline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equipment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_intensity: Option<u8>,
    pub series: Vec<SeriesPayload>,
    /// Seconds; minutes in the draft are converted
    pub series_rest_interval: u32,
    /// Always "s" on the wire
    pub series_rest_unit: String,
    pub visibility: Visibility,
}

fn trimmed_or_none(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn series_payload(series: &Series) -> SeriesPayload {
    let pace = &series.pace;
    let load_based = pace
        .reference
        .map(|r| r.is_load())
        .unwrap_or(false);

    SeriesPayload {
        repeat_count: series.repeat_count.max(1),
        segments: series.segments.clone(),
        enable_pace: pace.enabled,
        pace_percent: pace.enabled.then_some(pace.percent),
        pace_reference_distance: if pace.enabled { pace.reference } else { None },
        pace_reference_body_weight_kg: (pace.enabled && load_based)
            .then_some(pace.body_weight_kg)
            .flatten(),
        pace_reference_max_muscu_kg: (pace.enabled && load_based)
            .then_some(pace.max_muscu_kg)
            .flatten(),
        pace_reference_max_chariot_kg: (pace.enabled && load_based)
            .then_some(pace.max_chariot_kg)
            .flatten(),
    }
}

/// Normalize a draft into the submission payload.
pub fn normalize(draft: &SessionTemplate) -> SessionPayload {
    let rest_unit = draft.series_rest_unit.unwrap_or(RestUnit::Seconds);
    let rest_seconds = draft
        .series_rest
        .map(|r| rest_unit.to_seconds(r))
        .unwrap_or(0);

    SessionPayload {
        title: draft.title.trim().to_string(),
        discipline: draft
            .discipline
            .map(|d| d.id().to_string())
            .unwrap_or_default(),
        description: trimmed_or_none(&draft.description),
        equipment: trimmed_or_none(&draft.equipment),
        target_intensity: draft.target_intensity.map(|i| i.clamp(1, 10)),
        series: draft.series.iter().map(series_payload).collect(),
        series_rest_interval: rest_seconds,
        series_rest_unit: "s".to_string(),
        visibility: draft.visibility,
    }
}
