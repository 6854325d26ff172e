//! Derived session totals: séance count, block count, distance volume.
//!
//! Two counts are surfaced side by side and must not be confused: the
//! séance count multiplies by `repeat_count` (a series repeated three times
//! contributes three), the block count does not (it counts the distinct
//! segments a coach typed in).

use crate::plan::types::{BlockBody, CotesEffort, CustomMetric, Segment, Series};

/// Totals derived from a template's series list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SessionTotals {
    /// Sum of `repeat_count` across series
    pub seance_count: u32,
    /// Sum of raw segment counts, not multiplied by `repeat_count`
    pub block_count: usize,
    /// Total planned distance in meters
    pub volume_meters: f64,
}

/// Planned distance of one execution of a segment, in meters.
///
/// `ppg`, `start` and `recup` never contribute, nor does `cotes` in
/// duration mode. Non-positive distances count as unset.
pub fn segment_planned_distance_m(segment: &Segment) -> f64 {
    let meters = match &segment.body {
        BlockBody::Ppg { .. }
        | BlockBody::Muscu { .. }
        | BlockBody::Start { .. }
        | BlockBody::Recup { .. } => 0.0,
        BlockBody::Vitesse { distance, unit, .. } => {
            distance.map(|d| unit.to_meters(d)).unwrap_or(0.0)
        }
        BlockBody::Cotes { effort, .. } => match effort {
            CotesEffort::Distance { distance, unit } => {
                distance.map(|d| unit.to_meters(d)).unwrap_or(0.0)
            }
            CotesEffort::Duration { .. } => 0.0,
        },
        BlockBody::Custom {
            distance, unit, metric, ..
        } => match metric {
            Some(CustomMetric::Distance { distance, unit, .. }) => {
                distance.map(|d| unit.to_meters(d)).unwrap_or(0.0)
            }
            Some(_) => 0.0,
            // Metric gate off: the generic distance applies
            None => distance.map(|d| unit.to_meters(d)).unwrap_or(0.0),
        },
    };
    meters.max(0.0)
}

/// Effective repetition count used for volume.
///
/// A custom distance metric may carry its own count, which takes precedence
/// over the segment's generic one; everything else falls back to the
/// generic count, defaulting to one execution.
pub fn segment_effective_repetitions(segment: &Segment) -> u32 {
    if let BlockBody::Custom {
        metric: Some(CustomMetric::Distance { repetitions, .. }),
        repetitions: generic,
        ..
    } = &segment.body
    {
        return repetitions.or(*generic).unwrap_or(1);
    }
    segment.body.repetitions().unwrap_or(1)
}

/// Planned distance of one execution of a series' segment list, in meters.
pub fn series_volume_m(series: &Series) -> f64 {
    let single_pass: f64 = series
        .segments
        .iter()
        .map(|s| segment_planned_distance_m(s) * f64::from(segment_effective_repetitions(s)))
        .sum();
    single_pass * f64::from(series.repeat_count)
}

/// Compute the derived totals for a series list.
pub fn session_totals(series: &[Series]) -> SessionTotals {
    SessionTotals {
        seance_count: series.iter().map(|s| s.repeat_count).sum(),
        block_count: series.iter().map(|s| s.segments.len()).sum(),
        volume_meters: series.iter().map(series_volume_m).sum(),
    }
}

/// Render a volume in meters as a short human-readable string.
///
/// Below one kilometer the value is shown in whole meters, above in
/// kilometers with one decimal.
pub fn format_volume(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}

/// Whether a rendered volume string means "no volume" and should be hidden.
pub fn is_empty_volume(rendered: &str) -> bool {
    matches!(rendered, "0 m" | "0.0 km")
}
