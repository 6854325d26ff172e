//! Pace capability resolution and reconciliation.
//!
//! Which baselines a series may target depends on what its segments do:
//! distance records are legal only when some block actually covers ground,
//! load baselines only when the series contains weight-room work. Stored
//! pace config drifts when segments change; [`reconcile_pace`] silently
//! corrects it.

use crate::pace::references::{PaceReference, ReferenceBasis};
use crate::plan::types::{BlockBody, CotesEffort, CustomMetric, Segment, Series};

/// Whether a segment can contribute distance for pace purposes.
///
/// `cotes` counts only in distance mode and `custom` only with a distance
/// metric; `ppg`, `muscu`, `recup` and `start` never count.
pub fn segment_is_distance_capable(segment: &Segment) -> bool {
    match &segment.body {
        BlockBody::Vitesse { .. } => true,
        BlockBody::Cotes { effort, .. } => matches!(effort, CotesEffort::Distance { .. }),
        BlockBody::Custom { metric, .. } => {
            matches!(metric, Some(CustomMetric::Distance { .. }))
        }
        BlockBody::Ppg { .. }
        | BlockBody::Muscu { .. }
        | BlockBody::Recup { .. }
        | BlockBody::Start { .. } => false,
    }
}

/// Whether the series contains at least one distance-capable block.
pub fn series_has_distance_block(series: &Series) -> bool {
    series.segments.iter().any(segment_is_distance_capable)
}

/// Whether the series contains at least one load-capable block.
pub fn series_has_load_block(series: &Series) -> bool {
    series
        .segments
        .iter()
        .any(|s| matches!(s.body, BlockBody::Muscu { .. }))
}

/// The set of baselines a series may legally target, in catalog order.
///
/// Empty when the series has neither distance- nor load-capable blocks,
/// in which case pace targeting is disabled entirely.
pub fn legal_references(series: &Series) -> Vec<PaceReference> {
    let mut legal = Vec::new();
    if series_has_distance_block(series) {
        legal.extend_from_slice(PaceReference::distance_catalog());
    }
    if series_has_load_block(series) {
        legal.extend_from_slice(PaceReference::load_catalog());
    }
    legal
}

/// Pick the deterministic fallback reference from a non-empty legal set.
fn default_reference(legal: &[PaceReference]) -> PaceReference {
    if legal.contains(&PaceReference::M100) {
        PaceReference::M100
    } else if legal.contains(&PaceReference::BodyWeight) {
        PaceReference::BodyWeight
    } else {
        legal[0]
    }
}

/// Reconcile stored pace config against the series' legal reference set.
///
/// Must run after every structural edit to the series' segments. Returns
/// whether anything changed; running it twice in a row never changes state
/// on the second pass.
pub fn reconcile_pace(series: &mut Series) -> bool {
    let legal = legal_references(series);
    let before = series.pace.clone();

    if legal.is_empty() {
        series.pace.clear();
    } else {
        if series.pace.enabled {
            let stored_is_legal = series
                .pace
                .reference
                .map(|r| legal.contains(&r))
                .unwrap_or(false);
            if !stored_is_legal {
                series.pace.reference = Some(default_reference(&legal));
            }
        }
        let reference_is_load = series
            .pace
            .reference
            .map(|r| r.basis() == ReferenceBasis::Load)
            .unwrap_or(false);
        if !reference_is_load {
            series.pace.clear_load_fields();
        }
    }

    let changed = series.pace != before;
    if changed {
        tracing::debug!(series = %series.id, "pace config reconciled");
    }
    changed
}
