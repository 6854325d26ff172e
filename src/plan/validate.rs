//! Segment, series and template validity rules.
//!
//! Validity is reported, never thrown: everything here is a pure predicate
//! over the model. Each block kind has its own validation function; the
//! per-kind differences in rest and repetition requirements are intentional
//! domain behavior and must not be unified.

use crate::plan::types::{
    BlockBody, CotesEffort, CustomMetric, PpgDose, Segment, Series, SessionTemplate,
};

/// Treat `<= 0` as unset.
fn positive_count(value: Option<u32>) -> bool {
    value.map(|v| v > 0).unwrap_or(false)
}

fn positive_distance(value: Option<f64>) -> bool {
    value.map(|v| v > 0.0).unwrap_or(false)
}

fn any_named(names: &[String]) -> bool {
    names.iter().any(|n| !n.trim().is_empty())
}

/// Whether a segment is complete enough to submit.
///
/// `sibling_count` is the number of segments in the segment's series,
/// including the segment itself. A repetition count is only required when
/// the segment is the sole segment of its series.
pub fn segment_is_valid(segment: &Segment, sibling_count: usize) -> bool {
    let sole = sibling_count == 1;
    match &segment.body {
        BlockBody::Vitesse {
            distance,
            repetitions,
            ..
        } => {
            positive_distance(*distance)
                && positive_count(segment.rest_seconds)
                && (!sole || positive_count(*repetitions))
        }
        BlockBody::Cotes {
            effort,
            repetitions,
        } => {
            let effort_ok = match effort {
                CotesEffort::Distance { distance, .. } => positive_distance(*distance),
                CotesEffort::Duration { seconds } => positive_count(*seconds),
            };
            effort_ok
                && positive_count(segment.rest_seconds)
                && (!sole || positive_count(*repetitions))
        }
        BlockBody::Ppg { dose, .. } => match dose {
            PpgDose::Time { seconds } => positive_count(*seconds),
            PpgDose::Reps { reps } => positive_count(*reps),
        },
        BlockBody::Muscu { repetitions, .. } => positive_count(*repetitions),
        BlockBody::Recup {
            duration_seconds,
            repetitions,
            ..
        } => positive_count(*duration_seconds) && (!sole || positive_count(*repetitions)),
        BlockBody::Start { count, .. } => positive_count(*count),
        BlockBody::Custom {
            distance,
            metric,
            repetitions,
            ..
        } => {
            let metric_ok = match metric {
                // Metric gate off: the generic distance applies
                None => positive_distance(*distance),
                Some(CustomMetric::Distance { distance, .. }) => positive_distance(*distance),
                Some(CustomMetric::Duration { seconds }) => positive_count(*seconds),
                Some(CustomMetric::Reps { .. }) => true,
                Some(CustomMetric::Exercises { names }) => any_named(names),
            };
            metric_ok
                && positive_count(segment.rest_seconds)
                && (!sole || positive_count(*repetitions))
        }
    }
}

/// Whether a series is complete enough to submit.
pub fn series_is_valid(series: &Series) -> bool {
    series.repeat_count >= 1
        && !series.segments.is_empty()
        && series
            .segments
            .iter()
            .all(|s| segment_is_valid(s, series.segments.len()))
}

/// Whether a template draft is submit-ready.
pub fn template_is_submit_ready(template: &SessionTemplate) -> bool {
    !template.title.trim().is_empty()
        && template.discipline.is_some()
        && template
            .target_intensity
            .map(|i| (1..=10).contains(&i))
            .unwrap_or(true)
        && positive_count(template.series_rest)
        && !template.series.is_empty()
        && template.series.iter().all(series_is_valid)
}
