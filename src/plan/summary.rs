//! Human-facing summary of a stored session.

use crate::plan::aggregate::{format_volume, is_empty_volume, session_totals, SessionTotals};
use crate::plan::types::SessionTemplate;

/// Short display strings for a session card.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSummary {
    /// Session title
    pub title: String,
    /// Scheduled date as `dd/MM/yyyy`, when set
    pub date: Option<String>,
    /// Séance and block counts, e.g. "3 séries · 5 blocs"
    pub counts: String,
    /// Volume string, suppressed when the session plans no distance
    pub volume: Option<String>,
    /// The raw totals behind the strings
    pub totals: SessionTotals,
}

fn count_label(count: u64, singular: &str) -> String {
    if count > 1 {
        format!("{count} {singular}s")
    } else {
        format!("{count} {singular}")
    }
}

/// Render a session's aggregated totals into display strings.
pub fn summarize(template: &SessionTemplate) -> SessionSummary {
    let totals = session_totals(&template.series);
    let rendered = format_volume(totals.volume_meters);
    let volume = if is_empty_volume(&rendered) {
        None
    } else {
        Some(rendered)
    };

    SessionSummary {
        title: template.title.clone(),
        date: template
            .scheduled_for
            .map(|d| d.format("%d/%m/%Y").to_string()),
        counts: format!(
            "{} · {}",
            count_label(u64::from(totals.seance_count), "série"),
            count_label(totals.block_count as u64, "bloc"),
        ),
        volume,
        totals,
    }
}
