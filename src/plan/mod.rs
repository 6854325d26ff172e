//! Training plan domain model and aggregation engine.

pub mod aggregate;
pub mod catalog;
pub mod summary;
pub mod types;
pub mod validate;

pub use aggregate::{format_volume, session_totals, SessionTotals};
pub use catalog::{block_catalog, kind_from_id, CatalogEntry};
pub use summary::{summarize, SessionSummary};
pub use types::{
    BlockBody, BlockKind, CotesEffort, CustomMetric, Discipline, DistanceUnit, PpgDose,
    RecoveryMode, RestUnit, Segment, Series, SessionTemplate, Visibility,
};
pub use validate::{segment_is_valid, series_is_valid, template_is_submit_ready};
