//! TrackPlan - Training Session Planner
//!
//! Domain model and aggregation engine for planning track & field training
//! sessions: nested repeatable series of typed blocks, per-kind validity
//! rules, derived totals (volume, séance and block counts), pace/intensity
//! reference resolution, and the template-form controller that turns a
//! draft into a submission payload.

pub mod form;
pub mod pace;
pub mod plan;
pub mod storage;

// Re-export commonly used types
pub use form::controller::TemplateFormController;
pub use form::payload::SessionPayload;
pub use plan::aggregate::session_totals;
pub use plan::summary::summarize;
pub use plan::types::{BlockKind, Segment, Series, SessionTemplate};
pub use storage::template_store::TemplateStore;
