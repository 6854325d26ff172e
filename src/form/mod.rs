//! Template form controller and submission payload.

pub mod controller;
pub mod payload;

pub use controller::TemplateFormController;
pub use payload::{normalize, SeriesPayload, SessionPayload};
