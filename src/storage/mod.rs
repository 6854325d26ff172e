//! Storage module for the template library and configuration.

pub mod config;
pub mod schema;
pub mod template_store;

pub use config::{AppConfig, PlannerSettings};
pub use schema::apply_schema;
pub use template_store::{StoreError, TemplateStore};
