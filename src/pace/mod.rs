//! Pace/intensity references and capability resolution.

pub mod references;
pub mod resolver;

pub use references::{snap_percent, PaceConfig, PaceReference, ReferenceBasis};
pub use resolver::{legal_references, reconcile_pace};
