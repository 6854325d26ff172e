//! Block-kind catalog.
//!
//! A static ordered list of `{id, label}` entries, used to populate
//! selection UI and to order grouped displays. Unknown identifiers resolve
//! to `vitesse` instead of failing.

use crate::plan::types::BlockKind;

/// One selectable entry of the block-kind catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Wire identifier
    pub id: &'static str,
    /// Coach-facing label
    pub label: &'static str,
    /// The kind the entry stands for
    pub kind: BlockKind,
}

/// The catalog, in display order.
pub fn block_catalog() -> Vec<CatalogEntry> {
    BlockKind::all()
        .into_iter()
        .map(|kind| CatalogEntry {
            id: kind.id(),
            label: kind.label(),
            kind,
        })
        .collect()
}

/// Resolve a block-kind identifier, falling back to `vitesse`.
pub fn kind_from_id(id: &str) -> BlockKind {
    BlockKind::all()
        .into_iter()
        .find(|k| k.id() == id)
        .unwrap_or(BlockKind::Vitesse)
}

/// Position of a kind in the catalog, for grouped displays.
pub fn catalog_position(kind: BlockKind) -> usize {
    BlockKind::all()
        .into_iter()
        .position(|k| k == kind)
        .unwrap_or(0)
}
