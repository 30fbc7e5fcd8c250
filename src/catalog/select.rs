//! Selection resolution
//!
//! Pure functions over a catalog that decide which streams are enabled and
//! which fields are disabled. Explicit user selection always beats the
//! system default; absence of metadata means "include everything".

use super::{Catalog, CatalogEntry, MetadataFields};
use std::collections::BTreeSet;

impl Catalog {
    /// The entries enabled for this run, in catalog order
    pub fn enabled_streams(&self) -> Vec<&CatalogEntry> {
        self.streams.iter().filter(|e| e.is_selected()).collect()
    }
}

impl CatalogEntry {
    /// Whether this stream should be extracted.
    ///
    /// Enabled when the entry has no metadata at all, when no stream-level
    /// record exists, or when the stream-level record resolves to selected.
    pub fn is_selected(&self) -> bool {
        let Some(metadata) = &self.metadata else {
            return true;
        };
        metadata
            .iter()
            .find(|m| m.is_stream_level())
            .map_or(true, |m| m.metadata.resolve_selected())
    }

    /// Names of the top-level fields deselected for this stream.
    ///
    /// Only `["properties", <name>]` breadcrumbs participate; deeper paths
    /// are not resolvable into nested exclusions and are ignored.
    pub fn disabled_fields(&self) -> BTreeSet<String> {
        let Some(metadata) = &self.metadata else {
            return BTreeSet::new();
        };

        metadata
            .iter()
            .filter(|m| !m.metadata.resolve_selected())
            .filter_map(|m| m.field_name())
            .map(String::from)
            .collect()
    }
}

impl MetadataFields {
    /// Resolve the effective selection: an explicit `selected` wins,
    /// otherwise the system default applies.
    pub fn resolve_selected(&self) -> bool {
        self.selected.unwrap_or(self.selected_by_default)
    }
}
