//! Catalog types

use crate::error::{Error, Result};
use crate::schema::Schema;
use crate::stream::{Registry, StreamDescriptor};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The only replication method this tap performs
pub const REPLICATION_FULL_TABLE: &str = "FULL_TABLE";

/// The full selection manifest covering all streams for one run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// One entry per stream, in a stable order
    pub streams: Vec<CatalogEntry>,
}

impl Catalog {
    /// Synthesize the default catalog from the registry.
    ///
    /// Entries come out sorted by stream name and every entry carries
    /// exhaustive default metadata: one stream-level record first, then one
    /// record per top-level schema property sorted by field name. The
    /// ordering is what makes discovery output reproducible across runs.
    pub fn discover(registry: &Registry) -> Self {
        let streams = registry
            .all()
            .map(|(_, stream)| CatalogEntry::with_default_metadata(&stream.describe()))
            .collect();

        Self { streams }
    }

    /// Load an externally supplied catalog manifest from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::catalog_parse(format!("{}: {e}", path.display())))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::catalog_parse(format!("{}: {e}", path.display())))
    }
}

/// One stream's schema plus its selection metadata within a catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Name of the stream
    pub stream: String,

    /// Unique identifier for the stream; this tap has a single source, so
    /// it always equals the stream name
    pub tap_stream_id: String,

    /// The stream's schema
    pub schema: Schema,

    /// Selection metadata. Absent means "no selection constraints".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,
}

impl CatalogEntry {
    /// Build an entry for a stream with exhaustive default metadata
    pub fn with_default_metadata(descriptor: &StreamDescriptor) -> Self {
        let mut metadata = vec![Metadata::stream_default()];
        metadata.extend(descriptor.schema.property_names().map(Metadata::field_default));

        Self {
            stream: descriptor.stream.clone(),
            tap_stream_id: descriptor.stream.clone(),
            schema: descriptor.schema.clone(),
            metadata: Some(metadata),
        }
    }
}

/// A (breadcrumb, fields) pair.
///
/// The breadcrumb locates the node the fields apply to: the empty sequence
/// is the stream itself, `["properties", <name>]` is one top-level field.
/// Deeper breadcrumbs are not resolvable and are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Path to the node this metadata applies to
    pub breadcrumb: Vec<String>,

    /// Selection fields for the node
    pub metadata: MetadataFields,
}

impl Metadata {
    /// The default stream-level record produced by discovery
    pub fn stream_default() -> Self {
        Self {
            breadcrumb: Vec::new(),
            metadata: MetadataFields {
                inclusion: Some(Inclusion::Available),
                selected_by_default: true,
                forced_replication_method: Some(REPLICATION_FULL_TABLE.to_string()),
                ..MetadataFields::default()
            },
        }
    }

    /// The default field-level record produced by discovery
    pub fn field_default(field: &str) -> Self {
        Self {
            breadcrumb: vec!["properties".to_string(), field.to_string()],
            metadata: MetadataFields {
                inclusion: Some(Inclusion::Available),
                selected_by_default: true,
                ..MetadataFields::default()
            },
        }
    }

    /// Whether this record applies to the stream itself
    pub fn is_stream_level(&self) -> bool {
        self.breadcrumb.is_empty()
    }

    /// The top-level field this record applies to, if any
    pub fn field_name(&self) -> Option<&str> {
        match self.breadcrumb.as_slice() {
            [kind, name] if kind == "properties" => Some(name),
            _ => None,
        }
    }
}

/// Selection fields carried by a metadata record.
///
/// Only `selected` and `selected-by-default` affect resolution. The
/// replication fields are passthrough: externally supplied values
/// round-trip unchanged, and serialization skips them when absent so
/// manifests do not gain keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataFields {
    /// Explicit user selection for this node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<bool>,

    /// Passthrough: replication method requested by the consumer
    #[serde(
        rename = "replicate-method",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub replication_method: Option<String>,

    /// Passthrough: bookmark key requested by the consumer
    #[serde(
        rename = "replication-key",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub replication_key: Option<String>,

    /// Passthrough: view key properties
    #[serde(
        rename = "view-key-properties",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub view_key_properties: Option<Vec<String>>,

    /// Whether this node's presence is user-choosable, forced, or
    /// unsupported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusion: Option<Inclusion>,

    /// The system's selection choice absent explicit user input
    #[serde(rename = "selected-by-default", default)]
    pub selected_by_default: bool,

    /// Replication method this tap forces (always FULL_TABLE when set)
    #[serde(
        rename = "forced-replication-method",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub forced_replication_method: Option<String>,
}

/// Classification of whether a node's presence is user-choosable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inclusion {
    /// The user chooses whether to emit this node
    Available,
    /// The tap always emits this node
    Automatic,
    /// The tap never emits this node
    Unsupported,
}
