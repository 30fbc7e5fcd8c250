//! Metadata and catalog model
//!
//! The catalog is the selection manifest for one run: one entry per
//! stream, each carrying the stream's schema and optional metadata records
//! that enable or disable the stream and its individual top-level fields.
//!
//! A catalog is either synthesized from the registry with exhaustive
//! default metadata (discovery) or deserialized from an externally
//! supplied manifest, in which case partial or absent metadata must be
//! handled gracefully.

mod select;
mod types;

pub use types::{
    Catalog, CatalogEntry, Inclusion, Metadata, MetadataFields, REPLICATION_FULL_TABLE,
};
