//! Stream abstraction
//!
//! A stream is a single extractable entity type from the source API. Every
//! stream can describe its shape and extract its full record set; the
//! engine drives both through the [`Stream`] trait.

mod builtin;
mod filter;
mod registry;

pub use filter::FieldFilter;
pub use registry::Registry;

use crate::client::ApiClient;
use crate::error::Result;
use crate::schema::Schema;
use crate::types::Record;
use async_trait::async_trait;


/// Everything a stream announces about itself: its name, its schema, and
/// which fields form the primary key.
///
/// Bookmark properties are always empty; the tap only performs full-table
/// extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    /// Stream name, unique across the registry
    pub stream: String,

    /// Shape of the stream's records
    pub schema: Schema,

    /// Top-level field names forming the primary key
    pub key_properties: Vec<String>,

    /// Bookmark field names (always empty)
    pub bookmark_properties: Vec<String>,
}

impl StreamDescriptor {
    /// Create a descriptor for a full-table stream
    pub fn new(stream: impl Into<String>, schema: Schema, key_properties: &[&str]) -> Self {
        Self {
            stream: stream.into(),
            schema,
            key_properties: key_properties.iter().map(ToString::to_string).collect(),
            bookmark_properties: Vec::new(),
        }
    }
}

/// A named, polymorphic extraction unit.
///
/// `describe` is stateless and cheap: the schema is rebuilt on every call.
/// `extract` returns the fully materialized record set; all records must be
/// in hand before field selection is applied.
#[async_trait]
pub trait Stream: Send + Sync {
    /// The stream's name, schema and key properties
    fn describe(&self) -> StreamDescriptor;

    /// Extract every record of the stream from the source API
    async fn extract(&self, client: &dyn ApiClient) -> Result<Vec<Record>>;
}
