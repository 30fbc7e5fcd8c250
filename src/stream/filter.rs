//! Field-projection filter
//!
//! A decorator implementing the [`Stream`] contract around an inner stream
//! and the selection resolved from a catalog entry. Disabled fields are
//! pruned from the announced schema and deleted from every extracted
//! record, so downstream consumers never see them.

use super::{Stream, StreamDescriptor};
use crate::catalog::CatalogEntry;
use crate::client::ApiClient;
use crate::error::Result;
use crate::types::Record;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::warn;

/// Stream decorator enforcing field-level selection
pub struct FieldFilter {
    inner: Arc<dyn Stream>,
    disabled: BTreeSet<String>,
}

impl FieldFilter {
    /// Wrap a stream with the selection from its catalog entry
    pub fn new(inner: Arc<dyn Stream>, entry: &CatalogEntry) -> Self {
        Self {
            inner,
            disabled: entry.disabled_fields(),
        }
    }

    /// Wrap a stream with an explicit disabled-field set
    pub fn with_disabled_fields(inner: Arc<dyn Stream>, disabled: BTreeSet<String>) -> Self {
        Self { inner, disabled }
    }
}

#[async_trait]
impl Stream for FieldFilter {
    fn describe(&self) -> StreamDescriptor {
        let mut descriptor = self.inner.describe();
        descriptor
            .schema
            .properties
            .retain(|name, _| !self.disabled.contains(name));

        // Deselecting a key property is a caller error: the announced key
        // now references a field the schema no longer carries. Surface it,
        // leave the key list untouched.
        for key in &descriptor.key_properties {
            if self.disabled.contains(key) {
                warn!(
                    stream = %descriptor.stream,
                    field = %key,
                    "disabled field is part of the primary key; key reference left dangling"
                );
            }
        }

        descriptor
    }

    async fn extract(&self, client: &dyn ApiClient) -> Result<Vec<Record>> {
        let mut records = self.inner.extract(client).await?;

        for record in &mut records {
            for field in &self.disabled {
                record.remove(field);
            }
        }

        Ok(records)
    }
}
