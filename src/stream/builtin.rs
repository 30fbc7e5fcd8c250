//! Built-in streams
//!
//! Every entity type the tap extracts. Most streams are a plain paginated
//! listing and share [`ListStream`]; `incidents` additionally performs
//! nested per-incident fetches before the parent record is accumulated, and
//! `custom_field_options` lists its records scoped per parent custom field.

use super::{Registry, Stream, StreamDescriptor};
use crate::client::{paginate, ApiClient, Endpoint, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result, ResultExt};
use crate::model;
use crate::schema::{Property, Schema};
use crate::types::Record;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// A stream whose record set is one cursor-paginated listing.
///
/// The (name, schema, endpoint) tuple is all a plain entity stream needs;
/// the extraction loop is shared.
struct ListStream {
    name: &'static str,
    endpoint: Endpoint,
    schema: fn() -> Property,
    key_properties: &'static [&'static str],
}

#[async_trait]
impl Stream for ListStream {
    fn describe(&self) -> StreamDescriptor {
        StreamDescriptor::new(self.name, Schema::object((self.schema)()), self.key_properties)
    }

    async fn extract(&self, client: &dyn ApiClient) -> Result<Vec<Record>> {
        paginate(client, &self.endpoint, DEFAULT_PAGE_SIZE)
            .await
            .with_context(|| format!("listing {}", self.name))
    }
}

/// The incidents stream.
///
/// Each incident carries its attachments and status updates inline, so
/// both nested listings must complete before the incident record is
/// accumulated.
struct IncidentsStream;

const INCIDENTS: Endpoint = Endpoint::new("/v2/incidents", "incidents");
const INCIDENT_ATTACHMENTS: Endpoint =
    Endpoint::new("/v1/incident_attachments", "incident_attachments");
const INCIDENT_UPDATES: Endpoint = Endpoint::new("/v2/incident_updates", "incident_updates");

#[async_trait]
impl Stream for IncidentsStream {
    fn describe(&self) -> StreamDescriptor {
        StreamDescriptor::new("incidents", Schema::object(model::incident()), &["id"])
    }

    async fn extract(&self, client: &dyn ApiClient) -> Result<Vec<Record>> {
        let mut incidents = paginate(client, &INCIDENTS, DEFAULT_PAGE_SIZE)
            .await
            .context("listing incidents")?;

        for incident in &mut incidents {
            // Nested listings are scoped by parent id; an incident without
            // one cannot be enriched and must not query unscoped.
            let id = incident
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::decode("incident has no string 'id'"))?
                .to_string();

            let attachments = client
                .list(&INCIDENT_ATTACHMENTS, &[("incident_id", &id)])
                .await
                .context("listing incident attachments")?;
            let updates = client
                .list(&INCIDENT_UPDATES, &[("incident_id", &id)])
                .await
                .context("listing incident updates")?;

            incident.insert("attachments".to_string(), to_array(attachments));
            incident.insert("updates".to_string(), to_array(updates));
        }

        Ok(incidents)
    }
}

fn to_array(records: Vec<Record>) -> Value {
    Value::Array(records.into_iter().map(Value::Object).collect())
}

/// The custom_field_options stream.
///
/// Options are listed per custom field, so the record set is the
/// concatenation of one scoped listing per parent field.
struct CustomFieldOptionsStream;

const CUSTOM_FIELDS: Endpoint = Endpoint::new("/v2/custom_fields", "custom_fields");
const CUSTOM_FIELD_OPTIONS: Endpoint =
    Endpoint::new("/v1/custom_field_options", "custom_field_options");

#[async_trait]
impl Stream for CustomFieldOptionsStream {
    fn describe(&self) -> StreamDescriptor {
        StreamDescriptor::new(
            "custom_field_options",
            Schema::object(model::custom_field_option()),
            &["id"],
        )
    }

    async fn extract(&self, client: &dyn ApiClient) -> Result<Vec<Record>> {
        let custom_fields = paginate(client, &CUSTOM_FIELDS, DEFAULT_PAGE_SIZE)
            .await
            .context("listing custom fields")?;

        let mut options = Vec::new();
        for custom_field in &custom_fields {
            let id = custom_field
                .get("id")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::decode("custom field has no string 'id'"))?;

            options.extend(
                client
                    .list(&CUSTOM_FIELD_OPTIONS, &[("custom_field_id", id)])
                    .await
                    .context("listing custom field options")?,
            );
        }

        Ok(options)
    }
}

impl Registry {
    /// A registry populated with every stream this tap knows about
    pub fn with_builtin_streams() -> Self {
        let mut registry = Self::new();

        registry.register(Arc::new(ListStream {
            name: "users",
            endpoint: Endpoint::new("/v2/users", "users"),
            schema: model::user,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "actions",
            endpoint: Endpoint::new("/v2/actions", "actions"),
            schema: model::action,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "alerts",
            endpoint: Endpoint::new("/v2/alerts", "alerts"),
            schema: model::alert,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "alert_attributes",
            endpoint: Endpoint::new("/v2/alert_attributes", "alert_attributes"),
            schema: model::alert_attribute,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "alert_sources",
            endpoint: Endpoint::new("/v2/alert_sources", "alert_sources"),
            schema: model::alert_source,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "incident_timestamps",
            endpoint: Endpoint::new("/v2/incident_timestamps", "incident_timestamps"),
            schema: model::incident_timestamp,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "incident_updates",
            endpoint: INCIDENT_UPDATES,
            schema: model::incident_update,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "severities",
            endpoint: Endpoint::new("/v1/severities", "severities"),
            schema: model::severity,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "incident_roles",
            endpoint: Endpoint::new("/v2/incident_roles", "incident_roles"),
            schema: model::incident_role,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "incident_types",
            endpoint: Endpoint::new("/v1/incident_types", "incident_types"),
            schema: model::incident_type,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "incident_statuses",
            endpoint: Endpoint::new("/v1/incident_statuses", "incident_statuses"),
            schema: model::incident_status,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(ListStream {
            name: "custom_fields",
            endpoint: CUSTOM_FIELDS,
            schema: model::custom_field,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(CustomFieldOptionsStream));
        registry.register(Arc::new(ListStream {
            name: "follow_ups",
            endpoint: Endpoint::new("/v2/follow_ups", "follow_ups"),
            schema: model::follow_up,
            key_properties: &["id"],
        }));
        registry.register(Arc::new(IncidentsStream));

        registry
    }
}
