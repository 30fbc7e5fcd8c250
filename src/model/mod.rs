//! Entity schemas
//!
//! Property trees for every entity the source API exposes, declared with
//! the schema-model constructors. Streams turn these into their announced
//! schemas; records themselves pass through as the JSON objects the API
//! returns, so there is no per-field copying here.

use crate::schema::Property;

/// A user of the on-call platform
pub fn user() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("email", Property::string().optional()),
        ("slack_user_id", Property::string().optional()),
        ("role", Property::string()),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}

/// An actor: whoever performed an action, either a user or an API key
pub fn actor() -> Property {
    Property::object([
        ("user", user().optional()),
        ("api_key", api_key().optional()),
    ])
}

/// An API key acting on behalf of an organisation
pub fn api_key() -> Property {
    Property::object([("id", Property::string()), ("name", Property::string())])
}

/// A remedial action raised during an incident
pub fn action() -> Property {
    Property::object([
        ("id", Property::string()),
        ("incident_id", Property::string()),
        ("status", Property::string()),
        ("description", Property::string()),
        ("assignee", user().optional()),
        ("completed_at", Property::date_time().optional()),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}

/// An attribute type that alerts can carry
pub fn alert_attribute() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("array", Property::boolean()),
        ("type", Property::string()),
    ])
}

/// A resolved attribute value on an alert
pub fn alert_attribute_value() -> Property {
    Property::object([
        (
            "catalog_entry",
            Property::object([("id", Property::string()), ("name", Property::string())])
                .optional(),
        ),
        ("label", Property::string().optional()),
        ("literal", Property::string().optional()),
    ])
}

/// An alert received from an alert source
pub fn alert() -> Property {
    Property::object([
        ("id", Property::string()),
        ("alert_source_id", Property::string()),
        (
            "attributes",
            Property::array_of(Property::object([
                ("attribute", alert_attribute()),
                ("value", alert_attribute_value().optional()),
                ("array_value", Property::array_of(alert_attribute_value()).optional()),
            ])),
        ),
        ("created_at", Property::date_time()),
        ("deduplication_key", Property::string()),
        ("description", Property::string().optional()),
        ("resolved_at", Property::date_time().optional()),
        ("source_url", Property::string().optional()),
        ("status", Property::string()),
        ("title", Property::string()),
    ])
}

/// A configured source that alerts arrive through
pub fn alert_source() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("source_type", Property::string()),
        (
            "email_options",
            Property::object([("email_address", Property::string())]).optional(),
        ),
        (
            "jira_options",
            Property::object([("project_ids", Property::array_of(Property::string()))])
                .optional(),
        ),
    ])
}

/// A severity level that incidents can take
pub fn severity() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("description", Property::string().optional()),
        ("rank", Property::integer()),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}

/// A role that can be assigned during an incident
pub fn incident_role() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("shortform", Property::string()),
        ("description", Property::string()),
        ("instructions", Property::string()),
        ("role_type", Property::string()),
        ("required", Property::boolean()),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}

/// A category of incident an organisation can declare
pub fn incident_type() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("description", Property::string()),
        ("is_default", Property::boolean()),
        ("private_incidents_only", Property::boolean()),
        ("create_in_triage", Property::string().optional()),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}

/// A lifecycle status an incident can be in
pub fn incident_status() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("description", Property::string()),
        ("category", Property::string()),
        ("rank", Property::integer()),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}

/// A custom field attached to incidents
pub fn custom_field() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("description", Property::string()),
        ("field_type", Property::string()),
        (
            "options",
            Property::array_of(Property::object([
                ("id", Property::string()),
                ("value", Property::string()),
                ("sort_key", Property::integer()),
            ])),
        ),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}

/// One selectable option of a single-select or multi-select custom field
pub fn custom_field_option() -> Property {
    Property::object([
        ("id", Property::string()),
        ("custom_field_id", Property::string()),
        ("sort_key", Property::integer()),
        ("value", Property::string()),
    ])
}

/// A named timestamp slot tracked on every incident
pub fn incident_timestamp() -> Property {
    Property::object([
        ("id", Property::string()),
        ("name", Property::string()),
        ("rank", Property::integer()),
    ])
}

/// A follow-up task raised from an incident
pub fn follow_up() -> Property {
    Property::object([
        ("id", Property::string()),
        ("incident_id", Property::string()),
        ("title", Property::string()),
        ("description", Property::string().optional()),
        ("status", Property::string()),
        ("assignee", user().optional()),
        ("completed_at", Property::date_time().optional()),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}

/// An external resource attached to an incident
pub fn attachment() -> Property {
    Property::object([
        ("id", Property::string()),
        ("incident_id", Property::string()),
        (
            "resource",
            Property::object([
                ("external_id", Property::string()),
                ("resource_type", Property::string()),
                ("title", Property::string()),
                ("permalink", Property::string().optional()),
            ]),
        ),
    ])
}

/// A status update posted to an incident
pub fn incident_update() -> Property {
    Property::object([
        ("id", Property::string()),
        ("incident_id", Property::string()),
        ("message", Property::string().optional()),
        ("new_severity", severity().optional()),
        ("new_incident_status", incident_status().optional()),
        ("updater", actor()),
        ("created_at", Property::date_time()),
    ])
}

/// An incident, including its nested attachments and updates
pub fn incident() -> Property {
    Property::object([
        ("id", Property::string()),
        ("reference", Property::string()),
        ("name", Property::string()),
        ("summary", Property::string().optional()),
        ("permalink", Property::string().optional()),
        ("visibility", Property::string()),
        ("incident_status", incident_status()),
        ("severity", severity().optional()),
        ("incident_type", incident_type().optional()),
        ("creator", actor()),
        (
            "incident_role_assignments",
            Property::array_of(Property::object([
                ("role", incident_role()),
                ("assignee", user().optional()),
            ])),
        ),
        ("attachments", Property::array_of(attachment())),
        ("updates", Property::array_of(incident_update())),
        ("created_at", Property::date_time()),
        ("updated_at", Property::date_time()),
    ])
}
