//! Common types used throughout tap-oncall

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single extracted record: a flat mapping from top-level field name to
/// value. Values may themselves be nested objects or arrays mirroring the
/// stream's schema.
pub type Record = JsonObject;
