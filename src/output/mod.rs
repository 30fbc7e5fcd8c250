//! Output protocol
//!
//! Serializes Singer messages to the output sink: SCHEMA and RECORD
//! messages as one JSON object per line, and the discovery catalog as a
//! single pretty-printed document. The sink is append-only; a message, once
//! written, is never retracted.

use crate::catalog::Catalog;
use crate::error::Result;
use crate::schema::Schema;
use crate::stream::StreamDescriptor;
use crate::types::Record;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::io::Write;

/// A message on the wire
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum Message {
    /// Announces a stream's schema before its records
    #[serde(rename = "SCHEMA")]
    Schema {
        stream: String,
        schema: Schema,
        key_properties: Vec<String>,
        bookmark_properties: Vec<String>,
    },

    /// One extracted record
    #[serde(rename = "RECORD")]
    Record {
        stream: String,
        record: Record,
        time_extracted: String,
    },
}

impl Message {
    /// Build a schema announcement from a stream descriptor
    pub fn schema(descriptor: StreamDescriptor) -> Self {
        Self::Schema {
            stream: descriptor.stream,
            schema: descriptor.schema,
            key_properties: descriptor.key_properties,
            bookmark_properties: descriptor.bookmark_properties,
        }
    }

    /// Build a record message tagged with its extraction timestamp
    pub fn record(stream: impl Into<String>, record: Record, extracted_at: DateTime<Utc>) -> Self {
        Self::Record {
            stream: stream.into(),
            record,
            time_extracted: extracted_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// Writes protocol messages to an output sink.
///
/// Singer requires taps to emit the protocol on stdout; diagnostics go to
/// stderr so the two can be streamed separately.
pub struct Emitter<W: Write> {
    out: W,
}

impl Emitter<std::io::Stdout> {
    /// An emitter writing to stdout
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> Emitter<W> {
    /// Create an emitter over any writer
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one message as a single JSON line
    pub fn emit(&mut self, message: &Message) -> Result<()> {
        let line = serde_json::to_string(message)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Write a discovery catalog, whole, as pretty JSON
    pub fn emit_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        let document = serde_json::to_string_pretty(catalog)?;
        writeln!(self.out, "{document}")?;
        Ok(())
    }

    /// Consume the emitter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Property;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn descriptor() -> StreamDescriptor {
        StreamDescriptor::new(
            "users",
            Schema::object(Property::object([("id", Property::string())])),
            &["id"],
        )
    }

    #[test]
    fn test_schema_message_wire_format() {
        let mut emitter = Emitter::new(Vec::new());
        emitter.emit(&Message::schema(descriptor())).unwrap();

        let line = String::from_utf8(emitter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "SCHEMA",
                "stream": "users",
                "schema": {
                    "type": ["object"],
                    "additionalProperties": false,
                    "properties": {"id": {"type": ["string"]}}
                },
                "key_properties": ["id"],
                "bookmark_properties": []
            })
        );
    }

    #[test]
    fn test_record_message_wire_format() {
        let extracted_at = DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let record = json!({"id": "u1"}).as_object().cloned().unwrap();

        let mut emitter = Emitter::new(Vec::new());
        emitter
            .emit(&Message::record("users", record, extracted_at))
            .unwrap();

        let line = String::from_utf8(emitter.into_inner()).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "RECORD",
                "stream": "users",
                "record": {"id": "u1"},
                "time_extracted": "2024-03-01T12:00:00.000000Z"
            })
        );
    }

    #[test]
    fn test_messages_are_one_per_line() {
        let extracted_at = Utc::now();
        let mut emitter = Emitter::new(Vec::new());
        emitter.emit(&Message::schema(descriptor())).unwrap();
        emitter
            .emit(&Message::record(
                "users",
                Record::new(),
                extracted_at,
            ))
            .unwrap();

        let output = String::from_utf8(emitter.into_inner()).unwrap();
        assert_eq!(output.lines().count(), 2);
    }
}
