//! Schema model
//!
//! Recursive JSON-schema-like type descriptors for stream shapes.
//! Streams declare their shape with these types and the discovery output
//! serializes them directly into the wire format.

mod types;

pub use types::{ArrayItem, Property, PropertyType, Schema};

#[cfg(test)]
mod tests;
