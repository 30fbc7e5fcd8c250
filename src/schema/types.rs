//! Schema types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Primitive JSON Schema type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Integer,
    Boolean,
    Object,
    Array,
    Null,
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropertyType::String => write!(f, "string"),
            PropertyType::Number => write!(f, "number"),
            PropertyType::Integer => write!(f, "integer"),
            PropertyType::Boolean => write!(f, "boolean"),
            PropertyType::Object => write!(f, "object"),
            PropertyType::Array => write!(f, "array"),
            PropertyType::Null => write!(f, "null"),
        }
    }
}

/// A node in a recursive schema tree.
///
/// Multiple type tags express nullable unions, e.g. `["string", "null"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Type tags this property can take
    #[serde(rename = "type")]
    pub types: Vec<PropertyType>,

    /// Format hint (e.g., "date-time")
    #[serde(rename = "format", default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Nested properties, for object-shaped nodes
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,

    /// Item descriptor, for array-shaped nodes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<ArrayItem>>,
}

/// The type and shape of the items in an array property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayItem {
    /// Type tag of each item
    #[serde(rename = "type")]
    pub item_type: PropertyType,

    /// Nested properties, when items are objects
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
}

impl Property {
    /// Create a property with a single type tag
    pub fn new(tag: PropertyType) -> Self {
        Self {
            types: vec![tag],
            format: None,
            properties: BTreeMap::new(),
            items: None,
        }
    }

    /// A plain string property
    pub fn string() -> Self {
        Self::new(PropertyType::String)
    }

    /// A number property
    pub fn number() -> Self {
        Self::new(PropertyType::Number)
    }

    /// An integer property
    pub fn integer() -> Self {
        Self::new(PropertyType::Integer)
    }

    /// A boolean property
    pub fn boolean() -> Self {
        Self::new(PropertyType::Boolean)
    }

    /// An RFC3339 timestamp property. Always carries the "string" type tag,
    /// which keeps the date-time format invariant by construction.
    pub fn date_time() -> Self {
        let mut p = Self::new(PropertyType::String);
        p.format = Some("date-time".to_string());
        p
    }

    /// An object property with the given child properties
    pub fn object(properties: impl IntoIterator<Item = (&'static str, Property)>) -> Self {
        let mut p = Self::new(PropertyType::Object);
        p.properties = properties
            .into_iter()
            .map(|(name, prop)| (name.to_string(), prop))
            .collect();
        p
    }

    /// Wrap a property as an array-item descriptor
    pub fn array_of(item: Property) -> Self {
        let item_type = item.types.first().copied().unwrap_or(PropertyType::Object);
        let mut p = Self::new(PropertyType::Array);
        p.items = Some(Box::new(ArrayItem {
            item_type,
            properties: item.properties,
        }));
        p
    }

    /// Return this property with the "null" type tag guaranteed present.
    ///
    /// Idempotent: applying it twice yields the same type-tag list as once.
    #[must_use]
    pub fn optional(mut self) -> Self {
        if !self.types.contains(&PropertyType::Null) {
            self.types.push(PropertyType::Null);
        }
        self
    }

    /// Whether this property carries the "boolean" type tag
    pub fn is_boolean(&self) -> bool {
        self.has_type(PropertyType::Boolean)
    }

    /// Whether this property carries the "number" type tag
    pub fn is_number(&self) -> bool {
        self.has_type(PropertyType::Number)
    }

    /// Whether this property carries the "integer" type tag
    pub fn is_integer(&self) -> bool {
        self.has_type(PropertyType::Integer)
    }

    /// Whether this property is a date-time formatted string
    pub fn is_date_time(&self) -> bool {
        self.format.as_deref() == Some("date-time")
    }

    fn has_type(&self, tag: PropertyType) -> bool {
        self.types.contains(&tag)
    }
}

/// The root of a stream's shape.
///
/// Recreated on every describe call; streams hold no schema state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Type tags, normally `["object"]`
    #[serde(rename = "type")]
    pub types: Vec<PropertyType>,

    /// Whether fields not listed in `properties` are permitted
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,

    /// Top-level properties of the stream
    pub properties: BTreeMap<String, Property>,
}

impl Schema {
    /// Create an object schema from a root object property
    pub fn object(root: Property) -> Self {
        Self {
            types: vec![PropertyType::Object],
            additional_properties: false,
            properties: root.properties,
        }
    }

    /// Names of the top-level properties, in sorted order
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }
}
